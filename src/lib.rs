//! Calculatrice mixte — bibliothèque commune
//!
//! - noyau   : évaluation exacte (fractions mixtes), pur, sans E/S
//! - session : commandes + pré-contrôles + messages (REPL et interface)

pub mod noyau;
pub mod session;

pub use noyau::{evaluer_et_formater, ErreurCalcul, Rationnel};
pub use session::{Reponse, Session};
