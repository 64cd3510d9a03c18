//! Noyau exact — fractions mixtes
//!
//! Organisation interne :
//! - rationnel.rs : Rationnel réduit + lecture entier / fraction / mixte
//! - jetons.rs    : opérateurs, opérandes, alternance
//! - reduction.rs : réduction par paliers (×/÷ puis +/-), gauche -> droite
//! - format.rs    : affichage en nombre mixte
//! - erreur.rs    : erreurs typées
//! - eval.rs      : pipeline complet
//!
//! Aucun état global, aucune E/S : fonctions pures.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rationnel;
pub mod reduction;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{evaluer_et_formater, evaluer_ligne, DemarcheNoyau};
pub use rationnel::Rationnel;
pub use reduction::evaluer;
