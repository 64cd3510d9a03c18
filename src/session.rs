//! src/session.rs
//!
//! Session de saisie (commun au REPL et à l’interface).
//!
//! Rôle : commandes `exit` / `help`, pré-contrôles du texte brut,
//! découpage, puis appel au noyau. Toute erreur devient un message
//! `ERROR: …` et la session reste active.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::noyau::{evaluer_ligne, DemarcheNoyau, ErreurCalcul};
use crate::noyau::jetons::decouper;

/// Caractères interdits dans une ligne d’expression.
static CARACTERES_INTERDITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z!@#$%^&()=]").unwrap());

/// Diviseur littéral nul : `1/0`, `3 / 0`, …
static DIVISEUR_NUL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(/0)|(/\s+0)").unwrap());

pub const AIDE: &str = "\
This program is designed to perform mathematical operations on fractional numbers.
Ex: '1/2 * 3_3/4' would output 1_7/8
To exit the program, enter 'exit' as an input";

pub const AU_REVOIR: &str = "Goodbye!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reponse {
    /// Ligne vide : rien à dire.
    Vide,
    Aide(&'static str),
    AuRevoir,
    Resultat {
        texte: String,
        demarche: DemarcheNoyau,
    },
    Erreur(String),
}

#[derive(Clone, Debug)]
pub struct Session {
    active: bool,
    erreur: bool,
    entree_courante: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            active: true,
            erreur: false,
            entree_courante: Vec::new(),
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Vrai si la dernière ligne traitée a échoué.
    pub fn erreur(&self) -> bool {
        self.erreur
    }

    /// Jetons de la dernière expression acceptée par les pré-contrôles.
    pub fn entree_courante(&self) -> &[String] {
        &self.entree_courante
    }

    /// Traite une ligne complète.
    pub fn traiter(&mut self, ligne: &str) -> Reponse {
        let ligne = ligne.trim();
        if ligne.is_empty() {
            return Reponse::Vide;
        }

        let minuscule = ligne.to_lowercase();
        if minuscule.contains("exit") {
            self.active = false;
            return Reponse::AuRevoir;
        }
        if minuscule.contains("help") {
            return Reponse::Aide(AIDE);
        }

        if entree_invalide(ligne) {
            return self.echec("ERROR: Invalid input".to_string());
        }
        if diviseur_nul(ligne) {
            return self.echec("ERROR: Divide by zero".to_string());
        }

        self.erreur = false;
        self.entree_courante = decouper(ligne);
        if self.entree_courante.len() <= 2 {
            return self.echec("ERROR: Not enough arguments".to_string());
        }

        match evaluer_ligne(ligne) {
            Ok((texte, demarche)) => Reponse::Resultat { texte, demarche },
            Err(e) => self.echec(message_erreur(&e)),
        }
    }

    fn echec(&mut self, message: String) -> Reponse {
        tracing::debug!(%message, "ligne refusée");
        self.erreur = true;
        Reponse::Erreur(message)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub fn entree_invalide(ligne: &str) -> bool {
    CARACTERES_INTERDITS_RE.is_match(ligne)
}

pub fn diviseur_nul(ligne: &str) -> bool {
    DIVISEUR_NUL_RE.is_match(ligne)
}

/// Message utilisateur pour une erreur du noyau.
pub fn message_erreur(e: &ErreurCalcul) -> String {
    match e {
        ErreurCalcul::DivisionParZero => "ERROR: Divide by zero".to_string(),
        autre => format!("ERROR: {autre}"),
    }
}
