//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche,
//! historique) et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné.

use calculatrice_mixte::Session;

/// Garde-fou : nombre de lignes gardées dans l’historique.
const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub etapes: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // "= 1_7/8", ou texte d’aide
    pub erreur: String,   // message d’erreur (pré-contrôle ou noyau)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique (entrée, résultat), le plus récent en dernier ---
    pub historique: Vec<(String, String)>,

    // --- commandes / pré-contrôles ---
    pub session: Session,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
    // "exit" : app.rs ferme la fenêtre à la fin de la frame.
    pub quitter: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: Vec::new(),
            session: Session::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            quitter: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute,
    /// mais la démarche n’a plus de sens.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat (+ démarche) et l’ajouter à l’historique.
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;

        let ligne = self.entree.trim().to_string();
        self.historique.push((ligne, self.resultat.clone()));
        if self.historique.len() > HISTORIQUE_MAX {
            let trop = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..trop);
        }

        self.focus_entree = true;
    }

    /// Texte d’aide dans la zone résultat (pas d’historique).
    pub fn set_aide(&mut self, texte: &str) {
        self.erreur.clear();
        self.resultat = texte.to_string();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }
}
