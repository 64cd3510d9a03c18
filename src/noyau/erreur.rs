// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs possibles d’une évaluation.
///
/// Une erreur interrompt TOUTE l’évaluation : aucun résultat partiel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Le jeton attendu comme opérande n’est ni entier, ni fraction, ni nombre mixte.
    #[error("opérande invalide: '{0}'")]
    OperandeMalforme(String),

    /// Diviseur nul (littéral ou calculé), ou dénominateur nul dans une fraction.
    #[error("division par zéro")]
    DivisionParZero,

    /// Nombre de jetons pair, trop court, ou opérateurs mal placés.
    #[error("expression invalide: {0}")]
    ExpressionMalformee(String),
}
