//! Noyau — évaluation (pipeline réel)
//!
//! jetons texte -> classement (alternance) -> réduction ×/÷ puis +/- -> Rationnel -> mixte

use super::erreur::ErreurCalcul;
use super::format::{ecrire_mixte, formater_mixte};
use super::jetons::{classer, decouper, format_jetons};
use super::reduction::{evaluer, evaluer_avec_etapes};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    /// Jetons tels que classés (opérandes + opérateurs).
    pub jetons: String,
    /// Une ligne par réduction, dans l’ordre d’application.
    pub etapes: Vec<String>,
}

/// Point d’entrée unique : évalue les jetons et rend `"= …"` en nombre mixte.
///
/// ```text
/// ["1/2", "*", "3_3/4"]  ->  "= 1_7/8"
/// ```
pub fn evaluer_et_formater<S: AsRef<str>>(jetons: &[S]) -> Result<String, ErreurCalcul> {
    let valeur = evaluer(jetons)?;
    Ok(formater_mixte(&valeur))
}

/// Variante “démarche” pour l’interface : découpe la ligne, évalue,
/// et garde chaque réduction (valeurs intermédiaires en écriture mixte).
pub fn evaluer_ligne(ligne: &str) -> Result<(String, DemarcheNoyau), ErreurCalcul> {
    let textes = decouper(ligne);
    let jetons = format_jetons(&classer(&textes)?);

    let (valeur, etapes) = evaluer_avec_etapes(&textes)?;
    let etapes = etapes
        .iter()
        .map(|e| {
            format!(
                "{} {} {} = {}",
                e.gauche,
                e.operateur.symbole(),
                e.droite,
                ecrire_mixte(&e.resultat)
            )
        })
        .collect();

    Ok((formater_mixte(&valeur), DemarcheNoyau { jetons, etapes }))
}
