// src/noyau/format.rs
//
// Affichage en nombre mixte :
//   15/4 -> 3_3/4     4/1 -> 4     1/2 -> 1/2
//   -7/2 -> -3_1/2    (signe sur la partie entière si elle est non nulle)
//   -1/2 -> -1/2      (sinon le signe remonte sur le numérateur)

use num_traits::{Signed, Zero};

use super::rationnel::Rationnel;

/// Résultat final, tel qu’affiché : `"= 1_7/8"`.
pub fn formater_mixte(valeur: &Rationnel) -> String {
    format!("= {}", ecrire_mixte(valeur))
}

/// Écriture mixte nue (sans le `"= "`), utilisée aussi dans la démarche.
pub fn ecrire_mixte(valeur: &Rationnel) -> String {
    let entier = valeur.partie_entiere();
    let reste = valeur.soustraire(&Rationnel::depuis_entier(entier.clone()));

    if reste.est_zero() {
        return entier.to_string();
    }
    if entier.is_zero() {
        return format!("{}/{}", reste.numer(), reste.denom());
    }

    // Troncature vers zéro : le reste a le signe de l’entier, on l’absorbe.
    format!("{entier}_{}/{}", reste.numer().abs(), reste.denom())
}
