// src/noyau/reduction.rs
//
// Réduction plate gauche -> droite (pas d’arbre, pas de parenthèses).
//
// Deux passes, chacune jusqu’au point fixe :
//   1) palier multiplicatif : premier `*` ou `/` (le plus petit indice gagne)
//   2) palier additif       : premier `+` ou `-`
// À chaque étape : [a, op, b] -> [a op b], le tampon raccourcit de 2.
// On repart toujours du début : même palier => strictement gauche -> droite.

use std::fmt;

use super::erreur::ErreurCalcul;
use super::jetons::{classer, Jeton, Operande, Operateur, Palier};
use super::rationnel::Rationnel;

/// Une réduction effectuée : `gauche op droite = resultat`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    pub gauche: String,
    pub operateur: Operateur,
    pub droite: String,
    pub resultat: Rationnel,
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.gauche,
            self.operateur.symbole(),
            self.droite,
            self.resultat
        )
    }
}

/// Évalue une suite de jetons texte alternés (opérande, opérateur, …).
///
/// Exemple: `["1", "+", "2", "*", "3"]` -> 7
pub fn evaluer<S: AsRef<str>>(textes: &[S]) -> Result<Rationnel, ErreurCalcul> {
    reduire(classer(textes)?, &mut None)
}

/// Comme [`evaluer`], en gardant la liste des réductions dans l’ordre.
pub fn evaluer_avec_etapes<S: AsRef<str>>(
    textes: &[S],
) -> Result<(Rationnel, Vec<Etape>), ErreurCalcul> {
    let mut etapes = Some(Vec::new());
    let valeur = reduire(classer(textes)?, &mut etapes)?;
    Ok((valeur, etapes.unwrap_or_default()))
}

fn reduire(
    mut tampon: Vec<Jeton>,
    etapes: &mut Option<Vec<Etape>>,
) -> Result<Rationnel, ErreurCalcul> {
    for palier in [Palier::Multiplicatif, Palier::Additif] {
        while let Some(i) = prochain_operateur(&tampon, palier) {
            let etape = reduire_en(&mut tampon, i)?;
            tracing::debug!(
                %etape,
                restant = tampon.len(),
                ?palier,
                "reduction"
            );
            if let Some(liste) = etapes.as_mut() {
                liste.push(etape);
            }
        }
    }

    match tampon.as_slice() {
        [Jeton::Operande(o)] => o.rationaliser(),
        _ => Err(ErreurCalcul::ExpressionMalformee(format!(
            "{} jetons restants après réduction",
            tampon.len()
        ))),
    }
}

/// Indice du premier opérateur du palier (recalculé à chaque étape).
fn prochain_operateur(tampon: &[Jeton], palier: Palier) -> Option<usize> {
    tampon
        .iter()
        .position(|j| j.operateur().is_some_and(|op| op.palier() == palier))
}

/// Remplace `[i-1, i, i+1]` par le résultat de l’opération en `i`.
fn reduire_en(tampon: &mut Vec<Jeton>, i: usize) -> Result<Etape, ErreurCalcul> {
    let voisins = i
        .checked_sub(1)
        .and_then(|g| Some((tampon.get(g)?, tampon.get(i)?, tampon.get(i + 1)?)));

    let (a, op, b) = match voisins {
        Some((Jeton::Operande(a), Jeton::Operateur(op), Jeton::Operande(b))) => (a, *op, b),
        _ => {
            return Err(ErreurCalcul::ExpressionMalformee(format!(
                "opérateur sans deux opérandes voisins (position {})",
                i + 1
            )))
        }
    };

    let resultat = op.appliquer(a, b)?;
    let etape = Etape {
        gauche: a.to_string(),
        operateur: op,
        droite: b.to_string(),
        resultat: resultat.clone(),
    };

    tampon.splice(
        i - 1..=i + 1,
        [Jeton::Operande(Operande::Valeur(resultat))],
    );
    Ok(etape)
}
