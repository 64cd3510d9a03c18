// src/noyau/rationnel.rs
//
// Rationnel exact, toujours réduit.
// Lecture des trois écritures acceptées :
//   entier  : 12, -3
//   fraction: 3/4, -6/8
//   mixte   : 3_3/4, -1_1/2  (le signe porte sur tout le nombre)

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::erreur::ErreurCalcul;

/// Fraction exacte `n/d` avec `d > 0` et `pgcd(n, d) == 1`.
///
/// Le signe est porté par le numérateur. Aucune valeur ne peut être construite
/// avec un dénominateur nul : c’est une erreur, pas un infini.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rationnel(BigRational);

impl Rationnel {
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn depuis_entier(n: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    /// `n/d` réduit. `d == 0` => DivisionParZero.
    pub fn depuis_fraction(
        n: impl Into<BigInt>,
        d: impl Into<BigInt>,
    ) -> Result<Self, ErreurCalcul> {
        let d = d.into();
        if d.is_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        // BigRational::new réduit et ramène le signe au numérateur.
        Ok(Self(BigRational::new(n.into(), d)))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn est_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn est_entier(&self) -> bool {
        self.0.denom().is_one()
    }

    /// Partie entière tronquée vers zéro : 15/4 -> 3, -7/2 -> -3.
    pub fn partie_entiere(&self) -> BigInt {
        self.0.to_integer()
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn additionner(&self, autre: &Self) -> Self {
        Self(&self.0 + &autre.0)
    }

    pub fn soustraire(&self, autre: &Self) -> Self {
        Self(&self.0 - &autre.0)
    }

    pub fn multiplier(&self, autre: &Self) -> Self {
        Self(&self.0 * &autre.0)
    }

    /// Division exacte. Diviseur nul => DivisionParZero (jamais de panique).
    pub fn diviser(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if autre.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        Ok(Self(&self.0 / &autre.0))
    }

    /* ------------------------ Lecture (rationalisation) ------------------------ */

    /// Lit un opérande texte : entier, fraction ou nombre mixte.
    pub fn lire(texte: &str) -> Result<Self, ErreurCalcul> {
        let malforme = || ErreurCalcul::OperandeMalforme(texte.to_string());

        if let Some((entier, fraction)) = texte.split_once('_') {
            let negatif = entier.starts_with('-');
            let w = lire_entier(entier, true).ok_or_else(malforme)?;
            let (n, d) = fraction.split_once('/').ok_or_else(malforme)?;
            let n = lire_entier(n, false).ok_or_else(malforme)?;
            let d = lire_entier(d, false).ok_or_else(malforme)?;

            let partie = Self::depuis_fraction(n, d)?;
            let tout = Self::depuis_entier(w.abs()).additionner(&partie);
            tracing::trace!(operande = texte, valeur = %tout, negatif, "mixte");

            return Ok(if negatif { tout.oppose() } else { tout });
        }

        if let Some((n, d)) = texte.split_once('/') {
            let n = lire_entier(n, true).ok_or_else(malforme)?;
            let d = lire_entier(d, false).ok_or_else(malforme)?;
            return Self::depuis_fraction(n, d);
        }

        lire_entier(texte, true)
            .map(Self::depuis_entier)
            .ok_or_else(malforme)
    }

    fn oppose(&self) -> Self {
        Self(-&self.0)
    }
}

/// Chiffres décimaux, avec signe optionnel si `signe_permis`.
fn lire_entier(texte: &str, signe_permis: bool) -> Option<BigInt> {
    let (negatif, chiffres) = match texte.as_bytes().first() {
        Some(b'-') if signe_permis => (true, &texte[1..]),
        Some(b'+') if signe_permis => (false, &texte[1..]),
        _ => (false, texte),
    };
    if chiffres.is_empty() || !chiffres.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    Some(if negatif { -n } else { n })
}

impl FromStr for Rationnel {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lire(s)
    }
}

/// Écriture brute `n` ou `n/d` (pas de forme mixte ici, voir format.rs).
impl fmt::Display for Rationnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.est_entier() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}
