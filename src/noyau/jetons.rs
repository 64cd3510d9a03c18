// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurCalcul;
use super::rationnel::Rationnel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

/// Palier de priorité : tout le multiplicatif passe avant l’additif.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palier {
    Multiplicatif,
    Additif,
}

impl Operateur {
    /// Reconnaît un jeton opérateur : exactement `+`, `-`, `*` ou `/`.
    pub fn depuis_texte(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Moins),
            "*" => Some(Self::Fois),
            "/" => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "-",
            Self::Fois => "*",
            Self::Divise => "/",
        }
    }

    pub fn palier(self) -> Palier {
        match self {
            Self::Fois | Self::Divise => Palier::Multiplicatif,
            Self::Plus | Self::Moins => Palier::Additif,
        }
    }

    /// `a op b`, les deux opérandes étant rationalisés au besoin.
    pub fn appliquer(self, a: &Operande, b: &Operande) -> Result<Rationnel, ErreurCalcul> {
        let a = a.rationaliser()?;
        let b = b.rationaliser()?;
        match self {
            Self::Plus => Ok(a.additionner(&b)),
            Self::Moins => Ok(a.soustraire(&b)),
            Self::Fois => Ok(a.multiplier(&b)),
            Self::Divise => a.diviser(&b),
        }
    }
}

/// Opérande : texte saisi (lu seulement au moment de la réduction)
/// ou valeur déjà calculée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operande {
    Texte(String),
    Valeur(Rationnel),
}

impl Operande {
    /// Une valeur déjà construite ressort telle quelle.
    pub fn rationaliser(&self) -> Result<Rationnel, ErreurCalcul> {
        match self {
            Self::Texte(t) => Rationnel::lire(t),
            Self::Valeur(r) => Ok(r.clone()),
        }
    }
}

impl fmt::Display for Operande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texte(t) => f.write_str(t),
            Self::Valeur(r) => write!(f, "{r}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Operande(Operande),
    Operateur(Operateur),
}

impl Jeton {
    pub fn operateur(&self) -> Option<Operateur> {
        match self {
            Self::Operateur(op) => Some(*op),
            Self::Operande(_) => None,
        }
    }
}

/// Découpe une ligne sur les blancs (espaces, tabulations…).
pub fn decouper(ligne: &str) -> Vec<String> {
    ligne.split_whitespace().map(str::to_string).collect()
}

/// Classe les textes en jetons et vérifie l’alternance
/// opérande, opérateur, opérande, …, opérande (longueur impaire ≥ 3).
///
/// Le contenu des opérandes n’est PAS lu ici : un opérande malformé
/// n’est détecté qu’à sa réduction.
pub fn classer<S: AsRef<str>>(textes: &[S]) -> Result<Vec<Jeton>, ErreurCalcul> {
    let n = textes.len();
    if n < 3 {
        return Err(ErreurCalcul::ExpressionMalformee(format!(
            "{n} jeton(s), au moins 3 attendus"
        )));
    }
    if n % 2 == 0 {
        return Err(ErreurCalcul::ExpressionMalformee(format!(
            "{n} jetons, nombre impair attendu"
        )));
    }

    textes
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let t = t.as_ref();
            match (i % 2 == 1, Operateur::depuis_texte(t)) {
                (true, Some(op)) => Ok(Jeton::Operateur(op)),
                (false, None) => Ok(Jeton::Operande(Operande::Texte(t.to_string()))),
                (true, None) => Err(ErreurCalcul::ExpressionMalformee(format!(
                    "opérateur attendu en position {}, trouvé '{t}'",
                    i + 1
                ))),
                (false, Some(_)) => Err(ErreurCalcul::ExpressionMalformee(format!(
                    "opérande attendu en position {}, trouvé '{t}'",
                    i + 1
                ))),
            }
        })
        .collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Operande(o) => o.to_string(),
            Jeton::Operateur(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
