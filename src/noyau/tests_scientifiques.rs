//! Tests scientifiques (campagne) : invariants + précédence + erreurs + affichage mixte.
//!
//! Notes :
//! - La réduction est plate : pas de parenthèses, pas de moins unaire.
//! - Un "-3" collé est un opérande signé ; un "-" seul est l’opérateur.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

use super::erreur::ErreurCalcul;
use super::format::{ecrire_mixte, formater_mixte};
use super::rationnel::Rationnel;
use super::reduction::evaluer_avec_etapes;
use super::{evaluer, evaluer_et_formater, evaluer_ligne};

fn r(n: i64, d: i64) -> Rationnel {
    Rationnel::depuis_fraction(n, d).unwrap_or_else(|e| panic!("{n}/{d}: {e}"))
}

fn eval_ok(jetons: &[&str]) -> Rationnel {
    evaluer(jetons).unwrap_or_else(|e| panic!("jetons={jetons:?} err={e}"))
}

fn assert_mixte(jetons: &[&str], attendu: &str) {
    let sortie = evaluer_et_formater(jetons).unwrap_or_else(|e| panic!("jetons={jetons:?} err={e}"));
    assert_eq!(sortie, attendu, "jetons={jetons:?}");
}

fn assert_reduit(v: &Rationnel) {
    assert!(v.denom().is_positive(), "dénominateur <= 0: {v}");
    assert!(v.numer().gcd(v.denom()).is_one(), "non réduit: {v}");
}

/* ------------------------ Lecture (rationalisation) ------------------------ */

#[test]
fn sci_lecture_trois_formes() {
    assert_eq!(Rationnel::lire("12").unwrap(), r(12, 1));
    assert_eq!(Rationnel::lire("-3").unwrap(), r(-3, 1));
    assert_eq!(Rationnel::lire("+3").unwrap(), r(3, 1));
    assert_eq!(Rationnel::lire("6/8").unwrap(), r(3, 4));
    assert_eq!(Rationnel::lire("-6/8").unwrap(), r(-3, 4));
    assert_eq!(Rationnel::lire("3_3/4").unwrap(), r(15, 4));
    assert_eq!(Rationnel::lire("1_2/4").unwrap(), r(3, 2));
    // mixte négatif : le signe porte sur tout le nombre
    assert_eq!(Rationnel::lire("-3_1/2").unwrap(), r(-7, 2));
    // fraction impropre dans un mixte : acceptée, additionnée
    assert_eq!(Rationnel::lire("1_5/4").unwrap(), r(9, 4));
    assert_eq!("7/14".parse::<Rationnel>().unwrap(), r(1, 2));
}

#[test]
fn sci_lecture_malformee() {
    for texte in [
        "", "abc", "1.5", "1/", "/2", "1//2", "1/2/3", "1_2", "_1/2", "1_-1/2", "1_1/-2", "--1",
        "+", "1_2_3/4", "3/+4", "١٢",
    ] {
        assert!(
            matches!(Rationnel::lire(texte), Err(ErreurCalcul::OperandeMalforme(_))),
            "texte={texte:?}"
        );
    }
}

#[test]
fn sci_lecture_denominateur_nul() {
    assert_eq!(Rationnel::lire("1/0"), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(Rationnel::lire("2_1/0"), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(
        Rationnel::depuis_fraction(5, 0),
        Err(ErreurCalcul::DivisionParZero)
    );
}

#[test]
fn sci_lecture_grands_entiers() {
    let grand = "123456789012345678901234567890";
    let v = Rationnel::lire(grand).unwrap();
    assert_eq!(v.numer(), &grand.parse::<BigInt>().unwrap());
    assert!(v.est_entier());
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_arithmetique_reduite() {
    assert_eq!(r(1, 2).additionner(&r(1, 3)), r(5, 6));
    assert_eq!(r(1, 2).soustraire(&r(3, 4)), r(-1, 4));
    assert_eq!(r(2, 3).multiplier(&r(9, 4)), r(3, 2));
    assert_eq!(r(1, 2).diviser(&r(-1, 4)).unwrap(), r(-2, 1));
    assert_eq!(r(1, 2).diviser(&Rationnel::zero()), Err(ErreurCalcul::DivisionParZero));

    for v in [
        r(1, 2).additionner(&r(1, 2)),
        r(6, -8),
        r(-6, -8),
        r(0, 5),
        r(3, 4).diviser(&r(-9, 12)).unwrap(),
    ] {
        assert_reduit(&v);
    }
}

/* ------------------------ Réduction (précédence) ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok(&["1", "+", "2", "*", "3"]), r(7, 1));
    assert_eq!(eval_ok(&["2", "*", "3", "+", "4", "*", "5"]), r(26, 1));
    assert_eq!(eval_ok(&["10", "-", "6", "/", "3"]), r(8, 1));
}

#[test]
fn sci_meme_palier_gauche_droite() {
    assert_eq!(eval_ok(&["8", "/", "4", "/", "2"]), r(1, 1));
    assert_eq!(eval_ok(&["10", "-", "4", "-", "3"]), r(3, 1));
    // "/" avant "*" dans le texte : l’indice le plus petit gagne
    assert_eq!(eval_ok(&["6", "/", "3", "*", "2"]), r(4, 1));
    assert_eq!(eval_ok(&["1", "-", "1", "+", "1"]), r(1, 1));
}

#[test]
fn sci_etapes_dans_l_ordre() {
    let (v, etapes) = evaluer_avec_etapes(&["1", "+", "2", "*", "3", "-", "4", "/", "8"]).unwrap();
    assert_eq!(v, r(13, 2));
    let lignes: Vec<String> = etapes.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        lignes,
        ["2 * 3 = 6", "4 / 8 = 1/2", "1 + 6 = 7", "7 - 1/2 = 13/2"]
    );
}

#[test]
fn sci_division_par_zero_calculee() {
    assert_eq!(
        evaluer(&["2/4", "/", "0/1"]),
        Err(ErreurCalcul::DivisionParZero)
    );
    assert_eq!(
        evaluer(&["1", "/", "0"]),
        Err(ErreurCalcul::DivisionParZero)
    );
    assert_eq!(
        evaluer(&["1", "+", "3", "/", "0_0/5"]),
        Err(ErreurCalcul::DivisionParZero)
    );
}

#[test]
fn sci_operande_malforme() {
    assert_eq!(
        evaluer(&["1/2", "+", "abc"]),
        Err(ErreurCalcul::OperandeMalforme("abc".into()))
    );
}

#[test]
fn sci_expression_malformee() {
    let cas: [&[&str]; 6] = [
        &[],
        &["1"],
        &["1", "+"],
        &["1", "+", "2", "+"],
        &["1", "+", "+", "2", "3"],
        &["1", "2", "3"],
    ];
    for jetons in cas {
        assert!(
            matches!(evaluer(jetons), Err(ErreurCalcul::ExpressionMalformee(_))),
            "jetons={jetons:?}"
        );
    }
    // opérateur en tête
    assert!(matches!(
        evaluer(&["*", "1", "2"]),
        Err(ErreurCalcul::ExpressionMalformee(_))
    ));
}

/* ------------------------ Affichage mixte ------------------------ */

#[test]
fn sci_format_mixte() {
    assert_eq!(formater_mixte(&r(15, 4)), "= 3_3/4");
    assert_eq!(formater_mixte(&r(4, 1)), "= 4");
    assert_eq!(formater_mixte(&r(1, 2)), "= 1/2");
    assert_eq!(formater_mixte(&r(-7, 2)), "= -3_1/2");
    assert_eq!(formater_mixte(&r(-1, 2)), "= -1/2");
    assert_eq!(formater_mixte(&Rationnel::zero()), "= 0");
    assert_eq!(formater_mixte(&r(-8, 2)), "= -4");
}

#[test]
fn sci_bout_en_bout() {
    assert_mixte(&["1/2", "*", "3_3/4"], "= 1_7/8");
    assert_mixte(&["2_3/8", "+", "9/8"], "= 3_1/2");
    assert_mixte(&["1/2", "-", "3"], "= -2_1/2");
    assert_mixte(&["1/3", "-", "1/2"], "= -1/6");
    assert_mixte(&["1_1/2", "/", "3/4", "*", "2"], "= 4");
}

#[test]
fn sci_ligne_avec_demarche() {
    let (texte, d) = evaluer_ligne("1/2  *\t3_3/4").unwrap();
    assert_eq!(texte, "= 1_7/8");
    assert_eq!(d.jetons, "1/2 * 3_3/4");
    assert_eq!(d.etapes, ["1/2 * 3_3/4 = 1_7/8"]);
}

#[test]
fn sci_aller_retour_mixte() {
    for n in -40..=40 {
        for d in 1..=12 {
            let v = r(n, d);
            assert_reduit(&v);
            let relu = Rationnel::lire(&ecrire_mixte(&v))
                .unwrap_or_else(|e| panic!("v={v} err={e}"));
            assert_eq!(relu, v, "v={v} mixte={}", ecrire_mixte(&v));
        }
    }
}
