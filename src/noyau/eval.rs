//! Noyau — évaluation (pipeline réel)
//!
//! normalize -> validation -> postfixe (texte) -> jetons postfixes -> pile d’opérandes
//!
//! Deux lectures de la même forme postfixe :
//! - `f64` (IEEE-754), politique de division réglable
//! - exacte (rationnels), division par zéro toujours refusée

use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::{InvalidExpression, Raison};
use super::format::{format_rationnel, format_resultat, lecture_decimale};
use super::jetons::{format_tokens, jetons_postfixe, tokenize, Tok};
use super::normalise::normalize;
use super::reglages::{Division, Reglages, DIGITS_MAX};
use super::rpn::to_postfix;

/// Toutes les étapes d’une évaluation réussie.
#[derive(Clone, Debug, PartialEq)]
pub struct Demarche {
    /// Expression sans espaces.
    pub normalisee: String,
    /// Jetons infixes séparés par un espace.
    pub jetons: String,
    /// Forme postfixe produite par `to_postfix`.
    pub rpn: String,
    pub valeur: f64,
    /// `valeur` en texte (`format_resultat`).
    pub texte: String,
    /// Fraction exacte, `None` si le calcul exact échoue (division par zéro).
    pub exact: Option<String>,
    /// Lecture décimale tronquée du résultat exact.
    pub lecture: Option<String>,
}

/// Évalue une expression infixe en `f64` (division IEEE).
pub fn evaluate(s: &str) -> Result<f64, InvalidExpression> {
    evaluate_with(s, &Reglages::default())
}

/// Évalue une expression infixe en `f64` selon `reglages.division`.
pub fn evaluate_with(s: &str, reglages: &Reglages) -> Result<f64, InvalidExpression> {
    let rpn = to_postfix(s)?;
    let valeur = eval_postfixe(&rpn, reglages.division)?;
    debug!("{s:?} = {valeur}");
    Ok(valeur)
}

/// Évalue une expression infixe exactement (rationnels, entiers de taille libre).
pub fn evaluate_exact(s: &str) -> Result<BigRational, InvalidExpression> {
    let rpn = to_postfix(s)?;
    let valeur = eval_postfixe_exact(&rpn)?;
    debug!("{s:?} = {valeur} (exact)");
    Ok(valeur)
}

/// Pipeline complet avec démarche (chaque étape en texte).
pub fn evaluate_detaille(s: &str, reglages: &Reglages) -> Result<Demarche, InvalidExpression> {
    let rpn = to_postfix(s)?;
    let normalisee = normalize(s);
    let jetons = format_tokens(&tokenize(&normalisee)?);

    let valeur = eval_postfixe(&rpn, reglages.division)?;

    let (exact, lecture) = match eval_postfixe_exact(&rpn) {
        Ok(r) => (
            Some(format_rationnel(&r)),
            Some(lecture_decimale(&r, reglages.chiffres.min(DIGITS_MAX))),
        ),
        Err(e) => {
            debug!("pas de valeur exacte pour {s:?}: {e}");
            (None, None)
        }
    };

    Ok(Demarche {
        normalisee,
        jetons,
        rpn,
        valeur,
        texte: format_resultat(valeur),
        exact,
        lecture,
    })
}

/* ------------------------ Pile d’opérandes ------------------------ */

/// Dépile `rhs` (sommet) puis `lhs` : l’ordre compte pour `-` et `/`.
fn depile_deux<T>(st: &mut Vec<T>) -> Result<(T, T), Raison> {
    let rhs = st.pop().ok_or(Raison::PostfixeMalformee)?;
    let lhs = st.pop().ok_or(Raison::PostfixeMalformee)?;
    Ok((lhs, rhs))
}

/// Exactement une valeur doit rester sur la pile.
fn valeur_unique<T>(mut st: Vec<T>) -> Result<T, Raison> {
    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(Raison::PostfixeMalformee),
    }
}

fn eval_postfixe(rpn: &str, division: Division) -> Result<f64, InvalidExpression> {
    let mut st: Vec<f64> = Vec::new();

    for tok in jetons_postfixe(rpn)? {
        let v = match tok {
            Tok::Num(n) => n.parse::<f64>().map_err(|_| Raison::PostfixeMalformee)?,

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let (a, b) = depile_deux(&mut st)?;
                match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b == 0.0 && division == Division::Stricte {
                            return Err(Raison::DivisionParZero.into());
                        }
                        a / b
                    }
                }
            }

            Tok::LPar | Tok::RPar => return Err(Raison::PostfixeMalformee.into()),
        };
        st.push(v);
    }

    Ok(valeur_unique(st)?)
}

fn eval_postfixe_exact(rpn: &str) -> Result<BigRational, InvalidExpression> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in jetons_postfixe(rpn)? {
        let v = match tok {
            Tok::Num(n) => {
                let n = BigInt::parse_bytes(n.as_bytes(), 10).ok_or(Raison::PostfixeMalformee)?;
                BigRational::from_integer(n)
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let (a, b) = depile_deux(&mut st)?;
                match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b.is_zero() {
                            return Err(Raison::DivisionParZero.into());
                        }
                        a / b
                    }
                }
            }

            Tok::LPar | Tok::RPar => return Err(Raison::PostfixeMalformee.into()),
        };
        st.push(v);
    }

    Ok(valeur_unique(st)?)
}
