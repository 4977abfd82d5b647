// src/noyau/erreur.rs
//
// Un seul type d’erreur côté appelant (InvalidExpression).
// La Raison sert au diagnostic (journal, messages) ; elle ne change pas le contrat.

use thiserror::Error;

/// Cause d’un refus. Les positions sont des indices de caractères
/// dans l’expression normalisée (sans espaces).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Raison {
    /// Entrée vide (ou seulement des espaces).
    Vide,
    /// Caractère hors alphabet (chiffres, `+ - * /`, parenthèses).
    CaractereInattendu { pos: usize, c: char },
    /// Opérateur en tête, en queue, ou suivi d’un opérateur / de `)`.
    OperateurMalPlace { pos: usize },
    /// `(` en queue ou suivie d’un opérateur / de `)`, `)` en tête ou après un opérateur / `(`.
    ParentheseMalPlacee { pos: usize },
    /// Chiffre collé à une parenthèse (`)1` ou `1(`), multiplication implicite refusée.
    Juxtaposition { pos: usize },
    /// Profondeur négative en cours de lecture, ou non nulle à la fin.
    ParenthesesDesequilibrees,
    /// La forme postfixe ne laisse pas exactement une valeur sur la pile.
    PostfixeMalformee,
    /// Diviseur nul (évaluation exacte, ou politique stricte).
    DivisionParZero,
}

impl std::fmt::Display for Raison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Raison::Vide => write!(f, "entrée vide"),
            Raison::CaractereInattendu { pos, c } => {
                write!(f, "caractère inattendu '{c}' (position {pos})")
            }
            Raison::OperateurMalPlace { pos } => write!(f, "opérateur mal placé (position {pos})"),
            Raison::ParentheseMalPlacee { pos } => {
                write!(f, "parenthèse mal placée (position {pos})")
            }
            Raison::Juxtaposition { pos } => {
                write!(f, "nombre collé à une parenthèse (position {pos})")
            }
            Raison::ParenthesesDesequilibrees => write!(f, "parenthèses déséquilibrées"),
            Raison::PostfixeMalformee => write!(f, "forme postfixe malformée"),
            Raison::DivisionParZero => write!(f, "division par zéro"),
        }
    }
}

/// Expression refusée par le pipeline (validation, conversion ou évaluation).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expression invalide: {raison}")]
pub struct InvalidExpression {
    raison: Raison,
}

impl InvalidExpression {
    pub fn new(raison: Raison) -> Self {
        Self { raison }
    }

    pub fn raison(&self) -> &Raison {
        &self.raison
    }
}

impl From<Raison> for InvalidExpression {
    fn from(raison: Raison) -> Self {
        Self::new(raison)
    }
}
