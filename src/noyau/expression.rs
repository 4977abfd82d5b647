// src/noyau/expression.rs
//
// Valeur immuable : chaque étape rend une NOUVELLE Expression.
//   brute -> normalisée -> postfixe -> résultat (texte)
// Égalité et hash portent uniquement sur le texte courant.

use std::fmt;

use super::erreur::InvalidExpression;
use super::eval::evaluate;
use super::format::format_resultat;
use super::normalise::normalize;
use super::rpn::to_postfix;
use super::validation::validate;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Expression {
    texte: String,
}

impl Expression {
    pub fn new(texte: impl Into<String>) -> Self {
        Self {
            texte: texte.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.texte
    }

    pub fn est_valide(&self) -> bool {
        validate(&self.texte)
    }

    pub fn normalisee(&self) -> Expression {
        Expression::new(normalize(&self.texte))
    }

    /// Forme postfixe (re-validée).
    pub fn postfixe(&self) -> Result<Expression, InvalidExpression> {
        to_postfix(&self.texte).map(Expression::new)
    }

    /// Résultat en texte, ex: "11.0".
    pub fn calcule(&self) -> Result<Expression, InvalidExpression> {
        evaluate(&self.texte).map(|v| Expression::new(format_resultat(v)))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texte)
    }
}

impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        Expression::new(s)
    }
}
