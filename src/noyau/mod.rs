//! Noyau postfixe
//!
//! Organisation interne :
//! - normalise.rs  : suppression des espaces
//! - validation.rs : grammaire (opérateurs, parenthèses, juxtaposition)
//! - jetons.rs     : priorités + jetons + lecture de la forme postfixe
//! - rpn.rs        : shunting-yard (infixe -> postfixe texte)
//! - eval.rs       : pipeline complet (f64, exact, démarche)
//! - format.rs     : affichage des résultats
//! - expression.rs : valeur immuable (égalité/hash sur le texte)
//! - reglages.rs   : politique de division + précision décimale
//! - erreur.rs     : InvalidExpression + Raison

pub mod erreur;
pub mod eval;
pub mod expression;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod reglages;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;


// API publique
pub use erreur::{InvalidExpression, Raison};
pub use eval::{evaluate, evaluate_detaille, evaluate_exact, evaluate_with, Demarche};
pub use expression::Expression;
pub use format::format_resultat;
pub use jetons::Tok;
pub use normalise::normalize;
pub use reglages::{Division, Reglages};
pub use rpn::to_postfix;
pub use validation::{check, validate};
