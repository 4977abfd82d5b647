//! Calculatrice postfixe
//!
//! Validation, conversion infixe -> postfixe (shunting-yard) et évaluation
//! d’expressions arithmétiques sur les entiers naturels, `+ - * /` et parenthèses.
//!
//! ```
//! use calculatrice_postfixe::{evaluate, to_postfix, validate};
//!
//! assert!(validate("3 + 4 * 2"));
//! assert_eq!(to_postfix("3+4*2").unwrap(), "3 4 2*+");
//! assert_eq!(evaluate("(3+4)*2").unwrap(), 14.0);
//! assert!(evaluate("445+989**(768-3)").is_err());
//! ```

pub mod noyau;

pub use noyau::{
    check, evaluate, evaluate_detaille, evaluate_exact, evaluate_with, format_resultat,
    normalize, to_postfix, validate, Demarche, Division, Expression, InvalidExpression, Raison,
    Reglages, Tok,
};
