//! Tests scientifiques (campagne) : scénarios de référence + propriétés.
//!
//! - scénarios historiques (expressions refusées)
//! - priorité / parenthèses
//! - ordre des opérandes pour `-` et `/`
//! - parenthèses redondantes autour d’une somme/produit
//! - déterminisme (mêmes entrées => mêmes sorties)

use std::time::{Duration, Instant};

use super::erreur::Raison;
use super::jetons::{format_tokens, jetons_postfixe};
use super::{check, evaluate, normalize, to_postfix, validate, Expression};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_refusee(expr: &str) {
    assert!(!validate(expr), "validate({expr:?}) devrait être false");
    assert!(to_postfix(expr).is_err(), "to_postfix({expr:?}) devrait échouer");
    assert!(evaluate(expr).is_err(), "evaluate({expr:?}) devrait échouer");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn double_etoile_refusee() {
    assert_refusee("445+989**(768-3)");
}

#[test]
fn parentheses_croisees_refusees() {
    assert_refusee("445+989)*(768-3");
}

#[test]
fn caractere_inconnu_refuse() {
    assert_refusee("445*r+989*(768-3)");
}

#[test]
fn vide_refuse() {
    assert_refusee("");
    assert_eq!(check("").unwrap_err().raison(), &Raison::Vide);
}

#[test]
fn espaces_seuls() {
    // Le vide est testé AVANT la normalisation : "   " passe la validation,
    // mais n’a ni forme postfixe ni valeur.
    assert!(validate("   "));
    assert_eq!(to_postfix("   ").unwrap_err().raison(), &Raison::Vide);
    assert_eq!(evaluate("   ").unwrap_err().raison(), &Raison::Vide);
    assert!(!Expression::new("   ").normalisee().est_valide());
}

#[test]
fn litteral_seul() {
    assert!(validate("42"));
    assert_eq!(eval_ok("42"), 42.0);
}

#[test]
fn multiplication_avant_addition() {
    let rpn = to_postfix("3+4*2").unwrap();
    let jetons = format_tokens(&jetons_postfixe(&rpn).unwrap());
    assert_eq!(jetons, "3 4 2 * +");
    assert_eq!(eval_ok("3+4*2"), 11.0);
}

#[test]
fn parentheses_avant_priorite() {
    assert_eq!(eval_ok("(3+4)*2"), 14.0);
}

#[test]
fn plus_apres_parenthese_ouvrante() {
    // La branche `(` regarde le caractère suivant : "(+" est refusé.
    assert_refusee("3+(+4)");
    // Espaces retirés avant l’analyse : même verdict.
    assert_refusee("3 + ( + 4 )");
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn parentheses_redondantes_sans_effet() {
    let cas = ["1+2", "2*3*4", "5+6*7", "10*10+1", "1+2+3+4", "7"];
    for s in cas {
        let entoure = format!("({s})");
        let double = format!("(({s}))");
        assert_eq!(eval_ok(s), eval_ok(&entoure), "{s:?}");
        assert_eq!(eval_ok(s), eval_ok(&double), "{s:?}");
    }
    assert_eq!(eval_ok("(1+2)"), 3.0);
}

#[test]
fn ordre_des_operandes_moins_et_division() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for a in 0..40u32 {
        for b in 1..40u32 {
            budget(t0, max);

            let sous = eval_ok(&format!("{a}-{b}"));
            assert_eq!(sous, f64::from(a) - f64::from(b), "{a}-{b}");

            let div = eval_ok(&format!("{a}/{b}"));
            assert_eq!(div, f64::from(a) / f64::from(b), "{a}/{b}");
        }
    }
}

#[test]
fn determinisme() {
    let cas = ["445+989*(768-3)", "((1+2)*(3+4))/5", "100/7-3*2", "0/0"];
    for s in cas {
        let r1 = to_postfix(s).unwrap();
        let r2 = to_postfix(s).unwrap();
        assert_eq!(r1, r2);

        let v1 = evaluate(s).unwrap();
        let v2 = evaluate(s).unwrap();
        // bit à bit (NaN compris)
        assert_eq!(v1.to_bits(), v2.to_bits(), "{s:?}");

        assert_eq!(
            Expression::new(s).calcule().unwrap(),
            Expression::new(s).calcule().unwrap()
        );
    }
}

#[test]
fn validation_idempotente_sur_forme_normalisee() {
    let cas = [" 1 + 2 ", "( 3 )", "3 ++ 4", "1 2", "(1)(2)"];
    for s in cas {
        assert_eq!(validate(s), validate(&normalize(s)), "{s:?}");
    }
    // "1 2" devient "12" : un seul nombre
    assert_eq!(eval_ok("1 2"), 12.0);
}

#[test]
fn expression_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // ((((...(1)+1)...)+1) : profondeur 500, lecture linéaire sans récursion
    let n = 500;
    let mut s = "(".repeat(n);
    s.push('1');
    for _ in 0..n {
        s.push_str("+1)");
    }

    assert!(validate(&s));
    assert_eq!(eval_ok(&s), (n + 1) as f64);
    budget(t0, max);
}
