// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/* ------------------------ Résultat flottant ------------------------ */

/// Forme texte d’un résultat `f64`, style “double -> texte” classique :
/// - toujours au moins une décimale : `11.0`, `-4.0`, `0.5`
/// - notation scientifique hors de [10^-3, 10^7) : `1.0E7`, `1.25E-4`
/// - valeurs spéciales : `Infinity`, `-Infinity`, `NaN`
pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if x == 0.0 {
        return if x.is_sign_negative() {
            "-0.0".to_string()
        } else {
            "0.0".to_string()
        };
    }

    let a = x.abs();
    if (1e-3..1e7).contains(&a) {
        // Debug f64 : plus courte écriture exacte, avec ".0" pour les entiers
        return format!("{x:?}");
    }

    let sci = format!("{x:e}");
    match sci.split_once('e') {
        Some((mantisse, exposant)) if mantisse.contains('.') => format!("{mantisse}E{exposant}"),
        Some((mantisse, exposant)) => format!("{mantisse}.0E{exposant}"),
        None => sci,
    }
}

/* ------------------------ Rationnels ------------------------ */

/// `n` si entier, sinon `n/d` (forme réduite).
pub fn format_rationnel(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ Décimal tronqué ------------------------ */

fn pow10(n: usize) -> BigInt {
    num_traits::pow(BigInt::from(10), n)
}

/// Lecture décimale tronquée (vers zéro) avec exactement `digits` décimales.
///
/// `digits == 0` donne la partie entière seule.
pub fn lecture_decimale(r: &BigRational, digits: usize) -> String {
    let neg = r.is_negative();
    let abs = r.abs();

    let scale = pow10(digits);
    let scaled: BigInt = (abs.numer() * &scale) / abs.denom();

    // pas de "-0.00" quand la troncature efface tout
    let signe = if neg && !scaled.is_zero() { "-" } else { "" };

    let int_part = &scaled / &scale;
    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = (&scaled % &scale).to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}
