//! src/noyau/reglages.rs
//!
//! Réglages du pipeline (sans état, copiables).
//!
//! - `division` : que faire d’un diviseur nul en évaluation flottante
//! - `chiffres` : précision de la lecture décimale exacte (bornée)

/// Précision décimale par défaut (lecture tronquée).
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Politique de division par zéro pour l’évaluation `f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Division {
    /// Sémantique IEEE-754 : `1/0 = Infinity`, `0/0 = NaN`.
    #[default]
    Ieee,
    /// Diviseur nul refusé (`Raison::DivisionParZero`).
    Stricte,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub division: Division,
    pub chiffres: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            division: Division::Ieee,
            chiffres: DIGITS_DEFAUT,
        }
    }
}

impl Reglages {
    /// Réglages par défaut, division stricte.
    pub fn stricte() -> Self {
        Self {
            division: Division::Stricte,
            ..Self::default()
        }
    }

    /// Limite la précision à `DIGITS_MAX`.
    pub fn avec_chiffres(self, chiffres: usize) -> Self {
        Self {
            chiffres: chiffres.min(DIGITS_MAX),
            ..self
        }
    }
}
