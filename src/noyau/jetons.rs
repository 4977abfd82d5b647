// src/noyau/jetons.rs

use std::fmt;

use super::erreur::{InvalidExpression, Raison};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Entier naturel, chiffres conservés tels quels (longueur libre).
    Num(String),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Tok {
    /// Jeton d’un opérateur binaire, `None` pour tout autre caractère.
    pub fn operateur(c: char) -> Option<Tok> {
        match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(n) => f.write_str(n),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Priorité d’un caractère, partagée par la conversion et l’évaluation :
/// `*` `/` -> 3, `+` `-` -> 2, `(` -> 1, `)` -> -1, tout le reste (chiffres) -> 0.
pub fn priorite(c: char) -> i32 {
    match c {
        '*' | '/' => 3,
        '+' | '-' => 2,
        '(' => 1,
        ')' => -1,
        _ => 0,
    }
}

pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Tokenize une expression infixe (espaces ignorés).
/// Ne vérifie pas la grammaire : c’est le rôle de validation.rs.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, InvalidExpression> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().filter(|&c| c != ' ').collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => Tok::operateur(c).ok_or(Raison::CaractereInattendu { pos: i, c })?,
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Lecture d’un texte postfixe (sortie de `to_postfix`) en jetons.
///
/// - espace : séparateur, ignoré
/// - chiffre : on consomme la plus longue suite de chiffres (arrêt sur espace,
///   opérateur ou fin de texte)
/// - opérateur : jeton d’un caractère
pub fn jetons_postfixe(postfixe: &str) -> Result<Vec<Tok>, InvalidExpression> {
    let mut out = Vec::new();
    let chars: Vec<char> = postfixe.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == ' ' {
            i += 1;
            continue;
        }

        if priorite(c) == 0 {
            if !c.is_ascii_digit() {
                return Err(Raison::CaractereInattendu { pos: i, c }.into());
            }
            let start = i;
            while i < chars.len() && chars[i] != ' ' && priorite(chars[i]) == 0 {
                i += 1;
            }
            let nombre: String = chars[start..i].iter().collect();
            if !nombre.chars().all(|d| d.is_ascii_digit()) {
                return Err(Raison::PostfixeMalformee.into());
            }
            out.push(Tok::Num(nombre));
            continue;
        }

        // Plus de parenthèses en postfixe.
        let tok = Tok::operateur(c).ok_or(Raison::PostfixeMalformee)?;
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
