// src/noyau/validation.rs
//
// Grammaire acceptée (sur le texte normalisé, sans espaces) :
// - opérateur `+ - * /` : ni en tête, ni en queue, ni suivi d’un opérateur ou de `)`
// - `(` : profondeur +1, ni en queue, ni suivie d’un opérateur ou de `)`
// - `)` : profondeur -1, ni en tête, ni précédée d’un opérateur ou de `(`
// - chiffre : ni précédé de `)`, ni suivi de `(` (pas de multiplication implicite)
// - tout autre caractère : refusé
// - profondeur jamais négative, nulle à la fin
//
// NOTE: les contrôles regardent surtout le caractère SUIVANT. Rien n’interdit `)(`,
// donc "(1)(2)" passe ici ; c’est l’évaluation qui le refuse (pile finale à 2 valeurs).

use log::debug;

use super::erreur::{InvalidExpression, Raison};
use super::jetons::est_operateur;
use super::normalise::normalize;

/// Prédicat pur : `true` si l’expression respecte la grammaire.
pub fn validate(s: &str) -> bool {
    check(s).is_ok()
}

/// Comme `validate`, avec la cause du refus.
///
/// Seule l’entrée brute vide est refusée comme `Vide` : "   " se normalise en
/// texte vide, accepté ici (profondeur 0), puis refusé par `to_postfix`.
pub fn check(s: &str) -> Result<(), InvalidExpression> {
    let verdict = if s.is_empty() {
        Err(Raison::Vide)
    } else {
        check_normalisee(&normalize(s))
    };
    verdict.map_err(|raison| {
        debug!("expression refusée {s:?}: {raison}");
        InvalidExpression::new(raison)
    })
}

fn check_normalisee(s: &str) -> Result<(), Raison> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return Ok(());
    }

    let dernier = chars.len() - 1;
    let mut profondeur: i64 = 0;

    for (pos, &c) in chars.iter().enumerate() {
        if profondeur < 0 {
            return Err(Raison::ParenthesesDesequilibrees);
        }

        let suivant = chars.get(pos + 1).copied();
        let precedent = pos.checked_sub(1).map(|p| chars[p]);

        match c {
            '+' | '-' | '*' | '/' => {
                if pos == 0 || pos == dernier || ferme_ou_operateur(suivant) {
                    return Err(Raison::OperateurMalPlace { pos });
                }
            }

            '(' => {
                profondeur += 1;
                if pos == dernier || ferme_ou_operateur(suivant) {
                    return Err(Raison::ParentheseMalPlacee { pos });
                }
            }

            ')' => {
                profondeur -= 1;
                if pos == 0 || matches!(precedent, Some(p) if p == '(' || est_operateur(p)) {
                    return Err(Raison::ParentheseMalPlacee { pos });
                }
            }

            '0'..='9' => {
                if precedent == Some(')') || suivant == Some('(') {
                    return Err(Raison::Juxtaposition { pos });
                }
            }

            _ => return Err(Raison::CaractereInattendu { pos, c }),
        }
    }

    if profondeur != 0 {
        return Err(Raison::ParenthesesDesequilibrees);
    }
    Ok(())
}

fn ferme_ou_operateur(c: Option<char>) -> bool {
    matches!(c, Some(c) if c == ')' || est_operateur(c))
}
