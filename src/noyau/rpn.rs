// src/noyau/rpn.rs
//
// Shunting-yard : infixe (validée) -> texte postfixe.
//
// Règles de sortie (format historique, à garder tel quel) :
// - chiffre      : recopié directement (les nombres multi-chiffres restent collés)
// - `(`          : empilée
// - opérateur    : un espace, puis on dépile tant que priorité(sommet) >= priorité(op), puis on empile
// - `)`          : un espace, puis on dépile jusqu’à `(` (qui est jetée)
// - fin          : on vide la pile, sans aucun séparateur
//
// Exemple : "3+4*2" -> "3 4 2*+" ; "(3+4)*2" -> "3 4 + 2*"
// La lecture (jetons_postfixe) coupe les nombres sur espace OU opérateur,
// donc un opérateur collé au nombre qui le précède reste sans ambiguïté.

use log::trace;

use super::erreur::{InvalidExpression, Raison};
use super::jetons::priorite;
use super::normalise::normalize;
use super::validation::check;

/// Convertit une expression infixe en texte postfixe.
///
/// L’entrée est toujours re-validée ici : un appelant ne peut pas obtenir de
/// forme postfixe pour une expression refusée par `validate`.
/// Une expression vide après normalisation ("   ") est refusée ici.
pub fn to_postfix(s: &str) -> Result<String, InvalidExpression> {
    check(s)?;
    let infixe = normalize(s);
    if infixe.is_empty() {
        return Err(Raison::Vide.into());
    }

    let mut out = String::with_capacity(infixe.len() * 2);
    let mut ops: Vec<char> = Vec::new();

    for c in infixe.chars() {
        match priorite(c) {
            0 => out.push(c),

            1 => ops.push(c),

            -1 => {
                out.push(' ');
                // pile non vide garantie par la validation (parenthèses équilibrées)
                loop {
                    match ops.pop() {
                        Some('(') => break,
                        Some(op) => out.push(op),
                        None => return Err(Raison::ParenthesesDesequilibrees.into()),
                    }
                }
            }

            p => {
                out.push(' ');
                while let Some(&top) = ops.last() {
                    if priorite(top) >= p {
                        out.push(top);
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(c);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    trace!("postfixe {infixe:?} -> {out:?}");
    Ok(out)
}
