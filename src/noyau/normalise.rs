// src/noyau/normalise.rs

/// Retire tous les espaces (U+0020) ; l’ordre des autres caractères est conservé.
///
/// Seul l’espace est retiré : une tabulation reste dans le texte et sera
/// refusée par la validation comme n’importe quel caractère inconnu.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|&c| c != ' ').collect()
}
