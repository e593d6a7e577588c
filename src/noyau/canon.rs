// src/noyau/canon.rs
//
// Canonisation de la ligne brute :
// - retire espaces et fins de ligne (la ligne arrive telle quelle du terminal)
// - virgule décimale -> point décimal
//
// Transformation pure, aucune condition d’erreur.
//
// Les mots de sortie sont reconnus ICI, sur la forme canonique, AVANT toute
// validation de caractères : "quit" ne doit jamais être rejeté comme
// expression invalide.

/// Mots de sortie reconnus (comparaison littérale, sensible à la casse).
const MOTS_SORTIE: [&str; 3] = ["q", "quit", "exit"];

/// Forme canonique d’une ligne brute.
pub fn canonise(brut: &str) -> String {
    brut.chars()
        .filter(|c| !matches!(c, ' ' | '\r' | '\n'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// La ligne canonique demande-t-elle la fin de session ?
pub fn est_mot_sortie(canonique: &str) -> bool {
    MOTS_SORTIE.contains(&canonique)
}
