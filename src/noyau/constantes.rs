// src/noyau/constantes.rs
//
// Table des constantes nommées + substitution textuelle.
//
// Politique (déterministe, documentée) : les identifiants sont parcourus du
// PLUS LONG au plus court. La substitution est purement textuelle, sans
// frontière de mot : "pi" est remplacé même au milieu d’une suite de
// chiffres. C’est le contrat historique, pas un oubli.

use std::sync::OnceLock;

/// Nombre d’or. `f64` le plus proche de (1+√5)/2 (pas de const sqrt).
const PHI: f64 = 1.618033988749895;

/// Table immuable identifiant -> valeur `f64`.
///
/// Invariant : triée par longueur d’identifiant décroissante, pour que la
/// substitution d’un identifiant long ne soit jamais cassée par celle d’un
/// identifiant plus court qui en serait une sous-chaîne.
pub struct TableConstantes {
    entrees: Vec<(&'static str, f64)>,
}

impl TableConstantes {
    pub fn new() -> Self {
        let mut entrees = vec![
            ("e", std::f64::consts::E),
            ("pi", std::f64::consts::PI),
            ("phi", PHI),
        ];
        entrees.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entrees }
    }

    /// Le caractère appartient-il à au moins un identifiant de la table ?
    /// (Le valideur admet ces caractères pour que "pi*2" atteigne la
    /// substitution au lieu d’être rejeté.)
    pub fn est_caractere_identifiant(&self, c: char) -> bool {
        self.entrees.iter().any(|(nom, _)| nom.contains(c))
    }

    /// Remplace chaque occurrence de chaque identifiant par la forme
    /// décimale la plus courte qui restitue exactement la valeur.
    ///
    /// Fidèle au contrat d’origine : le nombre d’occurrences est compté UNE
    /// fois, puis on remplace l’occurrence la plus à gauche et on re-balaie,
    /// autant de fois que le compte (les offsets bougent à chaque édition).
    pub fn substituer(&self, tampon: &mut String) {
        for (nom, valeur) in &self.entrees {
            let texte = format!("{valeur}");

            let mut restantes = tampon.matches(nom).count();
            while restantes > 0 {
                match tampon.find(nom) {
                    Some(pos) => tampon.replace_range(pos..pos + nom.len(), &texte),
                    None => break, // compte caduc : plus rien à remplacer
                }
                restantes -= 1;
            }
        }
    }
}

impl Default for TableConstantes {
    fn default() -> Self {
        Self::new()
    }
}

/// Table partagée (construite au premier usage, lecture seule ensuite).
pub fn table() -> &'static TableConstantes {
    static TABLE: OnceLock<TableConstantes> = OnceLock::new();
    TABLE.get_or_init(TableConstantes::new)
}
