//! Noyau d’évaluation ligne à ligne
//!
//! Organisation interne :
//! - symboles.rs   : alphabet + paliers de précédence
//! - erreurs.rs    : taxonomie d’erreurs (six sortes, textes protocole)
//! - canon.rs      : canonisation de la ligne + mots de sortie
//! - valider.rs    : caractères admis + équilibre des parenthèses
//! - constantes.rs : table e/pi/phi + substitution textuelle
//! - contexte.rs   : état mutable d’un cycle (tampon, curseurs, erreur)
//! - reduction.rs  : réduction plate par paliers + arithmétique binaire
//! - eval.rs       : pipeline complet + résolution des parenthèses
//! - format.rs     : scalaires + rognage des zéros de queue

pub mod canon;
pub mod constantes;
pub mod contexte;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod reduction;
pub mod symboles;
pub mod valider;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use contexte::Contexte;
pub use erreurs::ErreurCalc;
pub use eval::evaluer;
