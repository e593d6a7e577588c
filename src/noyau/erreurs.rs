// src/noyau/erreurs.rs
//
// Taxonomie d’erreurs du noyau : exactement six sortes, mutuellement
// exclusives par cycle (seule la première détectée est rapportée).
//
// Le texte Display est le texte utilisateur EXACT du protocole de sortie
// (la boucle affiche "Error: {erreur}"). Ne pas le reformuler.

use thiserror::Error;

/// Classification d’erreur d’un cycle d’évaluation.
///
/// `Aucune` est l’état remis à zéro du contexte ; il n’est jamais affiché.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[default]
    #[error("no error")]
    Aucune,

    /// Caractère hors alphabet, ou opérateur inconnu atteignant
    /// l’arithmétique binaire (défensif, normalement inatteignable).
    #[error("entered wrong symbol")]
    SymboleInvalide,

    #[error("amount of the opening and closing brackets is not equal")]
    ParenthesesDesequilibrees,

    /// Le collaborateur de lecture n’a pas pu fournir de ligne.
    #[error("input buffer error")]
    LectureEntree,

    /// Un opérande ne se lit pas comme un nombre décimal.
    #[error("wrong number notation")]
    NotationNombre,

    #[error("zero division is not allowed")]
    DivisionParZero,
}
