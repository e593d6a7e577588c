//! src/app/etat.rs
//!
//! État de session (sans terminal, sans affichage).
//!
//! Rôle : porter le [`Contexte`] réutilisé de cycle en cycle et décider de
//! l’issue d’une ligne (sortie / résultat / erreur), sans aucune E/S.
//! C’est la partie testable de la boucle : la lecture et l’impression
//! restent dans boucle.rs.

use crate::noyau::canon::{canonise, est_mot_sortie};
use crate::noyau::{evaluer, Contexte, ErreurCalc};

/// Issue d’un cycle : ce que la boucle doit faire de la ligne.
#[derive(Clone, Debug, PartialEq)]
pub enum IssueCycle {
    /// Mot de sortie : terminer la session sans évaluer.
    Terminer,
    /// Évaluation réussie : texte à imprimer tel quel.
    Resultat(String),
    /// Cycle en échec : une seule sorte, la première détectée.
    Erreur(ErreurCalc),
}

impl IssueCycle {
    /// Ligne de protocole à imprimer (None pour la fin de session, la
    /// boucle imprime alors la ligne de sortie finale).
    pub fn ligne(&self) -> Option<String> {
        match self {
            IssueCycle::Terminer => None,
            IssueCycle::Resultat(texte) => Some(texte.clone()),
            IssueCycle::Erreur(e) => Some(format!("Error: {e}")),
        }
    }
}

/// Session : un contexte d’évaluation réutilisé, remis à zéro par le noyau
/// en tête de chaque cycle.
#[derive(Debug, Default)]
pub struct SessionCalc {
    contexte: Contexte,
}

impl SessionCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Traite une ligne brute. Le mot de sortie est reconnu sur la forme
    /// canonique, AVANT la validation : "quit" ne doit jamais être rejeté
    /// comme expression invalide.
    pub fn traiter_ligne(&mut self, brut: &str) -> IssueCycle {
        if est_mot_sortie(&canonise(brut)) {
            return IssueCycle::Terminer;
        }

        match evaluer(&mut self.contexte, brut) {
            Ok(texte) => IssueCycle::Resultat(texte),
            Err(e) => IssueCycle::Erreur(e),
        }
    }

    /// Issue d’un échec de lecture : le cycle est perdu, pas la session.
    pub fn echec_lecture(&mut self) -> IssueCycle {
        self.contexte.reinitialiser();
        self.contexte.derniere_erreur = ErreurCalc::LectureEntree;
        IssueCycle::Erreur(ErreurCalc::LectureEntree)
    }
}
