// src/noyau/contexte.rs
//
// Contexte d’évaluation : l’état mutable partagé par toutes les phases d’un
// cycle. Créé une fois par session, REMIS À ZÉRO (pas réalloué) en tête de
// chaque cycle — aucun état ne peut fuir d’une ligne à la suivante si la
// remise à zéro couvre chaque champ.

use super::erreurs::ErreurCalc;

/// État mutable d’un cycle d’évaluation.
#[derive(Clone, Debug, Default)]
pub struct Contexte {
    /// Tampon d’expression courant (réécrit en place phase après phase).
    pub tampon: String,

    /// Tampon de sous-expression : la tranche plate en cours de réduction.
    pub sous_expr: String,

    /// Dernière classification d’erreur du cycle (`Aucune` = état propre).
    pub derniere_erreur: ErreurCalc,

    /// Comptes de parenthèses issus de la validation ; `nb_fermantes` pilote
    /// la boucle de résolution.
    pub nb_ouvrantes: usize,
    pub nb_fermantes: usize,

    /// Curseurs : paire de parenthèses courante.
    pub ouvrante: usize,
    pub fermante: usize,

    /// Curseurs : bornes de l’empan d’opérandes de l’opération binaire
    /// courante (inclusives).
    pub borne_basse: usize,
    pub borne_haute: usize,
}

impl Contexte {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remise à zéro de TOUS les champs mutables (contrat de tête de cycle).
    pub fn reinitialiser(&mut self) {
        self.tampon.clear();
        self.sous_expr.clear();
        self.derniere_erreur = ErreurCalc::Aucune;
        self.nb_ouvrantes = 0;
        self.nb_fermantes = 0;
        self.ouvrante = 0;
        self.fermante = 0;
        self.borne_basse = 0;
        self.borne_haute = 0;
    }
}
