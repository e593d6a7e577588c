// src/app.rs
//
// Calculatrice ligne — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + boucle.rs)
// - Ré-exporter SessionCalc (pour les tests et main.rs)
//
// Séparation stricte :
// - etat.rs   : décision par ligne, sans E/S (testable à sec)
// - boucle.rs : terminal (rustyline), impression du protocole

pub mod boucle;
pub mod etat;

// Ré-export pratique : `use crate::app::SessionCalc;`
pub use etat::SessionCalc;
