//! src/app/boucle.rs
//!
//! Boucle d’interaction terminal : invite, lecture d’une ligne (rustyline),
//! impression d’exactement UNE ligne de protocole par cycle, ligne de
//! sortie finale. Aucune logique d’évaluation ici.

use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::etat::{IssueCycle, SessionCalc};

/// Invite affichée à chaque cycle.
pub const INVITE: &str = "> ";

/// Ligne finale, imprimée une seule fois à la fin de session.
pub const LIGNE_SORTIE: &str = "Exited.";

/// Lance la session interactive. Ne rend la main qu’à la fin de session
/// (mot de sortie, Ctrl-D ou Ctrl-C).
pub fn lancer() -> rustyline::Result<()> {
    let mut editeur = DefaultEditor::new()?;
    let mut session = SessionCalc::new();

    loop {
        let issue = match editeur.readline(INVITE) {
            Ok(ligne) => {
                let _ = editeur.add_history_entry(ligne.as_str());
                session.traiter_ligne(&ligne)
            }

            // Ctrl-D / Ctrl-C terminent la session comme un mot de sortie
            // (déviation documentée : l’original rebouclait sans fin sur EOF)
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => IssueCycle::Terminer,

            // cycle perdu, session conservée
            Err(err) => {
                debug!("lecture impossible: {err}");
                session.echec_lecture()
            }
        };

        match issue.ligne() {
            Some(texte) => println!("{texte}"),
            None => break,
        }
    }

    println!("{LIGNE_SORTIE}");

    Ok(())
}
