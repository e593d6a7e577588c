// src/noyau/valider.rs
//
// Validation de la ligne canonique, en deux passes indépendantes :
// 1) caractères : tout caractère hors alphabet => SymboleInvalide (on
//    s’arrête à la première violation)
// 2) parenthèses : comptage ouvrantes/fermantes sur TOUTE la chaîne
//    (jamais court-circuité : les comptes servent ensuite à la boucle de
//    résolution des parenthèses)
//
// L’ordre compte : si les deux passes échoueraient, seule l’erreur de
// caractère est rapportée.

use super::constantes;
use super::erreurs::ErreurCalc;
use super::symboles::{est_chiffre, est_operateur, FERMANTE, OUVRANTE, POINT};

/// Alphabet admis : point, parenthèses, chiffres, les six opérateurs, et les
/// caractères d’identifiants de constantes (ils disparaissent à la
/// substitution ; un résidu se lira plus tard comme NotationNombre).
pub fn verifier_caracteres(tampon: &str) -> Result<(), ErreurCalc> {
    for c in tampon.chars() {
        let admis = c == POINT
            || c == OUVRANTE
            || c == FERMANTE
            || est_chiffre(c)
            || est_operateur(c)
            || constantes::table().est_caractere_identifiant(c);

        if !admis {
            return Err(ErreurCalc::SymboleInvalide);
        }
    }

    Ok(())
}

/// Compte les parenthèses ouvrantes et fermantes (balayage complet),
/// et exige l’égalité des deux comptes.
pub fn compter_parentheses(tampon: &str) -> Result<(usize, usize), ErreurCalc> {
    let mut ouvrantes = 0usize;
    let mut fermantes = 0usize;

    for c in tampon.chars() {
        if c == OUVRANTE {
            ouvrantes += 1;
        } else if c == FERMANTE {
            fermantes += 1;
        }
    }

    if ouvrantes != fermantes {
        return Err(ErreurCalc::ParenthesesDesequilibrees);
    }

    Ok((ouvrantes, fermantes))
}
