// src/noyau/symboles.rs
//
// Classification des caractères du tampon d’expression :
// - les six opérateurs binaires supportés
// - chiffres, point décimal, parenthèses
// - paliers de précédence (ordre de réduction fixe)

/// Point décimal (après canonisation, la virgule n’existe plus).
pub const POINT: char = '.';
pub const OUVRANTE: char = '(';
pub const FERMANTE: char = ')';

pub const PLUS: char = '+';
pub const MOINS: char = '-';
pub const FOIS: char = '*';
pub const DIVISE: char = '/';
pub const PUISSANCE: char = '^';
pub const MODULO: char = '%';

/// Les six opérateurs, dans l’ordre d’énumération des paliers.
pub const OPERATEURS: [char; 6] = [PUISSANCE, FOIS, DIVISE, PLUS, MOINS, MODULO];

pub fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}

pub fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit()
}

/* ------------------------ Paliers de précédence ------------------------ */

/// Palier de réduction. Ordre fixe : puissance, produit, somme, modulo.
///
/// ATTENTION : le modulo est volontairement le palier le PLUS BAS
/// (réduit après +/-). Comportement historique à préserver tel quel,
/// pas une précédence mathématique standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palier {
    Puissance,
    Produit,
    Somme,
    Modulo,
}

impl Palier {
    /// Ordre de réduction, du plus prioritaire au moins prioritaire.
    pub const ORDRE: [Palier; 4] = [
        Palier::Puissance,
        Palier::Produit,
        Palier::Somme,
        Palier::Modulo,
    ];

    /// Opérateurs appartenant au palier.
    pub fn operateurs(self) -> &'static [char] {
        match self {
            Palier::Puissance => &[PUISSANCE],
            Palier::Produit => &[FOIS, DIVISE],
            Palier::Somme => &[PLUS, MOINS],
            Palier::Modulo => &[MODULO],
        }
    }

    /// Palier d’un caractère opérateur (None si le caractère n’en est pas un).
    pub fn du_caractere(c: char) -> Option<Palier> {
        match c {
            PUISSANCE => Some(Palier::Puissance),
            FOIS | DIVISE => Some(Palier::Produit),
            PLUS | MOINS => Some(Palier::Somme),
            MODULO => Some(Palier::Modulo),
            _ => None,
        }
    }
}
