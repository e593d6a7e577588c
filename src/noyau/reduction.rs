// src/noyau/reduction.rs
//
// Réduction d’une expression PLATE (sans parenthèses) vers un scalaire,
// par paliers de précédence, en réécrivant `ctx.sous_expr` en place.
//
// Schéma historique “compter puis réduire” à préserver tel quel :
// les occurrences de chaque palier sont comptées UNE fois sur la tranche
// d’origine, puis on effectue exactement ce nombre de réductions, sans
// recompter. Défaut latent assumé : un résultat intermédiaire négatif
// introduit un signe '-' qui avait été compté comme opérateur du palier
// somme ; la réduction suivante le prend pour un opérateur et l’opérande
// gauche vide se lit alors comme NotationNombre. Ne pas “corriger”.

use super::contexte::Contexte;
use super::erreurs::ErreurCalc;
use super::format::format_scalaire;
use super::symboles::{
    est_operateur, Palier, DIVISE, FOIS, MODULO, MOINS, PLUS, PUISSANCE,
};

fn indice(palier: Palier) -> usize {
    match palier {
        Palier::Puissance => 0,
        Palier::Produit => 1,
        Palier::Somme => 2,
        Palier::Modulo => 3,
    }
}

/// Réduit `ctx.sous_expr` jusqu’à un scalaire décimal (ou zéro opération si
/// la tranche ne contient aucun opérateur : elle reste telle quelle).
pub fn reduire_plat(ctx: &mut Contexte) -> Result<(), ErreurCalc> {
    // Comptes par palier, figés sur la tranche d’origine.
    let mut comptes = [0usize; 4];
    for c in ctx.sous_expr.chars() {
        if let Some(p) = Palier::du_caractere(c) {
            comptes[indice(p)] += 1;
        }
    }

    // Paliers dans l’ordre fixe ; un palier s’épuise entièrement avant le
    // suivant. Les opérateurs d’un même palier se consomment de gauche à
    // droite.
    for palier in Palier::ORDRE {
        let mut restantes = comptes[indice(palier)];
        while restantes > 0 {
            if !reduire_un(ctx, palier)? {
                // compte caduc sans erreur préalable : plus rien à réduire
                break;
            }
            restantes -= 1;
        }
    }

    Ok(())
}

/// Réduit l’opérateur le plus à gauche du palier. Renvoie Ok(false) si le
/// palier n’a plus d’occurrence dans la tranche.
fn reduire_un(ctx: &mut Contexte, palier: Palier) -> Result<bool, ErreurCalc> {
    // Tout est ASCII ici (garanti par la validation) : indices d’octets sûrs.
    let octets = ctx.sous_expr.as_bytes();
    let ops = palier.operateurs();

    let Some(j) = octets.iter().position(|&b| ops.contains(&(b as char))) else {
        return Ok(false);
    };

    // Borne basse : recule depuis j jusqu’à l’opérateur précédent.
    // Contrat historique : un opérateur trouvé à l’indice 0 (signe de tête)
    // est INCLUS dans l’empan, l’opérande gauche devient vide.
    let mut i = j as isize - 1;
    while i >= 0 {
        if est_operateur(octets[i as usize] as char) {
            break;
        }
        i -= 1;
    }
    ctx.borne_basse = if i > 0 { (i + 1) as usize } else { 0 };

    // Borne haute : avance depuis j jusqu’à l’opérateur suivant.
    let mut k = j + 1;
    while k < octets.len() {
        if est_operateur(octets[k] as char) {
            break;
        }
        k += 1;
    }
    ctx.borne_haute = k - 1;

    let empan = &ctx.sous_expr[ctx.borne_basse..=ctx.borne_haute];
    let scalaire = op_binaire(empan)?;

    ctx.sous_expr
        .replace_range(ctx.borne_basse..=ctx.borne_haute, &scalaire);

    Ok(true)
}

/// Une opération binaire : `operande1 op operande2` -> scalaire formaté.
///
/// Le premier opérateur de l’empan sépare les deux opérandes ; chacun doit
/// se lire comme un nombre décimal FINI (le débordement se rapporte comme
/// NotationNombre, comme l’analyse d’origine).
fn op_binaire(empan: &str) -> Result<String, ErreurCalc> {
    let octets = empan.as_bytes();

    let Some(pos) = octets.iter().position(|&b| est_operateur(b as char)) else {
        // défensif : l’empan vient d’une recherche d’opérateur réussie
        return Err(ErreurCalc::SymboleInvalide);
    };
    let operateur = octets[pos] as char;

    let gauche = lire_operande(&empan[..pos])?;
    let droite = lire_operande(&empan[pos + 1..])?;

    let resultat = match operateur {
        PLUS => gauche + droite,
        MOINS => gauche - droite,
        FOIS => gauche * droite,
        DIVISE => {
            if droite == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            gauche / droite
        }
        PUISSANCE => gauche.powf(droite),
        // reste flottant IEEE : le signe suit le dividende
        MODULO => gauche % droite,
        _ => return Err(ErreurCalc::SymboleInvalide),
    };

    Ok(format_scalaire(resultat))
}

fn lire_operande(texte: &str) -> Result<f64, ErreurCalc> {
    let valeur: f64 = texte.parse().map_err(|_| ErreurCalc::NotationNombre)?;
    if !valeur.is_finite() {
        return Err(ErreurCalc::NotationNombre);
    }
    Ok(valeur)
}
