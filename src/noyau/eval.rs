//! Noyau — évaluation (pipeline réel)
//!
//! canonise -> valider (caractères puis parenthèses) -> substituer les
//! constantes -> résoudre les parenthèses (la plus interne d’abord)
//! -> réduire à plat par paliers -> nettoyer la queue.
//!
//! Toutes les phases partagent le même [`Contexte`], remis à zéro en tête
//! de cycle. La première erreur levée abandonne le reste du cycle : aucune
//! sortie partielle n’est produite.

use log::debug;

use super::canon::canonise;
use super::constantes;
use super::contexte::Contexte;
use super::erreurs::ErreurCalc;
use super::format::nettoyer_queue;
use super::reduction::reduire_plat;
use super::symboles::{FERMANTE, OUVRANTE};
use super::valider::{compter_parentheses, verifier_caracteres};

/// API publique : évalue une ligne brute et retourne le scalaire formaté.
///
/// Le contexte est réutilisé d’un cycle à l’autre ; il est remis à zéro ici,
/// et conserve en sortie la classification d’erreur du cycle
/// (`derniere_erreur`).
pub fn evaluer(ctx: &mut Contexte, brut: &str) -> Result<String, ErreurCalc> {
    ctx.reinitialiser();

    ctx.tampon = canonise(brut);
    debug!("tampon canonique: {:?}", ctx.tampon);

    match pipeline(ctx) {
        Ok(()) => Ok(ctx.tampon.clone()),
        Err(e) => {
            ctx.derniere_erreur = e;
            Err(e)
        }
    }
}

fn pipeline(ctx: &mut Contexte) -> Result<(), ErreurCalc> {
    // validation : caractères d’abord, équilibre ensuite (ordre contractuel)
    verifier_caracteres(&ctx.tampon)?;
    let (ouvrantes, fermantes) = compter_parentheses(&ctx.tampon)?;
    ctx.nb_ouvrantes = ouvrantes;
    ctx.nb_fermantes = fermantes;

    constantes::table().substituer(&mut ctx.tampon);
    debug!("tampon après substitution: {:?}", ctx.tampon);

    resoudre_parentheses(ctx)?;
    debug!("tampon sans parenthèses: {:?}", ctx.tampon);

    // réduction finale de l’expression plate restante
    ctx.sous_expr = std::mem::take(&mut ctx.tampon);
    reduire_plat(ctx)?;
    ctx.tampon = std::mem::take(&mut ctx.sous_expr);

    nettoyer_queue(&mut ctx.tampon);

    Ok(())
}

/* ------------------------ Résolution des parenthèses ------------------------ */

/// Boucle pilotée par le compte de fermantes issu de la validation. Chaque
/// passe élimine exactement une paire ; une erreur de réduction interrompt
/// immédiatement la boucle (propagation par `?`).
fn resoudre_parentheses(ctx: &mut Contexte) -> Result<(), ErreurCalc> {
    while ctx.nb_fermantes > 0 {
        reduire_groupe(ctx)?;
        ctx.nb_fermantes -= 1;
    }

    Ok(())
}

/// Réduit le groupe le plus interne : première ')' depuis la gauche, puis
/// recul jusqu’à la '(' la plus proche. Émulation sans pile de l’évaluation
/// interne-d’abord : on re-balaie le tampon depuis le début à chaque passe
/// (quadratique, négligeable sur une ligne interactive).
fn reduire_groupe(ctx: &mut Contexte) -> Result<(), ErreurCalc> {
    let octets = ctx.tampon.as_bytes();

    let Some(fermante) = octets.iter().position(|&b| b as char == FERMANTE) else {
        // défensif : compte positif mais plus de ')' dans le tampon
        return Err(ErreurCalc::ParenthesesDesequilibrees);
    };

    let mut ouvrante = None;
    for i in (0..fermante).rev() {
        if octets[i] as char == OUVRANTE {
            ouvrante = Some(i);
            break;
        }
    }
    let Some(ouvrante) = ouvrante else {
        // ")(" : comptes égaux mais mal ordonnés — l’original plantait ici,
        // on classe en déséquilibre (aucune erreur n’est fatale au processus)
        return Err(ErreurCalc::ParenthesesDesequilibrees);
    };

    ctx.ouvrante = ouvrante;
    ctx.fermante = fermante;

    // contenu strict entre la paire, réduit à un scalaire
    ctx.sous_expr.clear();
    ctx.sous_expr
        .push_str(&ctx.tampon[ctx.ouvrante + 1..ctx.fermante]);
    reduire_plat(ctx)?;

    // recolle le scalaire à la place du groupe, parenthèses comprises
    let scalaire = std::mem::take(&mut ctx.sous_expr);
    ctx.tampon
        .replace_range(ctx.ouvrante..=ctx.fermante, &scalaire);

    Ok(())
}
