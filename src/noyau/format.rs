// src/noyau/format.rs
//
// Mise en forme des scalaires et normalisation finale du tampon.
//
// Deux règles historiques à reproduire EXACTEMENT (compatibilité de sortie) :
// - un résultat à reste fractionnaire strictement positif s’écrit avec 15
//   chiffres FIXES après le point (pas d’arrondi adaptatif) ; sinon en
//   entier sans point. Le reste suit le signe du dividende : un non-entier
//   négatif a un reste ≤ 0 et s’écrit donc en entier (quirk assumé).
// - en sortie finale, si le tampon contient un point, on retire les '0' de
//   queue un par un ; puis "0." et "." deviennent "0". Un point final
//   survivant ("2.") est conservé.

/// Écrit un scalaire dans la convention historique du moteur.
pub fn format_scalaire(valeur: f64) -> String {
    if valeur % 1.0 > 0.0 {
        format!("{valeur:.15}")
    } else {
        format!("{valeur:.0}")
    }
}

/// Normalisation finale : rognage des zéros de queue + cas dégénérés.
/// Idempotente : re-appliquée à une sortie déjà rognée, ne change rien.
pub fn nettoyer_queue(tampon: &mut String) {
    if tampon.contains('.') {
        while tampon.ends_with('0') {
            tampon.pop();
        }
    }

    if tampon == "0." || tampon == "." {
        tampon.clear();
        tampon.push('0');
    }
}
