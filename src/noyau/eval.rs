//! Noyau — évaluation (pipeline réel)
//!
//! tampon visible -> réécriture ASCII -> garde alphabétique -> jetons -> RPN
//!        -> f64 -> garde fini -> arrondi 8 décimales -> texte virgule
//!
//! Aucune construction de code : seule la grammaire `+ - * / ( )` + nombres
//! est comprise. Tout échec devient `MARQUEUR_ERREUR`.

use tracing::debug;

use super::entree::Operateur;
use super::erreur::{ErreurEval, Resultat};
use super::format::{arrondir, nombre_vers_affichage};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{calculer_rpn, to_rpn};
use super::{MARQUEUR_ERREUR, SEPARATEUR};

/// API publique : évalue le tampon et rend le texte à afficher
/// (nombre arrondi avec virgule, ou `MARQUEUR_ERREUR`).
pub fn evaluer(tampon: &str) -> String {
    match calculer(tampon) {
        Ok(v) => nombre_vers_affichage(v),
        Err(e) => {
            debug!(tampon, erreur = %e, "évaluation refusée");
            MARQUEUR_ERREUR.to_string()
        }
    }
}

/// Pipeline typé : valeur arrondie, ou la raison de l’échec.
pub fn calculer(tampon: &str) -> Resultat<f64> {
    // 1) Réécriture : glyphes -> ASCII, virgule -> point
    let s = vers_ascii(tampon);

    // 2) Garde : aucune lettre (défense en profondeur)
    if let Some(c) = s.chars().find(|c| c.is_alphabetic()) {
        return Err(ErreurEval::CaractereInterdit(c));
    }

    // 3) Jetons -> RPN -> valeur
    let jetons = tokenize(&s)?;
    let rpn = to_rpn(&jetons)?;
    debug!(rpn = %format_tokens(&rpn), "rpn");
    let v = calculer_rpn(&rpn)?;

    // 4) Garde : inf / NaN
    if !v.is_finite() {
        return Err(ErreurEval::NonFini(v));
    }

    // 5) Arrondi
    Ok(arrondir(v))
}

/// Réécrit le tampon visible en expression ASCII évaluable.
fn vers_ascii(tampon: &str) -> String {
    tampon
        .chars()
        .map(|c| match c {
            c if c == SEPARATEUR => '.',
            c => match Operateur::depuis_glyphe(c) {
                Some(Operateur::Fois) => '*',
                Some(Operateur::Divise) => '/',
                _ => c,
            },
        })
        .collect()
}
