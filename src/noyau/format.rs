// src/noyau/format.rs

use super::{DECIMALES, SEPARATEUR};

/* ------------------------ Arrondi ------------------------ */

/// Arrondi à `DECIMALES` décimales (demi : loin de zéro).
///
/// Un biais `f64::EPSILON` est ajouté avant l’échelle pour absorber
/// l’erreur de représentation binaire (0.1 + 0.2 => 0.3).
pub fn arrondir(x: f64) -> f64 {
    let echelle = 10f64.powi(DECIMALES);
    let mis_a_l_echelle = (x + f64::EPSILON) * echelle;

    // très grands nombres : pas de partie fractionnaire à arrondir
    if !mis_a_l_echelle.is_finite() {
        return x;
    }

    let r = mis_a_l_echelle.round() / echelle;

    // -0 => 0 (sinon l’écran affiche "-0")
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/* ------------------------ Nombre <-> texte écran ------------------------ */

/// Rend un nombre pour l’écran : jamais d’exposant, point -> virgule.
pub fn nombre_vers_affichage(x: f64) -> String {
    format!("{x}").replace('.', &SEPARATEUR.to_string())
}

/// Lecture tolérante d’un morceau “chiffres + virgules” (comme un parseFloat) :
/// on garde le plus long préfixe numérique, la virgule valant un point.
///
/// - "10"    -> 10
/// - "0,5"   -> 0.5
/// - "1,2,3" -> 1.2   (préfixe)
/// - ","     -> None
pub fn affichage_vers_nombre(s: &str) -> Option<f64> {
    let mut prefixe = String::with_capacity(s.len());
    let mut point_vu = false;

    for c in s.chars() {
        match c {
            '0'..='9' => prefixe.push(c),
            c if c == SEPARATEUR || c == '.' => {
                if point_vu {
                    break;
                }
                point_vu = true;
                prefixe.push('.');
            }
            _ => break,
        }
    }

    if !prefixe.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    prefixe.parse::<f64>().ok()
}
