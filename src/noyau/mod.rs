//! Noyau Kalk
//!
//! Organisation interne :
//! - entree.rs   : vocabulaire d’entrée (jetons, actions, touches clavier)
//! - tampon.rs   : éditeur de tampon (règles d’édition + mémoire)
//! - moteur.rs   : état possédé + aiguillage des entrées + notification de l’affichage
//! - jetons.rs   : tokenisation de l’expression numérique
//! - rpn.rs      : shunting-yard + calcul de la RPN en f64
//! - eval.rs     : pipeline complet (réécriture -> jetons -> RPN -> arrondi -> texte)
//! - format.rs   : arrondi + rendu virgule
//! - erreur.rs   : erreurs typées de l’évaluation

pub mod entree;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;
pub mod tampon;


#[cfg(test)]
mod tests_fuzz_safe;

/// Séparateur décimal visible (convention “virgule”).
pub const SEPARATEUR: char = ',';

/// Marqueur affiché à la place d’un résultat impossible.
pub const MARQUEUR_ERREUR: &str = "Err";

/// Suffixe ajouté à l’expression archivée dans la mémoire.
pub const MARQUEUR_MEMOIRE: &str = " =";

/// Nombre de décimales conservées à l’arrondi.
pub const DECIMALES: i32 = 8;

// API publique minimale
pub use moteur::{Affichage, Calculatrice};
