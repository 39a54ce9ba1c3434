// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs possibles de l’évaluation.
///
/// Jamais remontés à l’appelant : `eval::evaluer` les aplatit en `MARQUEUR_ERREUR`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurEval {
    #[error("caractère alphabétique interdit: '{0}'")]
    CaractereInterdit(char),

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("parenthèses non équilibrées")]
    Parentheses,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("résultat non fini: {0}")]
    NonFini(f64),
}

pub type Resultat<T> = std::result::Result<T, ErreurEval>;
