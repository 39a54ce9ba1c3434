// src/noyau/jetons.rs

use super::erreur::{ErreurEval, Resultat};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : jamais produit par tokenize, injecté par rpn::to_rpn.
    Neg,

    LPar,
    RPar,
}

/// Tokenize une expression déjà réécrite en ASCII (`*`, `/`, point décimal).
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, 007, .5)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
///
/// Tout autre caractère est refusé.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : chiffres et points; un second point rend le nombre invalide
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            if txt.matches('.').count() > 1 || !txt.chars().any(|c| c.is_ascii_digit()) {
                return Err(ErreurEval::NombreInvalide(txt));
            }
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurEval::NombreInvalide(txt.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
