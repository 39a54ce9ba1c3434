// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis calculer la RPN sur une pile de f64
//
// Règles:
// - Précédence : * / au-dessus de + -, associativité à gauche.
// - Signe unaire:
//    - '-' quand on n’attend PAS un opérateur => Tok::Neg (préfixe, priorité max)
//    - '+' dans la même position => neutre, ignoré
// - Toute forme incomplète ("5+", "-", "()", "(5") est refusée ici,
//   jamais au moment du calcul.

use super::erreur::{ErreurEval, Resultat};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à distinguer signe unaire / opérateur binaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                ops.push(tok);
            }

            Tok::RPar => {
                // "()" ou "(5+)"
                if !prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurEval::Parentheses),
                    }
                }
            }

            Tok::Minus | Tok::Neg if !prev_was_value => ops.push(Tok::Neg),

            Tok::Plus if !prev_was_value => {}

            // signe derrière une valeur : forme impossible
            Tok::Neg => return Err(ErreurEval::ExpressionInvalide),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }

                // dépile tant que la précédence l’exige (sans traverser '(')
                while let Some(top) = ops.pop() {
                    if !matches!(top, Tok::LPar) && precedence(&top) >= precedence(&tok) {
                        out.push(top);
                    } else {
                        ops.push(top);
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // opérateur final ("5+"), signe seul ("-") ou entrée vide
    if !prev_was_value {
        return Err(ErreurEval::ExpressionInvalide);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::Parentheses);
        }
        out.push(op);
    }

    Ok(out)
}

/// Calcule une RPN sur une pile de f64 (sémantique IEEE 754 : 1/0 = inf).
pub fn calculer_rpn(rpn: &[Tok]) -> Resultat<f64> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),
            Tok::Neg => {
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(-a);
            }
            Tok::Plus => binaire(&mut st, |a, b| a + b)?,
            Tok::Minus => binaire(&mut st, |a, b| a - b)?,
            Tok::Star => binaire(&mut st, |a, b| a * b)?,
            Tok::Slash => binaire(&mut st, |a, b| a / b)?,
            Tok::LPar | Tok::RPar => return Err(ErreurEval::Parentheses),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}

fn binaire(st: &mut Vec<f64>, f: impl Fn(f64, f64) -> f64) -> Resultat<()> {
    let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
    let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
    st.push(f(a, b));
    Ok(())
}
