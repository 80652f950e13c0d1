//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> réduction à deux piles (valeurs / opérateurs) -> valeur unique
//!
//! Pas d’AST ni de RPN intermédiaire : l’expression infixe est réduite en un
//! seul passage. Associativité gauche, `* /` avant `+ -`, parenthèses
//! respectées.

use num_rational::BigRational;

use super::erreur::ErreurEval;
use super::jetons::{tokenize, Tok};
use super::valeur::div_arrondi;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Réduit l’opérateur du haut : dépile b (droite) puis a (gauche),
/// rempile `a op b`.
fn applique(op: &Tok, valeurs: &mut Vec<BigRational>) -> Result<(), ErreurEval> {
    let b = valeurs.pop().ok_or(ErreurEval::ExpressionInvalide)?;
    let a = valeurs.pop().ok_or(ErreurEval::ExpressionInvalide)?;

    let v = match op {
        Tok::Plus => &a + &b,
        Tok::Minus => &a - &b,
        Tok::Star => &a * &b,
        Tok::Slash => div_arrondi(&a, &b)?,
        // seuls des opérateurs binaires atteignent la pile d’application
        _ => unreachable!(),
    };

    valeurs.push(v);
    Ok(())
}

/// API publique : évalue une expression infixe et retourne sa valeur exacte.
///
/// Erreurs : `ExpressionInvalide` (forme), `DivisionParZero` (diviseur nul).
/// L’entrée vide est une expression invalide (aucune valeur à retourner).
pub fn evaluer(expression: &str) -> Result<BigRational, ErreurEval> {
    let jetons = tokenize(expression)?;

    let mut valeurs: Vec<BigRational> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for jeton in jetons {
        match jeton {
            Tok::Num(r) => valeurs.push(r),

            Tok::LPar => ops.push(jeton),

            Tok::RPar => {
                // réduit jusqu’à la '(' appariée
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => applique(&op, &mut valeurs)?,
                        None => return Err(ErreurEval::ExpressionInvalide),
                    }
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // dépile tant que:
                // - on n’est pas bloqué par '('
                // - et la précédence du haut >= celle de l’entrant
                //   (égalité comprise => associativité gauche)
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&jeton) {
                        break;
                    }
                    let op = ops.pop().unwrap();
                    applique(&op, &mut valeurs)?;
                }
                ops.push(jeton);
            }
        }
    }

    // vide la pile ops ; une '(' restante est orpheline
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ExpressionInvalide);
        }
        applique(&op, &mut valeurs)?;
    }

    if valeurs.len() != 1 {
        return Err(ErreurEval::ExpressionInvalide);
    }
    Ok(valeurs.pop().unwrap())
}
