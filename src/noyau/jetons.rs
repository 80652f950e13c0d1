// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::ErreurEval;
use super::valeur::pow10;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Jeton à un caractère (opérateur ou parenthèse). La grammaire est fermée :
/// tout ce qui n’est ni ici, ni chiffre, ni blanc, est une erreur.
fn jeton_simple(c: char) -> Option<Tok> {
    match c {
        '+' => Some(Tok::Plus),
        '-' => Some(Tok::Minus),
        '*' => Some(Tok::Star),
        '/' => Some(Tok::Slash),
        '(' => Some(Tok::LPar),
        ')' => Some(Tok::RPar),
        _ => None,
    }
}

/// Découpe une expression en jetons :
/// - nombres décimaux : chiffres, point éventuel, chiffres éventuels
///   (ex: 12, 3.50) ; un point final collé aux chiffres est absorbé
///   ("3." vaut 3, la saisie produit cette forme), mais ".5" ne forme
///   PAS un nombre
/// - opérateurs + - * / et parenthèses
/// - blancs ignorés
///
/// Tout autre caractère est refusé (pas de saut silencieux) : le moindre
/// symbole hors grammaire invalide l’expression entière.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if let Some(tok) = jeton_simple(c) {
            out.push(tok);
            i += 1;
            continue;
        }

        // Nombre décimal : partie entière, puis point éventuel. Un point
        // collé aux chiffres appartient au nombre : fraction s’il reste des
        // chiffres derrière, absorbé sinon ("3." vaut 3, forme que la saisie
        // produit légitimement). Un point sans chiffre devant reste hors
        // grammaire et fera échouer le tour de boucle suivant.
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let int_str: String = chars[start..i].iter().collect();
            let entier =
                BigInt::parse_bytes(int_str.as_bytes(), 10).ok_or(ErreurEval::ExpressionInvalide)?;

            // par défaut : entier
            let mut rat = BigRational::from_integer(entier.clone());

            if i < chars.len() && chars[i] == '.' {
                i += 1;
                if i < chars.len() && chars[i].is_ascii_digit() {
                    let start_f = i;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                    let frac_str: String = chars[start_f..i].iter().collect();
                    let frac = BigInt::parse_bytes(frac_str.as_bytes(), 10)
                        .ok_or(ErreurEval::ExpressionInvalide)?;

                    // valeur = (entier*10^d + frac) / 10^d
                    let echelle = pow10(frac_str.len());
                    rat = BigRational::new(entier * &echelle + frac, echelle);
                }
            }

            out.push(Tok::Num(rat));
            continue;
        }

        return Err(ErreurEval::ExpressionInvalide);
    }

    Ok(out)
}
