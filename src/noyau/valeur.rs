// src/noyau/valeur.rs
//
// Arithmétique décimale exacte sur BigRational.
// - Addition/soustraction/multiplication : exactes (aucun arrondi).
// - Division : quotient exact PUIS arrondi à ECHELLE_DIVISION chiffres.
// - Pourcentage : division par 100 sous la même règle.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::ErreurEval;

/// Nombre de chiffres fractionnaires de toute division (et du pourcentage).
/// Fixe : chaque valeur du système reste un rationnel décimal borné.
pub const ECHELLE_DIVISION: usize = 10;

pub(crate) fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/* ------------------------ Arrondi demi-sup ------------------------ */

/// Arrondit `v` à `chiffres` chiffres fractionnaires.
/// Règle : au plus proche ; la demi s’éloigne de zéro (0.5 -> 1, -0.5 -> -1).
pub fn arrondi_demi_sup(v: &BigRational, chiffres: usize) -> BigRational {
    let echelle = pow10(chiffres);

    // v * 10^chiffres = num/den (den > 0 : num-rational normalise le signe)
    let num = v.numer() * &echelle;
    let den = v.denom();

    let neg = num.is_negative();
    let num_abs = num.abs();

    let mut quot = &num_abs / den;
    let reste = &num_abs % den;

    // demi comprise : reste*2 >= den => on monte d’un pas
    let double = &reste + &reste;
    if double >= *den {
        quot += 1u32;
    }

    let signe = if neg { -quot } else { quot };
    BigRational::new(signe, echelle)
}

/* ------------------------ Division + pourcentage ------------------------ */

/// Division sous la règle maison : quotient exact arrondi à
/// ECHELLE_DIVISION chiffres. Diviseur nul => erreur.
pub fn div_arrondi(a: &BigRational, b: &BigRational) -> Result<BigRational, ErreurEval> {
    if b.is_zero() {
        return Err(ErreurEval::DivisionParZero);
    }
    Ok(arrondi_demi_sup(&(a / b), ECHELLE_DIVISION))
}

/// v/100 sous la même règle d’arrondi que la division.
/// Totale : le diviseur est la constante 100.
pub fn pour_cent(v: &BigRational) -> BigRational {
    let cent = BigRational::from_integer(BigInt::from(100));
    arrondi_demi_sup(&(v / &cent), ECHELLE_DIVISION)
}
