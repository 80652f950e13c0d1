// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::valeur::{arrondi_demi_sup, pow10, ECHELLE_DIVISION};

/// Seuil de bascule de l’aperçu en notation exposant : |v| > 10^EXPOSANT_SEUIL
/// (strict). Le résultat terminal, lui, ne bascule jamais.
const EXPOSANT_SEUIL: usize = 20;

/* ------------------------ Résultat (décimal positionnel) ------------------------ */

/// Formate une valeur pour l’affichage (résultat terminal).
/// - entier : chaîne nue, jamais de ".0"
/// - sinon : arrondi à ECHELLE_DIVISION chiffres, zéros de queue retirés,
///   point final retiré
pub fn format_resultat(v: &BigRational) -> String {
    if v.denom().is_one() {
        return v.numer().to_string();
    }

    // l’arrondi ramène le dénominateur sur un diviseur de 10^N
    let arrondi = arrondi_demi_sup(v, ECHELLE_DIVISION);
    let facteur = pow10(ECHELLE_DIVISION) / arrondi.denom();
    let scaled = arrondi.numer() * facteur;

    let brut = scaled_en_decimal(scaled, ECHELLE_DIVISION);
    brut.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Convertit un entier “scalé” (×10^chiffres) en texte décimal positionnel.
/// Invariant d’appel : chiffres > 0.
fn scaled_en_decimal(mut scaled: BigInt, chiffres: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let echelle = pow10(chiffres);
    let part_entiere = &scaled / &echelle;
    let part_frac = &scaled % &echelle;

    let mut frac = part_frac.to_str_radix(10);
    while frac.len() < chiffres {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{part_entiere}.{frac}")
    } else {
        format!("{part_entiere}.{frac}")
    }
}

/* ------------------------ Aperçu (bascule exposant) ------------------------ */

/// Formate une valeur pour l’aperçu vivant : identique au résultat, sauf
/// au-delà du seuil où la notation exposant prend le relais.
pub fn format_apercu(v: &BigRational) -> String {
    let seuil = BigRational::from_integer(pow10(EXPOSANT_SEUIL));
    if v.abs() > seuil {
        format_exposant(v)
    } else {
        format_resultat(v)
    }
}

/// Notation exposant : mantisse à chiffres significatifs complets
/// (zéros de queue retirés), puis “×10^” et l’exposant décimal.
fn format_exposant(v: &BigRational) -> String {
    // l’arrondi borne le développement : le dénominateur divise ensuite 10^N
    let r = arrondi_demi_sup(&v.abs(), ECHELLE_DIVISION);

    let entier = r.numer() / r.denom();
    let mut chiffres = entier.to_str_radix(10);
    let exposant = chiffres.len() - 1;

    // chiffres fractionnaires restants (développement fini garanti)
    let den = r.denom();
    let mut reste = r.numer() % den;
    while !reste.is_zero() {
        reste *= 10u32;
        let q = &reste / den;
        chiffres.push_str(&q.to_str_radix(10));
        reste = &reste % den;
    }

    let mut mantisse: String = chiffres.trim_end_matches('0').to_string();
    if mantisse.is_empty() {
        // v == 0 n’atteint jamais le seuil ; garde-fou
        mantisse.push('0');
    }
    if mantisse.len() > 1 {
        mantisse.insert(1, '.');
    }

    let signe = if v.is_negative() { "-" } else { "" };
    format!("{signe}{mantisse}×10^{exposant}")
}
