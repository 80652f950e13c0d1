//! Noyau décimal exact
//!
//! Organisation interne :
//! - erreur.rs  : erreurs typées (expression invalide / division par zéro)
//! - saisie.rs  : accumulateur de saisie (grammaire de l’expression)
//! - jetons.rs  : tokenisation
//! - eval.rs    : réduction à deux piles (priorités + parenthèses)
//! - valeur.rs  : arithmétique décimale (arrondi demi-sup, division, %)
//! - format.rs  : résultat + aperçu (notation exposant au-delà du seuil)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod saisie;
pub mod valeur;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::evaluer;
pub use format::{format_apercu, format_resultat};
pub use saisie::Saisie;
pub use valeur::pour_cent;
