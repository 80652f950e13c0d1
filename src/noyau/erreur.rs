// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs d’évaluation. Toutes récupérables : la session continue après
/// affichage du message.
///
/// Les messages `Display` sont ceux montrés à l’utilisateur (la vue les
/// affiche tels quels, sans traduction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Expression mal formée : caractère inattendu, opérateur sans opérande,
    /// parenthèse orpheline, entrée vide, etc.
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Diviseur exactement nul.
    #[error("division par zéro")]
    DivisionParZero,
}
