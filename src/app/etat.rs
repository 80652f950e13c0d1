//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (saisie, aperçu, erreur)
//! et offrir des opérations simples (C, erreur terminale) sans logique
//! d’affichage.
//!
//! Contrats (Loi de Clément, version UI) :
//! - Aucune évaluation ici (pas de tokenisation, pas d’arithmétique) :
//!   l’aperçu et les messages sont déposés par la vue.
//! - Actions déterministes, sans effet de bord caché.
//! - Une erreur terminale remet TOUTE la session à zéro ; seul son message
//!   survit, jusqu’à la prochaine saisie acceptée.

use crate::noyau::Saisie;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub saisie: Saisie,

    // --- sorties ---
    pub apercu: String, // aperçu vivant (vide si l’expression ne s’évalue pas)
    pub erreur: String, // message d’erreur terminale ("=" ou "%" refusé)
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// C : remise à zéro totale (saisie + aperçu + erreur).
    pub fn reset_total(&mut self) {
        self.saisie.reinitialise();
        self.apercu.clear();
        self.erreur.clear();
    }

    /// Échec terminal : affiche le message et repart d’une session vide.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.saisie.reinitialise();
        self.apercu.clear();
        self.erreur = msg.into();
    }

    /// Dépose (ou éteint) l’aperçu vivant.
    pub fn set_apercu(&mut self, apercu: Option<String>) {
        match apercu {
            Some(v) => self.apercu = v,
            None => self.apercu.clear(),
        }
    }
}
