//! Noyau — accumulateur de saisie (sans vue, sans évaluation)
//!
//! Rôle : construire l’expression touche par touche en appliquant la
//! grammaire AVANT l’ajout. Une touche hors grammaire est refusée sans
//! modifier quoi que ce soit (retour `false`, jamais d’erreur).
//!
//! Contrats (Loi de Clément, version saisie) :
//! - Jamais deux opérateurs adjacents.
//! - Au plus un point par plage numérique.
//! - L’expression ne commence jamais par un opérateur.
//! - Pas de littéral “00” en tête de plage.
//! - L’état se déduit toujours de la chaîne : toute mutation qui ne permet
//!   pas une transition directe (effacement, remplacement) repasse par une
//!   relecture de la fin de chaîne.

/// Position de saisie dans la grammaire de l’expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EtatSaisie {
    /// Expression vide.
    #[default]
    Debut,
    /// La plage numérique en cours se termine par un chiffre, sans point.
    ApresChiffre,
    /// La plage numérique en cours contient déjà son point.
    ApresPoint,
    /// Le dernier caractère est un opérateur.
    ApresOperateur,
}

#[derive(Clone, Debug, Default)]
pub struct Saisie {
    expression: String,
    etat: EtatSaisie,
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn seul_chiffre(jeton: &str) -> Option<char> {
    let mut it = jeton.chars();
    let c = it.next()?;
    if it.next().is_some() || !c.is_ascii_digit() {
        return None;
    }
    Some(c)
}

/// Recalcule l’état par relecture de la fin de chaîne (source de vérité).
fn etat_depuis_fin(expression: &str) -> EtatSaisie {
    let Some(dernier) = expression.chars().last() else {
        return EtatSaisie::Debut;
    };
    if est_operateur(dernier) {
        return EtatSaisie::ApresOperateur;
    }

    // remonte la plage numérique finale : un point déjà posé => ApresPoint
    for c in expression.chars().rev() {
        if est_operateur(c) {
            break;
        }
        if c == '.' {
            return EtatSaisie::ApresPoint;
        }
    }
    EtatSaisie::ApresChiffre
}

impl Saisie {
    /// Expression accumulée, telle qu’affichée.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn etat(&self) -> EtatSaisie {
        self.etat
    }

    pub fn est_vide(&self) -> bool {
        self.expression.is_empty()
    }

    /// Prédicat dérivé (remplace l’ancien drapeau) : fin sur un opérateur.
    pub fn dernier_est_operateur(&self) -> bool {
        self.etat == EtatSaisie::ApresOperateur
    }

    /// Prédicat dérivé (remplace l’ancien drapeau) : point déjà posé dans la
    /// plage numérique en cours.
    pub fn point_en_cours(&self) -> bool {
        self.etat == EtatSaisie::ApresPoint
    }

    /* ------------------------ Ajouts (grammaire d’abord) ------------------------ */

    /// Ajoute un jeton numérique : "0"…"9", "00" ou ".".
    /// Retourne false (sans modifier l’expression) si la grammaire refuse.
    pub fn ajoute_chiffre_ou_point(&mut self, jeton: &str) -> bool {
        match jeton {
            // pas de littéral multi-zéro en tête de plage
            "00" => {
                if matches!(self.etat, EtatSaisie::Debut | EtatSaisie::ApresOperateur) {
                    return false;
                }
                self.expression.push_str(jeton);
                true
            }

            // un seul point par plage numérique
            "." => {
                if self.etat == EtatSaisie::ApresPoint {
                    return false;
                }
                self.expression.push('.');
                self.etat = EtatSaisie::ApresPoint;
                true
            }

            _ => {
                let Some(c) = seul_chiffre(jeton) else {
                    return false;
                };
                self.expression.push(c);
                // un chiffre après le point reste dans la plage pointée
                if self.etat != EtatSaisie::ApresPoint {
                    self.etat = EtatSaisie::ApresChiffre;
                }
                true
            }
        }
    }

    /// Ajoute un opérateur binaire (+ - * /).
    /// Refusé : opérateur doublé, opérateur en tête d’expression.
    pub fn ajoute_operateur(&mut self, op: char) -> bool {
        if !est_operateur(op) {
            return false;
        }
        if matches!(self.etat, EtatSaisie::Debut | EtatSaisie::ApresOperateur) {
            return false;
        }
        self.expression.push(op);
        self.etat = EtatSaisie::ApresOperateur;
        true
    }

    /* ------------------------ Mutations globales ------------------------ */

    /// Efface le dernier caractère ; false si l’expression est déjà vide.
    /// L’état est recalculé par relecture : l’effacement ne peut pas
    /// désynchroniser les prédicats.
    pub fn efface_dernier(&mut self) -> bool {
        if self.expression.pop().is_none() {
            return false;
        }
        self.etat = etat_depuis_fin(&self.expression);
        true
    }

    /// Remise à zéro totale.
    pub fn reinitialise(&mut self) {
        self.expression.clear();
        self.etat = EtatSaisie::Debut;
    }

    /// Remplace l’expression entière par un résultat formaté.
    /// L’état repart de la relecture (un résultat ne finit jamais sur un
    /// opérateur).
    pub fn remplace_par_resultat(&mut self, resultat: &str) {
        self.expression.clear();
        self.expression.push_str(resultat);
        self.etat = etat_depuis_fin(&self.expression);
    }
}
