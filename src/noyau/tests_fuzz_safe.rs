//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler saisie + évaluation sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariants clés :
//!   * la grammaire de saisie tient sous n’importe quelle rafale de touches
//!   * l’état de saisie == relecture de la chaîne (jamais désynchronisé)
//!   * evaluer ne panique jamais ; toute erreur est un membre d’ErreurEval

use std::time::{Duration, Instant};

use num_traits::One;

use super::format::format_resultat;
use super::saisie::{EtatSaisie, Saisie};
use super::{evaluer, ErreurEval};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants saisie ------------------------ */

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Vérifie la grammaire promise par l’accumulateur.
fn verifie_grammaire(expr: &str) -> Result<(), String> {
    if let Some(premier) = expr.chars().next() {
        if est_operateur(premier) {
            return Err(format!("commence par un opérateur: {expr:?}"));
        }
    }

    let mut precedent_op = false;
    let mut point_dans_plage = false;
    for c in expr.chars() {
        if est_operateur(c) {
            if precedent_op {
                return Err(format!("opérateurs adjacents: {expr:?}"));
            }
            precedent_op = true;
            point_dans_plage = false;
            continue;
        }
        precedent_op = false;
        if c == '.' {
            if point_dans_plage {
                return Err(format!("double point dans une plage: {expr:?}"));
            }
            point_dans_plage = true;
        }
    }
    Ok(())
}

/// Oracle : état attendu par relecture naïve de la fin de chaîne.
fn etat_attendu(expr: &str) -> EtatSaisie {
    let Some(dernier) = expr.chars().last() else {
        return EtatSaisie::Debut;
    };
    if est_operateur(dernier) {
        return EtatSaisie::ApresOperateur;
    }
    for c in expr.chars().rev() {
        if est_operateur(c) {
            break;
        }
        if c == '.' {
            return EtatSaisie::ApresPoint;
        }
    }
    EtatSaisie::ApresChiffre
}

/// Une touche aléatoire du pavé, envoyée à l’accumulateur.
/// Le refus éventuel fait partie du jeu : seul l’invariant compte.
fn touche_aleatoire(s: &mut Saisie, rng: &mut Rng) {
    const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    const OPS: [char; 4] = ['+', '-', '*', '/'];

    match rng.pick(16) {
        0..=7 => {
            let _ = s.ajoute_chiffre_ou_point(CHIFFRES[rng.pick(10) as usize]);
        }
        8 | 9 => {
            let _ = s.ajoute_chiffre_ou_point("00");
        }
        10 | 11 => {
            let _ = s.ajoute_chiffre_ou_point(".");
        }
        12..=14 => {
            let _ = s.ajoute_operateur(OPS[rng.pick(4) as usize]);
        }
        _ => {
            let _ = s.efface_dernier();
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_grammaire_saisie_sous_rafale() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => même rafale => mêmes expressions (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut s = Saisie::default();

    for i in 0..2000 {
        touche_aleatoire(&mut s, &mut rng);

        if let Err(m) = verifie_grammaire(s.expression()) {
            panic!("grammaire violée au coup {i}: {m}");
        }

        // l’état interne égale toujours la relecture de la chaîne
        let attendu = etat_attendu(s.expression());
        assert_eq!(s.etat(), attendu, "désynchronisé: {:?}", s.expression());
        assert_eq!(s.dernier_est_operateur(), attendu == EtatSaisie::ApresOperateur);
        assert_eq!(s.point_en_cours(), attendu == EtatSaisie::ApresPoint);

        if i % 256 == 0 {
            budget(t0, max);
        }
    }
}

#[test]
fn fuzz_safe_eval_totale_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let alphabet: Vec<char> = "0123456789.+-*/() #".chars().collect();
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..600 {
        budget(t0, max);

        let long = 1 + rng.pick(24) as usize;
        let expr: String = (0..long)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        let premier = evaluer(&expr);
        let second = evaluer(&expr);
        assert_eq!(premier, second, "évaluation non déterministe: {expr:?}");

        // totalité : toute issue est Ok ou un membre de l’enum
        match premier {
            Ok(_) => vus_ok += 1,
            Err(ErreurEval::ExpressionInvalide) | Err(ErreurEval::DivisionParZero) => {
                vus_err += 1;
            }
        }
    }

    // mix attendu : des succès ET des refus, sinon le fuzz ne balaye rien
    assert!(vus_ok > 10, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 10, "trop peu de refus: {vus_err}");
}

#[test]
fn fuzz_safe_saisie_puis_eval_et_relecture() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..150 {
        budget(t0, max);

        let mut s = Saisie::default();
        let coups = 4 + rng.pick(24);
        for _ in 0..coups {
            touche_aleatoire(&mut s, &mut rng);
        }

        // une expression accumulée peut rester incomplète ("5+") : l’erreur
        // typée est la seule issue permise hors succès
        let Ok(v) = evaluer(s.expression()) else {
            continue;
        };

        // le formatage d’un succès doit se relire tel quel
        // (sauf négatif : le moins de tête n’est pas re-tokenisable)
        let texte = format_resultat(&v);
        if texte.starts_with('-') {
            continue;
        }
        let relu = evaluer(&texte)
            .unwrap_or_else(|e| panic!("résultat non relisible: {texte:?} ({e})"));
        assert_eq!(format_resultat(&relu), texte, "formatage instable");
    }
}

#[test]
fn fuzz_safe_division_rafale() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xDECADE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let a = rng.pick(1000);
        let b = rng.pick(12);
        let expr = format!("{a}/{b}");

        match evaluer(&expr) {
            Ok(_) => assert_ne!(b, 0, "division par zéro passée: {expr:?}"),
            Err(ErreurEval::DivisionParZero) => assert_eq!(b, 0, "faux zéro: {expr:?}"),
            Err(e) => panic!("erreur inattendue: expr={expr:?} err={e}"),
        }
    }
}

#[test]
fn fuzz_safe_profondeur_parentheses_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // réduction itérative : l’imbrication profonde ne touche pas la pile
    let n = 500;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));

    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert!(v.is_one());
    budget(t0, max);
}
