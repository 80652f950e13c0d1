// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé tactile : gros boutons, grille 4 colonnes (C DEL % / … 00 0 . =)
// - Clavier physique : chiffres/opérateurs via Event::Text, Enter évalue,
//   Backspace efface (pas de champ texte : tout passe par l’accumulateur)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x) ; Enter suffit.
// - C’est ICI (et seulement ici) que la vue appelle le noyau.

use eframe::egui;

use crate::noyau;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.gere_clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Décimale");
                ui.add_space(6.0);

                self.ui_affichages(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }
            });
    }

    fn ui_affichages(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");
        Self::champ_monospace(ui, "expression_out", self.saisie.expression());

        ui.add_space(6.0);

        ui.label("Aperçu :");
        Self::champ_monospace(ui, "apercu_out", &self.apercu);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Remise à zéro totale", Action::ResetTotal);
                self.bouton_action(
                    ui,
                    "DEL",
                    "Efface le dernier caractère",
                    Action::EffaceDernier,
                );
                self.bouton_action(ui, "%", "Évalue puis divise par 100", Action::PourCent);
                self.bouton_operateur(ui, '/');
                ui.end_row();

                self.bouton_saisie(ui, "7");
                self.bouton_saisie(ui, "8");
                self.bouton_saisie(ui, "9");
                self.bouton_operateur(ui, '*');
                ui.end_row();

                self.bouton_saisie(ui, "4");
                self.bouton_saisie(ui, "5");
                self.bouton_saisie(ui, "6");
                self.bouton_operateur(ui, '-');
                ui.end_row();

                self.bouton_saisie(ui, "1");
                self.bouton_saisie(ui, "2");
                self.bouton_saisie(ui, "3");
                self.bouton_operateur(ui, '+');
                ui.end_row();

                self.bouton_saisie(ui, "00");
                self.bouton_saisie(ui, "0");
                self.bouton_saisie(ui, ".");
                self.bouton_action(ui, "=", "Évalue l’expression", Action::Egal);
                ui.end_row();
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        // On garde un cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace));
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_saisie(&mut self, ui: &mut egui::Ui, jeton: &str) {
        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(jeton));
        if resp.clicked() {
            self.touche_saisie(jeton);
        }
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: char) {
        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(op.to_string()));
        if resp.clicked() {
            self.touche_operateur(op);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([64.0, 40.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ResetTotal => self.reset_total(),
                Action::EffaceDernier => self.touche_efface(),
                Action::Egal => self.touche_egal(),
                Action::PourCent => self.touche_pour_cent(),
            }
        }
    }

    /* ------------------------ Clavier physique ------------------------ */

    /// Route le clavier vers les mêmes chemins que les boutons.
    fn gere_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.ctx().input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.touche_caractere(c);
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.touche_egal(),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.touche_efface(),
                _ => {}
            }
        }
    }

    fn touche_caractere(&mut self, c: char) {
        match c {
            '0'..='9' => self.touche_saisie(&c.to_string()),
            '.' => self.touche_saisie("."),
            '+' | '-' | '*' | '/' => self.touche_operateur(c),
            '=' => self.touche_egal(),
            '%' => self.touche_pour_cent(),
            _ => {}
        }
    }

    /* ------------------------ Touches -> noyau ------------------------ */

    /// Chiffre, "00" ou point : ajout si la grammaire l’accepte.
    /// Toute saisie acceptée efface le message d’erreur et relance l’aperçu.
    fn touche_saisie(&mut self, jeton: &str) {
        if self.saisie.ajoute_chiffre_ou_point(jeton) {
            self.erreur.clear();
            self.rafraichir_apercu();
        }
    }

    fn touche_operateur(&mut self, op: char) {
        if self.saisie.ajoute_operateur(op) {
            self.erreur.clear();
            self.rafraichir_apercu();
        }
    }

    fn touche_efface(&mut self) {
        if self.saisie.efface_dernier() {
            self.erreur.clear();
            self.rafraichir_apercu();
        }
    }

    /// "=" : évaluation terminale. Succès : le résultat devient la nouvelle
    /// saisie et l’aperçu s’éteint. Échec : message + session remise à zéro.
    fn touche_egal(&mut self) {
        match noyau::evaluer(self.saisie.expression()) {
            Ok(v) => {
                let affiche = noyau::format_resultat(&v);
                self.saisie.remplace_par_resultat(&affiche);
                self.apercu.clear();
                self.erreur.clear();
            }
            Err(e) => {
                log::debug!(
                    "évaluation terminale refusée: {:?} ({e})",
                    self.saisie.expression()
                );
                self.set_erreur(e.to_string());
            }
        }
    }

    /// "%" : évalue, divise par 100 sous la règle de division, remplace la
    /// saisie, puis relance l’aperçu (contrairement à "=" qui l’éteint).
    fn touche_pour_cent(&mut self) {
        match noyau::evaluer(self.saisie.expression()) {
            Ok(v) => {
                let pct = noyau::pour_cent(&v);
                self.saisie.remplace_par_resultat(&noyau::format_resultat(&pct));
                self.erreur.clear();
                self.rafraichir_apercu();
            }
            Err(e) => {
                log::debug!("pourcentage refusé: {:?} ({e})", self.saisie.expression());
                self.set_erreur(e.to_string());
            }
        }
    }

    /// Aperçu vivant : réévalue toute l’expression. Une expression encore
    /// invalide éteint l’aperçu, sans message (l’erreur reste muette ici).
    fn rafraichir_apercu(&mut self) {
        let apercu = noyau::evaluer(self.saisie.expression())
            .ok()
            .map(|v| noyau::format_apercu(&v));
        self.set_apercu(apercu);
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ResetTotal,
    EffaceDernier,
    Egal,
    PourCent,
}
