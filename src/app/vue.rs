// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Clavier : Enter évalue, Backspace efface (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Deux "/" : barre de fraction collée (3/4) ou opérateur entouré d’espaces (÷)

use eframe::egui;

use calculatrice_mixte::session::Reponse;

use super::etat::{AppCalc, Demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice mixte");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 1/2 * 3_3/4   (espaces autour des opérateurs)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_session();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultat seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "*", "*", InsertKind::Op);
            self.bouton_insert(ui, "÷", "/", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_session();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_mixte")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Chiffre);
                self.bouton_insert(ui, "8", "8", InsertKind::Chiffre);
                self.bouton_insert(ui, "9", "9", InsertKind::Chiffre);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Chiffre);
                self.bouton_insert(ui, "5", "5", InsertKind::Chiffre);
                self.bouton_insert(ui, "6", "6", InsertKind::Chiffre);
                self.bouton_insert(ui, "a/b", "/", InsertKind::Chiffre);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Chiffre);
                self.bouton_insert(ui, "2", "2", InsertKind::Chiffre);
                self.bouton_insert(ui, "3", "3", InsertKind::Chiffre);
                self.bouton_insert(ui, "_", "_", InsertKind::Chiffre);
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Chiffre);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace : un caractère, puis les espaces finaux (un opérateur " + " part d’un coup).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Réductions", "demarche_etapes", &self.demarche.etapes);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                let texte = self
                    .historique
                    .iter()
                    .rev()
                    .map(|(entree, resultat)| format!("{entree}  {resultat}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                Self::champ_monospace(ui, "historique_out", &texte, 3);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Op => {
                // opérateur : toujours un jeton séparé " op "
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Chiffre => {
                // chiffres, "_" et barre de fraction : collés
                self.entree.push_str(to_insert);
            }
        }

        self.focus_entree = true;
    }

    /// Passe la ligne par la session (commandes + pré-contrôles + noyau),
    /// puis dépose résultat/erreur/démarche dans l’état UI.
    fn eval_via_session(&mut self) {
        let ligne = self.entree.clone();

        match self.session.traiter(&ligne) {
            Reponse::Vide => self.set_erreur("Entrée vide"),
            Reponse::Aide(texte) => self.set_aide(texte),
            Reponse::AuRevoir => self.quitter = true,
            Reponse::Resultat { texte, demarche } => {
                let d_ui = Demarche {
                    jetons: demarche.jetons,
                    etapes: demarche.etapes.join("\n"),
                };
                self.set_resultat(texte, d_ui);
            }
            Reponse::Erreur(msg) => self.set_erreur(msg),
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Chiffre,
    Op,
}
