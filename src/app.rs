// src/app.rs
//
// Calculatrice mixte — module App (racine)
// ----------------------------------------
// - Déclare les sous-modules (etat.rs + vue.rs)
// - Ré-exporte AppCalc
// - Fournit l’impl eframe::App (natif + web)

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée (comme bouton "C").
        // Enter/Backspace sont gérés dans vue.rs, quand le champ a le focus.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // "exit" saisi : fermeture de la fenêtre (sans effet sur le web).
        if self.quitter {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
