// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : mémoire (petite ligne) au-dessus du tampon (gros chiffres)
// - Tactile : gros boutons, pulsation courte sur la touche cliquée
//
// Note :
// - Le clavier physique est lu dans app.rs (événements globaux), pas ici.

use std::time::Duration;

use eframe::egui;

use super::etat::{AppCalc, Commande, Touche, DUREE_PULSATION};

const fn val(etiquette: &'static str, valeur: &'static str) -> Touche {
    Touche {
        etiquette,
        commande: Commande::Valeur(valeur),
    }
}

const fn act(etiquette: &'static str, action: &'static str) -> Touche {
    Touche {
        etiquette,
        commande: Commande::Action(action),
    }
}

/// Pavé 4 colonnes (étiquette, valeur ou action envoyée).
const PAVE: [[Touche; 4]; 5] = [
    [act("C", "clear"), act("DEL", "back"), act("%", "percent"), val("÷", "÷")],
    [val("7", "7"), val("8", "8"), val("9", "9"), val("×", "×")],
    [val("4", "4"), val("5", "5"), val("6", "6"), val("-", "-")],
    [val("1", "1"), val("2", "2"), val("3", "3"), val("+", "+")],
    [val("00", "00"), val("0", "0"), val(",", ","), act("=", "equals")],
];

const TAILLE_BOUTON: [f32; 2] = [72.0, 52.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);

        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        self.ui_pave(ui, maintenant);

        // Redessiner une fois la pulsation terminée
        if self.pulsation_active(maintenant) {
            ui.ctx()
                .request_repaint_after(Duration::from_secs_f64(DUREE_PULSATION));
        }
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let ecran = self.ecran();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne mémoire (hauteur réservée même vide)
                    ui.label(
                        egui::RichText::new(format!("{} ", ecran.memoire))
                            .monospace()
                            .size(16.0)
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(&ecran.tampon)
                            .monospace()
                            .size(40.0)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_kalk")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in &PAVE {
                    for touche in rangee {
                        self.bouton(ui, touche, maintenant);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &Touche, maintenant: f64) {
        let mut b = egui::Button::new(egui::RichText::new(touche.etiquette).size(22.0));
        if self.est_presse(touche.etiquette, maintenant) {
            b = b.fill(ui.visuals().selection.bg_fill);
        }

        if ui.add_sized(TAILLE_BOUTON, b).clicked() {
            self.presser(touche, maintenant);
        }
    }
}
