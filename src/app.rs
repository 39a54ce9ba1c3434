// src/app.rs
//
// Calculatrice Kalk — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier physique est lu ici (événements globaux de la frame),
//   puis traduit en noms de touches façon navigateur pour le noyau.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches = ctx.input(|i| noms_touches(&i.events));
        for t in &touches {
            self.soumettre_touche(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Traduit les événements egui en noms de touches ("Enter", "Backspace", "7", "*"...).
///
/// - Texte tapé : un nom par caractère (le collage arrive en un seul événement).
/// - Touches spéciales : seulement à l’appui (pas au relâchement).
fn noms_touches(events: &[egui::Event]) -> Vec<String> {
    let mut out = Vec::new();

    for e in events {
        match e {
            egui::Event::Text(t) => out.extend(t.chars().map(String::from)),
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                let nom = match key {
                    egui::Key::Enter => "Enter",
                    egui::Key::Backspace => "Backspace",
                    egui::Key::Escape => "Escape",
                    _ => continue,
                };
                out.push(nom.to_string());
            }
            _ => {}
        }
    }

    out
}
