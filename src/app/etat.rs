//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur Kalk, garder le miroir de l’écran (puits d’affichage)
//! et la pulsation visuelle de la dernière touche cliquée.
//!
//! Contrats :
//! - Aucune règle d’édition ici (tout passe par le moteur).
//! - La pulsation est purement cosmétique : elle ne touche jamais au tampon.

use crate::noyau::entree::depuis_touche;
use crate::noyau::{Affichage, Calculatrice};

/// Durée du retour visuel “touche pressée” (secondes).
pub const DUREE_PULSATION: f64 = 0.12;

/// Miroir de l’écran, alimenté par le moteur.
#[derive(Clone, Default, Debug)]
pub struct Ecran {
    pub tampon: String,
    pub memoire: String,
}

impl Affichage for Ecran {
    fn affichage_change(&mut self, tampon: &str, memoire: &str) {
        self.tampon.clear();
        self.tampon.push_str(tampon);
        self.memoire.clear();
        self.memoire.push_str(memoire);
    }
}

/// Ce qu’envoie une touche du pavé : une valeur (jeton) ou une action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Valeur(&'static str),
    Action(&'static str),
}

/// Touche du pavé : étiquette affichée + commande envoyée.
#[derive(Clone, Copy, Debug)]
pub struct Touche {
    pub etiquette: &'static str,
    pub commande: Commande,
}

#[derive(Clone, Copy, Debug)]
pub struct Pulsation {
    pub etiquette: &'static str,
    pub depuis: f64,
}

#[derive(Debug)]
pub struct AppCalc {
    pub calc: Calculatrice<Ecran>,
    pub pulsation: Option<Pulsation>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(Ecran::default()),
            pulsation: None,
        }
    }
}

impl AppCalc {
    pub fn ecran(&self) -> &Ecran {
        self.calc.affichage()
    }

    /// Clic sur une touche du pavé (`maintenant` : horloge UI en secondes).
    pub fn presser(&mut self, touche: &Touche, maintenant: f64) {
        self.pulsation = Some(Pulsation {
            etiquette: touche.etiquette,
            depuis: maintenant,
        });

        match touche.commande {
            Commande::Valeur(v) => self.calc.soumettre_texte_jeton(v),
            Commande::Action(a) => self.calc.soumettre_texte_action(a),
        }
    }

    /// Touche clavier ("Enter", "Backspace", "7", "*"...). Touche non liée => ignorée.
    pub fn soumettre_touche(&mut self, touche: &str) {
        if let Some(e) = depuis_touche(touche) {
            self.calc.soumettre(e);
        }
    }

    pub fn est_presse(&self, etiquette: &str, maintenant: f64) -> bool {
        self.pulsation
            .is_some_and(|p| p.etiquette == etiquette && maintenant - p.depuis < DUREE_PULSATION)
    }

    pub fn pulsation_active(&self, maintenant: f64) -> bool {
        self.pulsation
            .is_some_and(|p| maintenant - p.depuis < DUREE_PULSATION)
    }
}
