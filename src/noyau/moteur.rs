// src/noyau/moteur.rs
//
// Moteur : possède le tampon + l’affichage, aiguille les entrées.
//
// Règles:
// - Un seul propriétaire de l’état (pas de variable globale).
// - Les entrées sont appliquées dans l’ordre d’arrivée, une à la fois.
// - L’affichage n’est notifié qu’après une édition acceptée.

use tracing::{debug, trace};

use super::entree::{Action, Entree, Jeton};
use super::tampon::Tampon;

/// Puits d’affichage : reçoit une copie de l’écran après chaque mutation.
pub trait Affichage {
    /// `tampon` vaut "0" quand le tampon est vide; `memoire` est brute.
    fn affichage_change(&mut self, tampon: &str, memoire: &str);
}

#[derive(Debug)]
pub struct Calculatrice<A: Affichage> {
    tampon: Tampon,
    affichage: A,
}

impl<A: Affichage> Calculatrice<A> {
    /// Crée un moteur vide et pousse le premier rendu ("0", mémoire vide).
    pub fn new(affichage: A) -> Self {
        let mut c = Self {
            tampon: Tampon::new(),
            affichage,
        };
        c.notifier();
        c
    }

    #[cfg(test)]
    pub fn tampon(&self) -> &Tampon {
        &self.tampon
    }

    pub fn affichage(&self) -> &A {
        &self.affichage
    }

    /* ------------------------ Ingress typé ------------------------ */

    pub fn soumettre(&mut self, entree: Entree) {
        match entree {
            Entree::Jeton(j) => self.soumettre_jeton(j),
            Entree::Action(a) => self.soumettre_action(a),
        }
    }

    pub fn soumettre_jeton(&mut self, jeton: Jeton) {
        let accepte = match jeton {
            Jeton::Chiffre(d) => self.tampon.ajouter_chiffre(d),
            Jeton::Separateur => self.tampon.ajouter_separateur(),
            Jeton::Operateur(op) => self.tampon.ajouter_operateur(op),
            Jeton::DoubleZero => self.tampon.ajouter_double_zero(),
        };
        self.conclure(accepte, &jeton);
    }

    pub fn soumettre_action(&mut self, action: Action) {
        let accepte = match action {
            Action::Effacer => self.tampon.effacer(),
            Action::Retour => self.tampon.retour(),
            Action::Pourcent => self.tampon.pourcent(),
            Action::Egal => self.tampon.egal(),
        };
        self.conclure(accepte, &action);
    }

    /* ------------------------ Ingress texte ------------------------ */

    /// Jeton sous forme texte ("7", "00", ",", "×"...). Inconnu => ignoré.
    pub fn soumettre_texte_jeton(&mut self, jeton: &str) {
        match Jeton::lire(jeton) {
            Some(j) => self.soumettre_jeton(j),
            None => trace!(jeton, "jeton inconnu ignoré"),
        }
    }

    /// Action sous forme texte ("clear", "back", "percent", "equals"). Inconnue => ignorée.
    pub fn soumettre_texte_action(&mut self, action: &str) {
        match Action::lire(action) {
            Some(a) => self.soumettre_action(a),
            None => trace!(action, "action inconnue ignorée"),
        }
    }

    /* ------------------------ Interne ------------------------ */

    fn conclure(&mut self, accepte: bool, entree: &dyn std::fmt::Debug) {
        if accepte {
            debug!(?entree, tampon = self.tampon.texte(), "édition");
            self.notifier();
        } else {
            trace!(?entree, tampon = self.tampon.texte(), "édition refusée");
        }
    }

    fn notifier(&mut self) {
        self.affichage
            .affichage_change(self.tampon.affichage(), self.tampon.memoire());
    }
}
