//! src/noyau/tampon.rs
//!
//! Éditeur de tampon : règles d’édition du texte affiché + mémoire (historique).
//!
//! Contrats :
//! - Aucune opération ne panique, quelle que soit la séquence d’entrées.
//! - Chaque opération rend `true` si l’état a changé (=> l’appelant notifie
//!   l’affichage), `false` si l’édition est refusée ou sans effet.
//! - Invariants du tampon : un seul '-' unaire en tête, jamais deux opérateurs
//!   collés, au plus une virgule par segment.

use super::entree::Operateur;
use super::eval::evaluer;
use super::format::{affichage_vers_nombre, nombre_vers_affichage};
use super::{MARQUEUR_ERREUR, MARQUEUR_MEMOIRE, SEPARATEUR};

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Tampon {
    texte: String,
    memoire: String,
}

impl Tampon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texte brut du tampon (vide possible).
    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn memoire(&self) -> &str {
        &self.memoire
    }

    /// Texte à l’écran : "0" quand le tampon est vide.
    pub fn affichage(&self) -> &str {
        if self.texte.is_empty() {
            "0"
        } else {
            &self.texte
        }
    }

    fn est_erreur(&self) -> bool {
        self.texte == MARQUEUR_ERREUR
    }

    /// Le marqueur d’erreur ne se prolonge pas : toute saisie repart de zéro.
    /// Rend `true` si le marqueur a été effacé.
    fn oublier_erreur(&mut self) -> bool {
        if self.est_erreur() {
            self.texte.clear();
            return true;
        }
        false
    }

    /// Segment courant : tout ce qui suit le dernier opérateur.
    fn segment(&self) -> &str {
        match self.texte.char_indices().rev().find(|(_, c)| Operateur::est_glyphe(*c)) {
            Some((i, c)) => &self.texte[i + c.len_utf8()..],
            None => &self.texte,
        }
    }

    /* ------------------------ Jetons ------------------------ */

    pub fn ajouter_chiffre(&mut self, d: char) -> bool {
        if !d.is_ascii_digit() {
            return false;
        }
        self.oublier_erreur();

        // pas de "000..." sans virgule
        if d == '0' && !self.texte.is_empty() && self.texte.chars().all(|c| c == '0') {
            return false;
        }

        if self.texte == "0" {
            self.texte.clear();
        }
        self.texte.push(d);
        true
    }

    pub fn ajouter_double_zero(&mut self) -> bool {
        self.oublier_erreur();

        if self.texte.is_empty() {
            self.texte.push('0');
        } else {
            self.texte.push_str("00");
        }
        true
    }

    pub fn ajouter_operateur(&mut self, op: Operateur) -> bool {
        let efface = self.oublier_erreur();

        // tampon vide : seul le signe négatif est permis
        if self.texte.is_empty() && op != Operateur::Moins {
            return efface;
        }

        // deux opérateurs de suite : le dernier gagne
        if self.texte.ends_with(Operateur::est_glyphe) {
            self.texte.pop();
        }
        self.texte.push(op.glyphe());
        true
    }

    pub fn ajouter_separateur(&mut self) -> bool {
        self.oublier_erreur();

        let segment = self.segment();
        if segment.contains(SEPARATEUR) {
            return false;
        }

        let vide = segment.is_empty();
        if vide {
            self.texte.push('0');
        }
        self.texte.push(SEPARATEUR);
        true
    }

    /* ------------------------ Actions ------------------------ */

    pub fn retour(&mut self) -> bool {
        if self.est_erreur() {
            self.texte.clear();
            return true;
        }
        self.texte.pop().is_some()
    }

    pub fn effacer(&mut self) -> bool {
        self.texte.clear();
        self.memoire.clear();
        true
    }

    /// Pourcent littéral : le dernier nombre est divisé par 100, sur place.
    /// "200+10" -> "200+0,1" (aucun pourcentage relatif à l’opérande précédent).
    pub fn pourcent(&mut self) -> bool {
        let debut = self
            .texte
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit() || *c == SEPARATEUR)
            .last()
            .map(|(i, _)| i);

        let Some(debut) = debut else {
            return false;
        };

        let morceau = &self.texte[debut..];
        if !morceau.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }
        // trop de chiffres pour un f64 : jamais de "inf" dans le tampon
        let Some(n) = affichage_vers_nombre(morceau).filter(|n| n.is_finite()) else {
            return false;
        };

        let rendu = nombre_vers_affichage(n / 100.0);
        self.texte.truncate(debut);
        self.texte.push_str(&rendu);
        true
    }

    /// "=" : archive le tampon dans la mémoire, puis le remplace par le résultat.
    pub fn egal(&mut self) -> bool {
        if self.texte.is_empty() {
            return false;
        }

        let resultat = evaluer(&self.texte);
        self.memoire = format!("{}{MARQUEUR_MEMOIRE}", self.texte);
        self.texte = resultat;
        true
    }
}
