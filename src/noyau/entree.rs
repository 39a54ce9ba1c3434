// src/noyau/entree.rs
//
// Vocabulaire d’entrée : ce que l’ingress (pavé, clavier) peut envoyer au moteur.
// Tout est fermé (enum) : l’aiguillage se fait par match exhaustif.

use super::SEPARATEUR;

/// Opérateurs binaires visibles dans le tampon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    #[cfg(test)]
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Glyphe affiché dans le tampon.
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    pub fn depuis_glyphe(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' => Some(Operateur::Fois),
            '÷' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Vrai si `c` est un glyphe d’opérateur du tampon.
    pub fn est_glyphe(c: char) -> bool {
        Self::depuis_glyphe(c).is_some()
    }
}

/// Jeton : unité atomique ajoutée au tampon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Chiffre 0..=9 (stocké comme caractère ASCII).
    Chiffre(char),
    Separateur,
    Operateur(Operateur),
    DoubleZero,
}

impl Jeton {
    /// Lecture depuis la forme texte (valeur d’un bouton du pavé).
    /// Jeton inconnu => None (ignoré par l’appelant).
    pub fn lire(s: &str) -> Option<Self> {
        if s == "00" {
            return Some(Jeton::DoubleZero);
        }

        let mut it = s.chars();
        let c = it.next()?;
        if it.next().is_some() {
            return None;
        }

        match c {
            '0'..='9' => Some(Jeton::Chiffre(c)),
            c if c == SEPARATEUR => Some(Jeton::Separateur),
            c => Operateur::depuis_glyphe(c).map(Jeton::Operateur),
        }
    }
}

/// Action : commande qui agit sur la structure du tampon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Effacer,
    Retour,
    Pourcent,
    Egal,
}

impl Action {
    /// Lecture depuis le nom d’action ("clear", "back", "percent", "equals").
    pub fn lire(s: &str) -> Option<Self> {
        match s {
            "clear" => Some(Action::Effacer),
            "back" => Some(Action::Retour),
            "percent" => Some(Action::Pourcent),
            "equals" => Some(Action::Egal),
            _ => None,
        }
    }
}

/// Entrée générique (ce que produit une touche).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entree {
    Jeton(Jeton),
    Action(Action),
}

/// Liaison clavier -> entrée logique.
///
/// `touche` : nom de touche façon navigateur ("Enter", "Backspace", "Escape")
/// ou un caractère tapé ("7", "*", "c"...).
pub fn depuis_touche(touche: &str) -> Option<Entree> {
    match touche {
        "Enter" => return Some(Entree::Action(Action::Egal)),
        "Backspace" => return Some(Entree::Action(Action::Retour)),
        "Escape" => return Some(Entree::Action(Action::Effacer)),
        _ => {}
    }

    let mut it = touche.chars();
    let c = it.next()?;
    if it.next().is_some() {
        return None;
    }

    let e = match c {
        '0'..='9' => Entree::Jeton(Jeton::Chiffre(c)),
        '.' | ',' => Entree::Jeton(Jeton::Separateur),
        '+' => Entree::Jeton(Jeton::Operateur(Operateur::Plus)),
        '-' => Entree::Jeton(Jeton::Operateur(Operateur::Moins)),
        '*' => Entree::Jeton(Jeton::Operateur(Operateur::Fois)),
        '/' => Entree::Jeton(Jeton::Operateur(Operateur::Divise)),
        '%' => Entree::Action(Action::Pourcent),
        'c' | 'C' => Entree::Action(Action::Effacer),
        _ => return None,
    };
    Some(e)
}
