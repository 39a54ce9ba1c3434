// src/journal.rs
//
// Journalisation (natif seulement).
// - Filtre via RUST_LOG (ex: RUST_LOG=calculatrice_kalk=debug), sinon NIVEAU_DEFAUT.
// - Sortie texte sur stderr, sans couleurs si la sortie n’est pas un terminal.
// - En wasm32 aucun abonné n’est installé : les macros `tracing` ne coûtent rien.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Niveau par défaut quand RUST_LOG est absent ou invalide.
const NIVEAU_DEFAUT: &str = "info";

pub fn initialiser() {
    let filtre =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(NIVEAU_DEFAUT));

    let res = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();

    // déjà initialisé (tests, double appel) : on garde l’abonné existant
    if let Err(e) = res {
        eprintln!("journal non initialisé: {e}");
    }
}
