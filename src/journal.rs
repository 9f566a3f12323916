//! Journalisation (tracing).
//!
//! Niveau via `RUST_LOG`, sinon `niveau` par défaut.
//! La démarche du mode verbeux sort sur la cible `demarche`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installe l’abonné global. Un second appel est sans effet (pas de panique).
pub fn init(niveau: &str) {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(niveau));

    let installe = tracing_subscriber::registry()
        .with(filtre)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    if installe.is_ok() {
        tracing::debug!(niveau, "journal initialisé");
    }
}
