// src/main.rs
//
// Calculatrice web — point d'entrée
// ---------------------------------
// But:
// - Initialiser la journalisation (RUST_LOG, défaut "info")
// - Construire l'ardoise (état partagé) + le routeur REST
// - Servir sur CALC_ADRESSE (défaut 127.0.0.1:8000)
//
// IMPORTANT (structure projet):
// - Le calcul vit dans src/noyau/ (pur, sans transport)
// - La glue HTTP vit dans src/service/ (DTO, routes, ardoise)
// - Ici: point d'entrée seulement

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod noyau;
mod service;

use service::{routeur, Ardoise};

/// Adresse d'écoute par défaut (surchageable via CALC_ADRESSE).
const ADRESSE_DEFAUT: &str = "127.0.0.1:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let adresse =
        std::env::var("CALC_ADRESSE").unwrap_or_else(|_| ADRESSE_DEFAUT.to_string());

    // ardoise vide au démarrage
    let ardoise = Arc::new(Ardoise::default());
    let app = routeur(ardoise);

    let listener = tokio::net::TcpListener::bind(&adresse).await?;
    tracing::info!(%adresse, "calculatrice web à l'écoute");

    axum::serve(listener, app).await?;

    Ok(())
}
