// src/service.rs
//
// Calculatrice web — module service (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + routes.rs)
// - Ré-exporter ce dont main.rs a besoin (Ardoise + routeur)
//
// Important:
// - Toute la traduction noyau <-> HTTP vit dans routes.rs.
// - L'ardoise est de l'état explicite, passé au routeur, jamais un global.

pub mod etat;
pub mod routes;

// Ré-exports pratiques : `use crate::service::{routeur, Ardoise};`
pub use etat::Ardoise;
pub use routes::routeur;
