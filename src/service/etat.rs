//! src/service/etat.rs
//!
//! État partagé du service : l'« ardoise ».
//!
//! Une seule case process-wide pour l'expression courante, injectée dans les
//! handlers (pas de global ambiant). Cycle de vie :
//! - vide au démarrage
//! - écrasée à chaque dépôt
//! - effacée sur demande
//! - lecture sans effet de bord
//!
//! Aucune évaluation ici (pas de noyau, pas de parsing).

use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct Ardoise {
    courante: RwLock<Option<String>>,
}

impl Ardoise {
    /// Dépose une expression (écrase la précédente, même si elle est invalide :
    /// l'ardoise mémorise ce qui a été soumis, pas ce qui a été calculé).
    pub async fn deposer(&self, expression: impl Into<String>) {
        *self.courante.write().await = Some(expression.into());
    }

    pub async fn lire(&self) -> Option<String> {
        self.courante.read().await.clone()
    }

    pub async fn effacer(&self) {
        *self.courante.write().await = None;
    }
}
