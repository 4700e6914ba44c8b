//! src/service/routes.rs
//!
//! Routes REST + DTO (glue fine autour du noyau).
//!
//! Contrats :
//! - le noyau ne connaît ni HTTP ni JSON : la traduction ErreurCalc -> 400
//!   se fait ici, et seulement ici
//! - l'ardoise est déposée AVANT l'évaluation : même une expression invalide
//!   reste consultable sur /calc/current
//! - les deux endpoints de calcul passent par le même noyau (pas de logique
//!   arithmétique dupliquée côté transport)

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::noyau::{calcul_simple, eval_expression, ErreurCalc};

use super::etat::Ardoise;

/* ------------------------ DTO ------------------------ */

#[derive(Debug, Clone, Deserialize)]
pub struct OperationSimple {
    pub a: f64,
    pub op: String,
    pub b: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequeteExpression {
    pub expression: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReponseResultat {
    pub result: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReponseEvaluation {
    pub expression: String,
    pub result: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReponseExpression {
    /// `null` quand l'ardoise est vide.
    pub expression: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReponseStatut {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
struct ReponseErreur {
    detail: String,
}

/* ------------------------ Erreur transport ------------------------ */

/// Erreurs côté HTTP : celles du noyau, plus le cas "rien à évaluer".
/// Toutes sortent en 400 avec un corps `{"detail": …}`.
pub enum ErreurHttp {
    Calc(ErreurCalc),
    ArdoiseVide,
}

impl From<ErreurCalc> for ErreurHttp {
    fn from(e: ErreurCalc) -> Self {
        ErreurHttp::Calc(e)
    }
}

impl IntoResponse for ErreurHttp {
    fn into_response(self) -> Response {
        let detail = match self {
            ErreurHttp::Calc(e) => e.to_string(),
            ErreurHttp::ArdoiseVide => "aucune expression à évaluer".to_string(),
        };

        tracing::warn!(%detail, "requête refusée");

        (StatusCode::BAD_REQUEST, Json(ReponseErreur { detail })).into_response()
    }
}

/* ------------------------ Handlers ------------------------ */

/// POST /calc/simple — `a <op> b`, op ∈ {+, -, *, /}.
async fn poster_simple(
    Json(op): Json<OperationSimple>,
) -> Result<Json<ReponseResultat>, ErreurHttp> {
    let result = calcul_simple(op.a, &op.op, op.b)?;
    Ok(Json(ReponseResultat { result }))
}

/// POST /calc/expression — dépose puis évalue une expression complète.
async fn poster_expression(
    State(ardoise): State<Arc<Ardoise>>,
    Json(req): Json<RequeteExpression>,
) -> Result<Json<ReponseEvaluation>, ErreurHttp> {
    tracing::debug!(expression = %req.expression, "expression soumise");

    // dépôt AVANT évaluation : l'ardoise reflète la dernière soumission,
    // valide ou non
    ardoise.deposer(&req.expression).await;

    let result = eval_expression(&req.expression)?;
    Ok(Json(ReponseEvaluation {
        expression: req.expression,
        result,
    }))
}

/// GET /calc/current — lecture de l'ardoise, sans effet de bord.
async fn lire_courante(State(ardoise): State<Arc<Ardoise>>) -> Json<ReponseExpression> {
    Json(ReponseExpression {
        expression: ardoise.lire().await,
    })
}

/// POST /calc/evaluate — évalue l'expression de l'ardoise.
async fn evaluer_courante(
    State(ardoise): State<Arc<Ardoise>>,
) -> Result<Json<ReponseEvaluation>, ErreurHttp> {
    let expression = ardoise.lire().await.ok_or(ErreurHttp::ArdoiseVide)?;
    let result = eval_expression(&expression)?;
    Ok(Json(ReponseEvaluation { expression, result }))
}

/// DELETE /calc/clear — efface l'ardoise.
async fn effacer(State(ardoise): State<Arc<Ardoise>>) -> Json<ReponseStatut> {
    ardoise.effacer().await;
    Json(ReponseStatut {
        status: "expression effacée".to_string(),
    })
}

/* ------------------------ Routeur ------------------------ */

pub fn routeur(ardoise: Arc<Ardoise>) -> Router {
    Router::new()
        .route("/calc/simple", post(poster_simple))
        .route("/calc/expression", post(poster_expression))
        .route("/calc/current", get(lire_courante))
        .route("/calc/evaluate", post(evaluer_courante))
        .route("/calc/clear", delete(effacer))
        .with_state(ardoise)
}
