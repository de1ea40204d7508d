use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::catalog::PromptCatalog;
use super::domain::EssaySubmission;
use super::model::LanguageModel;
use super::service::EssayAnalysisService;
use crate::error::AppError;

pub const ANALYSIS_SOURCE_HEADER: &str = "x-analysis-source";

/// Router builder exposing essay analysis and the practice prompt catalog.
pub fn analysis_router<M>(service: Arc<EssayAnalysisService<M>>) -> Router
where
    M: LanguageModel + 'static,
{
    Router::new()
        .route("/api/analyze-essay", post(analyze_handler::<M>))
        .route("/api/prompts", get(prompts_handler))
        .route("/api/prompts/:prompt_id", get(prompt_handler))
        .with_state(service)
}

pub(crate) async fn analyze_handler<M>(
    State(service): State<Arc<EssayAnalysisService<M>>>,
    payload: Result<axum::Json<EssaySubmission>, JsonRejection>,
) -> Response
where
    M: LanguageModel + 'static,
{
    let submission = match payload {
        Ok(axum::Json(submission)) => submission,
        Err(rejection) => {
            tracing::info!(error = %rejection.body_text(), "malformed essay submission");
            return AppError::Input(rejection.body_text()).into_response();
        }
    };

    match service.analyze(&submission).await {
        Ok(analyzed) => {
            let source = HeaderValue::from_static(analyzed.source.label());
            (
                StatusCode::OK,
                [(HeaderName::from_static(ANALYSIS_SOURCE_HEADER), source)],
                axum::Json(analyzed.result),
            )
                .into_response()
        }
        Err(err) => {
            tracing::info!(error = %err, "essay submission rejected");
            AppError::from(err).into_response()
        }
    }
}

pub(crate) async fn prompts_handler() -> Response {
    let catalog = PromptCatalog::builtin();
    (StatusCode::OK, axum::Json(catalog.all())).into_response()
}

pub(crate) async fn prompt_handler(Path(prompt_id): Path<String>) -> Response {
    let prompt = prompt_id
        .parse::<u32>()
        .ok()
        .and_then(|id| PromptCatalog::builtin().get(id));

    match prompt {
        Some(prompt) => (StatusCode::OK, axum::Json(prompt)).into_response(),
        None => {
            let payload = json!({
                "error": format!("sample prompt {prompt_id} not found"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
