use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::warn;

use super::scoring::ScoringError;
use super::service::{FootprintService, FootprintServiceError, ScoreRequest};

/// Router builder exposing the catalog and the scoring endpoint.
pub fn footprint_router(service: Arc<FootprintService>) -> Router {
    Router::new()
        .route("/api/v1/footprint/catalog", get(catalog_handler))
        .route("/api/v1/footprint/score", post(score_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler(State(service): State<Arc<FootprintService>>) -> Response {
    (StatusCode::OK, axum::Json(service.catalog())).into_response()
}

pub(crate) async fn score_handler(
    State(service): State<Arc<FootprintService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    match service.score(request) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(FootprintServiceError::Scoring(ScoringError::EmptyCatalog)) => {
            let payload = json!({
                "error": ScoringError::EmptyCatalog.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(error) => {
            warn!(%error, "rejected questionnaire answers");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{AnswerSet, QuestionCatalog, ScoringConfig};
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn service_with(catalog: QuestionCatalog) -> Arc<FootprintService> {
        Arc::new(FootprintService::new(
            Arc::new(catalog),
            ScoringConfig::default(),
        ))
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn score_request(body: Value) -> Request<Body> {
        Request::post("/api/v1/footprint/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("encode body")))
            .expect("request builds")
    }

    #[tokio::test]
    async fn catalog_route_lists_questions() {
        let router = footprint_router(service_with(QuestionCatalog::standard()));

        let response = router
            .oneshot(
                Request::get("/api/v1/footprint/catalog")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        let questions = payload["questions"].as_array().expect("question list");
        assert_eq!(questions.len(), 17);
        assert_eq!(questions[0]["category"], "food");
    }

    #[tokio::test]
    async fn score_route_returns_result_and_report() {
        let router = footprint_router(service_with(QuestionCatalog::standard()));
        let answers = QuestionCatalog::standard().minimum_answers();

        let response = router
            .oneshot(score_request(json!({ "answers": answers, "year": 2025 })))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["result"]["total_gha"], 0.9);
        assert_eq!(payload["result"]["overshoot_date"], "31 Dec");
        assert_eq!(payload["report"]["insights"]["level"], "sustainable");
        assert!(payload.get("advice_request").is_none());
    }

    #[tokio::test]
    async fn score_handler_rejects_undeclared_weight() {
        let service = service_with(QuestionCatalog::standard());
        let request = ScoreRequest {
            answers: AnswerSet::new().with("transport_mode", 0.7),
            year: Some(2025),
            profile: None,
            ..ScoreRequest::default()
        };

        let response = score_handler(State(service), axum::Json(request)).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = read_json_body(response).await;
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("transport_mode"));
    }

    #[tokio::test]
    async fn score_handler_reports_empty_catalog_as_server_error() {
        let empty = QuestionCatalog::new(Vec::new()).expect("empty catalog builds");
        let request = ScoreRequest::default();

        let response = score_handler(State(service_with(empty)), axum::Json(request)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
