use footprint_quiz::error::AppError;
use footprint_quiz::quiz::QuestionCatalog;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the CSV catalog when a path is given, otherwise the built-in one.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Arc<QuestionCatalog>, AppError> {
    let catalog = match path {
        Some(path) => {
            let catalog = QuestionCatalog::from_path(path)?;
            info!(path = %path.display(), questions = catalog.len(), "loaded question catalog");
            catalog
        }
        None => QuestionCatalog::standard(),
    };

    Ok(Arc::new(catalog))
}

/// Parses `question_id=weight` pairs given on the command line.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, f64), String> {
    let (question_id, weight) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected question_id=weight, got '{raw}'"))?;
    let question_id = question_id.trim();
    if question_id.is_empty() {
        return Err(format!("missing question id in '{raw}'"));
    }

    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse weight in '{raw}' ({err})"))?;

    Ok((question_id.to_string(), weight))
}
