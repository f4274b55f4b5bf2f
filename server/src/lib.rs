use anyhow::{Context, Result};
use axum::{extract::{Query, State}, routing::get, Json, Router};
use searchcore::{ScoringMethod, SearchIndex, SearchOutcome, Searcher};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const NO_RESULTS_MESSAGE: &str = "No web page contains the query word.";
pub const NO_QUERY_MESSAGE: &str = "No search query supplied.";

/// Static assets directory, relative to the workspace root the server is started from.
pub const DEFAULT_WEB_DIR: &str = "web";

/// File holding the corpus path when `--corpus` is not given.
pub const CONFIG_FILE: &str = "config.txt";

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct PageHit {
    pub url: String,
    pub title: String,
}

#[derive(Clone)]
pub struct AppState {
    pub searcher: Arc<Searcher>,
}

/// Uses the explicit path if present, otherwise the first line of `config.txt`.
pub fn resolve_corpus_path(explicit: Option<String>, config_file: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }
    let contents = std::fs::read_to_string(config_file)
        .with_context(|| format!("no --corpus given and {} is unreadable", config_file.display()))?;
    let path = contents.lines().next().unwrap_or("").trim();
    anyhow::ensure!(!path.is_empty(), "{} does not name a corpus file", config_file.display());
    Ok(PathBuf::from(path))
}

/// Reads corpus lines. An unreadable file is served as an empty corpus.
pub fn load_corpus_lines(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => text.lines().map(str::to_string).collect(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "corpus unreadable, starting with an empty index");
            Vec::new()
        }
    }
}

/// Ingests the corpus to completion and returns a searcher ready to be shared across tasks.
pub fn load_searcher(corpus: &Path, method: ScoringMethod) -> Searcher {
    let lines = load_corpus_lines(corpus);
    let index = SearchIndex::from_lines(&lines);
    tracing::info!(corpus = %corpus.display(), num_docs = index.num_docs(), scoring = %method, "index ready");
    Searcher::with_method(Arc::new(index), method)
}

pub fn build_app(searcher: Searcher, web_dir: impl AsRef<Path>) -> Router {
    let app_state = AppState { searcher: Arc::new(searcher) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .fallback_service(ServeDir::new(web_dir.as_ref()))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<serde_json::Value> {
    match state.searcher.search(&params.q) {
        SearchOutcome::NoQuery => Json(json!([{ "message": NO_QUERY_MESSAGE }])),
        SearchOutcome::Hits(hits) if hits.is_empty() => Json(json!([{ "message": NO_RESULTS_MESSAGE }])),
        SearchOutcome::Hits(hits) => {
            let pages: Vec<PageHit> = hits
                .into_iter()
                .map(|h| PageHit { url: h.url, title: h.title })
                .collect();
            Json(json!(pages))
        }
    }
}
