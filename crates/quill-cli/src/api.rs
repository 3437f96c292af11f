use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use quill_analyze::{slug, SeoAnalyzer};
use quill_core::{Document, SiteConfig};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub struct ApiState {
    pub site: SiteConfig,
}

pub fn api_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/score", post(score_handler))
        .route("/api/slug-suggestions", post(slug_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "quill-api"
    }))
}

/// Full analysis for the editor UI: score, per-analyzer detail, and the
/// issue checklist in one envelope.
async fn analyze_handler(
    State(state): State<Arc<ApiState>>,
    Json(doc): Json<Document>,
) -> Json<serde_json::Value> {
    let analysis = SeoAnalyzer::new(&state.site, &doc).analyze();
    info!(slug = %doc.slug, score = analysis.score, "analyze request");
    let seo_issues = analysis.report.clone();
    Json(serde_json::json!({
        "success": true,
        "analysis": analysis,
        "seo_issues": seo_issues,
    }))
}

/// Score only, for save hooks that persist the integer.
async fn score_handler(
    State(state): State<Arc<ApiState>>,
    Json(doc): Json<Document>,
) -> Json<serde_json::Value> {
    let analysis = SeoAnalyzer::new(&state.site, &doc).analyze();
    Json(serde_json::json!({
        "success": true,
        "score": analysis.score,
    }))
}

#[derive(Deserialize)]
struct SlugSuggestionBody {
    title: String,
    #[serde(default)]
    existing: Vec<String>,
}

async fn slug_handler(Json(body): Json<SlugSuggestionBody>) -> Json<serde_json::Value> {
    let suggestions = slug::slug_suggestions(&body.title, &body.existing);
    Json(serde_json::json!({
        "success": true,
        "suggestions": suggestions,
    }))
}

pub async fn run_api(
    bind: &str,
    port: u16,
    site: SiteConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(ApiState { site });
    let router = api_router(state);

    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
