use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::page::render_home;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/translate", post(handlers::translate))
        .route("/api/health", get(health_check))
        .route("/api/languages", get(get_languages))
}

/// Full application: routes, middleware and shared state
pub fn build_app(state: AppState) -> Router {
    let mut router = create_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    if let Some(limit) = state.config.system_config.max_concurrent_requests {
        router = router.layer(GlobalConcurrencyLimitLayer::new(limit));
    }

    router.with_state(state)
}

async fn home(State(state): State<AppState>) -> Html<String> {
    let translate = &state.config.translate_config;
    Html(render_home(
        &state.languages,
        &translate.default_source_lang,
        &translate.default_target_lang,
    ))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.translator.name(),
        "supported_languages": state.languages.len()
    }))
}

async fn get_languages(State(state): State<AppState>) -> Json<Value> {
    let languages: Vec<_> = state.languages.iter().collect();
    Json(json!({
        "languages": languages,
        "default_source": state.config.translate_config.default_source_lang,
        "default_target": state.config.translate_config.default_target_lang
    }))
}
