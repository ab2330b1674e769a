use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::state::AppState;
use crate::translate::{TranslateError, TranslationRequest, TranslationResponse};

/// Errors surfaced to HTTP clients as `{"error": ...}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Translation failed: {0}")]
    Translation(#[from] TranslateError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Translation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// POST /translate
///
/// The body is read raw so that a missing, oversized or malformed payload is
/// reported as a 400 with an `error` field regardless of content type.
pub async fn translate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let payload = body
        .map_err(|rejection| ApiError::BadRequest(format!("Invalid request body: {}", rejection)))
        .and_then(|body| parse_payload(&body))
        .map_err(|e| {
            warn!("Rejected translate request: {}", e);
            e
        })?;
    debug!("Received data: {}", payload);

    let request = validate_request(&payload).map_err(|e| {
        warn!("Rejected translate request: {}", e);
        e
    })?;

    info!(
        "Translating: {} from {} to {}",
        request.text, request.source_lang, request.target_lang
    );

    let translated_text = state
        .translator
        .translate(&request.text, &request.source_lang, &request.target_lang)
        .await
        .map_err(|e| {
            error!("Translation error: {}", e);
            ApiError::from(e)
        })?;

    info!("Translation result: {}", translated_text);

    Ok(Json(TranslationResponse {
        original_text: request.text,
        translated_text,
        source_lang: request.source_lang,
        target_lang: request.target_lang,
    }))
}

fn parse_payload(body: &[u8]) -> Result<Value, ApiError> {
    let no_data = || ApiError::BadRequest("No data provided".to_string());

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(no_data());
    }
    let payload: Value = serde_json::from_slice(body).map_err(|_| no_data())?;

    if is_falsy(&payload) {
        return Err(no_data());
    }
    if !payload.is_object() {
        return Err(ApiError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }
    Ok(payload)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// `text` is trimmed; language codes are taken verbatim
fn validate_request(payload: &Value) -> Result<TranslationRequest, ApiError> {
    let text = str_field(payload, "text").trim();
    let source_lang = str_field(payload, "source_lang");
    let target_lang = str_field(payload, "target_lang");

    if text.is_empty() || source_lang.is_empty() || target_lang.is_empty() {
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    }

    Ok(TranslationRequest {
        text: text.to_string(),
        source_lang: source_lang.to_string(),
        target_lang: target_lang.to_string(),
    })
}

/// Missing and non-string fields read as empty
fn str_field<'a>(payload: &'a Value, name: &str) -> &'a str {
    payload.get(name).and_then(Value::as_str).unwrap_or("")
}
