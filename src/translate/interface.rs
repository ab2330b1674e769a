use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validated input for a single translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Successful `/translate` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Failures raised at the provider boundary
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("'{0}' is not a supported language code")]
    UnsupportedLanguage(String),

    #[error("text is {len} characters long, the provider accepts at most {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("translation quota exceeded, try again later")]
    QuotaExceeded,

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("request to provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("no translation was found")]
    NotFound,
}

/// External translation capability
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Provider name, reported by the health endpoint
    fn name(&self) -> &str;

    /// Translate `text` from `source_lang` to `target_lang`
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError>;
}
