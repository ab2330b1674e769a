use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::interface::{TranslateError, TranslateInterface};
use crate::config::GoogleTranslateConfig;

/// Longest input the provider accepts in one call
pub const MAX_CHARS: usize = 5000;

/// Codes understood by Google Translate
const GOOGLE_LANGUAGE_CODES: &[&str] = &[
    "af", "sq", "am", "ar", "hy", "as", "ay", "az", "bm", "eu", "be", "bn", "bho", "bs", "bg",
    "ca", "ceb", "ny", "zh", "zh-CN", "zh-TW", "co", "hr", "cs", "da", "dv", "doi", "nl", "en",
    "eo", "et", "ee", "tl", "fi", "fr", "fy", "gl", "ka", "de", "el", "gn", "gu", "ht", "ha",
    "haw", "iw", "he", "hi", "hmn", "hu", "is", "ig", "ilo", "id", "ga", "it", "ja", "jw", "jv",
    "kn", "kk", "km", "rw", "ko", "kri", "ku", "ckb", "ky", "lo", "la", "lv", "ln", "lt", "lg",
    "lb", "mk", "mai", "mg", "ms", "ml", "mt", "mi", "mr", "mni-Mtei", "lus", "mn", "my", "ne",
    "no", "or", "om", "ps", "fa", "pl", "pt", "pa", "qu", "ro", "ru", "sm", "sa", "gd", "nso",
    "sr", "st", "sn", "sd", "si", "sk", "sl", "so", "es", "su", "sw", "sv", "tg", "ta", "tt",
    "te", "th", "ti", "ts", "tr", "tk", "ak", "uk", "ur", "ug", "uz", "vi", "cy", "xh", "yi",
    "yo", "zu",
];

/// Google Translate client using the public `gtx` endpoint.
///
/// Holds one pooled HTTP client shared by all requests.
pub struct GoogleTranslator {
    client: Client,
    endpoint: Url,
}

impl GoogleTranslator {
    pub fn new(config: &GoogleTranslateConfig) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        info!("Initialized GoogleTranslator: endpoint={}", endpoint);
        Ok(Self { client, endpoint })
    }

    fn check_language(code: &str, allow_auto: bool) -> Result<(), TranslateError> {
        if (allow_auto && code == "auto") || GOOGLE_LANGUAGE_CODES.contains(&code) {
            Ok(())
        } else {
            Err(TranslateError::UnsupportedLanguage(code.to_string()))
        }
    }

    fn request_url(&self, text: &str, source_lang: &str, target_lang: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", source_lang)
            .append_pair("tl", target_lang)
            .append_pair("dt", "t")
            .append_pair("q", text);
        url
    }
}

/// Join the translated segments found at `[0][*][0]`
fn parse_segments(body: &Value) -> Result<String, TranslateError> {
    let segments = body.get(0).and_then(|v| v.as_array()).ok_or_else(|| {
        TranslateError::InvalidResponse("missing segment array at index 0".to_string())
    })?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translation.is_empty() {
        Err(TranslateError::NotFound)
    } else {
        Ok(translation)
    }
}

#[async_trait]
impl TranslateInterface for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        Self::check_language(source_lang, true)?;
        Self::check_language(target_lang, false)?;

        let len = text.chars().count();
        if len > MAX_CHARS {
            return Err(TranslateError::TextTooLong { len, max: MAX_CHARS });
        }

        if source_lang == target_lang {
            debug!("Source and target are both {}, returning input", source_lang);
            return Ok(text.to_string());
        }

        let response = self
            .client
            .get(self.request_url(text, source_lang, target_lang))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Google Translate rate limit hit");
            return Err(TranslateError::QuotaExceeded);
        }
        if !status.is_success() {
            warn!("Google Translate returned {}", status);
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::InvalidResponse(e.to_string()))?;
        parse_segments(&body)
    }
}
