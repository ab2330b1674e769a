use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use super::google::GoogleTranslator;
use super::interface::TranslateInterface;
use crate::config::TranslateConfig;

/// Factory for creating translation providers
pub struct TranslateFactory;

impl TranslateFactory {
    /// Create the provider named by `translate_config.translate_provider`
    pub fn create_translator(config: &TranslateConfig) -> Result<Arc<dyn TranslateInterface>> {
        info!("Initializing translator: {}", config.translate_provider);

        match config.translate_provider.as_str() {
            "google" | "google_translate" => Ok(Arc::new(GoogleTranslator::new(&config.google)?)),
            other => Err(anyhow::anyhow!("Unsupported translate provider: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_google_by_default() {
        let translator = TranslateFactory::create_translator(&TranslateConfig::default()).unwrap();
        assert_eq!(translator.name(), "google");
    }

    #[test]
    fn rejects_unknown_provider() {
        let config = TranslateConfig {
            translate_provider: "deepl".to_string(),
            ..TranslateConfig::default()
        };
        let err = TranslateFactory::create_translator(&config).err().unwrap();
        assert!(err.to_string().contains("deepl"));
    }

    #[test]
    fn rejects_bad_base_url() {
        let mut config = TranslateConfig::default();
        config.google.base_url = "not a url".to_string();
        assert!(TranslateFactory::create_translator(&config).is_err());
    }
}
