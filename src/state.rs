use std::sync::Arc;

use crate::config::Config;
use crate::languages::LanguageTable;
use crate::translate::{TranslateFactory, TranslateInterface};

/// Read-only state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub languages: Arc<LanguageTable>,
    pub translator: Arc<dyn TranslateInterface>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = TranslateFactory::create_translator(&config.translate_config)?;
        Ok(Self::with_translator(config, translator))
    }

    pub fn with_translator(config: Config, translator: Arc<dyn TranslateInterface>) -> Self {
        Self {
            config: Arc::new(config),
            languages: Arc::new(LanguageTable::builtin()),
            translator,
        }
    }
}
