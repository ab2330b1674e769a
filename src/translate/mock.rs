use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::interface::{TranslateError, TranslateInterface};

/// Returns the same translation for every call and counts invocations
pub struct FixedTranslator {
    reply: String,
    calls: AtomicUsize,
}

impl FixedTranslator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslateInterface for FixedTranslator {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// Fails every call with an unsupported-language error for the target
pub struct FailingTranslator;

#[async_trait]
impl TranslateInterface for FailingTranslator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn translate(&self, _text: &str, _source: &str, target: &str) -> Result<String, TranslateError> {
        Err(TranslateError::UnsupportedLanguage(target.to_string()))
    }
}
