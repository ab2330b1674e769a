pub mod interface;
pub mod google;
pub mod factory;
#[cfg(test)]
pub mod mock;

pub use interface::{TranslateError, TranslateInterface, TranslationRequest, TranslationResponse};
pub use factory::TranslateFactory;
