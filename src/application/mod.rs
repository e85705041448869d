pub mod prompt;
pub mod service;
pub mod translate;

pub use service::{ServiceState, TranslationService};
