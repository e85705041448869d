//! Translate text by sending one instruction prompt to a hosted language
//! model and returning its answer.
//!
//! The core is [`application::TranslationService`]; providers live under
//! [`infrastructure::network`] behind the [`domain::traits::TextGenerator`]
//! trait.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::{ServiceState, TranslationService};
pub use domain::error::{ConfigError, ErrorKind, GenerateError, TranslationError};
pub use domain::model::{
    DetectionRequest, DetectionResult, TranslationRequest, TranslationResult,
};
pub use domain::traits::TextGenerator;
