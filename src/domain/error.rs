use std::fmt;
use thiserror::Error;

/// Problems that keep the service from reaching the `Ready` state.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key is missing or empty")]
    MissingApiKey,

    #[error("Model identifier is missing or empty")]
    MissingModel,

    #[error("Service is not configured")]
    NotConfigured,

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

/// Failure reported by a remote text-generation provider.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("authentication rejected: {0}")]
    Unauthenticated(String),

    #[error("service unreachable: {0}")]
    Unavailable(String),

    #[error("provider returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for GenerateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenerateError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            GenerateError::Remote {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            // connect, timeout, body and redirect failures
            GenerateError::Unavailable(e.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    ConfigError,
    Unauthenticated,
    Unavailable,
    RemoteError,
    EmptyResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::ConfigError => "configuration error",
            ErrorKind::Unauthenticated => "unauthenticated",
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::RemoteError => "remote error",
            ErrorKind::EmptyResponse => "empty response",
        };
        f.write_str(name)
    }
}

/// Error returned by `translate` and `detect_language`.
#[derive(Error, Debug, Clone)]
#[error("{kind}: {message}")]
pub struct TranslationError {
    pub kind: ErrorKind,
    pub message: String,
    unconfigured: bool,
}

impl TranslationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            unconfigured: false,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// An unconfigured service reports itself as unavailable.
    pub fn not_configured() -> Self {
        Self {
            unconfigured: true,
            ..Self::new(ErrorKind::Unavailable, ConfigError::NotConfigured.to_string())
        }
    }

    /// True when the call failed because the service was never configured.
    pub fn is_config_error(&self) -> bool {
        self.unconfigured || self.kind == ErrorKind::ConfigError
    }
}

impl From<GenerateError> for TranslationError {
    fn from(e: GenerateError) -> Self {
        let kind = match &e {
            GenerateError::Unauthenticated(_) => ErrorKind::Unauthenticated,
            GenerateError::Unavailable(_) => ErrorKind::Unavailable,
            GenerateError::Remote { .. } | GenerateError::Malformed(_) => ErrorKind::RemoteError,
        };
        Self::new(kind, e.to_string())
    }
}
