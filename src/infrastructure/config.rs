use crate::domain::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Gemini,
    ChatCompletions,
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "chat_completions" | "chat-completions" | "openai" => Ok(Provider::ChatCompletions),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

impl Provider {
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-2.0-flash",
            Provider::ChatCompletions => "gpt-4o-mini",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Provider::ChatCompletions => "https://api.openai.com/v1",
        }
    }

    /// Provider-specific environment variable holding the API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::ChatCompletions => "OPENAI_API_KEY",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_provider")]
    pub provider: Provider,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub http_proxy: Option<String>,
    #[serde(default = "default_target")]
    pub default_target: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Logging {
    /// Filter directive for the configured level, case-insensitive.
    /// Unrecognised levels log warnings and errors only.
    pub fn filter_directive(&self) -> &'static str {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "error" => "error",
            _ => "warn",
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: None,
            api_key: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
            http_proxy: None,
            default_target: default_target(),
            theme: default_theme(),
            enable_emoji: true,
            logging: Logging::default(),
        }
    }
}

// Defaults
fn default_provider() -> Provider {
    Provider::Gemini
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_target() -> String {
    "French".to_string()
}
fn default_theme() -> String {
    "temp".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

impl Config {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay environment variables on top of the file settings.
    ///
    /// `LINGO_API_KEY` beats the provider-specific key variable, which beats
    /// the key from the file.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(provider) = lookup("LINGO_PROVIDER") {
            self.provider = provider.parse()?;
        }
        let key_env = self.provider.api_key_env();
        if let Some(key) = lookup("LINGO_API_KEY").or_else(|| lookup(key_env)) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup("LINGO_MODEL") {
            self.model = Some(model);
        }
        if let Some(url) = lookup("LINGO_BASE_URL") {
            self.base_url = Some(url);
        }
        Ok(())
    }

    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.provider.default_model())
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .map(|u| u.trim_end_matches('/'))
            .unwrap_or_else(|| self.provider.default_base_url())
    }

    /// Bound for one remote call. Zero would fail every call, so it falls
    /// back to the default.
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            warn!(
                "timeout_secs = 0 is not usable, falling back to {}s",
                default_timeout_secs()
            );
            return Duration::from_secs(default_timeout_secs());
        }
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lingo").join("config.toml"))
}

/// Load the config file (if any), then apply environment overrides.
pub fn load_config() -> Result<Config, ConfigError> {
    let mut config = load_config_file(get_config_path())?;
    config.apply_env(|name| std::env::var(name).ok())?;
    Ok(config)
}

pub fn load_config_file(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match Config::parse(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

/// Write a sample config file. Returns `false` if one already exists.
pub fn write_config_sample(path: &std::path::Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let sample = Config {
        model: Some(Provider::Gemini.default_model().to_string()),
        ..Config::default()
    };
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| ConfigError::Other(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)?;
    Ok(true)
}

pub fn generate_config_sample() -> Result<(), ConfigError> {
    let path = get_config_path()
        .ok_or_else(|| ConfigError::Other("Cannot determine config directory".to_string()))?;

    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }
    Ok(())
}
