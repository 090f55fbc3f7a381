use std::time::Duration;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::application::services::{
    CompletionSettings, DEFAULT_CHAT_MODEL, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_TOKENS,
    DEFAULT_PAGE_RANGE_THRESHOLD, DEFAULT_RATE_LIMIT_WAIT, DEFAULT_TEMPERATURE, RetryPolicy,
};
use crate::infrastructure::llm::GROQ_BASE_URL;
use crate::infrastructure::ocr::DEFAULT_TESSERACT_PATH;
use crate::infrastructure::text_processing::{
    ASSUMED_DPI, DEFAULT_FOOTER_INCHES, DEFAULT_HEADER_INCHES, DEFAULT_MAX_CHUNK_LENGTH,
    DEFAULT_RENDER_DPI,
};

use super::Environment;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub retry: RetrySettings,
    pub extraction: ExtractionSettings,
    pub chunking: ChunkingSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Built-in defaults, then `appsettings.{env}.toml`, then `APP__SECTION__KEY` variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7860,
            max_upload_mb: 50,
        }
    }
}

/// Fallback source for `llm.api_key`.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

impl LlmSettings {
    pub fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings {
            model: self.chat_model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: GROQ_BASE_URL.to_string(),
            api_key: std::env::var(API_KEY_VAR).unwrap_or_default(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub default_wait_secs: f64,
}

impl RetrySettings {
    /// Invalid wait values fall back to the built-in default.
    pub fn policy(&self) -> RetryPolicy {
        let default_wait =
            Duration::try_from_secs_f64(self.default_wait_secs).unwrap_or(DEFAULT_RATE_LIMIT_WAIT);
        RetryPolicy::new(self.max_attempts, default_wait)
    }
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            default_wait_secs: DEFAULT_RATE_LIMIT_WAIT.as_secs_f64(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    pub tesseract_path: String,
    pub render_dpi: f32,
    pub header_inches: f64,
    pub footer_inches: f64,
    pub crop_dpi: f64,
    pub page_range_threshold: u32,
    pub timeout_secs: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            tesseract_path: DEFAULT_TESSERACT_PATH.to_string(),
            render_dpi: DEFAULT_RENDER_DPI,
            header_inches: DEFAULT_HEADER_INCHES,
            footer_inches: DEFAULT_FOOTER_INCHES,
            crop_dpi: ASSUMED_DPI,
            page_range_threshold: DEFAULT_PAGE_RANGE_THRESHOLD,
            timeout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingSettings {
    pub max_chunk_length: usize,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            max_chunk_length: DEFAULT_MAX_CHUNK_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,docent=debug,tower_http=debug".to_string(),
            enable_json: false,
        }
    }
}
