use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::complexity::ComplexityWeights;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            backtrace: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many word-frequency entries a corpus report carries.
    #[serde(default = "default_top_words")]
    pub top_words: usize,
    /// How many bigram entries a corpus report carries.
    #[serde(default = "default_top_bigrams")]
    pub top_bigrams: usize,
    /// Complexity-model tuning constants.
    #[serde(default)]
    pub complexity: ComplexityWeights,
}

fn default_top_words() -> usize {
    20
}

fn default_top_bigrams() -> usize {
    15
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: default_top_words(),
            top_bigrams: default_top_bigrams(),
            complexity: ComplexityWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_max_entries() -> usize {
    256
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_cache_max_entries(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub cache: CacheSettings,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(crate::PromptMirrorError::Io)?;

        let config: AppConfig =
            toml::from_str(&content).map_err(crate::PromptMirrorError::TomlParsing)?;

        Ok(config)
    }

    /// Load configuration from the default config file path, falling back to
    /// built-in defaults when no file exists.
    pub fn load() -> crate::Result<Self> {
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            Self::from_file("config.example.toml")
        } else {
            Ok(Self::default())
        }
    }

    /// Get the configured log level
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}
