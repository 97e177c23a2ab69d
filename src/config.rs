//! Configuration management for Smart ATS

use crate::error::{Result, SmartAtsError};
use crate::translate::LanguageCode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub generation: GenerationConfig,
    pub translation: TranslationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub endpoint: String,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    pub endpoint: String,
    /// Language the templates are authored in and the backend is invoked in.
    pub canonical_language: LanguageCode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Fixed filename for the downloadable raw result.
    pub download_filename: String,
    pub color_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig {
                model: "gemini-pro".to_string(),
                endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                max_output_tokens: 2048,
            },
            translation: TranslationConfig {
                endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
                canonical_language: LanguageCode::En,
            },
            output: OutputConfig {
                download_filename: "result.txt".to_string(),
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    SmartAtsError::Configuration(format!(
                        "Cannot read config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                toml::from_str(&content).map_err(|e| {
                    SmartAtsError::Configuration(format!("Failed to parse config: {}", e))
                })
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    let content = std::fs::read_to_string(&config_path)?;
                    toml::from_str(&content).map_err(|e| {
                        SmartAtsError::Configuration(format!("Failed to parse config: {}", e))
                    })
                } else {
                    let config = Self::default();
                    config.save()?;
                    Ok(config)
                }
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SmartAtsError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("smart-ats")
            .join("config.toml")
    }

    /// The generation backend secret. Read once at startup; a missing key
    /// fails fast instead of surfacing on the first API call.
    pub fn api_key() -> Result<String> {
        std::env::var(API_KEY_ENV).map_err(|_| {
            SmartAtsError::Configuration(format!(
                "required environment variable '{}' is not set",
                API_KEY_ENV
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.generation.model, "gemini-pro");
        assert_eq!(config.translation.canonical_language, LanguageCode::En);
        assert_eq!(config.output.download_filename, "result.txt");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.generation.model, config.generation.model);
        assert_eq!(
            parsed.translation.canonical_language,
            config.translation.canonical_language
        );
    }
}
