use std::path::Path;

use crate::error::ConfigError;

/// Named strength presets, each mapping to a search depth in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Engine tuning knobs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub easy_depth: usize,
    pub medium_depth: usize,
    pub hard_depth: usize,
    /// Seed for the engine's tie-break draws; unset draws from the OS.
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            difficulty: Difficulty::Medium,
            easy_depth: 3,
            medium_depth: 5,
            hard_depth: 7,
            seed: None,
        }
    }
}

impl AiConfig {
    /// Search depth for the active difficulty preset.
    pub fn search_depth(&self) -> usize {
        match self.difficulty {
            Difficulty::Easy => self.easy_depth,
            Difficulty::Medium => self.medium_depth,
            Difficulty::Hard => self.hard_depth,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.easy_depth == 0 {
            return Err(ConfigError::Validation("ai.easy_depth must be > 0".into()));
        }
        if self.ai.medium_depth == 0 {
            return Err(ConfigError::Validation(
                "ai.medium_depth must be > 0".into(),
            ));
        }
        if self.ai.hard_depth == 0 {
            return Err(ConfigError::Validation("ai.hard_depth must be > 0".into()));
        }
        if self.ai.easy_depth > self.ai.medium_depth || self.ai.medium_depth > self.ai.hard_depth {
            return Err(ConfigError::Validation(
                "ai depth presets must be ordered easy <= medium <= hard".into(),
            ));
        }
        Ok(())
    }
}
