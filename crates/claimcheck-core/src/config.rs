use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::ClaimcheckError;
use crate::verifier::VerifierSettings;

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const CONFIG_PATH_ENV: &str = "CLAIMCHECK_CONFIG";

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub verifier: VerifierConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Helper to load configuration with guard rails.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a provided path or discoverable defaults.
    ///
    /// Resolution order:
    /// 1. Explicit `path` argument.
    /// 2. `CLAIMCHECK_CONFIG` environment variable.
    /// 3. `config.toml` in the current working directory.
    pub fn load(path: Option<PathBuf>) -> Result<Config, ClaimcheckError> {
        Self::read(resolve_path(path))
    }

    /// Like [`ConfigLoader::load`], but falls back to built-in defaults when
    /// no configuration file exists and none was explicitly requested.
    pub fn load_or_default(path: Option<PathBuf>) -> Result<Config, ClaimcheckError> {
        let explicit = path.is_some() || env::var(CONFIG_PATH_ENV).is_ok();
        let candidate = resolve_path(path);
        if !explicit && !candidate.exists() {
            return Ok(Config::default());
        }
        Self::read(candidate)
    }

    fn read(candidate: PathBuf) -> Result<Config, ClaimcheckError> {
        let raw = fs::read_to_string(&candidate)
            .map_err(|err| ClaimcheckError::config_io(candidate.clone(), err))?;
        let config: Config = toml::from_str(&raw)
            .map_err(|err| ClaimcheckError::InvalidConfiguration(err.to_string()))?;

        // Surface invalid thresholds at load time rather than first use.
        config.verifier.to_settings()?;
        Ok(config)
    }
}

fn resolve_path(path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = path {
        return path;
    }

    if let Ok(from_env) = env::var(CONFIG_PATH_ENV) {
        if !from_env.trim().is_empty() {
            return PathBuf::from(from_env);
        }
    }

    Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifierConfig {
    #[serde(default = "VerifierConfig::default_match_threshold")]
    pub match_threshold: f64,
    #[serde(default = "VerifierConfig::default_length_floor")]
    pub length_floor: usize,
    #[serde(default = "VerifierConfig::default_verified_min_matches")]
    pub verified_min_matches: usize,
    /// Stop words appended to the built-in set.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

impl VerifierConfig {
    const fn default_match_threshold() -> f64 {
        0.6
    }

    const fn default_length_floor() -> usize {
        2
    }

    const fn default_verified_min_matches() -> usize {
        2
    }

    /// Build validated verifier settings from this configuration section.
    pub fn to_settings(&self) -> Result<VerifierSettings, ClaimcheckError> {
        let mut settings = VerifierSettings {
            match_threshold: self.match_threshold,
            length_floor: self.length_floor,
            verified_min_matches: self.verified_min_matches,
            ..VerifierSettings::default()
        };
        settings
            .stop_words
            .extend(self.extra_stop_words.iter().map(|word| word.to_lowercase()));
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            match_threshold: Self::default_match_threshold(),
            length_floor: Self::default_length_floor(),
            verified_min_matches: Self::default_verified_min_matches(),
            extra_stop_words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}
