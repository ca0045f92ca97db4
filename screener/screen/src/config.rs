//! `screen.toml` discovery and parsing

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use screen_model::ModelPaths;
use screen_schema::{Domain, Mode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "screen.toml";
pub const CONFIG_ENV: &str = "SCREEN_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("'{}' already exists", .0.display())]
    AlreadyExists(PathBuf),
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings for one `screen` run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    pub default_mode: Mode,
    pub output: OutputFormat,
    pub models: ModelPaths,
}

impl ScreenConfig {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads `path`; relative model paths are taken relative to its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let mut config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(dir) = path.parent() {
            config.models.rebase(dir);
        }
        Ok(config)
    }

    /// Applies `SCREEN_*_MODEL` overrides read through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for domain in Domain::ALL {
            let var = model_env_var(domain);
            if let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) {
                log::debug!("{var} overrides the {domain} model path");
                self.models.set(domain, PathBuf::from(value));
            }
        }
    }
}

/// Environment variable that overrides a screen's artifact path.
pub fn model_env_var(domain: Domain) -> &'static str {
    match domain {
        Domain::Diabetes => "SCREEN_DIABETES_MODEL",
        Domain::HeartDisease => "SCREEN_HEART_MODEL",
        Domain::Parkinsons => "SCREEN_PARKINSONS_MODEL",
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Resolves the configuration in order: explicit path, `$SCREEN_CONFIG`,
/// `screen.toml` in `cwd`, built-in defaults. An explicit or env-named file
/// must exist.
pub fn discover(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    cwd: &Path,
) -> Result<(ScreenConfig, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        log::debug!("using config from --config {}", path.display());
        return Ok((ScreenConfig::load(path)?, ConfigSource::File(path.to_path_buf())));
    }
    if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        log::debug!("using config from ${CONFIG_ENV} {}", path.display());
        return Ok((ScreenConfig::load(&path)?, ConfigSource::File(path)));
    }
    let local = cwd.join(CONFIG_FILE);
    if local.is_file() {
        log::debug!("using config {}", local.display());
        return Ok((ScreenConfig::load(&local)?, ConfigSource::File(local)));
    }
    log::debug!("no {CONFIG_FILE} found, using defaults");
    let mut config = ScreenConfig::default();
    config.models.rebase(cwd);
    Ok((config, ConfigSource::Defaults))
}

/// Commented starter `screen.toml`.
pub fn template() -> String {
    let defaults = ModelPaths::default();
    let mut out = String::new();
    out.push_str("# Risk screener settings\n\n");
    out.push_str("# Mode a screen opens in: normal | advanced\n");
    out.push_str("default_mode = \"normal\"\n\n");
    out.push_str("# Result format for `screen check`: text | json\n");
    out.push_str("output = \"text\"\n\n");
    out.push_str("# Model artifacts, relative to this file\n");
    out.push_str("[models]\n");
    for domain in Domain::ALL {
        out.push_str(&format!(
            "{} = \"{}\"\n",
            domain.slug(),
            defaults.get(domain).display()
        ));
    }
    out
}

/// Writes the template to `path`, refusing to overwrite unless `force`.
pub fn write_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    fs::write(path, template()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
