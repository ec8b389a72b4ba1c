//! Configuration file management for plansight.
//!
//! Provides a TOML-based config file at `~/.config/plansight/config.toml` and
//! a resolution chain: CLI flag > env var > config file > default.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use plansight_core::{Dialect, Domain};

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub parse: ParseSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ParseSection {
    /// Dialect tag; unknown tags mean classical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    /// Fixed domain; omit to auto-detect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputSection {
    /// "json" or "summary".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Pretty-print JSON output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

// -----------------------------------------------------------------------
// Output format
// -----------------------------------------------------------------------

/// How parse results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Summary,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Summary => f.write_str("summary"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "summary" => Ok(Self::Summary),
            other => Err(OutputFormatParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`OutputFormat`] string.
#[derive(Debug, Clone)]
pub struct OutputFormatParseError(pub String);

impl fmt::Display for OutputFormatParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid output format: {:?} (expected json or summary)", self.0)
    }
}

impl std::error::Error for OutputFormatParseError {}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the plansight config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/plansight` or
/// `~/.config/plansight`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("plansight");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("plansight")
}

/// Return the path to the plansight config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns `Ok(None)` if it does not exist.
pub fn load_config() -> Result<Option<ConfigFile>> {
    let path = config_path();
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(Some(config))
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

/// The config written by `plansight init`.
pub fn default_config_file() -> ConfigFile {
    ConfigFile {
        parse: ParseSection {
            dialect: Some(Dialect::default().to_string()),
            domain: None,
        },
        output: OutputSection {
            format: Some(OutputFormat::default().to_string()),
            pretty: Some(true),
        },
    }
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Settings given on the command line, each overriding everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub dialect: Option<Dialect>,
    pub domain: Option<Domain>,
    pub format: Option<OutputFormat>,
    pub compact: bool,
}

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlansightConfig {
    pub dialect: Dialect,
    pub domain: Option<Domain>,
    pub format: OutputFormat,
    pub pretty: bool,
}

impl PlansightConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Dialect: `--dialect` > `PLANSIGHT_DIALECT` > `parse.dialect` > classical.
    ///   Unknown env/file tags fall back to classical.
    /// - Domain: `--domain` > `PLANSIGHT_DOMAIN` > `parse.domain` > auto-detect.
    /// - Format: `--format` > `PLANSIGHT_FORMAT` > `output.format` > json.
    /// - Pretty: `--compact` disables; otherwise `output.pretty` > true.
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        let file_config = load_config()?.unwrap_or_default();

        let dialect = match cli.dialect {
            Some(d) => d,
            None => {
                let tag = std::env::var("PLANSIGHT_DIALECT")
                    .ok()
                    .or(file_config.parse.dialect);
                lossy_dialect(tag.as_deref())
            }
        };

        let domain = match cli.domain {
            Some(d) => Some(d),
            None => match std::env::var("PLANSIGHT_DOMAIN").ok().or(file_config.parse.domain) {
                Some(tag) => Some(
                    tag.parse::<Domain>()
                        .with_context(|| format!("invalid configured domain {tag:?}"))?,
                ),
                None => None,
            },
        };

        let format = match cli.format {
            Some(f) => f,
            None => match std::env::var("PLANSIGHT_FORMAT").ok().or(file_config.output.format) {
                Some(tag) => tag
                    .parse::<OutputFormat>()
                    .with_context(|| format!("invalid configured output format {tag:?}"))?,
                None => OutputFormat::default(),
            },
        };

        let pretty = !cli.compact && file_config.output.pretty.unwrap_or(true);

        Ok(Self {
            dialect,
            domain,
            format,
            pretty,
        })
    }
}

fn lossy_dialect(tag: Option<&str>) -> Dialect {
    if let Some(t) = tag {
        if t.parse::<Dialect>().is_err() {
            warn!(tag = t, "unknown dialect in configuration, using classical");
        }
    }
    Dialect::from_tag_lossy(tag)
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
