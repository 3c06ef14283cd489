//! Launch settings: TOML file, environment and flags merged into one `Settings`.
//!
//! Precedence is flags, then environment, then the file, then built-in defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::args::Args;

pub const DEFAULT_TITLE: &str = "Fraction Quiz";
pub const DEFAULT_LOG_FILTER: &str = "info,services=debug";
pub const DEFAULT_WIDTH: f64 = 1024.0;
pub const DEFAULT_HEIGHT: f64 = 768.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub window: WindowConfig,
    pub log: LogConfig,
    pub quiz: QuizConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub filter: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    pub hints: Option<bool>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl FileConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or is not valid TOML
    /// for this schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// # Errors
    ///
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Overrides read from `FRACTIONS_*` variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub config: Option<PathBuf>,
    pub log: Option<String>,
    pub log_format: Option<LogFormat>,
}

impl EnvOverrides {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            config: non_empty("FRACTIONS_CONFIG").map(PathBuf::from),
            log: non_empty("FRACTIONS_LOG"),
            log_format: non_empty("FRACTIONS_LOG_FORMAT").and_then(|raw| LogFormat::parse(&raw)),
        }
    }
}

/// Fully resolved launch settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub log_filter: String,
    pub log_format: LogFormat,
    pub hints_enabled: bool,
}

impl Settings {
    /// The config file named by the flag, else by the environment.
    #[must_use]
    pub fn config_path<'a>(args: &'a Args, env: &'a EnvOverrides) -> Option<&'a Path> {
        args.config.as_deref().or(env.config.as_deref())
    }

    #[must_use]
    pub fn resolve(args: &Args, env: &EnvOverrides, file: &FileConfig) -> Self {
        let size = |value: Option<f64>, default: f64| {
            value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default)
        };

        Self {
            title: args
                .title
                .clone()
                .or_else(|| file.window.title.clone())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            width: size(file.window.width, DEFAULT_WIDTH),
            height: size(file.window.height, DEFAULT_HEIGHT),
            log_filter: args
                .log
                .clone()
                .or_else(|| env.log.clone())
                .or_else(|| file.log.filter.clone())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_format: env.log_format.or(file.log.format).unwrap_or_default(),
            hints_enabled: !args.no_hints && file.quiz.hints.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_any_source() {
        let settings = Settings::resolve(
            &Args::default(),
            &EnvOverrides::default(),
            &FileConfig::default(),
        );
        assert_eq!(settings.title, DEFAULT_TITLE);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(settings.log_format, LogFormat::Pretty);
        assert!(settings.hints_enabled);
        assert!((settings.width - DEFAULT_WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_full_file() {
        let file = FileConfig::from_toml(
            r#"
            [window]
            title = "Fractions for 4B"
            width = 800.0
            height = 600.0

            [log]
            filter = "warn"
            format = "json"

            [quiz]
            hints = false
            "#,
        )
        .unwrap();
        let settings = Settings::resolve(&Args::default(), &EnvOverrides::default(), &file);
        assert_eq!(settings.title, "Fractions for 4B");
        assert!((settings.height - 600.0).abs() < f64::EPSILON);
        assert_eq!(settings.log_filter, "warn");
        assert_eq!(settings.log_format, LogFormat::Json);
        assert!(!settings.hints_enabled);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = FileConfig::from_toml("[quiz]\nhints = true\n").unwrap();
        assert_eq!(file.window, WindowConfig::default());
        assert_eq!(file.quiz.hints, Some(true));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml("[window]\ncolour = \"red\"\n").is_err());
    }

    #[test]
    fn flags_beat_env_beat_file() {
        let file = FileConfig::from_toml("[log]\nfilter = \"warn\"\nformat = \"pretty\"\n").unwrap();
        let env = EnvOverrides::from_lookup(|key| match key {
            "FRACTIONS_LOG" => Some("debug".to_string()),
            "FRACTIONS_LOG_FORMAT" => Some("JSON".to_string()),
            _ => None,
        });

        let from_env = Settings::resolve(&Args::default(), &env, &file);
        assert_eq!(from_env.log_filter, "debug");
        assert_eq!(from_env.log_format, LogFormat::Json);

        let args = Args {
            log: Some("trace".into()),
            ..Args::default()
        };
        assert_eq!(Settings::resolve(&args, &env, &file).log_filter, "trace");
    }

    #[test]
    fn no_hints_flag_wins_over_file() {
        let file = FileConfig::from_toml("[quiz]\nhints = true\n").unwrap();
        let args = Args {
            no_hints: true,
            ..Args::default()
        };
        assert!(!Settings::resolve(&args, &EnvOverrides::default(), &file).hints_enabled);
    }

    #[test]
    fn config_path_prefers_flag() {
        let env = EnvOverrides::from_lookup(|key| {
            (key == "FRACTIONS_CONFIG").then(|| "/etc/fractions.toml".to_string())
        });
        assert_eq!(
            Settings::config_path(&Args::default(), &env),
            Some(Path::new("/etc/fractions.toml"))
        );
        let args = Args {
            config: Some("local.toml".into()),
            ..Args::default()
        };
        assert_eq!(
            Settings::config_path(&args, &env),
            Some(Path::new("local.toml"))
        );
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let env = EnvOverrides::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(env, EnvOverrides::default());
    }

    #[test]
    fn non_positive_window_size_falls_back() {
        let file = FileConfig::from_toml("[window]\nwidth = -5.0\n").unwrap();
        let settings = Settings::resolve(&Args::default(), &EnvOverrides::default(), &file);
        assert!((settings.width - DEFAULT_WIDTH).abs() < f64::EPSILON);
    }
}
