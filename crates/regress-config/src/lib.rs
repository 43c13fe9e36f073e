//! Configuration for the regression tool dashboard.
//!
//! A small TOML file (splash behaviour, log destination and verbosity)
//! layered under `REGRESS_TUI_*` environment overrides. The binary applies
//! its own CLI flags on top of what this crate resolves.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Log levels accepted by `log.level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("{} already exists; remove it first", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Startup banner.
    #[serde(default)]
    pub splash: SplashConfig,

    /// File logging.
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SplashConfig {
    /// Show the banner before the dashboard.
    #[serde(default = "default_splash_enabled")]
    pub enabled: bool,

    /// How long the banner stays up, in humantime notation ("2s", "1500ms").
    #[serde(default = "default_splash_dwell")]
    pub dwell: String,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: default_splash_enabled(),
            dwell: default_splash_dwell(),
        }
    }
}

impl SplashConfig {
    /// Parsed banner dwell time.
    pub fn dwell(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(&self.dwell).map_err(|e| ConfigError::Validation {
            field: "splash.dwell".into(),
            reason: format!("'{}': {e}", self.dwell),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log file path. The TUI owns stdout, so logs only ever go here.
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Base level when neither `RUST_LOG` nor `-v` is given.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_splash_enabled() -> bool {
    true
}
fn default_splash_dwell() -> String {
    "2s".into()
}
fn default_log_file() -> PathBuf {
    PathBuf::from("/tmp/regress-tui.log")
}
fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Check the fields that serde cannot: durations and level names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.splash.dwell()?;

        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation {
                field: "log.level".into(),
                reason: format!(
                    "expected one of {}, got '{}'",
                    LOG_LEVELS.join(", "),
                    self.log.level
                ),
            });
        }

        Ok(())
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("gov", "nrel", "regress-tui").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("regress-tui");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load config from `path` + environment. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("REGRESS_TUI_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parent dirs.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Write the built-in defaults to `path`. Environment overrides are not
/// applied, and an existing file is never replaced.
pub fn save_default_config_to(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    save_config_to(&Config::default(), path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.splash.dwell().unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[splash]\nenabled = false\ndwell = \"750ms\"\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert!(!cfg.splash.enabled);
        assert_eq!(cfg.splash.dwell().unwrap(), Duration::from_millis(750));
        assert_eq!(cfg.log.level, "debug");
        assert_eq!(cfg.log.file, default_log_file());
    }

    #[test]
    fn bad_dwell_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[splash]\ndwell = \"soon\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation { ref field, .. } if field == "splash.dwell"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let cfg = Config {
            log: LogConfig {
                level: "loud".into(),
                ..LogConfig::default()
            },
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("log.level"));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config {
            splash: SplashConfig {
                enabled: false,
                dwell: "3s".into(),
            },
            log: LogConfig {
                file: dir.path().join("tui.log"),
                level: "info".into(),
            },
        };

        save_config_to(&cfg, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), cfg);
    }

    #[test]
    fn default_config_file_holds_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        save_default_config_to(&path).unwrap();

        let written: Config = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, Config::default());
    }

    #[test]
    fn default_config_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

        let err = save_default_config_to(&path).unwrap_err();

        assert!(matches!(err, ConfigError::AlreadyExists(ref p) if *p == path));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[log]\nlevel = \"debug\"\n"
        );
    }
}
