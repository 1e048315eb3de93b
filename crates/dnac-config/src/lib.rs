//! Configuration for dnac-pnp.
//!
//! TOML file + environment loading, password resolution (env, keyring,
//! config), and translation to `dnac_core::ControllerConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use dnac_core::{ControllerConfig, Credentials, TlsVerification};

/// Environment variable consulted first for the controller password.
pub const PASSWORD_ENV: &str = "DNAC_PASSWORD";

/// Prefix for environment overrides; `__` separates nesting levels.
pub const ENV_PREFIX: &str = "DNAC_PNP_";

const KEYRING_SERVICE: &str = "dnac-pnp";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration key '{key}'")]
    MissingKey { key: &'static str },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Controller connection.
    #[serde(default)]
    pub dnac: DnacSection,

    /// Settings shared by all workflows.
    #[serde(default)]
    pub common: CommonSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DnacSection {
    /// Controller address: host, `host:port`, or a full base URL.
    pub host: Option<String>,

    pub username: Option<String>,

    /// Plaintext password. Prefer the keyring or `DNAC_PASSWORD`.
    pub password: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Accept self-signed certificates.
    #[serde(default = "default_insecure")]
    pub insecure: bool,

    /// Custom CA certificate, used when `insecure` is off.
    pub ca_cert: Option<PathBuf>,
}

impl Default for DnacSection {
    fn default() -> Self {
        Self {
            host: None,
            username: None,
            password: None,
            timeout: default_timeout(),
            insecure: default_insecure(),
            ca_cert: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_insecure() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CommonSection {
    /// Working directory holding the device catalog.
    pub base_directory: Option<PathBuf>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "dnac-pnp", "dnac-pnp").map_or_else(
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
    p.push("dnac-pnp");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load config from `path` (or the default location) merged with
/// `DNAC_PNP_*` environment overrides. A missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Copy of `cfg` safe to print.
pub fn redacted(cfg: &Config) -> Config {
    let mut out = cfg.clone();
    if out.dnac.password.is_some() {
        out.dnac.password = Some("****".into());
    }
    out
}

/// Render config as TOML, with the password masked.
pub fn to_toml_redacted(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(&redacted(cfg))?)
}

// ── Credential resolution ───────────────────────────────────────────

fn required<'a>(value: Option<&'a String>, key: &'static str) -> Result<&'a str, ConfigError> {
    value
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingKey { key })
}

/// Keyring entry holding the password for `host`.
pub fn keyring_entry(host: &str) -> Result<keyring::Entry, ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{host}/password"))
        .map_err(|e| ConfigError::Keyring(e.to_string()))
}

/// Resolve the controller password.
///
/// Order: `DNAC_PASSWORD` env var, system keyring, plaintext in config.
pub fn resolve_password(section: &DnacSection) -> Result<SecretString, ConfigError> {
    // 1. Env var
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        return Ok(SecretString::from(pw));
    }

    // 2. Keyring
    let host = required(section.host.as_ref(), "dnac.host")?;
    if let Ok(entry) = keyring_entry(host) {
        if let Ok(pw) = entry.get_password() {
            return Ok(SecretString::from(pw));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = section.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::MissingKey {
        key: "dnac.password",
    })
}

/// Host, username and password from the `[dnac]` section.
pub fn credentials(cfg: &Config) -> Result<Credentials, ConfigError> {
    let host = required(cfg.dnac.host.as_ref(), "dnac.host")?;
    let username = required(cfg.dnac.username.as_ref(), "dnac.username")?;
    let password = resolve_password(&cfg.dnac)?;

    Ok(Credentials {
        host: host.to_owned(),
        username: username.to_owned(),
        password,
    })
}

/// Build a `ControllerConfig` from the loaded file.
pub fn controller_config(cfg: &Config) -> Result<ControllerConfig, ConfigError> {
    let credentials = credentials(cfg)?;

    let tls = if cfg.dnac.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = cfg.dnac.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    if cfg.dnac.timeout == 0 {
        return Err(ConfigError::Validation {
            field: "dnac.timeout".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    Ok(ControllerConfig {
        credentials,
        tls,
        timeout: Duration::from_secs(cfg.dnac.timeout),
    })
}

/// The `common.base_directory` setting.
pub fn base_directory(cfg: &Config) -> Result<PathBuf, ConfigError> {
    cfg.common
        .base_directory
        .clone()
        .ok_or(ConfigError::MissingKey {
            key: "common.base_directory",
        })
}
