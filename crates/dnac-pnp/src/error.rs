//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with help text
//! and a process exit code.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use dnac_config::ConfigError;
use dnac_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const MALFORMED_INPUT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const CONFIG: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(dnac_pnp::connection_failed),
        help(
            "{reason}\n\
             Check dnac.host and that the controller is reachable."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(dnac_pnp::timeout),
        help("Increase the timeout with --timeout or dnac.timeout.")
    )]
    Timeout,

    #[error("Controller request failed: {message}")]
    #[diagnostic(code(dnac_pnp::transport))]
    Transport { message: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(dnac_pnp::auth_failed),
        help(
            "Verify dnac.username and the password.\n\
             Store a new one with: dnac-pnp config set-password"
        )
    )]
    AuthFailed { message: String },

    // ── Input files ──────────────────────────────────────────────────
    #[error("Malformed site configuration: {message}")]
    #[diagnostic(
        code(dnac_pnp::malformed_sites),
        help("A sites file needs a top-level `sites:` list of single-key mappings.")
    )]
    MalformedSites { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(dnac_pnp::invalid_site),
        help(
            "Every site needs type, name and parent. Buildings and floors also need\n\
             area_name, area_parent, latitude, longitude and address."
        )
    )]
    InvalidSite { message: String },

    #[error("Malformed device file: {message}")]
    #[diagnostic(
        code(dnac_pnp::malformed_devices),
        help("A devices file needs a top-level `devices:` list of serial_number, pid and name.")
    )]
    MalformedDevices { message: String },

    #[error("Cannot read {}", .path.display())]
    #[diagnostic(code(dnac_pnp::io))]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Usage ────────────────────────────────────────────────────────
    #[error("Unknown import mode '{mode}'")]
    #[diagnostic(
        code(dnac_pnp::unknown_import_mode),
        help(
            "Use one of:\n  \
             dnac-pnp import single --serial <SN> --pid <PID> --name <NAME>\n  \
             dnac-pnp import bulk --devices-file <PATH>"
        )
    )]
    UnknownImportMode { mode: String },

    #[error("{message}")]
    #[diagnostic(code(dnac_pnp::usage))]
    Usage { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Missing configuration key '{key}'")]
    #[diagnostic(
        code(dnac_pnp::config_missing_key),
        help(
            "Set it in {path} or through the environment (DNAC_PNP_<SECTION>__<KEY>).\n\
             The password may also come from DNAC_PASSWORD or the keyring."
        )
    )]
    MissingConfigKey { key: &'static str, path: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(dnac_pnp::config), help("Config file: {path}"))]
    Config { message: String, path: String },

    #[error("Keyring error: {message}")]
    #[diagnostic(code(dnac_pnp::keyring))]
    Keyring { message: String },

    // ── Other ────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(dnac_pnp::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::MalformedSites { .. }
            | Self::InvalidSite { .. }
            | Self::MalformedDevices { .. } => exit_code::MALFORMED_INPUT,
            Self::UnknownImportMode { .. } | Self::Usage { .. } => exit_code::USAGE,
            Self::MissingConfigKey { .. } | Self::Config { .. } | Self::Keyring { .. } => {
                exit_code::CONFIG
            }
            Self::Transport { .. } | Self::FileRead { .. } | Self::Io(_) | Self::Internal(_) => {
                exit_code::GENERAL
            }
        }
    }

    /// Attach the config file location to a `ConfigError`.
    pub fn from_config(err: ConfigError, path: &std::path::Path) -> Self {
        let path = path.display().to_string();
        match err {
            ConfigError::MissingKey { key } => Self::MissingConfigKey { key, path },
            ConfigError::Keyring(message) => Self::Keyring { message },
            other => Self::Config {
                message: other.to_string(),
                path,
            },
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::AuthenticationFailed { message } => Self::AuthFailed { message },
            CoreError::Timeout => Self::Timeout,
            CoreError::Transport { message } => Self::Transport { message },
            CoreError::MalformedSiteConfig { message } => Self::MalformedSites { message },
            err @ (CoreError::MissingField { .. } | CoreError::UnknownSiteType { .. }) => {
                Self::InvalidSite {
                    message: err.to_string(),
                }
            }
            CoreError::MalformedDeviceFile { message } => Self::MalformedDevices { message },
            CoreError::Io { path, source } => Self::FileRead { path, source },
            CoreError::UnknownImportMode(mode) => Self::UnknownImportMode { mode },
            err @ CoreError::MissingImportInput { .. } => Self::Usage {
                message: err.to_string(),
            },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}
