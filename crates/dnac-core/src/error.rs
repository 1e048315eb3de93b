// ── Core error types ──
//
// User-facing errors from dnac-core. Transport-level failures from
// `dnac_api` are translated into domain variants by the `From` impl below;
// consumers never match on reqwest errors directly.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Controller request timed out")]
    Timeout,

    #[error("Transport error: {message}")]
    Transport { message: String },

    // ── Input file errors ────────────────────────────────────────────
    #[error("Malformed site configuration: {message}")]
    MalformedSiteConfig { message: String },

    #[error("Malformed device file: {message}")]
    MalformedDeviceFile { message: String },

    #[error("Site '{site}' is missing required field '{field}'")]
    MissingField { site: String, field: &'static str },

    #[error("Site '{site}' has unknown type '{site_type}' (expected area, building or floor)")]
    UnknownSiteType { site: String, site_type: String },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Device import errors ─────────────────────────────────────────
    #[error("Unknown import mode '{0}' (expected single or bulk)")]
    UnknownImportMode(String),

    #[error("{mode} import requires {required}")]
    MissingImportInput {
        mode: &'static str,
        required: &'static str,
    },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<dnac_api::Error> for CoreError {
    fn from(err: dnac_api::Error) -> Self {
        match err {
            dnac_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            dnac_api::Error::MissingToken => CoreError::AuthenticationFailed {
                message: "controller response did not contain a Token".into(),
            },
            dnac_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Transport {
                        message: e.to_string(),
                    }
                }
            }
            dnac_api::Error::InvalidUrl(e) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("invalid controller URL: {e}"),
            },
            dnac_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            dnac_api::Error::InvalidHeader { name } => {
                CoreError::Internal(format!("invalid value for header {name}"))
            }
            dnac_api::Error::UnknownOperation(name) => {
                CoreError::Internal(format!("unknown API operation '{name}'"))
            }
            dnac_api::Error::Deserialization { message, body: _ } => {
                CoreError::AuthenticationFailed {
                    message: format!("unreadable token response: {message}"),
                }
            }
        }
    }
}
