// ── Runtime connection configuration ──
//
// These types describe *how* to reach a controller. They carry credential
// data and connection tuning but never touch disk; the CLI builds a
// `ControllerConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use dnac_api::{TlsMode, TransportConfig};

/// Controller login material, read once per run.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Host, `host:port`, or a full `https://` base URL.
    pub host: String,
    pub username: String,
    pub password: SecretString,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification. Controllers usually run self-signed certificates.
    #[default]
    DangerAcceptInvalid,
}

/// Everything needed to open an authenticated session.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub credentials: Credentials,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl ControllerConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
