use thiserror::Error;

/// Top-level error type for the `dnac-api` crate.
///
/// Covers every failure mode of talking to the controller: authentication,
/// transport, request construction and response decoding.
/// `dnac-core` maps these into user-facing variants.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The token endpoint rejected the credentials.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The token endpoint answered 2xx but the body carried no `Token`.
    #[error("Token missing from authentication response")]
    MissingToken,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// A header value (usually the token) could not be encoded.
    #[error("Invalid header value for {name}")]
    InvalidHeader { name: &'static str },

    // ── Endpoints ───────────────────────────────────────────────────
    /// Symbolic operation name not known to the resolver.
    #[error("Unknown API operation '{0}'")]
    UnknownOperation(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the request never reached the controller.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
