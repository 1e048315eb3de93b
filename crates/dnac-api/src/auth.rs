// Token authentication
//
// The controller hands out a short-lived token in exchange for HTTP Basic
// credentials. Every intent API call then carries it in `X-Auth-Token`.

use std::fmt;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::client::DnacClient;
use crate::endpoint::ApiOperation;
use crate::error::Error;

/// Opaque bearer token, valid for a single run.
#[derive(Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    pub fn expose(&self) -> &SecretString {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(****)")
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "Token")]
    token: Option<String>,
}

impl DnacClient {
    /// Exchange username/password for a token.
    ///
    /// `POST /dna/system/api/v1/auth/token` with HTTP Basic auth. Exactly
    /// one attempt; a 2xx body without a `Token` field is
    /// [`Error::MissingToken`].
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<AuthToken, Error> {
        let endpoint = ApiOperation::AuthToken.endpoint();
        let url = self.endpoint_url(&endpoint)?;

        debug!("requesting token at {}", url);

        let resp = self
            .http()
            .request(endpoint.method, url)
            .basic_auth(username, Some(password.expose_secret()))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!("token request failed (HTTP {status}): {body}"),
            });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                body: body.clone(),
            })?;

        let token = parsed.token.ok_or(Error::MissingToken)?;
        debug!("token received");
        Ok(AuthToken::new(token))
    }
}

fn preview(body: &str) -> &str {
    let end = body
        .char_indices()
        .nth(200)
        .map_or(body.len(), |(idx, _)| idx);
    &body[..end]
}
