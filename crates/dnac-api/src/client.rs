// Controller HTTP client
//
// Wraps `reqwest::Client` with controller URL construction and the shared
// header set. Authentication lives in `auth.rs`; this module only covers
// transport mechanics.

use reqwest::header::HeaderMap;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::auth::AuthToken;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::headers;
use crate::response::ApiResponse;
use crate::transport::TransportConfig;

/// Build the controller base URL from a configured host.
///
/// A bare host or `host:port` becomes `https://{host}`. A value that already
/// names an `http` or `https` scheme is used as-is.
pub fn controller_url(host: &str) -> Result<Url, Error> {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("https://") || host.starts_with("http://") {
        Ok(Url::parse(host)?)
    } else {
        Ok(Url::parse(&format!("https://{host}"))?)
    }
}

/// HTTP client for one controller.
///
/// Starts without a token; [`with_token`](Self::with_token) returns a copy
/// whose header set carries `X-Auth-Token` on every call.
#[derive(Debug, Clone)]
pub struct DnacClient {
    http: reqwest::Client,
    base_url: Url,
    headers: HeaderMap,
}

impl DnacClient {
    /// Create a client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            headers: headers::base_headers(),
        }
    }

    /// Attach the token to every subsequent call.
    pub fn with_token(mut self, token: &AuthToken) -> Result<Self, Error> {
        headers::attach_token(&mut self.headers, token)?;
        Ok(self)
    }

    /// Whether a token has been attached.
    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(headers::AUTH_TOKEN_HEADER)
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for a resolved endpoint.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url, Error> {
        Ok(self.base_url.join(endpoint.path)?)
    }

    /// Send `body` as JSON to `endpoint` and report the outcome.
    ///
    /// Non-2xx statuses are not errors here: they come back as an
    /// [`ApiResponse`] with `success == false` so callers can keep going.
    /// Only transport failures are returned as `Err`.
    pub async fn call(
        &self,
        endpoint: &Endpoint,
        body: &(impl Serialize + Sync + ?Sized),
    ) -> Result<ApiResponse, Error> {
        let url = self.endpoint_url(endpoint)?;
        debug!(operation = %endpoint.operation, "{} {}", endpoint.method, url);

        let resp = self
            .http
            .request(endpoint.method.clone(), url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let response = ApiResponse::from_response(resp).await?;
        debug!(status = response.status, "response received");
        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        let url = controller_url("10.0.0.1").unwrap();
        assert_eq!(url.as_str(), "https://10.0.0.1/");
    }

    #[test]
    fn auth_url_for_bare_host() {
        let client =
            DnacClient::new(controller_url("10.0.0.1").unwrap(), &TransportConfig::default())
                .unwrap();
        let endpoint = crate::ApiOperation::AuthToken.endpoint();
        assert_eq!(
            client.endpoint_url(&endpoint).unwrap().as_str(),
            "https://10.0.0.1/dna/system/api/v1/auth/token"
        );
    }

    #[test]
    fn explicit_scheme_is_kept() {
        let url = controller_url("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn token_marks_client_authenticated() {
        let client = DnacClient::with_client(
            reqwest::Client::new(),
            controller_url("dnac.example.net").unwrap(),
        );
        assert!(!client.is_authenticated());
        let client = client.with_token(&AuthToken::new("t")).unwrap();
        assert!(client.is_authenticated());
    }
}
