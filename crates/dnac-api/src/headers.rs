// Request header construction
//
// Every intent API call carries JSON content negotiation plus the token
// returned by the auth endpoint.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;

use crate::auth::AuthToken;
use crate::error::Error;

/// Header names are case-insensitive; `HeaderMap` wants them lowercase.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Ask the controller to finish site creation before responding.
const RUNSYNC_HEADER: &str = "__runsync";

/// Base header set for intent API calls.
pub fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(RUNSYNC_HEADER),
        HeaderValue::from_static("true"),
    );
    headers
}

/// Attach the auth token, marking the value sensitive so it stays out of logs.
pub fn attach_token(headers: &mut HeaderMap, token: &AuthToken) -> Result<(), Error> {
    let mut value = HeaderValue::from_str(token.expose().expose_secret()).map_err(|_| {
        Error::InvalidHeader {
            name: AUTH_TOKEN_HEADER,
        }
    })?;
    value.set_sensitive(true);
    headers.insert(AUTH_TOKEN_HEADER, value);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_headers_are_json() {
        let headers = base_headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
        assert!(!headers.contains_key(AUTH_TOKEN_HEADER));
    }

    #[test]
    fn token_is_attached_as_sensitive() {
        let mut headers = base_headers();
        attach_token(&mut headers, &AuthToken::new("abc123")).unwrap();
        let value = &headers[AUTH_TOKEN_HEADER];
        assert_eq!(value, "abc123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn control_characters_in_token_are_rejected() {
        let mut headers = base_headers();
        let err = attach_token(&mut headers, &AuthToken::new("bad\ntoken")).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }), "got {err:?}");
    }
}
