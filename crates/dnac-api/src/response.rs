// Response interpretation
//
// The controller's bodies are reported to the operator rather than decoded
// into typed models, so a response is reduced to a success flag plus the
// body in whichever form it arrived.

use std::fmt;

use serde_json::Value;

use crate::error::Error;

/// Body of a controller response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => match serde_json::to_string_pretty(value) {
                Ok(pretty) => f.write_str(&pretty),
                Err(_) => write!(f, "{value}"),
            },
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Outcome of one endpoint call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// `true` for any 2xx status.
    pub success: bool,
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub(crate) async fn from_response(resp: reqwest::Response) -> Result<Self, Error> {
        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;
        Ok(Self::from_parts(status.as_u16(), status.is_success(), text))
    }

    fn from_parts(status: u16, success: bool, text: String) -> Self {
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        };
        Self {
            success,
            status,
            body,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_bodies_are_parsed() {
        let resp = ApiResponse::from_parts(202, true, r#"{"executionId":"e-1"}"#.into());
        assert!(resp.success);
        assert_eq!(resp.body, ResponseBody::Json(json!({"executionId": "e-1"})));
    }

    #[test]
    fn non_json_bodies_are_kept_verbatim() {
        let resp = ApiResponse::from_parts(502, false, "Bad Gateway".into());
        assert!(!resp.success);
        assert_eq!(resp.body.to_string(), "Bad Gateway");
    }

    #[test]
    fn json_display_is_pretty() {
        let body = ResponseBody::Json(json!({"status": "ok"}));
        assert_eq!(body.to_string(), "{\n  \"status\": \"ok\"\n}");
    }
}
