use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;
pub(crate) const CONFIG_ERROR_REDIRECT_WITH_AUTH: &str =
    "config error: auth requires redirects to be disabled";

/// Error body returned by the OCM API for non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ResourceError {
    /// HTTP status of the response that carried this body.
    #[serde(skip)]
    pub status: u16,
    pub kind: String,
    pub id: String,
    pub href: String,
    pub code: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "status={}, reason={}", self.status, self.reason)
        } else {
            write!(
                f,
                "status={}, code={}, reason={}",
                self.status, self.code, self.reason
            )
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Config(String),
    #[error("ocm api error: {0}")]
    Api(ResourceError),
}

/// Message used when the error body is not an OCM error object.
pub(crate) fn fallback_message(status: StatusCode, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn read_body_with_limit(
    resp: &mut reqwest::blocking::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    resp.take(limit as u64 + 1).read_to_end(&mut body)?;
    if body.len() > limit {
        log::warn!("error body exceeds {limit} bytes, truncating");
        body.truncate(limit);
    }
    Ok(body)
}

#[cfg(feature = "async-client")]
pub(crate) async fn read_body_with_limit_async(
    resp: &mut reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    while let Some(chunk) = resp.chunk().await? {
        let remaining = limit - body.len();
        if chunk.len() > remaining {
            log::warn!("error body exceeds {limit} bytes, truncating");
            body.extend_from_slice(&chunk[..remaining]);
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::{fallback_message, ResourceError};
    use reqwest::StatusCode;

    #[test]
    fn resource_error_reads_ocm_error_body() {
        let body = r#"{
            "kind": "Error",
            "id": "404",
            "href": "/api/clusters_mgmt/v1/errors/404",
            "code": "CLUSTERS-MGMT-404",
            "reason": "Cluster 'abc' not found",
            "operation_id": "op-1"
        }"#;
        let err: ResourceError = serde_json::from_str(body).expect("decode");
        assert_eq!(err.code, "CLUSTERS-MGMT-404");
        assert_eq!(err.reason, "Cluster 'abc' not found");
        assert_eq!(err.operation_id.as_deref(), Some("op-1"));
        assert_eq!(err.status, 0);
    }

    #[test]
    fn display_omits_empty_code() {
        let err = ResourceError {
            status: 502,
            reason: "Bad Gateway".to_string(),
            ..ResourceError::default()
        };
        assert_eq!(err.to_string(), "status=502, reason=Bad Gateway");
    }

    #[test]
    fn fallback_message_uses_reason_for_empty_body() {
        assert_eq!(
            fallback_message(StatusCode::SERVICE_UNAVAILABLE, b"  "),
            "Service Unavailable"
        );
        assert_eq!(fallback_message(StatusCode::BAD_GATEWAY, b"oops"), "oops");
    }
}
