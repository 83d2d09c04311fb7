use crate::error::{fallback_message, Error, ResourceError};
use reqwest::blocking::RequestBuilder as BlockingRequestBuilder;
use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder as AsyncRequestBuilder;
use reqwest::StatusCode;
use url::Url;

pub(crate) enum AuthProvider {
    Bearer { token: String },
    StaticHeader { header: String, value: String },
}

impl AuthProvider {
    pub(crate) fn bearer(token: impl AsRef<str>) -> Result<Self, Error> {
        let token = token.as_ref().to_string();
        validate_header_value(&format!("Bearer {token}"))?;
        Ok(Self::Bearer { token })
    }

    pub(crate) fn static_header(
        header: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, Error> {
        let header = header.as_ref().to_string();
        HeaderName::from_bytes(header.as_bytes())
            .map_err(|e| Error::Config(format!("config error: invalid header name: {e}")))?;
        let value = value.as_ref().to_string();
        validate_header_value(&value)?;
        Ok(Self::StaticHeader { header, value })
    }
}

fn validate_header_value(value: &str) -> Result<(), Error> {
    HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|e| Error::Config(format!("config error: invalid header value: {e}")))
}

pub(crate) fn apply_auth<B: RequestBuilderExt>(req: B, auth: &Option<AuthProvider>) -> B {
    match auth {
        None => req,
        Some(AuthProvider::Bearer { token }) => {
            req.with_header(AUTHORIZATION.as_str(), &format!("Bearer {token}"))
        }
        Some(AuthProvider::StaticHeader { header, value }) => req.with_header(header, value),
    }
}

pub(crate) trait RequestBuilderExt: Sized {
    fn with_header(self, name: &str, value: &str) -> Self;
    fn with_query(self, params: &[(&'static str, String)]) -> Self;
}

impl RequestBuilderExt for BlockingRequestBuilder {
    fn with_header(self, name: &str, value: &str) -> Self {
        self.header(name, value)
    }

    fn with_query(self, params: &[(&'static str, String)]) -> Self {
        self.query(params)
    }
}

impl RequestBuilderExt for AsyncRequestBuilder {
    fn with_header(self, name: &str, value: &str) -> Self {
        self.header(name, value)
    }

    fn with_query(self, params: &[(&'static str, String)]) -> Self {
        self.query(params)
    }
}

/// Appends `segments` to the path of `base_url`.
///
/// The query and fragment of the base URL are dropped, and a trailing slash
/// does not produce an empty segment.
pub(crate) fn build_url(base_url: &Url, segments: &[&str]) -> Result<Url, Error> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    {
        let mut path_segments = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))?;
        path_segments.pop_if_empty();
        for segment in segments {
            path_segments.push(segment);
        }
    }
    Ok(url)
}

pub(crate) fn apply_query_params<B: RequestBuilderExt>(
    req: B,
    params: Vec<(&'static str, String)>,
) -> B {
    if params.is_empty() {
        req
    } else {
        req.with_query(&params)
    }
}

/// Turns a non-success response body into [`Error::Api`].
///
/// Bodies that are not an OCM error object keep the status and use the body
/// text, or the canonical reason when the body is empty.
pub(crate) fn parse_error_from_body(status: StatusCode, body: &[u8]) -> Error {
    let fallback = fallback_message(status, body);
    let mut err = serde_json::from_slice::<ResourceError>(body).unwrap_or_else(|_| ResourceError {
        reason: fallback.clone(),
        ..ResourceError::default()
    });
    err.status = status.as_u16();
    if err.reason.is_empty() {
        err.reason = fallback;
    }
    Error::Api(err)
}

#[cfg(test)]
mod tests {
    use super::{build_url, parse_error_from_body, AuthProvider};
    use crate::error::Error;
    use reqwest::StatusCode;
    use url::Url;

    #[test]
    fn build_url_drops_query_and_escapes_segments() {
        let base =
            Url::parse("https://api.example.com/api/clusters_mgmt/v1/?x=1#frag").expect("url");
        let url = build_url(&base, &["clusters", "a b/c"]).expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/api/clusters_mgmt/v1/clusters/a%20b%2Fc"
        );
    }

    #[test]
    fn build_url_rejects_cannot_be_a_base() {
        let base = Url::parse("mailto:ops@example.com").expect("url");
        let err = build_url(&base, &["clusters"]).expect_err("error");
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn parse_error_reads_ocm_body() {
        let body = br#"{"kind":"Error","id":"404","code":"CLUSTERS-MGMT-404","reason":"Cluster 'x' not found"}"#;
        match parse_error_from_body(StatusCode::NOT_FOUND, body) {
            Error::Api(err) => {
                assert_eq!(err.status, 404);
                assert_eq!(err.code, "CLUSTERS-MGMT-404");
                assert_eq!(err.reason, "Cluster 'x' not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_error_falls_back_to_body_text() {
        match parse_error_from_body(StatusCode::BAD_GATEWAY, b"upstream timed out") {
            Error::Api(err) => {
                assert_eq!(err.status, 502);
                assert_eq!(err.code, "");
                assert_eq!(err.reason, "upstream timed out");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn static_header_rejects_invalid_name() {
        let err = match AuthProvider::static_header("bad header", "x") {
            Ok(_) => panic!("expected error"),
            Err(err) => err,
        };
        match err {
            Error::Config(message) => assert!(message.contains("invalid header name")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bearer_rejects_control_characters() {
        assert!(AuthProvider::bearer("abc\ndef").is_err());
        assert!(AuthProvider::bearer("abc.def").is_ok());
    }
}
