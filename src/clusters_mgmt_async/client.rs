use crate::client_defaults::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::clusters_mgmt::common;
use crate::error::{
    read_body_with_limit_async, Error, CONFIG_ERROR_REDIRECT_WITH_AUTH, MAX_ERROR_BODY_BYTES,
};
use reqwest::{Certificate, Client as HttpClient, Identity, RequestBuilder, Response, StatusCode};
use std::time::Duration;
use url::Url;

mod addons;
mod cloud_providers;
mod clusters;
mod ingresses;
mod versions;
mod wif_configs;

/// Builder for [`ClustersMgmtAsyncClient`].
///
/// Available when the `async-client` feature is enabled. The `base_url` should
/// point to the API root, for example
/// `https://api.openshift.com/api/clusters_mgmt/v1`.
pub struct ClustersMgmtAsyncClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    disable_redirect: bool,
    identity: Option<Identity>,
    ca_certs: Vec<Certificate>,
    auth: Option<common::AuthProvider>,
    user_agent: String,
}

impl ClustersMgmtAsyncClientBuilder {
    /// Creates a builder for the provided base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            timeout: Some(DEFAULT_TIMEOUT),
            disable_redirect: false,
            identity: None,
            ca_certs: Vec::new(),
            auth: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Sets the request timeout for the underlying HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Control whether HTTP redirects should be followed.
    ///
    /// If an auth header is configured, enabling redirects is rejected so the
    /// credentials are never sent to a redirected host.
    pub fn follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.disable_redirect = !follow_redirects;
        self
    }

    /// Configure mutual TLS identity from a single PEM bundle containing the
    /// certificate and private key.
    pub fn mtls_identity_from_pem(mut self, identity_pem: &[u8]) -> Result<Self, Error> {
        self.identity = Some(Identity::from_pem(identity_pem)?);
        Ok(self)
    }

    /// Configure mutual TLS identity from separate PEM-encoded certificate
    /// and private key. The inputs are concatenated with a newline if needed.
    pub fn mtls_identity_from_parts(
        mut self,
        cert_pem: &[u8],
        key_pem: &[u8],
    ) -> Result<Self, Error> {
        let mut combined = Vec::new();
        combined.extend_from_slice(cert_pem);
        if !combined.ends_with(b"\n") {
            combined.push(b'\n');
        }
        combined.extend_from_slice(key_pem);
        self.identity = Some(Identity::from_pem(&combined)?);
        Ok(self)
    }

    /// Adds a PEM-encoded CA certificate to the trust store.
    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    pub fn bearer_token(mut self, token: impl AsRef<str>) -> Result<Self, Error> {
        self.auth = Some(common::AuthProvider::bearer(token)?);
        Ok(self)
    }

    /// Configures a static auth header.
    pub fn auth_header(
        mut self,
        header: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, Error> {
        self.auth = Some(common::AuthProvider::static_header(header, value)?);
        Ok(self)
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the async client from the configured options.
    pub fn build(self) -> Result<ClustersMgmtAsyncClient, Error> {
        if self.auth.is_some() && !self.disable_redirect {
            return Err(Error::Config(CONFIG_ERROR_REDIRECT_WITH_AUTH.to_string()));
        }
        let mut builder = HttpClient::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.disable_redirect {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        if let Some(identity) = self.identity {
            builder = builder.identity(identity);
        }
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build()?;
        Ok(ClustersMgmtAsyncClient {
            base_url: self.base_url,
            http,
            auth: self.auth,
        })
    }
}

/// Async `clusters_mgmt/v1` client (requires the `async-client` feature).
///
/// Use [`ClustersMgmtAsyncClient::builder`] with a base URL like
/// `https://api.openshift.com/api/clusters_mgmt/v1`.
pub struct ClustersMgmtAsyncClient {
    base_url: Url,
    http: HttpClient,
    auth: Option<common::AuthProvider>,
}

impl ClustersMgmtAsyncClient {
    /// Returns a builder for an async client.
    pub fn builder(base_url: impl AsRef<str>) -> Result<ClustersMgmtAsyncClientBuilder, Error> {
        ClustersMgmtAsyncClientBuilder::new(base_url)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        common::build_url(&self.base_url, segments)
    }

    fn apply_auth(&self, req: RequestBuilder) -> RequestBuilder {
        common::apply_auth(req, &self.auth)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, Error> {
        let request = req.build()?;
        log::debug!("{} {}", request.method(), request.url());
        Ok(self.http.execute(request).await?)
    }

    async fn expect_json<T: serde::de::DeserializeOwned>(
        &self,
        resp: Response,
        expected: StatusCode,
    ) -> Result<T, Error> {
        if resp.status() == expected {
            resp.json::<T>().await.map_err(Error::from)
        } else {
            self.parse_error(resp).await
        }
    }

    async fn expect_ok_json<T: serde::de::DeserializeOwned>(
        &self,
        resp: Response,
    ) -> Result<T, Error> {
        self.expect_json(resp, StatusCode::OK).await
    }

    async fn expect_created_json<T: serde::de::DeserializeOwned>(
        &self,
        resp: Response,
    ) -> Result<T, Error> {
        self.expect_json(resp, StatusCode::CREATED).await
    }

    async fn expect_success(&self, resp: Response) -> Result<(), Error> {
        if resp.status().is_success() {
            Ok(())
        } else {
            self.parse_error(resp).await
        }
    }

    async fn expect_no_content(&self, resp: Response) -> Result<(), Error> {
        if resp.status() == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            self.parse_error(resp).await
        }
    }

    async fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = read_body_with_limit_async(&mut resp, MAX_ERROR_BODY_BYTES).await?;
        Err(common::parse_error_from_body(status, &body))
    }
}
