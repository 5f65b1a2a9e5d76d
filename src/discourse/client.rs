use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{StatusCode, tls};
use tracing::debug;

use crate::error::Error;

pub const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const USER_API_KEY: &str = "User-Api-Key";
const TIMEOUT: Duration = Duration::from_secs(30);

/// One raw response. A non-200 status is still a page; callers decide what it means.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Page {
    /// The body of a 200 response, or a status error carrying the body.
    pub fn into_ok(self, url: &str) -> Result<Vec<u8>, Error> {
        if self.status == StatusCode::OK {
            Ok(self.body)
        } else {
            Err(Error::Status {
                status: self.status,
                url: url.to_string(),
                body: self.body,
            })
        }
    }
}

/// HTTP client for the Discourse JSON API.
///
/// Built once at startup: TLS 1.2 at least, 30 seconds per request, optional proxy.
/// Never retries.
#[derive(Debug, Clone)]
pub struct DiscourseClient {
    http: reqwest::Client,
    api_key: String,
}

impl DiscourseClient {
    pub fn new(api_key: impl Into<String>, proxy: Option<&str>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .min_tls_version(tls::Version::TLS_1_2);
        if let Some(proxy) = proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("could not parse proxy URL: {e}")))?;
            builder = builder.proxy(proxy);
        }
        Ok(Self {
            http: builder.build()?,
            api_key: api_key.into(),
        })
    }

    pub async fn fetch(&self, url: &str) -> Result<Page, Error> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(USER_API_KEY, &self.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!(%status, bytes = body.len(), "response from {}", url);
        Ok(Page { status, body })
    }
}
