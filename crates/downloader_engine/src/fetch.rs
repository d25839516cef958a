use std::time::Duration;

use bytes::Bytes;
use engine_logging::engine_debug;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,
    /// `None` keeps the transport default.
    pub request_timeout: Option<Duration>,
    pub redirect_limit: usize,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            redirect_limit: 10,
            user_agent: concat!("downloader/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Blocking page download. Implementations must not retry.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

/// `PageFetcher` backed by a shared blocking reqwest client.
///
/// The client owns an internal runtime, so build and drop it outside of any
/// async context.
#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestPageFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(settings.user_agent)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit));
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl PageFetcher for ReqwestPageFetcher {
    fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(url, FailureKind::InvalidUrl, err.to_string()))?;

        engine_debug!("GET {}", parsed);
        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|err| map_reqwest_error(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                url,
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response
            .bytes()
            .map_err(|err| map_reqwest_error(url, err))?;
        engine_debug!("GET {} -> {} bytes", url, body.len());
        Ok(body)
    }
}

fn map_reqwest_error(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(url, FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(url, FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(url, FailureKind::Network, err.to_string())
}
