//! Transport layer for API requests
//!
//! Requests are assembled into a [`PreparedRequest`] with no I/O, then run
//! by [`execute`] under a [`RequestContext`]. The context carries a
//! cancellation token and an optional per-call deadline; whichever fires
//! first aborts the in-flight request by dropping its future.

use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, Method, Request};
use std::future::Future;
use std::sync::Once;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::trace;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

static CRYPTO_PROVIDER: Once = Once::new();

/// Install the ring crypto provider for rustls, once per process
///
/// reqwest is built without a default provider, so one must be installed
/// before the first TLS connection. Installing is a no-op if the
/// application already chose a provider.
pub fn ensure_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Build the shared connection pool from client configuration
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<Client> {
    ensure_crypto_provider();
    ClientBuilder::new()
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(10)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .tcp_nodelay(true)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
        .map_err(Into::into)
}

/// Per-call cancellation and deadline
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    timeout: Option<Duration>,
}

impl RequestContext {
    /// Context that is never cancelled and has no deadline of its own
    pub fn new() -> Self {
        Self::default()
    }

    /// Context driven by an existing cancellation token
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            timeout: None,
        }
    }

    /// Set a per-call deadline
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Derive a context that is cancelled along with this one but can also be
    /// cancelled on its own
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            timeout: self.timeout,
        }
    }

    /// Cancel every call running under this context
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Fully assembled request, ready to send
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl PreparedRequest {
    fn into_request(self) -> Request {
        let mut request = Request::new(self.method, self.url);
        *request.headers_mut() = self.headers;
        if let Some(body) = self.body {
            *request.body_mut() = Some(body.into());
        }
        request
    }
}

/// Status and fully drained body of a response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Send a prepared request and read the whole response body
pub async fn execute(
    http: &Client,
    ctx: &RequestContext,
    request: PreparedRequest,
) -> Result<RawResponse> {
    if ctx.is_cancelled() {
        return Err(Error::Cancelled);
    }

    let round_trip = async {
        let response = http.execute(request.into_request()).await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        trace!("Response status={}, body={} bytes", status, body.len());
        Ok::<_, Error>(RawResponse { status, body })
    };

    tokio::select! {
        biased;
        () = ctx.token.cancelled() => Err(Error::Cancelled),
        result = with_deadline(ctx.timeout, round_trip) => result,
    }
}

async fn with_deadline<F>(timeout: Option<Duration>, future: F) -> Result<RawResponse>
where
    F: Future<Output = Result<RawResponse>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, future)
            .await
            .map_err(|_| Error::Timeout(limit))?,
        None => future.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = RequestContext::new();
        assert!(!ctx.is_cancelled());
        assert_eq!(ctx.timeout(), None);
    }

    #[test]
    fn test_child_follows_parent() {
        let parent = RequestContext::new().with_timeout(Duration::from_secs(1));
        let child = parent.child();
        assert_eq!(child.timeout(), Some(Duration::from_secs(1)));

        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());

        let other = parent.child();
        parent.cancel();
        assert!(other.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_context_skips_io() {
        let http = build_http_client(&ClientConfig::default()).unwrap();
        let ctx = RequestContext::new();
        ctx.cancel();

        // Port 9 (discard) is never contacted because cancellation is checked first
        let request = PreparedRequest {
            method: Method::GET,
            url: Url::parse("http://127.0.0.1:9/v2/aes").unwrap(),
            headers: HeaderMap::new(),
            body: None,
        };
        let err = execute(&http, &ctx, request).await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_deadline_maps_to_timeout() {
        let limit = Duration::from_millis(10);
        let err = with_deadline(limit.into(), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(RawResponse {
                status: 200,
                body: Vec::new(),
            })
        })
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Timeout(d) if d == limit));
    }
}
