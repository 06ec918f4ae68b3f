//! API client and request assembly

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::query::QueryParams;
use crate::transport::{self, PreparedRequest, RawResponse, RequestContext};

pub use crate::config::BASE_URL;

/// Client identifier sent in the `User-Agent` header
pub const CLIENT_NAME: &str = "fortnite-api-rs";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const USER_AGENT_VALUE: &str = concat!("fortnite-api-rs/", env!("CARGO_PKG_VERSION"));

/// Client for the fortnite-api.com REST service
///
/// Immutable once built; clones share one connection pool and can be used
/// from any number of tasks at once.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    language: Option<Language>,
    api_key: Option<HeaderValue>,
}

impl Client {
    /// Create a client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = transport::build_http_client(&config)?;
        Self::with_http_client(config, http)
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client that sends requests through an existing connection pool
    ///
    /// The pool's own timeouts apply; those in `config` are ignored.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let api_key = match config.api_key.as_deref() {
            None | Some("") => None,
            Some(key) => {
                let mut value = HeaderValue::from_str(key)?;
                value.set_sensitive(true);
                Some(value)
            }
        };

        Ok(Self {
            http,
            base_url,
            language: config.language,
            api_key,
        })
    }

    /// Default language injected into every request
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Assemble a request without sending it
    ///
    /// The client language is added as `language` unless the query already
    /// sets that key. A body is serialized to JSON and marks the request with
    /// `Content-Type: application/json`.
    pub fn prepare<B>(
        &self,
        method: Method,
        path: &str,
        query: QueryParams,
        body: Option<&B>,
    ) -> Result<PreparedRequest>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path, None)?;
        self.prepare_url(method, url, query, body)
    }

    pub(crate) fn prepare_url<B>(
        &self,
        method: Method,
        mut url: Url,
        mut query: QueryParams,
        body: Option<&B>,
    ) -> Result<PreparedRequest>
    where
        B: Serialize + ?Sized,
    {
        if let Some(language) = self.language
            && !query.contains_key("language")
        {
            query.append("language", language.as_str());
        }
        query.apply_to(&mut url);

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        if let Some(key) = &self.api_key {
            headers.insert(AUTHORIZATION, key.clone());
        }

        let body = match body {
            Some(body) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(serde_json::to_vec(body).map_err(Error::BodyEncoding)?)
            }
            None => None,
        };

        debug!("{} request URL: {}", method, url);

        Ok(PreparedRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Append a path to the base URL, keeping any prefix the base carries,
    /// then `id` as one percent-encoded segment
    pub(crate) fn endpoint(&self, path: &str, id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Send a request and decode the envelope's payload into `T`
    pub async fn fetch<T, B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        query: QueryParams,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path, None)?;
        self.fetch_url(ctx, method, url, query, body).await
    }

    /// Send a GET request and decode the envelope's payload into `T`
    pub async fn get<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
        query: QueryParams,
    ) -> Result<T> {
        self.fetch::<T, ()>(ctx, Method::GET, path, query, None).await
    }

    /// Send a request, checking the envelope but discarding its payload
    pub async fn execute<B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        query: QueryParams,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.prepare(method, path, query, body)?;
        let response = self.send(ctx, request).await?;
        envelope::decode_discard(response.status, &response.body)
    }

    pub(crate) async fn fetch_url<T, B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: Url,
        query: QueryParams,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.prepare_url(method, url, query, body)?;
        let response = self.send(ctx, request).await?;
        envelope::decode(response.status, &response.body)
    }

    async fn send(&self, ctx: &RequestContext, request: PreparedRequest) -> Result<RawResponse> {
        transport::execute(&self.http, ctx, request).await
    }

    /// Fail with [`Error::MissingApiKey`] unless a key is configured
    pub(crate) fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_none() {
            return Err(Error::MissingApiKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn http() -> reqwest::Client {
        transport::ensure_crypto_provider();
        reqwest::Client::new()
    }

    fn client(config: ClientConfig) -> Client {
        Client::with_http_client(config, http()).unwrap()
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert_eq!(USER_AGENT_VALUE, format!("{CLIENT_NAME}/{VERSION}"));
    }

    #[test]
    fn test_prepare_get_without_key_or_language() {
        let client = client(ClientConfig::default());
        let request = client
            .prepare::<()>(Method::GET, "/v2/aes", QueryParams::new(), None)
            .unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.as_str(), "https://fortnite-api.com/v2/aes");
        assert_eq!(request.headers[USER_AGENT], USER_AGENT_VALUE);
        assert!(!request.headers.contains_key(AUTHORIZATION));
        assert!(!request.headers.contains_key(CONTENT_TYPE));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_prepare_injects_language_and_key() {
        let client = client(
            ClientConfig::default()
                .with_language(Language::French)
                .with_api_key("secret"),
        );
        let request = client
            .prepare::<()>(Method::GET, "/v1/map", QueryParams::new(), None)
            .unwrap();

        assert_eq!(request.url.as_str(), "https://fortnite-api.com/v1/map?language=fr");
        assert_eq!(request.headers[AUTHORIZATION], "secret");
        assert!(request.headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_prepare_keeps_explicit_language() {
        let client = client(ClientConfig::default().with_language(Language::French));
        let query = QueryParams::new().with("language", "ja");
        let request = client
            .prepare::<()>(Method::GET, "/v1/map", query, None)
            .unwrap();

        assert_eq!(request.url.query(), Some("language=ja"));
    }

    #[test]
    fn test_prepare_with_body() {
        let client = client(ClientConfig::default());
        let ids = ["a", "b"];
        let request = client
            .prepare(Method::POST, "/v2/cosmetics/br/search/ids", QueryParams::new(), Some(&ids))
            .unwrap();

        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert_eq!(request.body.as_deref(), Some(br#"["a","b"]"#.as_slice()));
    }

    #[test]
    fn test_endpoint_encodes_id_as_one_segment() {
        let client = client(ClientConfig::default());
        let url = client
            .endpoint("/v2/cosmetics/br", Some("a/b c?"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://fortnite-api.com/v2/cosmetics/br/a%2Fb%20c%3F"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_url_path_prefix() {
        for base in ["http://proxy.local/fortnite", "http://proxy.local/fortnite/"] {
            let client = client(ClientConfig::default().with_base_url(base));

            let request = client
                .prepare::<()>(Method::GET, "/v2/aes", QueryParams::new(), None)
                .unwrap();
            assert_eq!(request.url.as_str(), "http://proxy.local/fortnite/v2/aes");

            let url = client.endpoint("/v1/playlists", Some("Playlist_DefaultSolo")).unwrap();
            assert_eq!(
                url.as_str(),
                "http://proxy.local/fortnite/v1/playlists/Playlist_DefaultSolo"
            );
        }
    }

    #[test]
    fn test_empty_api_key_is_ignored() {
        let config = ClientConfig {
            api_key: Some(String::new()),
            ..ClientConfig::default()
        };
        assert!(!client(config).has_api_key());
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let config = ClientConfig::default().with_api_key("bad\nkey");
        let err = Client::with_http_client(config, http()).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader(_)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::default().with_base_url("not a url");
        let err = Client::with_http_client(config, http()).unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn test_require_api_key() {
        assert!(matches!(
            client(ClientConfig::default()).require_api_key(),
            Err(Error::MissingApiKey)
        ));
        assert!(
            client(ClientConfig::default().with_api_key("k"))
                .require_api_key()
                .is_ok()
        );
    }
}
