//! # fortnite-api - Typed async client for the fortnite-api.com REST service
//!
//! Every endpoint is an async method on [`Client`]. A call encodes its
//! parameters into the query string, sends the request under a
//! [`RequestContext`], and unwraps the service's `{status, data}` envelope
//! into a typed value. Failures come back as [`Error`], classified by
//! [`Error::kind`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fortnite_api::{Client, ClientConfig, Language, RequestContext, ResponseFlag};
//! use fortnite_api::api::cosmetics::SearchBrCosmeticParams;
//!
//! #[tokio::main]
//! async fn main() -> fortnite_api::Result<()> {
//!     let client = Client::new(ClientConfig::default().with_language(Language::English))?;
//!     let ctx = RequestContext::new();
//!
//!     let params = SearchBrCosmeticParams {
//!         name: Some("Peely".to_string()),
//!         response_flags: Some(ResponseFlag::IncludePaths | ResponseFlag::IncludeShopHistory),
//!         ..Default::default()
//!     };
//!     let peely = client.search_br_cosmetic(&ctx, Some(params)).await?;
//!     println!("{} ({})", peely.name, peely.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! [`RequestContext`] wraps a `tokio_util` cancellation token and an optional
//! per-call deadline. Cancelling the token aborts in-flight calls with
//! [`Error::Cancelled`]; an elapsed deadline yields [`Error::Timeout`].
//!
//! ## Unmodeled endpoints
//!
//! [`Client::get`], [`Client::fetch`] and [`Client::execute`] take a raw path
//! and a [`QueryParams`] and decode into any `DeserializeOwned` type.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod flags;
pub mod language;
pub mod query;
pub mod transport;

pub use client::{BASE_URL, CLIENT_NAME, Client, VERSION};
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use flags::{ResponseFlag, ResponseFlags};
pub use language::Language;
pub use query::QueryParams;
pub use transport::{PreparedRequest, RequestContext, ensure_crypto_provider};

pub use api::LanguageParams;
pub use api::ResponseFlagsParams;
pub use api::aes::{AesKey, AesKeyParams, KeyFormat};
pub use api::banners::{Banner, BannerColor, BannersParams};
pub use api::cosmetics::{
    AllCosmetics, Bean, BrCosmetic, Car, Instrument, Lego, LegoKit, MatchMethod, NewCosmetics,
    SearchBrCosmeticParams, SearchBrCosmeticsParams, Track,
};
pub use api::creator_code::{CreatorCode, CreatorCodeParams};
pub use api::map::{BrMap, BrMapParams};
pub use api::news::{AllNews, News, NewsParams};
pub use api::playlists::{Playlist, PlaylistsParams};
pub use api::shop::{Shop, ShopParams};
pub use api::stats::{
    AccountType, BrStats, BrStatsByIdParams, BrStatsByNameParams, StatsImage, TimeWindow,
};
