//! Typed endpoint wrappers
//!
//! Each submodule holds the parameter and response types of one resource
//! together with the [`Client`](crate::Client) methods that call it.

pub mod aes;
pub mod banners;
pub mod cosmetics;
pub mod creator_code;
pub mod map;
pub mod news;
pub mod playlists;
pub mod shop;
pub mod stats;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::flags::ResponseFlags;
use crate::language::Language;
use crate::query::QueryParams;

/// Parameters for endpoints that only take a response language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageParams {
    pub language: Option<Language>,
}

impl LanguageParams {
    pub fn new(language: Language) -> Self {
        Self {
            language: Some(language),
        }
    }
}

/// Parameters for endpoints that only take response flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFlagsParams {
    pub response_flags: Option<ResponseFlags>,
}

impl ResponseFlagsParams {
    pub fn new(response_flags: impl Into<ResponseFlags>) -> Self {
        Self {
            response_flags: Some(response_flags.into()),
        }
    }
}

/// Encode optional parameters, treating `None` as the all-unset default
pub(crate) fn encode_params<P: Serialize + Default>(params: Option<P>) -> Result<QueryParams> {
    QueryParams::encode(&params.unwrap_or_default())
}

pub(crate) fn require_non_empty(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::EmptyParameter(name));
    }
    Ok(())
}
