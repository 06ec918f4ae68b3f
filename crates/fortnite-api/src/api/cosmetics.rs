//! Cosmetics: battle royale items, jam tracks, instruments, cars, LEGO and beans

use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{LanguageParams, ResponseFlagsParams, encode_params, require_non_empty};
use crate::client::Client;
use crate::error::{Error, Result};
use crate::flags::ResponseFlags;
use crate::language::Language;
use crate::query::QueryParams;
use crate::transport::RequestContext;

pub type AllCosmeticsParams = LanguageParams;
pub type NewCosmeticsParams = LanguageParams;
pub type BrCosmeticsListParams = LanguageParams;
pub type TrackCosmeticsListParams = ResponseFlagsParams;
pub type InstrumentCosmeticsListParams = LanguageParams;
pub type CarCosmeticsListParams = LanguageParams;
pub type LegoCosmeticsListParams = ResponseFlagsParams;
pub type LegoKitCosmeticsListParams = LanguageParams;
pub type BeanCosmeticsListParams = LanguageParams;
pub type BrCosmeticByIdParams = LanguageParams;
pub type BrCosmeticsByIdsParams = LanguageParams;

// Shared item metadata

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmeticType {
    pub value: String,
    pub display_value: String,
    pub backend_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmeticRarity {
    pub value: String,
    pub display_value: String,
    pub backend_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmeticSeries {
    pub value: String,
    pub image: Option<String>,
    pub colors: Vec<String>,
    pub backend_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmeticSet {
    pub value: String,
    pub text: String,
    pub backend_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmeticIntroduction {
    pub chapter: String,
    pub season: String,
    pub text: String,
    pub backend_value: i64,
}

/// Small/large image pair used by most non-BR item kinds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemImages {
    pub small: Option<String>,
    pub large: Option<String>,
}

/// Small/large/wide image set used by LEGO items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WideItemImages {
    pub small: Option<String>,
    pub large: Option<String>,
    pub wide: Option<String>,
}

// Battle royale

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrCosmeticImages {
    pub small_icon: Option<String>,
    pub icon: Option<String>,
    pub featured: Option<String>,
    pub lego: Option<WideItemImages>,
    pub bean: Option<ItemImages>,
    #[serde(rename = "Other")]
    pub other: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrCosmeticVariantOption {
    pub tag: String,
    pub name: String,
    pub unlock_requirements: Option<String>,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrCosmeticVariant {
    pub channel: String,
    #[serde(rename = "type")]
    pub variant_type: String,
    pub options: Vec<BrCosmeticVariantOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrCosmetic {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exclusive_description: Option<String>,
    pub unlock_requirements: Option<String>,
    pub custom_exclusive_callout: Option<String>,
    #[serde(rename = "type")]
    pub cosmetic_type: CosmeticType,
    pub rarity: CosmeticRarity,
    pub series: Option<CosmeticSeries>,
    pub set: Option<CosmeticSet>,
    pub introduction: Option<CosmeticIntroduction>,
    pub images: BrCosmeticImages,
    pub variants: Vec<BrCosmeticVariant>,
    pub built_in_emote_ids: Vec<String>,
    pub search_tags: Vec<String>,
    pub gameplay_tags: Vec<String>,
    pub meta_tags: Vec<String>,
    pub showcase_video: Option<String>,
    pub dynamic_pak_id: Option<String>,
    pub item_preview_hero_path: Option<String>,
    pub display_asset_path: Option<String>,
    pub definition_path: Option<String>,
    /// Present with [`ResponseFlag::IncludePaths`](crate::ResponseFlag::IncludePaths)
    pub path: Option<String>,
    pub added: String,
    /// Present with [`ResponseFlag::IncludeShopHistory`](crate::ResponseFlag::IncludeShopHistory)
    pub shop_history: Vec<String>,
}

// Festival

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackDifficulty {
    pub vocals: i32,
    pub guitar: i32,
    pub bass: i32,
    pub plastic_bass: i32,
    pub drums: i32,
    pub plastic_drums: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Track {
    pub id: String,
    pub dev_name: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub release_year: i32,
    pub bpm: i32,
    pub duration: i32,
    pub difficulty: TrackDifficulty,
    pub gameplay_tags: Vec<String>,
    pub genres: Vec<String>,
    pub album_art: String,
    pub added: Option<String>,
    pub shop_history: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instrument {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub cosmetic_type: CosmeticType,
    pub rarity: CosmeticRarity,
    pub images: ItemImages,
    pub series: Option<CosmeticSeries>,
    pub gameplay_tags: Vec<String>,
    pub path: Option<String>,
    pub showcase_video: Option<String>,
    pub added: String,
    pub shop_history: Vec<String>,
}

// Rocket racing

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Car {
    pub id: String,
    pub vehicle_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub cosmetic_type: CosmeticType,
    pub rarity: CosmeticRarity,
    pub images: ItemImages,
    pub series: Option<CosmeticSeries>,
    pub gameplay_tags: Vec<String>,
    pub path: Option<String>,
    pub showcase_video: Option<String>,
    pub added: String,
    pub shop_history: Vec<String>,
}

// LEGO

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lego {
    pub id: String,
    pub cosmetic_id: Option<String>,
    pub name: Option<String>,
    pub sound_library_tags: Vec<String>,
    pub images: WideItemImages,
    pub path: Option<String>,
    pub added: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegoKit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub cosmetic_type: CosmeticType,
    pub series: Option<CosmeticSeries>,
    pub gameplay_tags: Vec<String>,
    pub images: WideItemImages,
    pub path: Option<String>,
    pub added: String,
    pub shop_history: Vec<String>,
}

// Fall Guys

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bean {
    pub id: String,
    pub cosmetic_id: Option<String>,
    pub name: String,
    pub gender: String,
    pub gameplay_tags: Vec<String>,
    pub images: ItemImages,
    pub path: Option<String>,
    pub added: String,
}

// Aggregates

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllCosmetics {
    pub br: Vec<BrCosmetic>,
    pub tracks: Vec<Track>,
    pub instruments: Vec<Instrument>,
    pub cars: Vec<Car>,
    pub lego: Vec<Lego>,
    pub lego_kits: Vec<LegoKit>,
    pub beans: Vec<Bean>,
}

/// Per-kind value, with `all` covering every kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmeticKinds {
    pub all: Option<String>,
    pub br: Option<String>,
    pub tracks: Option<String>,
    pub instruments: Option<String>,
    pub cars: Option<String>,
    pub lego: Option<String>,
    pub lego_kits: Option<String>,
    pub beans: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCosmetics {
    pub date: String,
    pub build: String,
    pub previous_build: String,
    pub hashes: CosmeticKinds,
    pub last_additions: CosmeticKinds,
    pub items: AllCosmetics,
}

// Search

/// How `name`/`description` style filters are matched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    #[default]
    Full,
    Contains,
    Starts,
    Ends,
}

/// Filters for the battle royale cosmetic search endpoints
///
/// Every filter is optional; unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBrCosmeticParams {
    pub language: Option<Language>,
    /// Language the text filters are matched in; defaults to the client language
    pub search_language: Option<Language>,
    pub match_method: Option<MatchMethod>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub cosmetic_type: Option<String>,
    pub display_type: Option<String>,
    pub backend_type: Option<String>,
    pub rarity: Option<String>,
    pub display_rarity: Option<String>,
    pub backend_rarity: Option<String>,
    pub has_series: Option<bool>,
    pub series: Option<String>,
    pub backend_series: Option<String>,
    pub has_set: Option<bool>,
    pub set: Option<String>,
    pub set_text: Option<String>,
    pub backend_set: Option<String>,
    pub has_introduction: Option<bool>,
    pub backend_introduction: Option<i64>,
    pub introduction_chapter: Option<String>,
    pub introduction_season: Option<String>,
    pub has_featured_image: Option<bool>,
    pub has_variants: Option<bool>,
    pub has_gameplay_tags: Option<bool>,
    pub gameplay_tag: Option<String>,
    pub has_meta_tags: Option<bool>,
    pub meta_tag: Option<String>,
    pub has_dynamic_pak_id: Option<bool>,
    pub dynamic_pak_id: Option<String>,
    /// Unix timestamp
    pub added: Option<i64>,
    /// Unix timestamp
    pub added_since: Option<i64>,
    /// Days
    pub unseen_for: Option<i64>,
    /// Unix timestamp
    pub last_appearance: Option<i64>,
    pub response_flags: Option<ResponseFlags>,
}

pub type SearchBrCosmeticsParams = SearchBrCosmeticParams;

impl Client {
    /// Get every cosmetic of every kind
    pub async fn get_all_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<AllCosmeticsParams>,
    ) -> Result<AllCosmetics> {
        self.get(ctx, "/v2/cosmetics", encode_params(params)?).await
    }

    /// Get cosmetics added in the latest build
    pub async fn get_new_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<NewCosmeticsParams>,
    ) -> Result<NewCosmetics> {
        self.get(ctx, "/v2/cosmetics/new", encode_params(params)?)
            .await
    }

    pub async fn get_br_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<BrCosmeticsListParams>,
    ) -> Result<Vec<BrCosmetic>> {
        self.get(ctx, "/v2/cosmetics/br", encode_params(params)?)
            .await
    }

    pub async fn get_track_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<TrackCosmeticsListParams>,
    ) -> Result<Vec<Track>> {
        self.get(ctx, "/v2/cosmetics/tracks", encode_params(params)?)
            .await
    }

    pub async fn get_instrument_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<InstrumentCosmeticsListParams>,
    ) -> Result<Vec<Instrument>> {
        self.get(ctx, "/v2/cosmetics/instruments", encode_params(params)?)
            .await
    }

    pub async fn get_car_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<CarCosmeticsListParams>,
    ) -> Result<Vec<Car>> {
        self.get(ctx, "/v2/cosmetics/cars", encode_params(params)?)
            .await
    }

    pub async fn get_lego_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<LegoCosmeticsListParams>,
    ) -> Result<Vec<Lego>> {
        self.get(ctx, "/v2/cosmetics/lego", encode_params(params)?)
            .await
    }

    pub async fn get_lego_kit_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<LegoKitCosmeticsListParams>,
    ) -> Result<Vec<LegoKit>> {
        self.get(ctx, "/v2/cosmetics/lego/kits", encode_params(params)?)
            .await
    }

    pub async fn get_bean_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<BeanCosmeticsListParams>,
    ) -> Result<Vec<Bean>> {
        self.get(ctx, "/v2/cosmetics/beans", encode_params(params)?)
            .await
    }

    /// Get one battle royale cosmetic by id
    pub async fn get_br_cosmetic_by_id(
        &self,
        ctx: &RequestContext,
        id: &str,
        params: Option<BrCosmeticByIdParams>,
    ) -> Result<BrCosmetic> {
        require_non_empty("id", id)?;
        let url = self.endpoint("/v2/cosmetics/br", Some(id))?;
        self.fetch_url::<_, ()>(ctx, Method::GET, url, encode_params(params)?, None)
            .await
    }

    /// Get the first battle royale cosmetic matching the filters
    pub async fn search_br_cosmetic(
        &self,
        ctx: &RequestContext,
        params: Option<SearchBrCosmeticParams>,
    ) -> Result<BrCosmetic> {
        let query = self.search_query(params)?;
        self.get(ctx, "/v2/cosmetics/br/search", query).await
    }

    /// Get every battle royale cosmetic matching the filters
    pub async fn search_br_cosmetics(
        &self,
        ctx: &RequestContext,
        params: Option<SearchBrCosmeticsParams>,
    ) -> Result<Vec<BrCosmetic>> {
        let query = self.search_query(params)?;
        self.get(ctx, "/v2/cosmetics/br/search/all", query).await
    }

    /// Get battle royale cosmetics by a list of ids
    ///
    /// The ids are sent as a JSON array in the request body.
    pub async fn search_br_cosmetics_by_ids<S: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        ids: &[S],
        params: Option<BrCosmeticsByIdsParams>,
    ) -> Result<Vec<BrCosmetic>> {
        if ids.is_empty() {
            return Err(Error::EmptyParameter("ids"));
        }

        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        self.fetch(
            ctx,
            Method::POST,
            "/v2/cosmetics/br/search/ids",
            encode_params(params)?,
            Some(&ids),
        )
        .await
    }

    fn search_query(&self, params: Option<SearchBrCosmeticParams>) -> Result<QueryParams> {
        let mut params = params.unwrap_or_default();
        if params.search_language.is_none() {
            params.search_language = self.language();
        }
        QueryParams::encode(&params)
    }
}
