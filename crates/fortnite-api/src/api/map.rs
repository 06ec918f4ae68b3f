//! Battle royale map images and points of interest

use serde::{Deserialize, Serialize};

use super::{LanguageParams, encode_params};
use crate::client::Client;
use crate::error::Result;
use crate::transport::RequestContext;

pub type BrMapParams = LanguageParams;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrMapImages {
    pub blank: String,
    pub pois: String,
}

/// World coordinates of a point of interest
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoiLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub location: PoiLocation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrMap {
    pub images: BrMapImages,
    pub pois: Vec<Poi>,
}

impl Client {
    pub async fn get_br_map(
        &self,
        ctx: &RequestContext,
        params: Option<BrMapParams>,
    ) -> Result<BrMap> {
        self.get(ctx, "/v1/map", encode_params(params)?).await
    }
}
