//! Banner icons and banner colors

use serde::{Deserialize, Serialize};

use super::cosmetics::{CosmeticIntroduction, CosmeticRarity, CosmeticSeries, CosmeticSet};
use super::{LanguageParams, encode_params};
use crate::client::Client;
use crate::error::Result;
use crate::query::QueryParams;
use crate::transport::RequestContext;

pub type BannersParams = LanguageParams;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerImages {
    pub small_icon: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Banner {
    pub id: String,
    pub dev_name: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub full_usage_rights: bool,
    pub rarity: Option<CosmeticRarity>,
    pub series: Option<CosmeticSeries>,
    pub set: Option<CosmeticSet>,
    pub introduction: Option<CosmeticIntroduction>,
    pub images: BannerImages,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerColor {
    pub id: String,
    /// Hex color, e.g. `ff0000`
    pub color: String,
    pub category: String,
    pub sub_category_group: i32,
}

impl Client {
    pub async fn get_banners(
        &self,
        ctx: &RequestContext,
        params: Option<BannersParams>,
    ) -> Result<Vec<Banner>> {
        self.get(ctx, "/v1/banners", encode_params(params)?).await
    }

    pub async fn get_banner_colors(&self, ctx: &RequestContext) -> Result<Vec<BannerColor>> {
        self.get(ctx, "/v1/banners/colors", QueryParams::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_banner_colors() {
        let json = r#"[
            {"id": "DefaultColor1", "color": "ff0000", "category": "Red", "subCategoryGroup": 1}
        ]"#;
        let colors: Vec<BannerColor> = serde_json::from_str(json).unwrap();
        assert_eq!(colors[0].sub_category_group, 1);
        assert_eq!(colors[0].color, "ff0000");
    }

    #[test]
    fn test_decode_banner_without_optional_groups() {
        let json = r#"{
            "id": "BRSeason01",
            "devName": "BRSeason01",
            "name": "Season 1",
            "description": "Unlocked in Season 1.",
            "category": "Battle Royale",
            "fullUsageRights": true,
            "images": {"smallIcon": "https://example.com/s.png", "icon": "https://example.com/i.png"}
        }"#;
        let banner: Banner = serde_json::from_str(json).unwrap();
        assert!(banner.full_usage_rights);
        assert!(banner.series.is_none());
        assert_eq!(banner.images.icon, "https://example.com/i.png");
    }
}
