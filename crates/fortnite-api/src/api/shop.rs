//! Current item shop

use serde::{Deserialize, Serialize};

use super::cosmetics::{BrCosmetic, Car, Instrument, LegoKit, Track};
use super::encode_params;
use crate::client::Client;
use crate::error::Result;
use crate::flags::ResponseFlags;
use crate::language::Language;
use crate::transport::RequestContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopParams {
    pub language: Option<Language>,
    pub response_flags: Option<ResponseFlags>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopBundle {
    pub name: String,
    pub info: Option<String>,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopBanner {
    pub value: String,
    pub intensity: String,
    pub backend_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopLayout {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub index: i32,
    pub rank: i32,
    pub show_ineligible_offers: Option<String>,
    pub background: Option<String>,
    pub use_wide_preview: bool,
    pub display_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopColors {
    pub color1: Option<String>,
    pub color2: Option<String>,
    pub color3: Option<String>,
    pub text_background_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopRenderImage {
    pub product_tag: String,
    pub file_name: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopDisplayAsset {
    pub id: String,
    pub cosmetic_id: Option<String>,
    pub render_images: Vec<ShopRenderImage>,
}

/// One purchasable offer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopEntry {
    /// Price in V-Bucks before discounts
    pub regular_price: i32,
    pub final_price: i32,
    pub dev_name: Option<String>,
    pub offer_id: String,
    pub in_date: String,
    pub out_date: String,
    pub bundle: Option<ShopBundle>,
    pub banner: Option<ShopBanner>,
    pub giftable: bool,
    pub refundable: bool,
    pub sort_priority: i32,
    pub layout_id: Option<String>,
    pub layout: Option<ShopLayout>,
    pub colors: Option<ShopColors>,
    pub tile_size: Option<String>,
    pub display_asset_path: Option<String>,
    pub new_display_asset_path: Option<String>,
    pub new_display_asset: Option<ShopDisplayAsset>,
    pub br_items: Vec<BrCosmetic>,
    pub tracks: Vec<Track>,
    pub instruments: Vec<Instrument>,
    pub cars: Vec<Car>,
    pub lego_kits: Vec<LegoKit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shop {
    pub hash: String,
    pub date: String,
    pub vbuck_icon: String,
    pub entries: Vec<ShopEntry>,
}

impl Client {
    pub async fn get_shop(
        &self,
        ctx: &RequestContext,
        params: Option<ShopParams>,
    ) -> Result<Shop> {
        self.get(ctx, "/v2/shop", encode_params(params)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::ResponseFlag;

    #[test]
    fn test_shop_params() {
        let params = ShopParams {
            language: Some(Language::Polish),
            response_flags: Some(ResponseFlag::IncludeShopHistory.into()),
        };
        let query = encode_params(Some(params)).unwrap();
        assert_eq!(query.get("language"), Some("pl"));
        assert_eq!(query.get("responseFlags"), Some("4"));
    }

    #[test]
    fn test_decode_shop() {
        let json = r#"{
            "hash": "5f3a",
            "date": "2024-06-01T00:00:00Z",
            "vbuckIcon": "https://example.com/vbuck.png",
            "entries": [{
                "regularPrice": 1500,
                "finalPrice": 1200,
                "offerId": "v2:/abc",
                "inDate": "2024-06-01T00:00:00Z",
                "outDate": "2024-06-02T00:00:00Z",
                "giftable": true,
                "refundable": true,
                "layout": {"id": "Featured", "name": "Featured", "index": 0, "rank": 10},
                "brItems": [{"id": "CID_001", "name": "Outfit"}]
            }]
        }"#;
        let shop: Shop = serde_json::from_str(json).unwrap();

        let entry = &shop.entries[0];
        assert_eq!(entry.final_price, 1200);
        assert_eq!(entry.layout.as_ref().map(|l| l.rank), Some(10));
        assert_eq!(entry.br_items[0].id, "CID_001");
        assert!(entry.tracks.is_empty());
    }
}
