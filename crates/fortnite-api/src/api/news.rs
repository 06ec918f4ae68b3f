//! In-game news for battle royale, save the world and creative

use serde::{Deserialize, Serialize};

use super::{LanguageParams, encode_params};
use crate::client::Client;
use crate::error::Result;
use crate::transport::RequestContext;

pub type NewsParams = LanguageParams;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsMotd {
    pub id: String,
    pub title: String,
    pub tab_title: String,
    pub body: String,
    pub image: String,
    pub tile_image: String,
    pub sorting_priority: i32,
    pub hidden: bool,
    pub website_url: Option<String>,
    pub video_string: Option<String>,
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsMessage {
    pub title: String,
    pub body: String,
    pub image: String,
    pub adspace: Option<String>,
}

/// News feed of one game mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct News {
    pub hash: String,
    pub date: String,
    pub image: Option<String>,
    pub motds: Vec<NewsMotd>,
    pub messages: Vec<NewsMessage>,
}

/// News feeds of every game mode; a mode without news is `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllNews {
    pub br: Option<News>,
    pub stw: Option<News>,
    pub creative: Option<News>,
}

impl Client {
    pub async fn get_news(
        &self,
        ctx: &RequestContext,
        params: Option<NewsParams>,
    ) -> Result<AllNews> {
        self.get(ctx, "/v2/news", encode_params(params)?).await
    }

    pub async fn get_br_news(
        &self,
        ctx: &RequestContext,
        params: Option<NewsParams>,
    ) -> Result<News> {
        self.get(ctx, "/v2/news/br", encode_params(params)?).await
    }

    pub async fn get_stw_news(
        &self,
        ctx: &RequestContext,
        params: Option<NewsParams>,
    ) -> Result<News> {
        self.get(ctx, "/v2/news/stw", encode_params(params)?).await
    }

    pub async fn get_creative_news(
        &self,
        ctx: &RequestContext,
        params: Option<NewsParams>,
    ) -> Result<News> {
        self.get(ctx, "/v2/news/creative", encode_params(params)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_all_news_with_missing_mode() {
        let json = r#"{
            "br": {
                "hash": "abc",
                "date": "2024-06-01T00:00:00Z",
                "motds": [{"id": "m1", "title": "Hello", "tabTitle": "Hi", "body": "Body",
                           "image": "i", "tileImage": "t", "sortingPriority": 10, "hidden": false}],
                "messages": []
            },
            "stw": null
        }"#;
        let news: AllNews = serde_json::from_str(json).unwrap();

        let br = news.br.unwrap();
        assert_eq!(br.motds[0].sorting_priority, 10);
        assert!(news.stw.is_none());
        assert!(news.creative.is_none());
    }
}
