//! Game mode playlists

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{LanguageParams, encode_params, require_non_empty};
use crate::client::Client;
use crate::error::Result;
use crate::transport::RequestContext;

pub type PlaylistsParams = LanguageParams;
pub type PlaylistByIdParams = PlaylistsParams;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaylistImages {
    pub showcase: Option<String>,
    pub mission_icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Playlist {
    pub id: String,
    pub name: Option<String>,
    pub sub_name: Option<String>,
    pub description: Option<String>,
    pub game_type: Option<String>,
    pub rating_type: Option<String>,
    pub min_players: i32,
    pub max_players: i32,
    pub max_teams: i32,
    pub max_team_size: i32,
    pub max_squads: i32,
    pub max_squad_size: i32,
    pub is_default: bool,
    pub is_tournament: bool,
    pub is_limited_time_mode: bool,
    pub is_large_team_game: bool,
    pub accumulate_to_profile_stats: bool,
    pub images: PlaylistImages,
    pub gameplay_tags: Vec<String>,
    pub path: Option<String>,
    pub added: String,
}

impl Client {
    pub async fn get_playlists(
        &self,
        ctx: &RequestContext,
        params: Option<PlaylistsParams>,
    ) -> Result<Vec<Playlist>> {
        self.get(ctx, "/v1/playlists", encode_params(params)?).await
    }

    pub async fn get_playlist_by_id(
        &self,
        ctx: &RequestContext,
        id: &str,
        params: Option<PlaylistByIdParams>,
    ) -> Result<Playlist> {
        require_non_empty("id", id)?;
        let url = self.endpoint("/v1/playlists", Some(id))?;
        self.fetch_url::<_, ()>(ctx, Method::GET, url, encode_params(params)?, None)
            .await
    }
}
