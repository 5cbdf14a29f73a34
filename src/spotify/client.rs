use reqwest::Client;

use crate::{
    Result, config,
    management::TokenManager,
    service::{CatalogSource, PlaylistSink},
    types::{CatalogItem, PlaylistRef, Provider, Visibility},
};

use super::playlist;

/// Spotify Web API client implementing the sync capabilities.
pub struct SpotifyClient {
    http: Client,
    tokens: TokenManager,
    api_url: String,
    user_id: Option<String>,
}

impl SpotifyClient {
    pub fn new(tokens: TokenManager, api_url: String) -> Self {
        Self {
            http: Client::new(),
            tokens,
            api_url,
            user_id: None,
        }
    }

    /// Builds a client from the environment, authorizing in the browser when
    /// no token is cached yet.
    pub async fn connect() -> Result<Self> {
        let settings = config::spotify_oauth()?;
        let tokens = TokenManager::load_or_authorize(Provider::Spotify, settings).await?;
        Ok(Self::new(tokens, config::spotify_apiurl()))
    }

    async fn user_id(&mut self) -> Result<String> {
        if let Some(id) = &self.user_id {
            return Ok(id.clone());
        }

        let token = self.tokens.get_valid_token().await?;
        let user = playlist::get_current_user(&self.http, &token, &self.api_url).await?;
        self.user_id = Some(user.id.clone());
        Ok(user.id)
    }
}

impl CatalogSource for SpotifyClient {
    async fn my_playlists(&mut self) -> Result<Vec<PlaylistRef>> {
        let token = self.tokens.get_valid_token().await?;
        playlist::get_my_playlists(&self.http, &token, &self.api_url).await
    }

    async fn playlist_items(&mut self, playlist_id: &str) -> Result<Vec<CatalogItem>> {
        let token = self.tokens.get_valid_token().await?;
        playlist::get_playlist_tracks(&self.http, &token, &self.api_url, playlist_id).await
    }
}

impl PlaylistSink for SpotifyClient {
    async fn create_playlist(
        &mut self,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<PlaylistRef> {
        let user_id = self.user_id().await?;
        let token = self.tokens.get_valid_token().await?;
        playlist::create(
            &self.http,
            &token,
            &self.api_url,
            &user_id,
            name,
            description,
            visibility,
        )
        .await
    }

    async fn batch_add(&mut self, playlist_id: &str, native_ids: &[String]) -> Result<()> {
        let token = self.tokens.get_valid_token().await?;
        playlist::add_tracks(&self.http, &token, &self.api_url, playlist_id, native_ids).await
    }

    async fn remove_items(&mut self, playlist_id: &str, items: &[CatalogItem]) -> Result<()> {
        let token = self.tokens.get_valid_token().await?;
        playlist::remove_tracks(&self.http, &token, &self.api_url, playlist_id, items).await
    }
}
