use reqwest::Client;

use crate::{
    Result, config,
    management::TokenManager,
    service::{CatalogSource, PlaylistSink},
    types::{CatalogItem, PlaylistRef, Provider, Visibility},
};

use super::playlist;

/// YouTube Data API client implementing the sync capabilities.
pub struct YouTubeClient {
    http: Client,
    tokens: TokenManager,
    api_url: String,
    // playlists.list is expensive in quota, read it once per run
    playlists: Option<Vec<PlaylistRef>>,
}

impl YouTubeClient {
    pub fn new(tokens: TokenManager, api_url: String) -> Self {
        Self {
            http: Client::new(),
            tokens,
            api_url,
            playlists: None,
        }
    }

    /// Builds a client from the environment, authorizing in the browser when
    /// no token is cached yet.
    pub async fn connect() -> Result<Self> {
        let settings = config::youtube_oauth()?;
        let tokens = TokenManager::load_or_authorize(Provider::YouTube, settings).await?;
        Ok(Self::new(tokens, config::youtube_apiurl()))
    }
}

impl CatalogSource for YouTubeClient {
    async fn my_playlists(&mut self) -> Result<Vec<PlaylistRef>> {
        if let Some(playlists) = &self.playlists {
            return Ok(playlists.clone());
        }

        let token = self.tokens.get_valid_token().await?;
        let playlists = playlist::get_my_playlists(&self.http, &token, &self.api_url).await?;
        self.playlists = Some(playlists.clone());
        Ok(playlists)
    }

    async fn playlist_items(&mut self, playlist_id: &str) -> Result<Vec<CatalogItem>> {
        let token = self.tokens.get_valid_token().await?;
        playlist::get_playlist_items(&self.http, &token, &self.api_url, playlist_id).await
    }
}

impl PlaylistSink for YouTubeClient {
    async fn create_playlist(
        &mut self,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<PlaylistRef> {
        let token = self.tokens.get_valid_token().await?;
        let created = playlist::create(
            &self.http,
            &token,
            &self.api_url,
            name,
            description,
            visibility,
        )
        .await?;

        if let Some(playlists) = &mut self.playlists {
            playlists.push(created.clone());
        }
        Ok(created)
    }

    async fn batch_add(&mut self, playlist_id: &str, native_ids: &[String]) -> Result<()> {
        for video_id in native_ids {
            let token = self.tokens.get_valid_token().await?;
            playlist::add_video(&self.http, &token, &self.api_url, playlist_id, video_id).await?;
        }
        Ok(())
    }

    async fn remove_items(&mut self, _playlist_id: &str, items: &[CatalogItem]) -> Result<()> {
        for item in items {
            let token = self.tokens.get_valid_token().await?;
            playlist::delete_item(&self.http, &token, &self.api_url, &item.entry_id).await?;
        }
        Ok(())
    }
}
