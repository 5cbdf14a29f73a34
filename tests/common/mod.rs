#![allow(dead_code)]

use std::collections::HashMap;

use axum::Router;
use chrono::Utc;
use playlist_sync::{
    Error, Result,
    management::TokenManager,
    service::{CatalogSource, PlaylistSink},
    types::{CatalogItem, OAuthSettings, PlaylistRef, Provider, Token, Visibility},
};
use tokio::net::TcpListener;

/// Call recorded by [`MockService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    MyPlaylists,
    PlaylistItems(String),
    Create(String, Visibility),
    BatchAdd(String, Vec<String>),
    Remove(String, Vec<String>),
}

/// In-memory provider that records every call.
#[derive(Debug, Default)]
pub struct MockService {
    pub playlists: Vec<PlaylistRef>,
    pub items: HashMap<String, Vec<CatalogItem>>,
    pub calls: Vec<Call>,
    /// Playlist ids whose item listing fails.
    pub failing: Vec<String>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playlist(mut self, id: &str, name: &str, items: Vec<CatalogItem>) -> Self {
        self.playlists.push(PlaylistRef {
            id: id.to_string(),
            name: name.to_string(),
        });
        self.items.insert(id.to_string(), items);
        self
    }

    pub fn created(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Create(..)))
            .collect()
    }

    pub fn batch_adds(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::BatchAdd(..)))
            .collect()
    }

    pub fn removals(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Remove(..)))
            .collect()
    }
}

impl CatalogSource for MockService {
    async fn my_playlists(&mut self) -> Result<Vec<PlaylistRef>> {
        self.calls.push(Call::MyPlaylists);
        Ok(self.playlists.clone())
    }

    async fn playlist_items(&mut self, playlist_id: &str) -> Result<Vec<CatalogItem>> {
        self.calls.push(Call::PlaylistItems(playlist_id.to_string()));
        if self.failing.iter().any(|id| id == playlist_id) {
            return Err(Error::Config(format!("listing {playlist_id} failed")));
        }
        Ok(self.items.get(playlist_id).cloned().unwrap_or_default())
    }
}

impl PlaylistSink for MockService {
    async fn create_playlist(
        &mut self,
        name: &str,
        _description: &str,
        visibility: Visibility,
    ) -> Result<PlaylistRef> {
        self.calls.push(Call::Create(name.to_string(), visibility));
        let playlist = PlaylistRef {
            id: format!("created-{}", self.playlists.len()),
            name: name.to_string(),
        };
        self.playlists.push(playlist.clone());
        self.items.insert(playlist.id.clone(), Vec::new());
        Ok(playlist)
    }

    async fn batch_add(&mut self, playlist_id: &str, native_ids: &[String]) -> Result<()> {
        self.calls
            .push(Call::BatchAdd(playlist_id.to_string(), native_ids.to_vec()));
        Ok(())
    }

    async fn remove_items(&mut self, playlist_id: &str, items: &[CatalogItem]) -> Result<()> {
        self.calls.push(Call::Remove(
            playlist_id.to_string(),
            items.iter().map(|i| i.entry_id.clone()).collect(),
        ));
        if let Some(existing) = self.items.get_mut(playlist_id) {
            existing.retain(|i| !items.contains(i));
        }
        Ok(())
    }
}

pub fn item(title: &str, id: &str) -> CatalogItem {
    CatalogItem {
        entry_id: format!("entry-{id}"),
        title: title.to_string(),
        native_id: id.to_string(),
    }
}

/// Serves the router returned by `build` on a free local port and returns
/// its base URL. `build` gets that URL for answers that link back.
pub async fn serve(build: impl FnOnce(String) -> Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let router = build(base.clone());
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    base
}

/// Token manager holding a fresh access token `test-token`.
pub fn tokens(provider: Provider) -> TokenManager {
    let settings = OAuthSettings {
        client_id: "client".to_string(),
        client_secret: None,
        redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
        scope: String::new(),
        auth_url: "http://127.0.0.1:9/authorize".to_string(),
        token_url: "http://127.0.0.1:9/token".to_string(),
        extra_params: Vec::new(),
    };
    let token = Token {
        access_token: "test-token".to_string(),
        refresh_token: String::new(),
        scope: String::new(),
        expires_in: 3600,
        obtained_at: Utc::now().timestamp() as u64,
    };
    TokenManager::new(provider, settings, token)
}
