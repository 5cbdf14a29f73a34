use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Raw token endpoint answer; refresh responses may omit the refresh token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
}

/// Where and how to run the OAuth flow for one provider.
#[derive(Debug, Clone)]
pub struct OAuthSettings {
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    /// Provider specific query parameters appended to the authorization URL.
    pub extra_params: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub settings: OAuthSettings,
    pub token: Option<Token>,
}

/// The streaming services a run can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    YouTube,
    Spotify,
}

impl Provider {
    pub fn from_flag(spotify: bool) -> Self {
        if spotify {
            Provider::Spotify
        } else {
            Provider::YouTube
        }
    }

    /// Short lowercase key used for cache file names.
    pub fn key(&self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Spotify => "spotify",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::YouTube => write!(f, "YouTube"),
            Provider::Spotify => write!(f, "Spotify"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Unlisted,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        *self == Visibility::Public
    }

    /// YouTube `privacyStatus` value.
    pub fn as_privacy_status(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Unlisted => "unlisted",
        }
    }
}

/// A playlist owned by the current account, reduced to what the sync needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef {
    pub id: String,
    pub name: String,
}

/// One track reference found in a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Identifies this entry inside its playlist (used for removal).
    pub entry_id: String,
    /// Display title as the provider reports it.
    pub title: String,
    /// Provider id used to add the track to another playlist.
    pub native_id: String,
}

#[derive(Tabled)]
pub struct NotFoundTableRow {
    #[tabled(rename = "#")]
    pub line: usize,
    #[tabled(rename = "not found")]
    pub title: String,
}

// Spotify Web API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyUser {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyPage<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub public: Option<bool>,
    #[serde(default)]
    pub collaborative: bool,
    #[serde(default)]
    pub snapshot_id: String,
}

impl From<Playlist> for PlaylistRef {
    fn from(p: Playlist) -> Self {
        PlaylistRef {
            id: p.id,
            name: p.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
}

impl From<Track> for CatalogItem {
    fn from(t: Track) -> Self {
        CatalogItem {
            entry_id: t.uri.clone(),
            title: t.name,
            native_id: t.uri,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTracksFromPlaylistRequest {
    pub tracks: Vec<TrackUri>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackUri {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

// YouTube Data API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubePage<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubePlaylist {
    pub id: String,
    pub snippet: PlaylistSnippet,
}

impl From<YouTubePlaylist> for PlaylistRef {
    fn from(p: YouTubePlaylist) -> Self {
        PlaylistRef {
            id: p.id,
            name: p.snippet.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubePlaylistItem {
    pub id: String,
    pub snippet: PlaylistItemSnippet,
}

impl From<YouTubePlaylistItem> for CatalogItem {
    fn from(item: YouTubePlaylistItem) -> Self {
        CatalogItem {
            entry_id: item.id,
            title: item.snippet.title,
            native_id: item.snippet.resource_id.video_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub title: String,
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateYouTubePlaylistRequest {
    pub snippet: PlaylistSnippet,
    pub status: PlaylistStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStatus {
    pub privacy_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPlaylistItemRequest {
    pub snippet: InsertPlaylistItemSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPlaylistItemSnippet {
    pub playlist_id: String,
    pub resource_id: ResourceId,
}
