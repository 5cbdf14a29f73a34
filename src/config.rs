//! Configuration management for Playlist Sync.
//!
//! Provider credentials and endpoints come from environment variables, which
//! may be stored in a `.env` file. The run itself is described by an explicit
//! [`SyncConfig`] that the CLI builds from its flags and hands to the
//! synchronizer; nothing here is process-wide mutable state.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{
    Error, Result,
    types::{OAuthSettings, Visibility},
};

/// Name of the directory below the platform data dir holding `.env` and caches.
pub const APP_DIR: &str = "playlist-sync";

/// Playlists whose name contains this marker make up the catalog.
pub const DEFAULT_MASTER_MARKER: &str = "master";

/// Candidates requested from the scorer for every input title.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 5;

/// Playlist used when no name is given on the command line.
pub const DEFAULT_PLAYLIST_NAME: &str = "TEST PLAYLIST";

/// Input file used when `--input` is not given.
pub const DEFAULT_SONG_LIST_FILE: &str = "song_list.txt";

/// Loads environment variables from `.env` files.
///
/// Looks for `playlist-sync/.env` inside the platform-specific local data
/// directory first, creating the directory when needed, then for a `.env`
/// in the working directory. Variables already present in the environment
/// are never overwritten, and a missing file is not an error.
///
/// The data directory resolves to:
/// - Linux: `~/.local/share/playlist-sync/.env`
/// - macOS: `~/Library/Application Support/playlist-sync/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-sync/.env`
///
/// # Errors
///
/// Fails when the data directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = app_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("cannot parse {}: {e}", path.display())))?;
    }
    // a local .env is optional
    let _ = dotenv::dotenv();
    Ok(())
}

/// Returns `<data_local_dir>/playlist-sync`, or `./playlist-sync` when the
/// platform has no data directory.
pub fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

fn required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| Error::Config(format!("{key} must be set")))
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn or_default(key: &str, default: &str) -> String {
    optional(key).unwrap_or_else(|| default.to_string())
}

/// Returns the bind address of the local OAuth callback server.
///
/// Read from `SERVER_ADDRESS`, defaulting to `127.0.0.1:8888`. It has to
/// match the host and port of the configured redirect URIs.
pub fn server_addr() -> String {
    or_default("SERVER_ADDRESS", "127.0.0.1:8888")
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    or_default("SPOTIFY_API_URL", "https://api.spotify.com/v1")
}

/// Returns the YouTube Data API base URL (`YOUTUBE_API_URL`).
pub fn youtube_apiurl() -> String {
    or_default("YOUTUBE_API_URL", "https://www.googleapis.com/youtube/v3")
}

/// Collects the OAuth settings for Spotify.
///
/// Only `SPOTIFY_API_AUTH_CLIENT_ID` is required. The client secret is
/// optional because Spotify accepts PKCE without it.
///
/// # Errors
///
/// Returns [`Error::Config`] naming the missing variable.
pub fn spotify_oauth() -> Result<OAuthSettings> {
    Ok(OAuthSettings {
        client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
        client_secret: optional("SPOTIFY_API_AUTH_CLIENT_SECRET"),
        redirect_uri: or_default("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:8888/callback"),
        scope: or_default(
            "SPOTIFY_API_AUTH_SCOPE",
            "playlist-read-private playlist-modify-private playlist-modify-public",
        ),
        auth_url: or_default("SPOTIFY_API_AUTH_URL", "https://accounts.spotify.com/authorize"),
        token_url: or_default("SPOTIFY_API_TOKEN_URL", "https://accounts.spotify.com/api/token"),
        extra_params: Vec::new(),
    })
}

/// Collects the OAuth settings for YouTube.
///
/// Google's installed-app flow wants the client secret even with PKCE, so
/// both `YOUTUBE_CLIENT_ID` and `YOUTUBE_CLIENT_SECRET` are required.
/// `access_type=offline` makes Google hand out a refresh token.
///
/// # Errors
///
/// Returns [`Error::Config`] naming the missing variable.
pub fn youtube_oauth() -> Result<OAuthSettings> {
    Ok(OAuthSettings {
        client_id: required("YOUTUBE_CLIENT_ID")?,
        client_secret: Some(required("YOUTUBE_CLIENT_SECRET")?),
        redirect_uri: or_default("YOUTUBE_REDIRECT_URI", "http://127.0.0.1:8888/callback"),
        scope: or_default(
            "YOUTUBE_AUTH_SCOPE",
            "https://www.googleapis.com/auth/youtube https://www.googleapis.com/auth/youtube.force-ssl",
        ),
        auth_url: or_default("YOUTUBE_AUTH_URL", "https://accounts.google.com/o/oauth2/v2/auth"),
        token_url: or_default("YOUTUBE_TOKEN_URL", "https://oauth2.googleapis.com/token"),
        extra_params: vec![
            ("access_type".to_string(), "offline".to_string()),
            ("prompt".to_string(), "consent".to_string()),
        ],
    })
}

/// Everything one sync run needs to know besides the input titles.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Exact name of the target playlist.
    pub playlist: String,
    /// Description used when the target has to be created.
    pub description: String,
    pub visibility: Visibility,
    /// Resolve and report only; never read, create or modify the target.
    pub dry_run: bool,
    /// Clear the target's existing entries without asking.
    pub force_reset: bool,
    /// Case-insensitive substring marking catalog playlists.
    pub master_marker: String,
    /// How many scored candidates the resolver validates per title.
    pub candidate_limit: usize,
    pub verbose: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            playlist: DEFAULT_PLAYLIST_NAME.to_string(),
            description: String::new(),
            visibility: Visibility::Public,
            dry_run: false,
            force_reset: false,
            master_marker: DEFAULT_MASTER_MARKER.to_string(),
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            verbose: false,
        }
    }
}
