use std::collections::HashSet;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Result, http,
    types::{
        AddTrackToPlaylistRequest, CatalogItem, CreatePlaylistRequest, Playlist, PlaylistRef,
        PlaylistTrackItem, RemoveTracksFromPlaylistRequest, SnapshotResponse, SpotifyPage,
        SpotifyUser, TrackUri, Visibility,
    },
    utils,
};

/// Spotify accepts at most this many URIs per add or remove request.
pub const MAX_URIS_PER_REQUEST: usize = 100;

/// Follows `next` links starting at `url` and collects every item.
async fn get_all_pages<T: DeserializeOwned>(
    client: &Client,
    token: &str,
    url: String,
    what: &str,
) -> Result<Vec<T>> {
    let pb = utils::spinner(format!("Fetching {what}..."));
    let mut items: Vec<T> = Vec::new();
    let mut next = Some(url);

    while let Some(url) = next {
        let page: SpotifyPage<T> =
            match http::get_json(|| client.get(&url).bearer_auth(token)).await {
                Ok(page) => page,
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            };

        items.extend(page.items);
        pb.set_message(format!("Fetched {} {what}...", items.len()));
        next = page.next;
    }

    pb.finish_and_clear();
    Ok(items)
}

/// Playlists owned or followed by the current user (`GET /me/playlists`).
pub async fn get_my_playlists(
    client: &Client,
    token: &str,
    api_url: &str,
) -> Result<Vec<PlaylistRef>> {
    let url = format!("{api_url}/me/playlists?limit=50");
    let playlists: Vec<Playlist> = get_all_pages(client, token, url, "playlists").await?;
    Ok(playlists.into_iter().map(PlaylistRef::from).collect())
}

/// Tracks of one playlist (`GET /playlists/{id}/tracks`). Entries whose
/// track is no longer available come back as `null` and are skipped.
pub async fn get_playlist_tracks(
    client: &Client,
    token: &str,
    api_url: &str,
    playlist_id: &str,
) -> Result<Vec<CatalogItem>> {
    let url = format!("{api_url}/playlists/{playlist_id}/tracks?limit=100");
    let items: Vec<PlaylistTrackItem> = get_all_pages(client, token, url, "tracks").await?;
    Ok(items
        .into_iter()
        .filter_map(|item| item.track)
        .map(CatalogItem::from)
        .collect())
}

pub async fn get_current_user(client: &Client, token: &str, api_url: &str) -> Result<SpotifyUser> {
    let url = format!("{api_url}/me");
    http::get_json(|| client.get(&url).bearer_auth(token)).await
}

/// Creates a playlist for `user_id` (`POST /users/{user_id}/playlists`).
pub async fn create(
    client: &Client,
    token: &str,
    api_url: &str,
    user_id: &str,
    name: &str,
    description: &str,
    visibility: Visibility,
) -> Result<PlaylistRef> {
    let url = format!("{api_url}/users/{user_id}/playlists");
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: visibility.is_public(),
        collaborative: false,
    };

    let playlist: Playlist =
        http::get_json(|| client.post(&url).bearer_auth(token).json(&body)).await?;
    Ok(playlist.into())
}

/// Appends URIs in request-sized chunks, keeping their order.
pub async fn add_tracks(
    client: &Client,
    token: &str,
    api_url: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<()> {
    let url = format!("{api_url}/playlists/{playlist_id}/tracks");

    for chunk in uris.chunks(MAX_URIS_PER_REQUEST) {
        let body = AddTrackToPlaylistRequest {
            uris: chunk.to_vec(),
        };
        let _: SnapshotResponse =
            http::get_json(|| client.post(&url).bearer_auth(token).json(&body)).await?;
    }

    Ok(())
}

/// Removes every occurrence of the given tracks from the playlist.
pub async fn remove_tracks(
    client: &Client,
    token: &str,
    api_url: &str,
    playlist_id: &str,
    items: &[CatalogItem],
) -> Result<()> {
    let url = format!("{api_url}/playlists/{playlist_id}/tracks");

    let mut seen = HashSet::new();
    let uris: Vec<TrackUri> = items
        .iter()
        .filter(|item| seen.insert(item.entry_id.as_str()))
        .map(|item| TrackUri {
            uri: item.entry_id.clone(),
        })
        .collect();

    for chunk in uris.chunks(MAX_URIS_PER_REQUEST) {
        let body = RemoveTracksFromPlaylistRequest {
            tracks: chunk.to_vec(),
        };
        let _: SnapshotResponse =
            http::get_json(|| client.delete(&url).bearer_auth(token).json(&body)).await?;
    }

    Ok(())
}
