use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Result, http,
    types::{
        CatalogItem, CreateYouTubePlaylistRequest, InsertPlaylistItemRequest,
        InsertPlaylistItemSnippet, PlaylistRef, PlaylistSnippet, PlaylistStatus, ResourceId,
        Visibility, YouTubePage, YouTubePlaylist, YouTubePlaylistItem,
    },
    utils,
};

/// Largest page size the Data API accepts.
pub const MAX_RESULTS: &str = "50";

/// Requests `url` with `query` until no `nextPageToken` is returned.
async fn get_all_pages<T: DeserializeOwned>(
    client: &Client,
    token: &str,
    url: &str,
    query: &[(&str, &str)],
    what: &str,
) -> Result<Vec<T>> {
    let pb = utils::spinner(format!("Fetching {what}..."));
    let mut items: Vec<T> = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let request = || {
            let mut request = client
                .get(url)
                .bearer_auth(token)
                .query(query)
                .query(&[("maxResults", MAX_RESULTS)]);
            if let Some(page_token) = &page_token {
                request = request.query(&[("pageToken", page_token.as_str())]);
            }
            request
        };

        let page: YouTubePage<T> = match http::get_json(request).await {
            Ok(page) => page,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        items.extend(page.items);
        pb.set_message(format!("Fetched {} {what}...", items.len()));

        match page.next_page_token {
            Some(next) => page_token = Some(next),
            None => break,
        }
    }

    pb.finish_and_clear();
    Ok(items)
}

/// Playlists of the authorized channel (`playlists.list?mine=true`).
pub async fn get_my_playlists(
    client: &Client,
    token: &str,
    api_url: &str,
) -> Result<Vec<PlaylistRef>> {
    let url = format!("{api_url}/playlists");
    let playlists: Vec<YouTubePlaylist> = get_all_pages(
        client,
        token,
        &url,
        &[("part", "id,snippet"), ("mine", "true")],
        "playlists",
    )
    .await?;
    Ok(playlists.into_iter().map(PlaylistRef::from).collect())
}

/// Entries of one playlist (`playlistItems.list`). Entries that do not point
/// at a video are skipped.
pub async fn get_playlist_items(
    client: &Client,
    token: &str,
    api_url: &str,
    playlist_id: &str,
) -> Result<Vec<CatalogItem>> {
    let url = format!("{api_url}/playlistItems");
    let items: Vec<YouTubePlaylistItem> = get_all_pages(
        client,
        token,
        &url,
        &[("part", "id,snippet"), ("playlistId", playlist_id)],
        "videos",
    )
    .await?;
    Ok(items
        .into_iter()
        .filter(|item| !item.snippet.resource_id.video_id.is_empty())
        .map(CatalogItem::from)
        .collect())
}

/// Creates a playlist (`playlists.insert`).
pub async fn create(
    client: &Client,
    token: &str,
    api_url: &str,
    title: &str,
    description: &str,
    visibility: Visibility,
) -> Result<PlaylistRef> {
    let url = format!("{api_url}/playlists");
    let body = CreateYouTubePlaylistRequest {
        snippet: PlaylistSnippet {
            title: title.to_string(),
            description: description.to_string(),
        },
        status: PlaylistStatus {
            privacy_status: visibility.as_privacy_status().to_string(),
        },
    };

    let playlist: YouTubePlaylist = http::get_json(|| {
        client
            .post(&url)
            .bearer_auth(token)
            .query(&[("part", "snippet,status")])
            .json(&body)
    })
    .await?;
    Ok(playlist.into())
}

/// Appends one video (`playlistItems.insert`); the API has no batch insert.
pub async fn add_video(
    client: &Client,
    token: &str,
    api_url: &str,
    playlist_id: &str,
    video_id: &str,
) -> Result<()> {
    let url = format!("{api_url}/playlistItems");
    let body = InsertPlaylistItemRequest {
        snippet: InsertPlaylistItemSnippet {
            playlist_id: playlist_id.to_string(),
            resource_id: ResourceId {
                kind: "youtube#video".to_string(),
                video_id: video_id.to_string(),
            },
        },
    };

    http::send(|| {
        client
            .post(&url)
            .bearer_auth(token)
            .query(&[("part", "snippet")])
            .json(&body)
    })
    .await?;
    Ok(())
}

/// Deletes one playlist entry by its playlist item id.
pub async fn delete_item(client: &Client, token: &str, api_url: &str, item_id: &str) -> Result<()> {
    let url = format!("{api_url}/playlistItems");
    http::send(|| client.delete(&url).bearer_auth(token).query(&[("id", item_id)])).await?;
    Ok(())
}
