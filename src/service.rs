//! Capabilities the synchronizer needs from a streaming service.
//!
//! Each provider client ([`crate::spotify::SpotifyClient`],
//! [`crate::youtube::YouTubeClient`]) implements both traits; the provider is
//! picked once at startup and the run is generic over the chosen client.
//! Implementations follow pagination internally and always return complete
//! lists.

use crate::{
    Result,
    types::{CatalogItem, PlaylistRef, Visibility},
};

/// Read access to the account's playlists.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// All playlists owned by the current account.
    async fn my_playlists(&mut self) -> Result<Vec<PlaylistRef>>;

    /// Every entry of one playlist, in playlist order.
    async fn playlist_items(&mut self, playlist_id: &str) -> Result<Vec<CatalogItem>>;
}

/// Write access to a target playlist.
#[allow(async_fn_in_trait)]
pub trait PlaylistSink: CatalogSource {
    /// First playlist whose name equals `name` exactly.
    async fn find_playlist_by_name(&mut self, name: &str) -> Result<Option<PlaylistRef>> {
        let playlists = self.my_playlists().await?;
        Ok(playlists.into_iter().find(|p| p.name == name))
    }

    async fn create_playlist(
        &mut self,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<PlaylistRef>;

    /// Appends the tracks in the given order.
    async fn batch_add(&mut self, playlist_id: &str, native_ids: &[String]) -> Result<()>;

    /// Removes the given entries from the playlist.
    async fn remove_items(&mut self, playlist_id: &str, items: &[CatalogItem]) -> Result<()>;
}
