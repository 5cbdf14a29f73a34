//! # YouTube Integration Module
//!
//! Implements the catalog and playlist capabilities on top of the YouTube
//! Data API v3.
//!
//! ## API Coverage
//!
//! - `playlists.list` - Channel playlists, 50 per page via `nextPageToken`
//! - `playlistItems.list` - Videos of a playlist, same pagination
//! - `playlists.insert` - Create the target playlist with a `privacyStatus`
//! - `playlistItems.insert` - Add one video; called once per resolved title
//! - `playlistItems.delete` - Remove one entry when resetting the target
//!
//! ## Identifiers
//!
//! A playlist entry has its own id (used for deletion) next to the id of the
//! video it points at (used for insertion elsewhere); they map to
//! `entry_id` and `native_id` of [`crate::types::CatalogItem`].

mod client;
pub mod playlist;

pub use client::YouTubeClient;
