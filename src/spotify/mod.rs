//! # Spotify Integration Module
//!
//! Implements the catalog and playlist capabilities on top of the Spotify Web
//! API.
//!
//! ## Architecture
//!
//! ```text
//! Synchronizer
//!      ↓  CatalogSource / PlaylistSink
//! SpotifyClient (token refresh, user id)
//!      ↓
//! playlist endpoints (pagination, chunking)
//!      ↓
//! http helpers (retry policy) → Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user id, needed to create playlists
//! - `GET /me/playlists` - User's playlists, followed through `next` links
//! - `GET /playlists/{id}/tracks` - Playlist tracks, 100 per page
//! - `POST /users/{user_id}/playlists` - Create the target playlist
//! - `POST /playlists/{id}/tracks` - Add up to 100 track URIs per request
//! - `DELETE /playlists/{id}/tracks` - Remove tracks when resetting the target
//!
//! ## Identifiers
//!
//! Spotify has no per-entry id inside a playlist, so a [`CatalogItem`]
//! carries the track URI both as `entry_id` and `native_id`.
//!
//! ## Authentication
//!
//! The access token comes from the shared PKCE flow in [`crate::auth`] and is
//! refreshed by [`crate::management::TokenManager`] four minutes before it
//! expires.
//!
//! [`CatalogItem`]: crate::types::CatalogItem

mod client;
pub mod playlist;

pub use client::SpotifyClient;
