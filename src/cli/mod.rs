//! # CLI Module
//!
//! Command handlers behind `playlist-sync`. They turn parsed flags into a
//! [`crate::config::SyncConfig`], connect the selected provider and print the
//! results; the work itself happens in [`crate::sync`].
//!
//! ## Commands
//!
//! - [`sync`] - Default command: resolve the song list against the master
//!   playlists and fill the target playlist
//! - [`auth`] - Run the browser authorization for one provider up front
//!
//! Handlers report failures with the `error!` macro, which ends the process
//! with exit status 1.
//!
//! ## Usage
//!
//! ```bash
//! playlist-sync auth --spotify              # Authorize Spotify once
//! playlist-sync --dry-run "Road Trip"       # See what would be added
//! playlist-sync -s -r -i songs.txt Party    # Reset and fill on Spotify
//! ```

mod auth;
mod sync;

pub use auth::auth;
pub use sync::{print_report, run, sync};
