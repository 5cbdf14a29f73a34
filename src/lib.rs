//! Playlist Sync Library
//!
//! This library fills a target playlist on Spotify or YouTube from a plain text
//! list of song titles. Every title is resolved against a catalog built from the
//! user's own "master" playlists using fuzzy matching guarded by a containment
//! check, and all resolved tracks are added to the target in one batch.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local OAuth callback server
//! - `auth` - OAuth 2.0 PKCE authorization flow shared by all providers
//! - `cli` - Command-line interface implementations
//! - `config` - Environment configuration and the explicit run configuration
//! - `error` - Crate-wide error type
//! - `http` - Request helpers with the transport retry policy
//! - `management` - Token cache management
//! - `matching` - Title normalization, catalog building and match resolution
//! - `server` - Local HTTP server for OAuth callbacks
//! - `service` - Capability traits implemented by every provider client
//! - `spotify` - Spotify Web API client
//! - `sync` - End-to-end playlist synchronization
//! - `types` - Data structures and type definitions
//! - `utils` - Input file reading and PKCE helpers
//! - `youtube` - YouTube Data API client
//!
//! # Example
//!
//! ```
//! use playlist_sync::{config, utils};
//!
//! #[tokio::main]
//! async fn main() -> playlist_sync::Result<()> {
//!     config::load_env().await?;
//!     let titles = utils::read_song_list("song_list.txt").await?;
//!     println!("{} songs", titles.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod management;
pub mod matching;
pub mod server;
pub mod service;
pub mod spotify;
pub mod sync;
pub mod types;
pub mod utils;
pub mod youtube;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Processing {} songs from file", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when an operation completes, such as
/// a title being matched or the batch add going through.
///
/// # Example
///
/// ```
/// success!("Added {} songs", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the program with exit code 1 right after printing. Only the
/// command handlers and `main` use it; library code returns [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("Sync failed: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the user should notice, like a title that
/// could not be matched against the catalog.
///
/// # Example
///
/// ```
/// warning!("Could not find matching song for: {}", title);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line when `verbose` is true.
///
/// The first argument is the verbose switch, usually taken from
/// [`config::SyncConfig::verbose`]; the rest follows `println!`.
///
/// # Example
///
/// ```
/// debug!(config.verbose, "Song name not in title: {}, {}", needle, candidate);
/// ```
#[macro_export]
macro_rules! debug {
  ($verbose:expr, $($arg:tt)*) => ({
    if $verbose {
      use colored::Colorize;
      println!("[{}] {}", "~".dimmed(), std::format!($($arg)*).dimmed());
    }
  })
}
