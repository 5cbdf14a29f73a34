//! # API Module
//!
//! HTTP endpoints served by the local server while an OAuth authorization is
//! in progress.
//!
//! - [`callback`] - Receives the authorization code from the provider and
//!   exchanges it, together with the PKCE verifier, for a token.
//! - [`health`] - Returns status and version, handy to check that the
//!   callback server is reachable at the configured redirect address.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use playlist_sync::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
