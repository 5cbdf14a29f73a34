//! # Song Matching
//!
//! Resolves loosely typed song titles against the tracks of the user's master
//! playlists.
//!
//! ```text
//! input line ──► normalize ──► scorer.rank(top N) ──► containment check ──► CatalogItem
//!                                    ▲
//! master playlists ──► normalize ──► Catalog
//! ```
//!
//! The same [`normalize`] is applied to catalog keys and input titles. The
//! resolver only accepts a fuzzy candidate when the normalized input appears
//! literally (case-insensitive) inside the normalized candidate, so a high
//! similarity score alone never picks a track.

mod catalog;
mod normalize;
mod resolver;
mod scorer;

pub use catalog::{Catalog, build_catalog, find_master_playlists, is_master_playlist};
pub use normalize::normalize;
pub use resolver::{MatchResolver, MatchResult, contains_title};
pub use scorer::{Candidate, Scorer, TokenSetScorer};
