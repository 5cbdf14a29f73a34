use std::{path::Path, time::Duration};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{Error, Result, matching::normalize};

/// Separator between song title and artist on an input line.
pub const ARTIST_SEPARATOR: &str = " - ";

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Turns one input line into a normalized title.
///
/// Blank lines give `None`. Anything from the first `" - "` on is the artist
/// and is dropped before normalizing.
pub fn parse_song_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let title = match line.split_once(ARTIST_SEPARATOR) {
        Some((title, _artist)) => title,
        None => line,
    };
    Some(normalize(title))
}

/// Reads the desired songs, one per line, in file order.
///
/// # Errors
///
/// Returns [`Error::Input`] when the file is missing or unreadable.
pub async fn read_song_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = async_fs::read_to_string(path)
        .await
        .map_err(|source| Error::Input {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(content.lines().filter_map(parse_song_line).collect())
}

/// Steady-ticking spinner for paginated reads; finish with `finish_and_clear`.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
