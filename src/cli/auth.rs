use crate::{auth, config, error, types::Provider};

/// Authorizes `provider` in the browser and caches the token.
pub async fn auth(provider: Provider) {
    let settings = match provider {
        Provider::Spotify => config::spotify_oauth(),
        Provider::YouTube => config::youtube_oauth(),
    };

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => error!("Cannot authorize with {}. Err: {}", provider, e),
    };

    if let Err(e) = auth::authorize(provider, settings).await {
        error!("{}", e);
    }
}
