use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::Utc;

use crate::{
    Error, Result, auth, config,
    types::{OAuthSettings, Provider, Token},
};

/// Refresh this many seconds before the token actually expires.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    provider: Provider,
    settings: OAuthSettings,
    token: Token,
}

impl TokenManager {
    pub fn new(provider: Provider, settings: OAuthSettings, token: Token) -> Self {
        TokenManager {
            provider,
            settings,
            token,
        }
    }

    pub async fn load(provider: Provider, settings: OAuthSettings) -> Result<Self> {
        Self::load_from(&Self::token_path(provider), provider, settings).await
    }

    pub async fn load_from(
        path: &Path,
        provider: Provider,
        settings: OAuthSettings,
    ) -> Result<Self> {
        let content = async_fs::read_to_string(path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self {
            provider,
            settings,
            token,
        })
    }

    /// Loads the cached token, or runs the browser authorization when there
    /// is no cache file yet. A cache that exists but cannot be read or
    /// parsed is an error.
    pub async fn load_or_authorize(provider: Provider, settings: OAuthSettings) -> Result<Self> {
        match Self::load(provider, settings.clone()).await {
            Ok(manager) => Ok(manager),
            Err(e) if is_missing_cache(&e) => {
                let token = auth::authorize(provider, settings.clone()).await?;
                Ok(Self::new(provider, settings, token))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::token_path(self.provider);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(&path, json).await?;
        Ok(())
    }

    /// Current access token, refreshed first when it is about to expire.
    pub async fn get_valid_token(&mut self) -> Result<String> {
        if self.is_expired() {
            if self.token.refresh_token.is_empty() {
                return Err(Error::Auth(format!(
                    "{} token expired, run `playlist-sync auth` again",
                    self.provider
                )));
            }
            self.token = auth::refresh_token(&self.settings, &self.token.refresh_token).await?;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    pub fn token_path(provider: Provider) -> PathBuf {
        let mut path = config::app_dir();
        path.push(format!("cache/{}-token.json", provider.key()));
        path
    }
}

/// True when `err` only says that no token has been cached yet.
pub fn is_missing_cache(err: &Error) -> bool {
    matches!(err, Error::Io(e) if e.kind() == ErrorKind::NotFound)
}
