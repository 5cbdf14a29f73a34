//! OAuth 2.0 authorization code flow with PKCE.
//!
//! Used for every provider; the differences (endpoints, client secret, extra
//! query parameters) are carried by [`OAuthSettings`].

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::{
    Error, Result, info,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{OAuthSettings, PkceToken, Provider, Token, TokenResponse},
    utils, warning,
};

/// How long the user has to grant access in the browser.
const AUTH_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the complete PKCE flow for `provider` and persists the token.
///
/// 1. Generates the code verifier and its S256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the default browser
/// 4. Waits for the callback to exchange the code for a token
/// 5. Saves the token in the provider's token cache
///
/// # Errors
///
/// [`Error::Auth`] when no token arrives before the timeout, plus any error
/// from building the URL or persisting the token.
pub async fn authorize(provider: Provider, settings: OAuthSettings) -> Result<Token> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let mut params: Vec<(String, String)> = vec![
        ("client_id".to_string(), settings.client_id.clone()),
        ("response_type".to_string(), "code".to_string()),
        ("redirect_uri".to_string(), settings.redirect_uri.clone()),
        ("code_challenge".to_string(), code_challenge),
        ("code_challenge_method".to_string(), "S256".to_string()),
        ("scope".to_string(), settings.scope.clone()),
    ];
    params.extend(settings.extra_params.iter().cloned());

    let auth_url = Url::parse_with_params(&settings.auth_url, &params)
        .map_err(|e| Error::Auth(format!("invalid authorization url: {e}")))?;

    // Store verifier in shared state before redirect
    let shared_state = Arc::new(Mutex::new(Some(PkceToken {
        code_verifier,
        settings: settings.clone(),
        token: None,
    })));

    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    info!("Authorizing with {}", provider);
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;
    server.abort();

    let Some(token) = token else {
        return Err(Error::Auth(format!("{provider} authorization failed or timed out")));
    };

    TokenManager::new(provider, settings, token.clone())
        .persist()
        .await?;
    success!("Authentication with {} successful!", provider);
    Ok(token)
}

/// Polls the shared state once a second until the callback stored a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < AUTH_TIMEOUT {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|pkce| pkce.token.clone()) {
            return Some(token);
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges the authorization code from the callback for a token.
pub async fn exchange_code_pkce(
    settings: &OAuthSettings,
    code: &str,
    verifier: &str,
) -> Result<Token> {
    let mut form: Vec<(&str, &str)> = vec![
        ("grant_type", "authorization_code"),
        ("client_id", &settings.client_id),
        ("code", code),
        ("code_verifier", verifier),
        ("redirect_uri", &settings.redirect_uri),
    ];
    if let Some(secret) = &settings.client_secret {
        form.push(("client_secret", secret));
    }

    let response = Client::new()
        .post(&settings.token_url)
        .form(&form)
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = response.json().await?;
    Ok(token_from_response(json, None))
}

/// Trades a refresh token for a fresh access token.
///
/// Providers that do not rotate refresh tokens omit it from the answer; the
/// previous one is kept in that case.
pub async fn refresh_token(settings: &OAuthSettings, refresh_token: &str) -> Result<Token> {
    let mut form: Vec<(&str, &str)> = vec![
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", &settings.client_id),
    ];
    if let Some(secret) = &settings.client_secret {
        form.push(("client_secret", secret));
    }

    let response = Client::new()
        .post(&settings.token_url)
        .form(&form)
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = response.json().await?;
    Ok(token_from_response(json, Some(refresh_token)))
}

fn token_from_response(json: TokenResponse, previous_refresh: Option<&str>) -> Token {
    Token {
        access_token: json.access_token,
        refresh_token: json
            .refresh_token
            .or_else(|| previous_refresh.map(str::to_string))
            .unwrap_or_default(),
        scope: json.scope.unwrap_or_default(),
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    }
}
