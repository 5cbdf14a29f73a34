//! Request helpers shared by the provider clients.
//!
//! Transport policy lives here, never in the sync core: `502 Bad Gateway` is
//! retried after 10 seconds and `429 Too Many Requests` waits for the
//! `Retry-After` delay when it is at most two minutes. Every other
//! non-success status is returned as an error.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{Result, warning};

/// When and how long to wait before sending a request again.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first attempt; the last answer is returned as is.
    pub max_retries: u32,
    pub bad_gateway_delay: Duration,
    /// Longest `Retry-After` that is still waited for.
    pub max_retry_after: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            bad_gateway_delay: Duration::from_secs(10),
            max_retry_after: Duration::from_secs(120),
        }
    }
}

/// Sends the request built by `build` under the default [`RetryPolicy`].
pub async fn send(build: impl Fn() -> RequestBuilder) -> Result<Response> {
    send_with(&RetryPolicy::default(), build).await
}

/// Sends the request built by `build`, rebuilding it for every retry.
pub async fn send_with(
    policy: &RetryPolicy,
    build: impl Fn() -> RequestBuilder,
) -> Result<Response> {
    let mut attempt = 0;

    loop {
        let response = build().send().await?;
        let status = response.status();
        attempt += 1;

        if attempt > policy.max_retries {
            return Ok(response.error_for_status()?);
        }

        match status {
            StatusCode::BAD_GATEWAY => {
                sleep(policy.bad_gateway_delay).await;
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(Duration::from_secs(1));

                if retry_after > policy.max_retry_after {
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds. Try again later.",
                        retry_after.as_secs()
                    );
                    return Ok(response.error_for_status()?);
                }
                sleep(retry_after).await;
            }
            _ => return Ok(response.error_for_status()?),
        }
    }
}

/// [`send`] and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(build: impl Fn() -> RequestBuilder) -> Result<T> {
    let response = send(build).await?;
    Ok(response.json::<T>().await?)
}
