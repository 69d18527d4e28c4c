//! Single-shot HTTP fetching with error mapping. No retries, no caching:
//! every screen issues exactly one independent request per fetch.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::error::AppError;

/// Issues one GET and returns the response body on success.
///
/// The body is read only for success statuses; any other status maps to the
/// matching [`AppError`] variant without touching the body. Transport
/// failures map to the network error variants. The connection itself is
/// released back to the pool on every path.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `timeout` - total budget for this request
#[instrument(skip(client))]
pub(super) async fn fetch_text(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).timeout(timeout).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(map_transport_error(e, url));
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        warn!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response body from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", body.len());
    let preview: String = body.chars().take(256).collect();
    debug!("Response text (first 256 chars): {preview}");

    Ok(body)
}

/// Issues one GET and returns only the status code. Used by the reachability
/// probe, which never reads a body: any HTTP answer at all proves the server
/// is up.
#[instrument(skip(client))]
pub(super) async fn probe_status(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<u16, AppError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| map_transport_error(e, url))?;
    Ok(response.status().as_u16())
}

fn map_transport_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}
