//! API utilities for frontend-backend communication
//!
//! Every call returns `Result<T, String>`; the message is what the list page
//! shows in its error banner.

use contracts::shared::query::with_query;
use contracts::shared::response::parse_count;
use gloo_net::http::Request;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL for API requests
///
/// `INVENTORY_API_BASE` at compile time wins; otherwise the page origin, so
/// the app works behind a same-origin proxy.
static API_BASE: Lazy<String> = Lazy::new(|| match option_env!("INVENTORY_API_BASE") {
    Some(base) => base.trim_end_matches('/').to_string(),
    None => web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default(),
});

pub fn api_base() -> String {
    API_BASE.clone()
}

/// Build a full API URL from a path like `/api/component_list`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn get_text(url: &str) -> Result<String, String> {
    log::debug!("GET {}", url);

    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} for {}", response.status(), url));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// GET `path` with `params` as query string and parse the JSON body
pub async fn get_json<T, Q>(path: &str, params: &Q) -> Result<T, String>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let url = api_url(&with_query(path, params)?);
    let body = get_text(&url).await?;
    serde_json::from_str(&body).map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET an endpoint that takes no parameters
pub async fn get_json_at<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let body = get_text(&api_url(path)).await?;
    serde_json::from_str(&body).map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET a `*_count` endpoint
pub async fn get_count<Q: Serialize>(path: &str, params: &Q) -> Result<usize, String> {
    let url = api_url(&with_query(path, params)?);
    let body = get_text(&url).await?;
    parse_count(&body)
}

/// POST with the parameters in the query string and an empty body
pub async fn post_query<Q: Serialize>(path: &str, params: &Q) -> Result<(), String> {
    let url = api_url(&with_query(path, params)?);
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let detail = response.text().await.unwrap_or_default();
        return Err(if detail.trim().is_empty() {
            format!("HTTP {}", response.status())
        } else {
            format!("HTTP {}: {}", response.status(), detail.trim())
        });
    }

    Ok(())
}
