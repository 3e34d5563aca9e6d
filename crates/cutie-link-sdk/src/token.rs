//! Link-token request against the Cuti-E token API.
//!
//! ```text
//! POST {base_url}/v1/feedback-app/generate-token
//! X-Device-ID: <device id>
//! X-App-ID:    <app id>      (when configured)
//! X-API-Key:   <api key>     (when configured)
//!
//! {"device_id": "...", "app_id": "..."}   →   200 {"token": "..."}
//! ```

use reqwest::StatusCode;
use serde::Serialize;

use crate::config::LinkConfig;
use crate::endpoints::LinkUrls;
use crate::error::LinkError;

/// Header carrying the device identifier.
pub const DEVICE_ID_HEADER: &str = "X-Device-ID";
/// Header carrying the App ID.
pub const APP_ID_HEADER: &str = "X-App-ID";
/// Header carrying the legacy API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Body of the token request.
#[derive(Serialize)]
struct TokenRequest<'a> {
    device_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<&'a str>,
}

/// Request a fresh link token for `device_id`.
///
/// Tokens are never cached: every call hits the API once, without retry.
pub async fn request_token(
    http: &reqwest::Client,
    config: &LinkConfig,
    device_id: &str,
) -> Result<String, LinkError> {
    let url = LinkUrls::token_endpoint(config.base_url()).map_err(LinkError::InvalidURL)?;

    let mut req = http
        .post(url.clone())
        .header(DEVICE_ID_HEADER, device_id)
        .json(&TokenRequest {
            device_id,
            app_id: config.app_id(),
        });
    if let Some(app_id) = config.app_id() {
        req = req.header(APP_ID_HEADER, app_id);
    }
    if let Some(api_key) = config.api_key() {
        req = req.header(API_KEY_HEADER, api_key);
    }

    tracing::debug!(url = %url, "requesting link token");
    let res = req.send().await?;

    match res.status() {
        StatusCode::OK => {}
        StatusCode::UNAUTHORIZED => return Err(LinkError::InvalidCredentials),
        status => {
            tracing::debug!(%status, "token API returned an error");
            return Err(LinkError::ServerError(status.as_u16()));
        }
    }

    let bytes = res.bytes().await?;
    parse_token(&bytes)
}

/// Extract the non-empty `token` string from a response body.
fn parse_token(body: &[u8]) -> Result<String, LinkError> {
    let body: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| LinkError::InvalidResponse(format!("body is not JSON: {e}")))?;

    body["token"]
        .as_str()
        .filter(|t| !t.is_empty())
        .map(String::from)
        .ok_or_else(|| LinkError::InvalidResponse("missing `token` in response".into()))
}
