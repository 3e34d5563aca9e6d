//! Canonical URL definitions for the Cuti-E link flow.
//!
//! Every URL the SDK talks to or opens is built through [`LinkUrls`].  This
//! keeps the token API path, the deep-link template, and the store fallback
//! defined in exactly one place.
//!
//! # URL layout
//!
//! ```text
//! {base_url}/v1/feedback-app/generate-token   ← token API (POST)
//! cutie://link?token={token}                  ← deep link into the Feedback App
//! cutie://                                    ← install check
//! https://apps.apple.com/app/cuti-e-feedback/id0000000000  ← store fallback
//! ```

use reqwest::Url;

/// Current token API version prefix.
const VERSION: &str = "v1";

/// Production token API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.cuti-e.com";

/// Sandbox token API base URL.
pub const SANDBOX_BASE_URL: &str = "https://cutie-worker-sandbox.invotekas.workers.dev";

/// Custom URL scheme registered by the Feedback App.
pub const FEEDBACK_APP_SCHEME: &str = "cutie";

/// App-store listing opened when the Feedback App is missing.
pub const APP_STORE_URL: &str = "https://apps.apple.com/app/cuti-e-feedback/id0000000000";

/// Central authority for every URL used by the SDK.
///
/// # Examples
///
/// ```
/// use cutie_link_sdk::LinkUrls;
///
/// assert_eq!(
///     LinkUrls::token_endpoint("https://api.cuti-e.com").unwrap().as_str(),
///     "https://api.cuti-e.com/v1/feedback-app/generate-token",
/// );
/// assert_eq!(
///     LinkUrls::deep_link("abc123").unwrap().as_str(),
///     "cutie://link?token=abc123",
/// );
/// ```
pub struct LinkUrls;

impl LinkUrls {
    // ------------------------------------------------------------------
    // Token API
    // ------------------------------------------------------------------

    /// Token-issuing endpoint under `base_url`.
    ///
    /// A trailing `/` on the base URL is ignored.  Returns the parse error
    /// message when the result is not an absolute URL.
    pub fn token_endpoint(base_url: &str) -> Result<Url, String> {
        let base = base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/{VERSION}/feedback-app/generate-token"))
            .map_err(|e| format!("{base_url}: {e}"))
    }

    // ------------------------------------------------------------------
    // Feedback App
    // ------------------------------------------------------------------

    /// Deep link carrying `token` as an escaped query parameter.
    pub fn deep_link(token: &str) -> Option<Url> {
        let mut url = Url::parse(&format!("{FEEDBACK_APP_SCHEME}://link")).ok()?;
        url.query_pairs_mut().append_pair("token", token);
        Some(url)
    }

    /// Bare scheme URL used to probe whether the Feedback App is installed.
    pub fn scheme_root() -> Option<Url> {
        Url::parse(&format!("{FEEDBACK_APP_SCHEME}://")).ok()
    }

    /// Store listing for the Feedback App.
    pub fn app_store() -> Option<Url> {
        Url::parse(APP_STORE_URL).ok()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- token API ----------------------------------------------------------

    #[test]
    fn token_endpoint_production() {
        assert_eq!(
            LinkUrls::token_endpoint(DEFAULT_BASE_URL).unwrap().as_str(),
            "https://api.cuti-e.com/v1/feedback-app/generate-token",
        );
    }

    #[test]
    fn token_endpoint_ignores_trailing_slash() {
        assert_eq!(
            LinkUrls::token_endpoint("http://localhost:8787/").unwrap().as_str(),
            "http://localhost:8787/v1/feedback-app/generate-token",
        );
    }

    #[test]
    fn token_endpoint_rejects_relative_base() {
        assert!(LinkUrls::token_endpoint("not a url").is_err());
        assert!(LinkUrls::token_endpoint("").is_err());
    }

    // -- Feedback App -------------------------------------------------------

    #[test]
    fn deep_link_embeds_token() {
        assert_eq!(
            LinkUrls::deep_link("abc123").unwrap().as_str(),
            "cutie://link?token=abc123",
        );
    }

    #[test]
    fn deep_link_escapes_reserved_characters() {
        let url = LinkUrls::deep_link("a&b=c d").unwrap();
        assert_eq!(url.as_str(), "cutie://link?token=a%26b%3Dc+d");

        let token: Vec<_> = url.query_pairs().collect();
        assert_eq!(token[0].1, "a&b=c d");
    }

    #[test]
    fn scheme_root_uses_feedback_scheme() {
        assert_eq!(LinkUrls::scheme_root().unwrap().scheme(), "cutie");
    }

    #[test]
    fn app_store_is_https() {
        let url = LinkUrls::app_store().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("apps.apple.com"));
    }
}
