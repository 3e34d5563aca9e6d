//! Credentials and API location for the link flow.

use crate::endpoints::{DEFAULT_BASE_URL, SANDBOX_BASE_URL};

/// Configuration read by [`LinkClient`](crate::LinkClient) when opening the
/// Feedback App.
///
/// * `app_id`   – preferred, non-secret identifier from the admin dashboard.
/// * `api_key`  – legacy secret credential, superseded by `app_id`.
/// * `base_url` – token API base URL (production unless overridden).
///
/// No validation happens here: a missing credential is only reported when
/// a link is actually requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    app_id: Option<String>,
    api_key: Option<String>,
    base_url: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl LinkConfig {
    /// Configure with an App ID.
    ///
    /// Clears any legacy API key.  `api_url` replaces the base URL; `None`
    /// restores the production endpoint.
    pub fn configure(&mut self, app_id: &str, api_url: Option<&str>) {
        self.app_id = Some(app_id.to_string());
        self.api_key = None;
        self.base_url = api_url.unwrap_or(DEFAULT_BASE_URL).to_string();
    }

    /// Configure with a legacy API key and an optional App ID.
    ///
    /// An App ID already configured is kept when `app_id` is `None`.  The
    /// base URL is left untouched.
    #[deprecated(note = "use `configure` with an App ID instead")]
    pub fn configure_with_api_key(&mut self, api_key: &str, app_id: Option<&str>) {
        self.api_key = Some(api_key.to_string());
        if let Some(app_id) = app_id {
            self.app_id = Some(app_id.to_string());
        }
    }

    /// Point the token API at the sandbox endpoint.
    pub fn use_sandbox(&mut self) {
        self.base_url = SANDBOX_BASE_URL.to_string();
    }

    /// Point the token API at `base_url`, leaving credentials untouched.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.to_string();
    }

    /// The configured App ID, if any.
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// The configured legacy API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The token API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether at least one credential is set.
    pub fn has_credentials(&self) -> bool {
        self.app_id.is_some() || self.api_key.is_some()
    }
}
