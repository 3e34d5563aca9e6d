//! CLI configuration.
//!
//! Resolves the SDK [`LinkConfig`] and the store location from command-line
//! flags, falling back to environment variables for anything not given.

use std::path::PathBuf;

use cutie_link_sdk::LinkConfig;

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub app_id: Option<String>,
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub sandbox: bool,
    pub store: Option<PathBuf>,
}

/// Fully resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Configuration handed to the SDK client.
    pub link: LinkConfig,
    /// Explicit store file; `None` uses the platform config directory.
    pub store_path: Option<PathBuf>,
}

impl CliConfig {
    /// Build the configuration from flags and environment variables.
    ///
    /// | Variable        | Flag         | Description                          |
    /// |-----------------|--------------|--------------------------------------|
    /// | `CUTIE_APP_ID`  | `--app-id`   | App ID                               |
    /// | `CUTIE_API_KEY` | `--api-key`  | Legacy API key                       |
    /// | `CUTIE_API_URL` | `--api-url`  | Token API base URL                   |
    /// | `CUTIE_SANDBOX` | `--sandbox`  | `1` / `true` targets the sandbox     |
    /// | `CUTIE_STORE`   | `--store`    | Path of the device-id store file     |
    pub fn from_env(overrides: Overrides) -> Self {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    #[allow(deprecated)]
    fn resolve(overrides: Overrides, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let app_id = overrides.app_id.or_else(|| lookup("CUTIE_APP_ID"));
        let api_key = overrides.api_key.or_else(|| lookup("CUTIE_API_KEY"));
        let api_url = overrides.api_url.or_else(|| lookup("CUTIE_API_URL"));
        let sandbox = overrides.sandbox || lookup("CUTIE_SANDBOX").is_some_and(|v| is_truthy(&v));
        let store_path = overrides.store.or_else(|| lookup("CUTIE_STORE").map(PathBuf::from));

        let mut link = LinkConfig::default();
        if let Some(app_id) = &app_id {
            link.configure(app_id, api_url.as_deref());
        }
        if let Some(api_key) = &api_key {
            link.configure_with_api_key(api_key, None);
            if let Some(api_url) = &api_url {
                link.set_base_url(api_url);
            }
        }
        if !link.has_credentials() && api_url.is_some() {
            tracing::warn!("API URL ignored without an App ID or API key");
        }
        if sandbox {
            link.use_sandbox();
        }

        Self { link, store_path }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
