//! High-level client for opening the Cuti-E Feedback App.
//!
//! [`LinkClient`] owns the configuration, the device identity, and the
//! platform [`UrlDispatcher`] on behalf of one host application.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use cutie_link_sdk::{FileStore, LinkClient, Url, UrlDispatcher};
//! # struct Platform;
//! # impl UrlDispatcher for Platform {
//! #     fn can_open(&self, _url: &Url) -> bool { true }
//! #     fn open(&self, _url: &Url) -> impl std::future::Future<Output = bool> + Send {
//! #         async { true }
//! #     }
//! # }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = LinkClient::new(Platform, Arc::new(FileStore::in_config_dir()?));
//! client.configure("my-app-id", None);
//!
//! if client.open_feedback_app().await? {
//!     println!("Feedback App opened");
//! } else {
//!     println!("Feedback App missing, store opened");
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::config::LinkConfig;
use crate::device::DeviceIdProvider;
use crate::dispatcher::UrlDispatcher;
use crate::endpoints::LinkUrls;
use crate::error::LinkError;
use crate::storage::KeyValueStore;
use crate::token;

/// Entry point of the SDK.
///
/// Configuration methods take `&mut self`; the link flow takes `&self`, so
/// several flows may run concurrently once the client is configured.  Each
/// one requests its own token.
pub struct LinkClient<D> {
    config: LinkConfig,
    device: DeviceIdProvider,
    dispatcher: D,
    http: reqwest::Client,
}

impl<D: UrlDispatcher> LinkClient<D> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Unconfigured client targeting the production API.
    pub fn new(dispatcher: D, store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_config(LinkConfig::default(), dispatcher, store)
    }

    /// Client starting from an existing configuration.
    pub fn with_config(config: LinkConfig, dispatcher: D, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            device: DeviceIdProvider::new(store),
            dispatcher,
            http: reqwest::Client::new(),
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Configure with an App ID, optionally overriding the API URL.
    ///
    /// See [`LinkConfig::configure`].
    pub fn configure(&mut self, app_id: &str, api_url: Option<&str>) {
        self.config.configure(app_id, api_url);
    }

    /// Configure with a legacy API key.
    ///
    /// See [`LinkConfig::configure_with_api_key`].
    #[deprecated(note = "use `configure` with an App ID instead")]
    #[allow(deprecated)]
    pub fn configure_with_api_key(&mut self, api_key: &str, app_id: Option<&str>) {
        self.config.configure_with_api_key(api_key, app_id);
    }

    /// Target the sandbox token API.
    pub fn use_sandbox(&mut self) {
        self.config.use_sandbox();
    }

    /// Target a custom token API base URL without touching credentials.
    ///
    /// See [`LinkConfig::set_base_url`].
    pub fn set_base_url(&mut self, base_url: &str) {
        self.config.set_base_url(base_url);
    }

    // ------------------------------------------------------------------
    // Link flow
    // ------------------------------------------------------------------

    /// Request a link token for this installation.
    ///
    /// Fails with [`LinkError::NotConfigured`] before any network activity
    /// when no credential is set.
    pub async fn request_token(&self) -> Result<String, LinkError> {
        if !self.config.has_credentials() {
            return Err(LinkError::NotConfigured);
        }

        let device_id = self.device.device_id();
        token::request_token(&self.http, &self.config, &device_id).await
    }

    /// Open the Feedback App through a freshly issued deep link.
    ///
    /// 1. Requests a link token (see [`Self::request_token`]).
    /// 2. Builds `cutie://link?token=…`.
    /// 3. Opens it when a handler is registered and returns `true`.
    ///
    /// When the app is missing, or refuses the deep link, the store listing
    /// is opened instead (best-effort) and `false` is returned.
    pub async fn open_feedback_app(&self) -> Result<bool, LinkError> {
        let token = self.request_token().await?;
        let deep_link = LinkUrls::deep_link(&token).ok_or(LinkError::InvalidDeepLink)?;

        if self.dispatcher.can_open(&deep_link) {
            if self.dispatcher.open(&deep_link).await {
                tracing::info!("feedback app opened");
                return Ok(true);
            }
            tracing::warn!("feedback app did not accept the deep link");
        }

        self.open_app_store().await;
        Ok(false)
    }

    /// Whether a handler for the `cutie://` scheme is registered.
    pub fn is_feedback_app_installed(&self) -> bool {
        LinkUrls::scheme_root().is_some_and(|url| self.dispatcher.can_open(&url))
    }

    async fn open_app_store(&self) {
        let Some(store_url) = LinkUrls::app_store() else {
            return;
        };
        if self.dispatcher.open(&store_url).await {
            tracing::info!(url = %store_url, "feedback app not installed, store opened");
        } else {
            tracing::warn!(url = %store_url, "failed to open store listing");
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current configuration.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Device identifier, created and persisted on first use.
    pub fn device_id(&self) -> String {
        self.device.device_id()
    }

    /// The platform dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }
}
