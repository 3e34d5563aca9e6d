//! # Cutie Link SDK
//!
//! Lets a host application deep-link into the companion **Cuti-E Feedback
//! App**.
//!
//! The SDK provides:
//!
//! * [`LinkClient`] — holds the configuration and runs the link flow:
//!   request a short-lived token, open `cutie://link?token=…`, fall back
//!   to the store listing when the app is missing.
//! * [`LinkConfig`] — App ID / legacy API key and the token API base URL.
//! * [`UrlDispatcher`] — the platform seam for probing and opening URLs.
//! * [`KeyValueStore`] with [`MemoryStore`] and [`FileStore`] — storage for
//!   the per-installation device identifier.
//! * [`LinkError`] — one variant per failure the host may want to present.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use cutie_link_sdk::{LinkClient, MemoryStore, Url, UrlDispatcher};
//!
//! struct Platform;
//!
//! impl UrlDispatcher for Platform {
//!     fn can_open(&self, url: &Url) -> bool {
//!         url.scheme() == "https"
//!     }
//!
//!     fn open(&self, url: &Url) -> impl std::future::Future<Output = bool> + Send {
//!         println!("opening {url}");
//!         async { true }
//!     }
//! }
//!
//! # async fn run() -> Result<(), cutie_link_sdk::LinkError> {
//! let mut client = LinkClient::new(Platform, Arc::new(MemoryStore::new()));
//! client.configure("my-app-id", None);
//! client.use_sandbox();
//!
//! let opened_app = client.open_feedback_app().await?;
//! # let _ = opened_app;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod device;
pub mod dispatcher;
pub mod endpoints;
pub mod error;
pub mod storage;
pub mod token;

pub use client::LinkClient;
pub use config::LinkConfig;
pub use device::{DeviceIdProvider, DEVICE_ID_KEY};
pub use dispatcher::UrlDispatcher;
pub use endpoints::LinkUrls;
pub use error::{LinkError, StoreError};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

pub use reqwest::Url;
