//! Platform URL dispatch seam.
//!
//! Opening URLs is a platform concern (on mobile it must also happen on the
//! UI thread).  [`LinkClient`](crate::LinkClient) only talks to a
//! [`UrlDispatcher`]; hosts implement it on top of their platform API and
//! are responsible for hopping to the UI thread inside both methods.

use std::future::Future;

use reqwest::Url;

/// Capability to probe for and open URLs.
pub trait UrlDispatcher: Send + Sync {
    /// Whether a handler is registered for `url`.
    fn can_open(&self, url: &Url) -> bool;

    /// Open `url`, resolving to `true` once the platform reports success.
    fn open(&self, url: &Url) -> impl Future<Output = bool> + Send;
}
