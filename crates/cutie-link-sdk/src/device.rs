//! Per-installation device identifier.

use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::KeyValueStore;

/// Storage key under which the device identifier is persisted.
pub const DEVICE_ID_KEY: &str = "com.cutie.link.deviceId";

/// Lazily creates and persists a random device identifier.
///
/// The first call generates a UUID v4 and writes it to the store; later
/// calls return the same value.  Generation happens under a lock and the
/// result is cached, so concurrent first calls agree on one identifier even
/// when the store write fails.
#[derive(Clone)]
pub struct DeviceIdProvider {
    store: Arc<dyn KeyValueStore>,
    cached: Arc<Mutex<Option<String>>>,
}

impl DeviceIdProvider {
    /// Provider reading from and writing to `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    /// Return the device identifier, creating it on first use.
    pub fn device_id(&self) -> String {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = cached.as_ref() {
            return id.clone();
        }

        let id = match self.store.get(DEVICE_ID_KEY) {
            Ok(Some(existing)) => existing,
            Ok(None) => self.generate(),
            Err(e) => {
                tracing::warn!(error = %e, "device id unreadable, generating a new one");
                self.generate()
            }
        };

        *cached = Some(id.clone());
        id
    }

    fn generate(&self) -> String {
        let id = uuid::Uuid::new_v4().to_string().to_uppercase();
        match self.store.set(DEVICE_ID_KEY, &id) {
            Ok(()) => tracing::debug!(device_id = %id, "device id created"),
            Err(e) => tracing::warn!(error = %e, "failed to persist device id"),
        }
        id
    }
}

impl std::fmt::Debug for DeviceIdProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceIdProvider").finish_non_exhaustive()
    }
}
