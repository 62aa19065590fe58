use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use staytrack::PreferenceBackend;

// localStorage, as seen through gloo
//
// availability is probed once up front: private browsing modes and some
// embedded webviews hand back no storage at all, and LocalStorage::raw()
// panics in that case
#[derive(Clone, Debug)]
pub struct LocalStorageBackend {
    available: bool,
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        let available = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .is_some();

        if !available {
            tracing::warn!("localStorage unavailable, preferences will not persist");
        }

        LocalStorageBackend { available }
    }
}

impl PreferenceBackend for LocalStorageBackend {
    fn is_available(&self) -> bool {
        self.available
    }

    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        match LocalStorage::get::<serde_json::Value>(key) {
            Ok(value) => Ok(Some(value.to_string())),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => {
                console_error!(format!("Failed to fetch local storage {key}: {err}"));
                Err(anyhow::Error::msg("Local storage failure, see console log"))
            }
        }
    }

    fn save(&mut self, key: &str, raw: &str) -> anyhow::Result<()> {
        let value: serde_json::Value = serde_json::from_str(raw)?;

        LocalStorage::set(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
