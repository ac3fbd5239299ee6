use log::{debug, warn};

use recipe_mypage::credentials::CredentialStore;

use crate::utils::get_local_storage;

/// Session tokens stored in the browser by the login page
pub struct LocalStorageService;

impl CredentialStore for LocalStorageService {
    fn get_item(&self, key: &str) -> Option<String> {
        let Ok(storage) = get_local_storage() else {
            warn!("Unable to access localStorage, no `{key}` available");
            return None;
        };

        match storage.get_item(key) {
            Ok(value) => value,
            Err(_) => {
                warn!("Failed to read `{key}` from localStorage");
                None
            }
        }
    }

    fn remove_item(&self, key: &str) {
        let Ok(storage) = get_local_storage() else {
            warn!("Unable to access localStorage, `{key}` not removed");
            return;
        };

        if storage.remove_item(key).is_ok() {
            debug!("`{key}` removed from localStorage");
        } else {
            warn!("Failed to remove `{key}` from localStorage");
        }
    }
}
