use std::{cell::RefCell, collections::HashMap};

use secrecy::{CloneableSecret, DebugSecret, Secret, Zeroize};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct AccessToken(pub String);

impl Zeroize for AccessToken {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
impl CloneableSecret for AccessToken {}
impl DebugSecret for AccessToken {}

/// Key/value storage holding the session tokens issued at login
pub trait CredentialStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn remove_item(&self, key: &str);

    fn access_token(&self) -> Option<Secret<AccessToken>> {
        self.get_item(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .map(|token| Secret::new(AccessToken(token)))
    }

    fn clear_access_token(&self) {
        self.remove_item(ACCESS_TOKEN_KEY);
    }

    fn clear_credentials(&self) {
        self.remove_item(ACCESS_TOKEN_KEY);
        self.remove_item(REFRESH_TOKEN_KEY);
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    items: RefCell<HashMap<String, String>>,
}

impl InMemoryCredentialStore {
    pub fn with_tokens(access_token: &str, refresh_token: &str) -> Self {
        let store = Self::default();
        store.set_item(ACCESS_TOKEN_KEY, access_token);
        store.set_item(REFRESH_TOKEN_KEY, refresh_token);
        store
    }

    pub fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
