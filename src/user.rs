use std::{fmt, str::FromStr};

use anyhow::anyhow;
use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret, Zeroize};
use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Default)]
pub struct UserInfo {
    pub email: String,
    pub name: String,
    pub nickname: String,
}

impl UserInfo {
    /// Uppercased first character of the nickname, used as a text avatar
    pub fn initial(&self) -> String {
        self.nickname
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <{}>", self.nickname, self.email)
    }
}

/// Body of `GET /api/mypages/me`
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MyPageSummary {
    pub user_info: UserInfo,
    #[serde(default)]
    pub liked_list: Option<Vec<Recipe>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct Password(pub String);

impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
impl CloneableSecret for Password {}
impl DebugSecret for Password {}
impl SerializableSecret for Password {}

impl FromStr for Password {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(anyhow!("Password must not be empty"));
        }

        Ok(Self(s.to_string()))
    }
}

/// Body of `DELETE /api/user/delete`
#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteAccountParameters {
    pub password: Secret<Password>,
}

impl DeleteAccountParameters {
    pub fn new(password: Password) -> Self {
        Self {
            password: Secret::new(password),
        }
    }
}
