use serde::{Deserialize, Serialize};

pub mod client;
pub mod credentials;
pub mod image;
pub mod ingredient;
pub mod mypage;
pub mod pagination;
pub mod recipe;
pub mod user;
pub mod utils;

/// Error body returned by the backend on failed requests
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct ApiErrorBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash, Default)]
pub struct Page<T> {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub content: Vec<T>,
}
