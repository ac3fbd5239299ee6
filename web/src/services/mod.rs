pub mod local_storage;
pub mod mypage_service;
