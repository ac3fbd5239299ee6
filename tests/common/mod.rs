#![allow(dead_code)]

use rstest::*;
use serde_json::{json, Value};
use url::Url;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use recipe_mypage::credentials::InMemoryCredentialStore;

pub const ACCESS_TOKEN: &str = "test_access_token";
pub const REFRESH_TOKEN: &str = "test_refresh_token";

#[fixture]
pub async fn backend() -> MockServer {
    MockServer::start().await
}

#[fixture]
pub fn store() -> InMemoryCredentialStore {
    InMemoryCredentialStore::with_tokens(ACCESS_TOKEN, REFRESH_TOKEN)
}

pub fn api_base_url(backend: &MockServer) -> Url {
    format!("{}/", backend.uri()).parse().unwrap()
}

pub async fn mock_get_api(backend: &MockServer, api_path: &str, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(api_path))
        .and(header("authorization", format!("Bearer {ACCESS_TOKEN}")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_json(body),
        )
        .expect(expected_calls)
        .mount(backend)
        .await;
}

pub async fn mock_failing_api(
    backend: &MockServer,
    http_method: &str,
    api_path: &str,
    status: u16,
    message: &str,
) {
    Mock::given(method(http_method))
        .and(path(api_path))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "application/json")
                .set_body_json(json!({ "message": message })),
        )
        .mount(backend)
        .await;
}

pub fn user_info() -> Value {
    json!({ "email": "cook@example.com", "name": "김요리", "nickname": "cook" })
}

pub fn recommended_recipes(count: usize) -> Value {
    Value::Array(
        (1..=count)
            .map(|index| {
                json!({
                    "rcpSno": index,
                    "rcpTtl": format!("추천 레시피 {index}"),
                    "rcpImgUrl": "/images/recommended.jpg",
                    "inqCnt": index * 10,
                    "rcmmCnt": index
                })
            })
            .collect(),
    )
}

pub fn onion() -> Value {
    json!({ "id": 1, "name": "양파", "quantity": "2", "unit": "개", "memo": null })
}
