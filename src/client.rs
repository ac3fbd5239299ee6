use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, Method, Response, StatusCode,
};
use secrecy::{ExposeSecret, Secret};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    credentials::{AccessToken, CredentialStore},
    ingredient::{Ingredient, IngredientId, NewIngredient},
    recipe::Recipe,
    user::{DeleteAccountParameters, MyPageSummary},
    ApiErrorBody,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Failed to call the API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to decode the API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("API responded with status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(error) => error.status(),
            ClientError::InvalidUrl(_) | ClientError::Decode(_) => None,
        }
    }

    /// Whether the backend rejected the session rather than the request
    pub fn is_session_rejected(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

/// REST client for the endpoints backing the user page
#[derive(Debug, Clone)]
pub struct MyPageClient {
    http: Client,
    api_base_url: Url,
    access_token: Option<Secret<AccessToken>>,
}

impl MyPageClient {
    pub fn new(
        api_base_url: Url,
        access_token: Option<Secret<AccessToken>>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::ClientBuilder::new()
            .default_headers({
                let mut headers = HeaderMap::new();
                headers.insert("Accept", HeaderValue::from_static("application/json"));
                headers
            })
            .build()?;

        Ok(Self {
            http,
            api_base_url,
            access_token,
        })
    }

    pub fn from_store(api_base_url: Url, store: &impl CredentialStore) -> Result<Self, ClientError> {
        Self::new(api_base_url, store.access_token())
    }

    pub async fn get_my_page_summary(&self) -> Result<MyPageSummary, ClientError> {
        self.call_api(Method::GET, "api/mypages/me", None::<i32>)
            .await
    }

    pub async fn list_authored_recipes(&self) -> Result<Vec<Recipe>, ClientError> {
        self.call_list_api("api/mypages/my-recipes").await
    }

    pub async fn list_bookmarked_recipes(&self) -> Result<Vec<Recipe>, ClientError> {
        self.call_list_api("api/mypages/bookmarked-recipes").await
    }

    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, ClientError> {
        self.call_list_api("api/mypages/ingredients").await
    }

    pub async fn list_recommended_recipes(&self) -> Result<Vec<Recipe>, ClientError> {
        self.call_list_api("api/mypages/recommended-recipes").await
    }

    pub async fn create_ingredient(
        &self,
        new_ingredient: &NewIngredient,
    ) -> Result<Ingredient, ClientError> {
        self.call_api(Method::POST, "api/mypages/ingredients", Some(new_ingredient))
            .await
    }

    pub async fn delete_ingredient(&self, ingredient_id: IngredientId) -> Result<(), ClientError> {
        self.send(
            Method::DELETE,
            &format!("api/mypages/ingredients/{ingredient_id}"),
            None::<i32>,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_account(
        &self,
        parameters: &DeleteAccountParameters,
    ) -> Result<(), ClientError> {
        self.send(Method::DELETE, "api/user/delete", Some(parameters))
            .await?;
        Ok(())
    }

    /// An empty body or a `null` one is an empty list
    async fn call_list_api<R: DeserializeOwned>(&self, path: &str) -> Result<Vec<R>, ClientError> {
        let body = self
            .send(Method::GET, path, None::<i32>)
            .await?
            .text()
            .await?;
        if body.trim().is_empty() {
            return Ok(vec![]);
        }

        let list: Option<Vec<R>> = serde_json::from_str(&body)?;
        Ok(list.unwrap_or_default())
    }

    async fn call_api<R: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<R, ClientError> {
        Ok(self.send(method, path, body).await?.json().await?)
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<Response, ClientError> {
        let url = self.api_base_url.join(path)?;
        debug!("Calling API: {method} {url}");
        let mut request = self.http.request(method, url);

        if let Some(access_token) = &self.access_token {
            request = request.bearer_auth(&access_token.expose_secret().0);
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .map(|body| body.message);
        Err(ClientError::Status { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, true)]
    #[case(StatusCode::FORBIDDEN, true)]
    #[case(StatusCode::BAD_REQUEST, false)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn test_session_rejection(#[case] status: StatusCode, #[case] expected: bool) {
        let error = ClientError::Status {
            status,
            message: None,
        };
        assert_eq!(error.is_session_rejected(), expected);
    }

    #[rstest]
    fn test_status_error_message() {
        let error = ClientError::Status {
            status: StatusCode::BAD_REQUEST,
            message: Some("비밀번호가 일치하지 않습니다.".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "API responded with status 400 Bad Request: 비밀번호가 일치하지 않습니다."
        );
    }
}
