use log::{debug, error, warn};
use reqwest::StatusCode;
use url::Url;

use crate::{
    client::{ClientError, MyPageClient},
    credentials::CredentialStore,
    ingredient::{Ingredient, IngredientError, IngredientId, NewIngredient},
    pagination::{Pagination, RECOMMENDED_RECIPES_PER_PAGE},
    recipe::Recipe,
    user::{DeleteAccountParameters, Password, UserInfo},
    Page,
};

pub const INGREDIENT_ADDED_MESSAGE: &str = "재료가 추가되었습니다.";
pub const INGREDIENT_DELETED_MESSAGE: &str = "재료가 삭제되었습니다.";
pub const ACCOUNT_DELETED_MESSAGE: &str = "회원 탈퇴가 완료되었습니다. 이용해 주셔서 감사합니다.";
pub const MISSING_RECIPE_ID_MESSAGE: &str = "레시피 정보를 불러올 수 없습니다.";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("로그인이 필요합니다.")]
    MissingCredentials,
    #[error("정보를 불러오는 데 실패했습니다. 다시 로그인해주세요.")]
    Client(#[from] ClientError),
}

#[derive(Debug, thiserror::Error)]
pub enum AccountDeletionError {
    #[error("비밀번호가 일치하지 않습니다.")]
    InvalidPassword,
    #[error("회원 탈퇴 중 오류가 발생했습니다.")]
    Client(#[source] ClientError),
}

impl From<ClientError> for AccountDeletionError {
    fn from(error: ClientError) -> Self {
        match error.status() {
            Some(StatusCode::BAD_REQUEST) => AccountDeletionError::InvalidPassword,
            _ => AccountDeletionError::Client(error),
        }
    }
}

/// Everything displayed on the user page
#[derive(Debug, PartialEq, Clone, Default)]
pub struct MyPage {
    pub user_info: UserInfo,
    pub liked_recipes: Vec<Recipe>,
    pub saved_recipes: Vec<Recipe>,
    pub authored_recipes: Vec<Recipe>,
    pub ingredients: Vec<Ingredient>,
    pub recommended_recipes: Vec<Recipe>,
    recommended_page: usize,
}

impl MyPage {
    /// Loads the page for the session found in `store`.
    ///
    /// Any failure is treated as an invalid session: the access token is
    /// removed from the store and nothing is returned.
    pub async fn load(
        api_base_url: &Url,
        store: &impl CredentialStore,
    ) -> Result<MyPage, LoadError> {
        let Some(access_token) = store.access_token() else {
            warn!("No access token found, the user page requires a login");
            return Err(LoadError::MissingCredentials);
        };

        let result = match MyPageClient::new(api_base_url.clone(), Some(access_token)) {
            Ok(client) => Self::fetch(&client).await,
            Err(error) => Err(error),
        };

        result.map_err(|error| {
            if error.is_session_rejected() {
                error!("Session rejected while loading the user page: {error}");
            } else {
                error!("Failed to load the user page: {error}");
            }
            store.clear_access_token();
            LoadError::Client(error)
        })
    }

    async fn fetch(client: &MyPageClient) -> Result<MyPage, ClientError> {
        let summary = client.get_my_page_summary().await?;
        let liked_recipes = summary.liked_list.unwrap_or_default();
        debug!("{} liked recipes loaded", liked_recipes.len());

        let authored_recipes = client.list_authored_recipes().await?;
        debug!("{} authored recipes loaded", authored_recipes.len());

        let saved_recipes = client.list_bookmarked_recipes().await?;
        debug!("{} bookmarked recipes loaded", saved_recipes.len());

        let ingredients = client.list_ingredients().await?;
        debug!("{} ingredients loaded", ingredients.len());

        let recommended_recipes = if ingredients.is_empty() {
            vec![]
        } else {
            let recipes = client.list_recommended_recipes().await?;
            debug!("{} recommended recipes loaded", recipes.len());
            recipes
        };

        Ok(MyPage {
            user_info: summary.user_info,
            liked_recipes,
            saved_recipes,
            authored_recipes,
            ingredients,
            recommended_recipes,
            recommended_page: 1,
        })
    }

    pub fn recommended_pagination(&self) -> Pagination {
        Pagination::new(
            self.recommended_page,
            RECOMMENDED_RECIPES_PER_PAGE,
            self.recommended_recipes.len(),
        )
    }

    pub fn recommended_page(&self) -> Page<Recipe> {
        self.recommended_pagination()
            .page_of(&self.recommended_recipes)
    }

    pub fn set_recommended_page(&mut self, page: usize) {
        self.recommended_page = self.recommended_pagination().clamp(page);
    }

    pub fn replace_recommended_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recommended_recipes = recipes;
        self.recommended_page = 1;
    }

    pub fn push_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    pub fn remove_ingredient(&mut self, ingredient_id: IngredientId) {
        self.ingredients
            .retain(|ingredient| ingredient.id != ingredient_id);
    }
}

/// Registers a new ingredient. The page is left to the caller so it can be
/// updated before the recommendations are refreshed.
pub async fn create_ingredient(
    client: &MyPageClient,
    new_ingredient: &NewIngredient,
) -> Result<Ingredient, IngredientError> {
    let ingredient = client
        .create_ingredient(new_ingredient)
        .await
        .map_err(|error| {
            error!("Failed to add ingredient {}: {error}", new_ingredient.name);
            IngredientError::Create(error)
        })?;
    debug!("Ingredient {} added", ingredient.id);
    Ok(ingredient)
}

pub async fn delete_ingredient(
    client: &MyPageClient,
    ingredient_id: IngredientId,
) -> Result<(), IngredientError> {
    client
        .delete_ingredient(ingredient_id)
        .await
        .map_err(|error| {
            error!("Failed to delete ingredient {ingredient_id}: {error}");
            IngredientError::Delete(error)
        })?;
    debug!("Ingredient {ingredient_id} deleted");
    Ok(())
}

/// Fetches the recommendations matching the current ingredients, to be
/// applied with [`MyPage::replace_recommended_recipes`]
pub async fn fetch_recommended_recipes(client: &MyPageClient) -> Result<Vec<Recipe>, ClientError> {
    let recipes = client.list_recommended_recipes().await.map_err(|error| {
        error!("Failed to refresh recommended recipes: {error}");
        error
    })?;
    debug!("{} recommended recipes fetched", recipes.len());
    Ok(recipes)
}

/// Deletes the account of the current session after password verification.
/// Both stored tokens are cleared on success only.
pub async fn delete_account(
    client: &MyPageClient,
    store: &impl CredentialStore,
    password: Password,
) -> Result<(), AccountDeletionError> {
    client
        .delete_account(&DeleteAccountParameters::new(password))
        .await
        .map_err(|error| {
            error!("Failed to delete account: {error}");
            AccountDeletionError::from(error)
        })?;

    store.clear_credentials();
    Ok(())
}
