use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use recipe_mypage::{
    client::MyPageClient,
    credentials::InMemoryCredentialStore,
    ingredient::{Ingredient, IngredientError, IngredientId, NewIngredient},
    mypage::{create_ingredient, delete_ingredient, fetch_recommended_recipes, MyPage},
    recipe::Recipe,
};

mod common;

use common::{
    api_base_url, backend, mock_failing_api, mock_get_api, onion, recommended_recipes, store,
    ACCESS_TOKEN,
};

fn client(backend: &MockServer, store: &InMemoryCredentialStore) -> MyPageClient {
    MyPageClient::from_store(api_base_url(backend), store).unwrap()
}

fn my_page_with_recommendations_on_last_page() -> MyPage {
    let mut my_page = MyPage::default();
    my_page.push_ingredient(serde_json::from_value(onion()).unwrap());
    my_page.replace_recommended_recipes(
        serde_json::from_value::<Vec<Recipe>>(recommended_recipes(12)).unwrap(),
    );
    my_page.set_recommended_page(3);
    my_page
}

fn garlic() -> NewIngredient {
    NewIngredient::try_new(
        "마늘".to_string(),
        "5".to_string(),
        "쪽".to_string(),
        "".to_string(),
    )
    .unwrap()
}

async fn mock_created_garlic(backend: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/mypages/ingredients"))
        .and(header("authorization", format!("Bearer {ACCESS_TOKEN}")))
        .and(body_json(
            json!({ "name": "마늘", "quantity": "5", "unit": "쪽", "memo": "" }),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_json(json!({ "id": 2, "name": "마늘", "quantity": 5, "unit": "쪽", "memo": "" })),
        )
        .expect(1)
        .mount(backend)
        .await;
}

fn ingredient_names(my_page: &MyPage) -> Vec<&str> {
    my_page
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect()
}

#[rstest]
#[tokio::test]
async fn test_created_ingredient_is_applied_before_recommendations_refresh(
    #[future] backend: MockServer,
    store: InMemoryCredentialStore,
) {
    let backend = backend.await;
    mock_created_garlic(&backend).await;
    mock_get_api(
        &backend,
        "/api/mypages/recommended-recipes",
        recommended_recipes(7),
        1,
    )
    .await;
    let client = client(&backend, &store);
    let mut my_page = my_page_with_recommendations_on_last_page();

    let ingredient = create_ingredient(&client, &garlic()).await.unwrap();
    my_page.push_ingredient(ingredient);

    assert_eq!(my_page.ingredients[1].id, IngredientId(2));
    assert_eq!(ingredient_names(&my_page), vec!["양파", "마늘"]);
    let requests = backend.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/api/mypages/ingredients");

    // the user moves on while the refresh is pending
    my_page.set_recommended_page(2);
    my_page.replace_recommended_recipes(fetch_recommended_recipes(&client).await.unwrap());

    assert_eq!(ingredient_names(&my_page), vec!["양파", "마늘"]);
    assert_eq!(my_page.recommended_recipes.len(), 7);
    assert_eq!(my_page.recommended_pagination().current_page(), 1);
    assert_eq!(my_page.recommended_pagination().total_pages(), 2);
}

#[rstest]
fn test_blank_ingredient_name_is_rejected() {
    let result = NewIngredient::try_new(
        "  ".to_string(),
        "1".to_string(),
        "개".to_string(),
        "".to_string(),
    );

    assert!(matches!(result, Err(IngredientError::InvalidForm(_))));
    assert_eq!(result.unwrap_err().to_string(), "재료 이름을 입력해주세요.");
}

#[rstest]
#[tokio::test]
async fn test_create_ingredient_failure(
    #[future] backend: MockServer,
    store: InMemoryCredentialStore,
) {
    let backend = backend.await;
    mock_failing_api(&backend, "POST", "/api/mypages/ingredients", 500, "boom").await;

    let result = create_ingredient(&client(&backend, &store), &garlic()).await;

    assert!(matches!(result, Err(IngredientError::Create(_))));
    assert_eq!(result.unwrap_err().to_string(), "재료 추가에 실패했습니다.");
}

#[rstest]
#[tokio::test]
async fn test_recommendation_refresh_failure_keeps_added_ingredient(
    #[future] backend: MockServer,
    store: InMemoryCredentialStore,
) {
    let backend = backend.await;
    mock_created_garlic(&backend).await;
    mock_failing_api(
        &backend,
        "GET",
        "/api/mypages/recommended-recipes",
        503,
        "unavailable",
    )
    .await;
    let client = client(&backend, &store);
    let mut my_page = my_page_with_recommendations_on_last_page();

    my_page.push_ingredient(create_ingredient(&client, &garlic()).await.unwrap());
    let refresh = fetch_recommended_recipes(&client).await;

    assert!(refresh.is_err());
    assert_eq!(my_page.ingredients.len(), 2);
    assert_eq!(my_page.recommended_recipes.len(), 12);
    assert_eq!(my_page.recommended_pagination().current_page(), 3);
}

#[rstest]
#[tokio::test]
async fn test_delete_ingredient_then_refresh_recommendations(
    #[future] backend: MockServer,
    store: InMemoryCredentialStore,
) {
    let backend = backend.await;
    Mock::given(method("DELETE"))
        .and(path("/api/mypages/ingredients/1"))
        .and(header("authorization", format!("Bearer {ACCESS_TOKEN}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&backend)
        .await;
    mock_get_api(&backend, "/api/mypages/recommended-recipes", json!([]), 1).await;
    let client = client(&backend, &store);
    let mut my_page = my_page_with_recommendations_on_last_page();

    delete_ingredient(&client, IngredientId(1)).await.unwrap();
    my_page.remove_ingredient(IngredientId(1));

    assert_eq!(my_page.ingredients, Vec::<Ingredient>::new());
    assert_eq!(my_page.recommended_recipes.len(), 12);

    my_page.replace_recommended_recipes(fetch_recommended_recipes(&client).await.unwrap());

    assert!(my_page.recommended_recipes.is_empty());
    assert_eq!(my_page.recommended_pagination().current_page(), 1);
}

#[rstest]
#[tokio::test]
async fn test_delete_ingredient_failure(
    #[future] backend: MockServer,
    store: InMemoryCredentialStore,
) {
    let backend = backend.await;
    mock_failing_api(
        &backend,
        "DELETE",
        "/api/mypages/ingredients/1",
        404,
        "NOT_FOUND",
    )
    .await;

    let result = delete_ingredient(&client(&backend, &store), IngredientId(1)).await;

    assert!(matches!(result, Err(IngredientError::Delete(_))));
    assert_eq!(result.unwrap_err().to_string(), "재료 삭제에 실패했습니다.");
}
