use dioxus::prelude::*;
use futures_util::StreamExt;
use log::error;
use url::Url;

use recipe_mypage::{
    client::MyPageClient,
    ingredient::{IngredientId, NewIngredient},
    mypage::{
        create_ingredient, delete_account, delete_ingredient, fetch_recommended_recipes, MyPage,
        ACCOUNT_DELETED_MESSAGE, INGREDIENT_ADDED_MESSAGE, INGREDIENT_DELETED_MESSAGE,
    },
    user::Password,
};

use crate::{
    model::MyPageUIModel,
    route::{navigate_to, AppPath},
    services::local_storage::LocalStorageService,
    utils::alert,
};

#[derive(Debug)]
pub enum MyPageCommand {
    Load,
    AddIngredient(NewIngredient),
    DeleteIngredient(IngredientId),
    DeleteAccount(Password),
}

pub static MY_PAGE: GlobalSignal<Option<MyPage>> = Signal::global(|| None);

pub async fn mypage_service(
    mut rx: UnboundedReceiver<MyPageCommand>,
    api_base_url: Url,
    mut my_page: Signal<Option<MyPage>>,
    mut ui_model: Signal<MyPageUIModel>,
) {
    while let Some(msg) = rx.next().await {
        match msg {
            MyPageCommand::Load => {
                load_my_page(&api_base_url, my_page).await;
            }

            MyPageCommand::AddIngredient(new_ingredient) => {
                let Some(client) = build_client(&api_base_url) else {
                    continue;
                };

                ui_model.write().is_processing = true;
                let result = create_ingredient(&client, &new_ingredient).await;
                ui_model.write().is_processing = false;

                match result {
                    Ok(ingredient) => {
                        if let Some(page) = my_page.write().as_mut() {
                            page.push_ingredient(ingredient);
                        }
                        ui_model.write().reset_ingredient_form();
                        alert(INGREDIENT_ADDED_MESSAGE);
                        refresh_recommended_recipes(&client, my_page).await;
                    }
                    Err(err) => alert(&err.to_string()),
                }
            }

            MyPageCommand::DeleteIngredient(ingredient_id) => {
                let Some(client) = build_client(&api_base_url) else {
                    continue;
                };

                ui_model.write().is_processing = true;
                let result = delete_ingredient(&client, ingredient_id).await;
                ui_model.write().is_processing = false;

                match result {
                    Ok(()) => {
                        if let Some(page) = my_page.write().as_mut() {
                            page.remove_ingredient(ingredient_id);
                        }
                        alert(INGREDIENT_DELETED_MESSAGE);
                        refresh_recommended_recipes(&client, my_page).await;
                    }
                    Err(err) => alert(&err.to_string()),
                }
            }

            MyPageCommand::DeleteAccount(password) => {
                let Some(client) = build_client(&api_base_url) else {
                    continue;
                };

                ui_model.write().is_processing = true;
                let result = delete_account(&client, &LocalStorageService, password).await;
                ui_model.write().is_processing = false;

                match result {
                    Ok(()) => {
                        alert(ACCOUNT_DELETED_MESSAGE);
                        ui_model.write().delete_account_modal_opened = false;
                        navigate_to(AppPath::Home);
                    }
                    Err(err) => alert(&err.to_string()),
                }
            }
        }
    }
}

async fn load_my_page(api_base_url: &Url, mut my_page: Signal<Option<MyPage>>) {
    match MyPage::load(api_base_url, &LocalStorageService).await {
        Ok(page) => {
            my_page.write().replace(page);
        }
        Err(err) => {
            alert(&err.to_string());
            navigate_to(AppPath::Login);
        }
    }
}

/// Failures are only logged, the current recommendations stay displayed
async fn refresh_recommended_recipes(client: &MyPageClient, mut my_page: Signal<Option<MyPage>>) {
    if let Ok(recipes) = fetch_recommended_recipes(client).await {
        if let Some(page) = my_page.write().as_mut() {
            page.replace_recommended_recipes(recipes);
        }
    }
}

fn build_client(api_base_url: &Url) -> Option<MyPageClient> {
    match MyPageClient::from_store(api_base_url.clone(), &LocalStorageService) {
        Ok(client) => Some(client),
        Err(err) => {
            error!("Failed to build the API client: {err}");
            None
        }
    }
}
