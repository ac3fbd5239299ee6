#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::debug;

use crate::{
    components::{
        delete_account_modal::DeleteAccountModal,
        ingredients_panel::IngredientsPanel,
        loading::Loading,
        profile_panel::ProfilePanel,
        recipe_collections::{AuthoredRecipesPanel, LikedRecipesPanel, SavedRecipesPanel},
        side_menu::SideMenu,
    },
    model::{MyPageMenu, UI_MODEL},
    services::mypage_service::{MyPageCommand, MY_PAGE},
};

#[component]
pub fn MyPage() -> Element {
    let mypage_service = use_coroutine_handle::<MyPageCommand>();

    use_future(move || async move {
        mypage_service.send(MyPageCommand::Load);
    });

    let Some(user_info) = MY_PAGE
        .read()
        .as_ref()
        .map(|page| page.user_info.clone())
    else {
        return rsx! { Loading { label: "마이페이지 정보를 불러오는 중..." } };
    };

    let selected_menu = UI_MODEL.read().selected_menu;
    debug!("Rendering user page for {user_info} on {selected_menu:?}");

    rsx! {
        div {
            class: "container mx-auto flex flex-col md:flex-row gap-6 p-4 md:p-8",

            SideMenu {}

            main {
                class: "grow min-w-0",

                {
                    match selected_menu {
                        MyPageMenu::EditProfile => rsx! { ProfilePanel { user_info } },
                        MyPageMenu::MyIngredients => rsx! { IngredientsPanel {} },
                        MyPageMenu::RegisterRecipe | MyPageMenu::MyAuthoredRecipes => {
                            rsx! { AuthoredRecipesPanel {} }
                        }
                        MyPageMenu::LikedRecipes => rsx! { LikedRecipesPanel {} },
                        MyPageMenu::SavedRecipes => rsx! { SavedRecipesPanel {} },
                    }
                }
            }

            DeleteAccountModal {}
        }
    }
}
