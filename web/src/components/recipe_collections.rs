#![allow(non_snake_case)]

use dioxus::prelude::*;
use strum::IntoEnumIterator;

use recipe_mypage::recipe::Recipe;

use crate::{
    components::recipe_card::RecipeGrid,
    model::{AuthoredRecipesTab, UI_MODEL},
    route::{navigate_to, AppPath},
    services::mypage_service::MY_PAGE,
};

#[component]
pub fn LikedRecipesPanel() -> Element {
    let recipes = MY_PAGE
        .read()
        .as_ref()
        .map(|page| page.liked_recipes.clone())
        .unwrap_or_default();

    rsx! {
        RecipeCollection {
            title: "좋아요 누른 레시피들",
            count_label: "좋아요 누른 레시피",
            empty_message: "좋아요 누른 레시피가 없습니다.",
            empty_hint: "마음에 드는 레시피에 좋아요를 눌러보세요!",
            badge: "❤️ 좋아요",
            recipes,
        }
    }
}

#[component]
pub fn SavedRecipesPanel() -> Element {
    let recipes = MY_PAGE
        .read()
        .as_ref()
        .map(|page| page.saved_recipes.clone())
        .unwrap_or_default();

    rsx! {
        RecipeCollection {
            title: "찜한 레시피들",
            count_label: "찜한 레시피",
            empty_message: "찜한 레시피가 없습니다.",
            empty_hint: "나중에 만들어볼 레시피를 찜해보세요!",
            badge: "📌 찜",
            recipes,
        }
    }
}

#[component]
pub fn AuthoredRecipesPanel() -> Element {
    let selected_tab = UI_MODEL.read().selected_authored_tab;

    rsx! {
        section {
            class: "card w-full bg-base-200 text-base-content",

            div {
                class: "card-body gap-4",

                h2 { class: "card-title", "내가 작성한 레시피" }

                div {
                    role: "tablist",
                    class: "tabs tabs-bordered",

                    for tab in AuthoredRecipesTab::iter() {
                        button {
                            key: "{tab:?}",
                            role: "tab",
                            class: if tab == selected_tab { "tab tab-active" } else { "tab" },
                            onclick: move |_| UI_MODEL.write().selected_authored_tab = tab,
                            "{tab}"
                        }
                    }
                }

                if selected_tab == AuthoredRecipesTab::Public {
                    PublicRecipes {}
                } else {
                    DraftInvitation {}
                }
            }
        }
    }
}

#[component]
fn PublicRecipes() -> Element {
    let recipes = MY_PAGE
        .read()
        .as_ref()
        .map(|page| page.authored_recipes.clone())
        .unwrap_or_default();

    rsx! {
        p { class: "font-semibold", "공개 레시피: {recipes.len()}개" }

        if recipes.is_empty() {
            p { class: "py-8 text-center text-base-content/70", "작성한 레시피가 없습니다." }
        } else {
            RecipeGrid { recipes }
        }
    }
}

#[component]
fn DraftInvitation() -> Element {
    let initial = MY_PAGE
        .read()
        .as_ref()
        .map(|page| page.user_info.initial())
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col items-center gap-4 py-8 text-center",

            div {
                class: "avatar avatar-placeholder",
                div {
                    class: "bg-primary text-primary-content w-20 rounded-full",
                    span { class: "text-3xl", "{initial}" }
                }
            }

            h3 { class: "text-lg font-bold", "레시피를 직접 올려보세요!" }
            p {
                class: "text-base-content/70",
                "자랑하고 싶은 나만의 레시피! 공유하고 싶은 멋진 레시피를 올려 주세요."
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| navigate_to(AppPath::RecipeWrite),
                "레시피 등록하기"
            }
        }
    }
}

#[component]
fn RecipeCollection(
    title: String,
    count_label: String,
    empty_message: String,
    empty_hint: String,
    badge: String,
    recipes: Vec<Recipe>,
) -> Element {
    rsx! {
        section {
            class: "card w-full bg-base-200 text-base-content",

            div {
                class: "card-body gap-4",

                h2 { class: "card-title", "{title}" }
                p { class: "font-semibold", "{count_label}: {recipes.len()}개" }

                if recipes.is_empty() {
                    div {
                        class: "flex flex-col items-center gap-2 py-8 text-base-content/70",

                        p { "{empty_message}" }
                        p { class: "text-sm", "{empty_hint}" }
                    }
                } else {
                    RecipeGrid { recipes, badge }
                }
            }
        }
    }
}
