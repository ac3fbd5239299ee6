#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
    components::{pagination_controls::PaginationControls, recipe_card::RecipeGrid},
    services::mypage_service::MY_PAGE,
};

#[component]
pub fn RecommendedRecipes() -> Element {
    let Some((pagination, page)) = MY_PAGE
        .read()
        .as_ref()
        .map(|my_page| (my_page.recommended_pagination(), my_page.recommended_page()))
    else {
        return rsx! {};
    };

    rsx! {
        section {
            class: "card w-full bg-base-200 text-base-content",

            div {
                class: "card-body gap-4",

                h2 { class: "card-title", "내가 등록한 재료로 만들 수 있는 레시피" }

                if page.total == 0 {
                    div {
                        class: "flex flex-col items-center gap-2 py-8 text-base-content/70",

                        p { "등록된 재료로 만들 수 있는 레시피를 찾는 중..." }
                        p { class: "text-sm", "레시피가 없다면 재료를 더 추가해보세요!" }
                    }
                } else {
                    RecipeGrid { recipes: page.content }
                    PaginationControls {
                        pagination,
                        on_select: move |selected_page| {
                            if let Some(my_page) = MY_PAGE.write().as_mut() {
                                my_page.set_recommended_page(selected_page);
                            }
                        },
                    }
                }
            }
        }
    }
}
