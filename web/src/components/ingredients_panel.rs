#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{icons::bs_icons::BsX, Icon};

use recipe_mypage::ingredient::{Ingredient, NewIngredient};

use crate::{
    components::{loading::Spinner, recommended_recipes::RecommendedRecipes},
    model::UI_MODEL,
    services::mypage_service::{MyPageCommand, MY_PAGE},
    utils::alert,
};

#[component]
pub fn IngredientsPanel() -> Element {
    let ingredients = MY_PAGE
        .read()
        .as_ref()
        .map(|page| page.ingredients.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col gap-6",

            section {
                class: "card w-full bg-base-200 text-base-content",

                div {
                    class: "card-body gap-4",

                    h2 { class: "card-title", "나의 냉장고 재료 등록하기" }
                    IngredientForm {}
                    IngredientList { ingredients: ingredients.clone() }
                }
            }

            if !ingredients.is_empty() {
                RecommendedRecipes {}
            }
        }
    }
}

#[component]
fn IngredientForm() -> Element {
    let mypage_service = use_coroutine_handle::<MyPageCommand>();
    let is_processing = UI_MODEL.read().is_processing;
    let form = UI_MODEL.read().ingredient_form.clone();

    let submit = move || {
        if UI_MODEL.peek().is_processing {
            return;
        }
        let NewIngredient {
            name,
            quantity,
            unit,
            memo,
        } = UI_MODEL.peek().ingredient_form.clone();

        match NewIngredient::try_new(name, quantity, unit, memo) {
            Ok(new_ingredient) => {
                mypage_service.send(MyPageCommand::AddIngredient(new_ingredient));
            }
            Err(err) => alert(&err.to_string()),
        }
    };
    let submit_on_enter = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            evt.prevent_default();
            submit();
        }
    };

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-5 gap-2",

            input {
                class: "input input-bordered md:col-span-2",
                r#type: "text",
                placeholder: "재료 이름 (예: 돼지고기)",
                value: "{form.name}",
                oninput: move |evt| UI_MODEL.write().ingredient_form.name = evt.value(),
                onkeydown: submit_on_enter,
            }
            input {
                class: "input input-bordered",
                r#type: "text",
                placeholder: "수량",
                value: "{form.quantity}",
                oninput: move |evt| UI_MODEL.write().ingredient_form.quantity = evt.value(),
                onkeydown: submit_on_enter,
            }
            input {
                class: "input input-bordered",
                r#type: "text",
                placeholder: "단위",
                value: "{form.unit}",
                oninput: move |evt| UI_MODEL.write().ingredient_form.unit = evt.value(),
                onkeydown: submit_on_enter,
            }
            input {
                class: "input input-bordered",
                r#type: "text",
                placeholder: "비고 (선택사항)",
                value: "{form.memo}",
                oninput: move |evt| UI_MODEL.write().ingredient_form.memo = evt.value(),
                onkeydown: submit_on_enter,
            }

            button {
                class: "btn btn-primary md:col-span-5",
                disabled: is_processing,
                onclick: move |_| submit(),

                if is_processing {
                    Spinner { class: "loading-sm" }
                }
                "+ 재료 추가"
            }
        }
    }
}

#[component]
fn IngredientList(ingredients: Vec<Ingredient>) -> Element {
    let mypage_service = use_coroutine_handle::<MyPageCommand>();
    let is_processing = UI_MODEL.read().is_processing;

    rsx! {
        div {
            class: "flex flex-col gap-2",

            h3 { class: "font-semibold", "등록된 재료 ({ingredients.len()}개)" }

            ul {
                class: "flex flex-wrap gap-2",

                for ingredient in ingredients {
                    li {
                        key: "{ingredient.id}",
                        class: "badge badge-lg badge-outline gap-2 py-4",

                        span { class: "font-semibold", "{ingredient.name}" }
                        span { "{ingredient.amount()}" }
                        if let Some(note) = ingredient.note() {
                            span { class: "text-base-content/60", "({note})" }
                        }
                        button {
                            class: "btn btn-ghost btn-circle btn-xs",
                            "aria-label": "재료 삭제",
                            disabled: is_processing,
                            onclick: move |_| {
                                mypage_service.send(MyPageCommand::DeleteIngredient(ingredient.id));
                            },
                            Icon { class: "w-4 h-4", icon: BsX }
                        }
                    }
                }
            }
        }
    }
}
