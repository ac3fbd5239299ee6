#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::error;

use recipe_mypage::{mypage::MISSING_RECIPE_ID_MESSAGE, recipe::Recipe};

use crate::{
    config::APP_CONFIG,
    route::{navigate_to, AppPath},
    utils::alert,
};

#[component]
pub fn RecipeGrid(recipes: Vec<Recipe>, #[props(default)] badge: String) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",

            for (index, recipe) in recipes.into_iter().enumerate() {
                RecipeCard {
                    key: "{index}-{recipe.display_title()}",
                    recipe,
                    badge: badge.clone(),
                }
            }
        }
    }
}

/// Empty `badge` renders no badge
#[component]
pub fn RecipeCard(recipe: Recipe, #[props(default)] badge: String) -> Element {
    let image_url = APP_CONFIG
        .read()
        .as_ref()
        .map(|config| config.image_resolver.clone())
        .unwrap_or_default()
        .resolve(recipe.image_url.as_deref());
    let title = recipe.display_title().to_string();
    let view_count = recipe.view_count;
    let like_count = recipe.like_count;

    rsx! {
        div {
            class: "card bg-base-100 shadow-sm cursor-pointer hover:shadow-lg transition-shadow",
            onclick: move |_| open_recipe(&recipe),

            figure {
                class: "relative h-40",

                img {
                    class: "w-full h-full object-cover",
                    src: "{image_url}",
                    alt: "{title}",
                }
                if !badge.is_empty() {
                    span { class: "badge badge-primary absolute top-2 left-2", "{badge}" }
                }
            }

            div {
                class: "card-body p-4 gap-2",

                h3 { class: "card-title text-base line-clamp-2", "{title}" }
                div {
                    class: "flex gap-4 text-xs text-base-content/70",

                    span { "👁️ {view_count}" }
                    span { "❤️ {like_count}" }
                }
            }
        }
    }
}

fn open_recipe(recipe: &Recipe) {
    match &recipe.id {
        Some(recipe_id) => navigate_to(AppPath::RecipeDetails(recipe_id.clone())),
        None => {
            error!("Recipe without identifier: {recipe:?}");
            alert(MISSING_RECIPE_ID_MESSAGE);
        }
    }
}
