#![allow(non_snake_case)]

use std::fmt;

use dioxus::prelude::*;
use log::error;

use recipe_mypage::recipe::RecipeId;

use crate::{
    pages::{my_page::MyPage, page_not_found::PageNotFound},
    utils::redirect_to,
};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/mypage")]
    MyPage {},
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

/// Pages served by the rest of the recipe application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppPath {
    Home,
    Login,
    RecipeWrite,
    FindPassword,
    RecipeDetails(RecipeId),
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppPath::Home => write!(f, "/"),
            AppPath::Login => write!(f, "/login"),
            AppPath::RecipeWrite => write!(f, "/recipe/write"),
            AppPath::FindPassword => write!(f, "/find-password"),
            AppPath::RecipeDetails(recipe_id) => write!(f, "/details/{recipe_id}"),
        }
    }
}

/// Leaves the user page with a full page load
pub fn navigate_to(path: AppPath) {
    if let Err(err) = redirect_to(&path.to_string()) {
        error!("Failed to navigate to {path}: {err}");
    }
}
