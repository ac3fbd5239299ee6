#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::route::{navigate_to, AppPath};

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div {
            class: "h-full min-h-64 flex flex-col gap-4 justify-center items-center",

            h1 { class: "text-2xl font-bold", "페이지를 찾을 수 없습니다." }
            p { class: "text-base-content/70", "/{path}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| navigate_to(AppPath::Home),
                "홈으로"
            }
        }
    }
}
