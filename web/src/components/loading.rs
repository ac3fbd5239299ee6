#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn Spinner(class: Option<String>) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        span {
            role: "status",
            class: "loading loading-spinner text-primary {class}",
        }
    }
}

#[component]
pub fn Loading(label: ReadSignal<String>) -> Element {
    rsx! {
        div {
            class: "h-full min-h-64 flex flex-col gap-4 justify-center items-center",

            Spinner { class: "loading-lg" }
            p { class: "text-base-content/70", "{label()}" }
        }
    }
}
