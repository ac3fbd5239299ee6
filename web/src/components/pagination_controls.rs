#![allow(non_snake_case)]

use dioxus::prelude::*;

use recipe_mypage::pagination::Pagination;

/// Hidden when everything fits in one page
#[component]
pub fn PaginationControls(pagination: Pagination, on_select: EventHandler<usize>) -> Element {
    if !pagination.has_multiple_pages() {
        return rsx! {};
    }

    let current_page = pagination.current_page();

    rsx! {
        div {
            class: "join justify-center w-full",

            button {
                class: "join-item btn btn-sm",
                disabled: pagination.is_first_page(),
                onclick: move |_| on_select.call(1),
                "처음"
            }
            button {
                class: "join-item btn btn-sm",
                disabled: pagination.is_first_page(),
                onclick: move |_| on_select.call(pagination.previous_page()),
                "이전"
            }

            for page in pagination.visible_pages() {
                button {
                    key: "{page}",
                    class: if page == current_page { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                    onclick: move |_| on_select.call(page),
                    "{page}"
                }
            }

            button {
                class: "join-item btn btn-sm",
                disabled: pagination.is_last_page(),
                onclick: move |_| on_select.call(pagination.next_page()),
                "다음"
            }
            button {
                class: "join-item btn btn-sm",
                disabled: pagination.is_last_page(),
                onclick: move |_| on_select.call(pagination.last_page()),
                "마지막"
            }
        }
    }
}
