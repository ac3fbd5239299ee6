#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsBasket, BsBookmarkHeart, BsHeart, BsJournalText, BsPencilSquare, BsPerson},
    Icon,
};
use strum::IntoEnumIterator;

use crate::model::{MyPageMenu, UI_MODEL};

#[component]
pub fn SideMenu() -> Element {
    let selected_menu = UI_MODEL.read().selected_menu;

    rsx! {
        aside {
            class: "w-full md:w-64 shrink-0",

            ul {
                class: "menu bg-base-200 rounded-box w-full gap-1",

                for menu in MyPageMenu::iter() {
                    li {
                        key: "{menu:?}",
                        button {
                            class: if menu == selected_menu { "menu-active" },
                            onclick: move |_| UI_MODEL.write().select_menu(menu),

                            MenuIcon { menu }
                            "{menu}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuIcon(menu: MyPageMenu) -> Element {
    match menu {
        MyPageMenu::EditProfile => rsx! { Icon { class: "w-4 h-4", icon: BsPerson } },
        MyPageMenu::MyIngredients => rsx! { Icon { class: "w-4 h-4", icon: BsBasket } },
        MyPageMenu::RegisterRecipe => rsx! { Icon { class: "w-4 h-4", icon: BsPencilSquare } },
        MyPageMenu::LikedRecipes => rsx! { Icon { class: "w-4 h-4", icon: BsHeart } },
        MyPageMenu::SavedRecipes => rsx! { Icon { class: "w-4 h-4", icon: BsBookmarkHeart } },
        MyPageMenu::MyAuthoredRecipes => rsx! { Icon { class: "w-4 h-4", icon: BsJournalText } },
    }
}
