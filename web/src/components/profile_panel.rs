#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{icons::bs_icons::BsShieldLock, Icon};

use recipe_mypage::user::UserInfo;

use crate::{
    model::UI_MODEL,
    route::{navigate_to, AppPath},
};

#[component]
pub fn ProfilePanel(user_info: UserInfo) -> Element {
    rsx! {
        section {
            class: "card w-full bg-base-200 text-base-content",

            div {
                class: "card-body gap-6",

                h2 { class: "card-title", "나의 정보 수정" }

                div {
                    class: "flex flex-col divide-y divide-base-300",

                    ProfileRow { label: "아이디(이메일)", value: user_info.email.clone() }
                    ProfileRow { label: "이름", value: user_info.name.clone() }
                    ProfileRow { label: "닉네임", value: user_info.nickname.clone() }

                    div {
                        class: "flex flex-col md:flex-row gap-2 py-3",

                        span { class: "w-40 font-semibold", "비밀번호 변경" }
                        div {
                            class: "flex flex-col gap-2 grow",

                            p {
                                class: "text-sm text-base-content/70 flex items-center gap-2",
                                Icon { class: "w-4 h-4", icon: BsShieldLock }
                                "보안을 위해 비밀번호 변경은 이메일 인증 후 가능합니다."
                            }
                            button {
                                class: "btn btn-outline btn-sm w-fit",
                                onclick: move |_| navigate_to(AppPath::FindPassword),
                                "비밀번호 재설정 하러 가기"
                            }
                        }
                    }
                }

                div {
                    class: "card-actions justify-end",

                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| navigate_to(AppPath::Home),
                        "나가기"
                    }
                    button {
                        class: "btn btn-error btn-outline",
                        onclick: move |_| UI_MODEL.write().delete_account_modal_opened = true,
                        "회원탈퇴"
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileRow(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col md:flex-row gap-2 py-3",

            span { class: "w-40 font-semibold", "{label}" }
            span { class: "grow", "{value}" }
        }
    }
}
