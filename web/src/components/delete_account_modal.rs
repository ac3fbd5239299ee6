#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsExclamationTriangle, BsTrash},
    Icon,
};
use log::debug;

use recipe_mypage::user::Password;

use crate::{
    components::loading::Spinner,
    model::UI_MODEL,
    services::mypage_service::MyPageCommand,
    utils::alert,
};

const EMPTY_PASSWORD_MESSAGE: &str = "비밀번호를 입력해주세요.";

#[component]
pub fn DeleteAccountModal() -> Element {
    let mypage_service = use_coroutine_handle::<MyPageCommand>();
    let mut password = use_signal(String::new);
    let is_processing = UI_MODEL.read().is_processing;

    if !UI_MODEL.read().delete_account_modal_opened {
        return rsx! {};
    }

    let mut close = move || {
        password.set(String::new());
        UI_MODEL.write().delete_account_modal_opened = false;
    };
    let confirm = move || match password.peek().parse::<Password>() {
        Ok(typed_password) => mypage_service.send(MyPageCommand::DeleteAccount(typed_password)),
        Err(err) => {
            debug!("Account deletion not submitted: {err}");
            alert(EMPTY_PASSWORD_MESSAGE);
        }
    };

    rsx! {
        div {
            class: "modal modal-open",
            role: "dialog",

            div {
                class: "modal-box",

                h3 {
                    class: "text-lg font-bold flex items-center gap-2",
                    div {
                        class: "badge badge-error badge-soft rounded-full size-8 p-2",
                        Icon { class: "w-5 h-5 text-error", icon: BsExclamationTriangle }
                    }
                    "회원탈퇴"
                }

                p {
                    class: "py-4 text-sm text-base-content/70",
                    "탈퇴하시려면 비밀번호를 입력해주세요. 탈퇴 후에는 계정을 복구할 수 없습니다."
                }

                input {
                    class: "input input-bordered w-full",
                    r#type: "password",
                    placeholder: "비밀번호",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            confirm();
                        }
                    },
                }

                div {
                    class: "modal-action",

                    button {
                        class: "btn btn-outline",
                        disabled: is_processing,
                        onclick: move |_| close(),
                        "취소"
                    }
                    button {
                        class: "btn btn-error",
                        disabled: is_processing,
                        onclick: move |_| confirm(),

                        if is_processing {
                            Spinner { class: "loading-sm" }
                        } else {
                            Icon { class: "w-4 h-4", icon: BsTrash }
                        }
                        "탈퇴하기"
                    }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| close() }
        }
    }
}
