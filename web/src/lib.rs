#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::{debug, error};
use url::Url;

use components::loading::Loading;
use config::{get_app_config, APP_CONFIG};
use model::UI_MODEL;
use route::Route;
use services::mypage_service::{mypage_service, MY_PAGE};

mod components;
mod config;
mod model;
mod pages;
mod route;
mod services;
mod utils;

#[component]
pub fn App() -> Element {
    use_future(move || async move {
        match get_app_config() {
            Ok(app_config) => {
                APP_CONFIG.write().replace(app_config);
            }
            Err(err) => error!("Failed to load the application configuration: {err}"),
        }
    });

    let Some(api_base_url) = APP_CONFIG
        .read()
        .as_ref()
        .map(|config| config.api_base_url.clone())
    else {
        return rsx! { Loading { label: "마이페이지를 준비하는 중..." } };
    };

    debug!("Rendering app with API at {api_base_url}");
    rsx! { MyPageApp { api_base_url } }
}

#[component]
fn MyPageApp(api_base_url: Url) -> Element {
    use_coroutine(move |rx| {
        mypage_service(rx, api_base_url.clone(), MY_PAGE.signal(), UI_MODEL.signal())
    });

    rsx! {
        div {
            class: "min-h-full flex flex-col text-sm",

            Router::<Route> {}
        }
    }
}
