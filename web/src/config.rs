use anyhow::{anyhow, Result};
use dioxus::prelude::*;
use url::Url;
use wasm_bindgen::prelude::*;

use recipe_mypage::image::ImageResolver;

use crate::utils::current_origin;

#[derive(Debug, PartialEq, Clone)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub image_resolver: ImageResolver,
}

#[wasm_bindgen(module = "/js/api.js")]
extern "C" {
    fn api_base_url() -> String;
    fn image_base_url() -> String;
}

pub static APP_CONFIG: GlobalSignal<Option<AppConfig>> = Signal::global(|| None);

pub fn get_api_base_url() -> Result<Url> {
    parse_url_from_origin(&api_base_url()).map(with_trailing_slash)
}

pub fn get_app_config() -> Result<AppConfig> {
    let image_base_url = parse_url_from_origin(&image_base_url())?;

    Ok(AppConfig {
        api_base_url: get_api_base_url()?,
        image_resolver: ImageResolver::from_url(&image_base_url),
    })
}

fn parse_url_from_origin(url: &str) -> Result<Url> {
    match Url::parse(url) {
        Ok(url) => Ok(url),
        Err(err) => match current_origin()?.join(url) {
            Ok(url) => Ok(url),
            Err(_) => Err(anyhow!("Failed to parse URL `{url}`: {err}")),
        },
    }
}

/// Relative API paths are joined to the base URL, which drops its last
/// segment unless it ends with a slash
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
