use anyhow::{anyhow, Context, Result};
use gloo_utils::errors::JsError;
use url::Url;
use wasm_bindgen::JsValue;

pub fn redirect_to(url: &str) -> Result<()> {
    let window = web_sys::window().context("Unable to load `window`")?;
    window.location().assign(url).map_err(js_error)
}

pub fn current_origin() -> Result<Url> {
    let window = web_sys::window().context("Unable to load `window`")?;
    Ok(Url::parse(&window.location().origin().map_err(js_error)?)?)
}

pub fn get_local_storage() -> Result<web_sys::Storage> {
    let window = web_sys::window().context("Unable to get the window object")?;
    window
        .local_storage()
        .map_err(js_error)?
        .context("No local storage available")
}

/// Shows a blocking browser dialog
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("Unable to load `window` to display: {message}");
        return;
    };
    if window.alert_with_message(message).is_err() {
        log::error!("Failed to display alert: {message}");
    }
}

fn js_error(value: JsValue) -> anyhow::Error {
    match JsError::try_from(value) {
        Ok(err) => err.into(),
        Err(err) => anyhow!("{err}"),
    }
}
