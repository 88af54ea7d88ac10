//! Fire-and-forget clipboard writes. Failures (permission denied, insecure
//! context) are logged and ignored; the pulse feedback was already applied
//! optimistically.

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn write_text(text: &str) {
    let Some(window) = web::window() else { return };
    let clipboard = window.navigator().clipboard();
    let text = text.to_owned();
    spawn_local(async move {
        if let Err(e) = JsFuture::from(clipboard.write_text(&text)).await {
            log::debug!("clipboard write failed: {:?}", e);
        }
    });
}
