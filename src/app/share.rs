use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::toast::Toasts;

/// Share the current page URL. Uses the native share sheet when the browser
/// exposes one, otherwise copies the link to the clipboard. Either outcome is
/// surfaced with a toast.
pub fn share_current_page(title: &str, toasts: Toasts) {
    let window = window();
    let Ok(href) = window.location().href() else {
        return;
    };
    let navigator = window.navigator();
    if js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false) {
        let data = web_sys::ShareData::new();
        data.set_title(title);
        data.set_url(&href);
        let _ = navigator.share_with_data(&data);
        toasts.show("Opening share sheet...", None);
    } else {
        let _ = navigator.clipboard().write_text(&href);
        toasts.show("Link copied to clipboard!", None);
    }
}
