//! Browser file-save helpers for the generated report.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offer `bytes` to the user as a file download named `file_name`.
pub fn save_bytes(bytes: &[u8], file_name: &str, mime_type: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(file_name);
    body.append_child(&link)?;
    link.click();
    link.remove();
    Url::revoke_object_url(&url)?;

    Ok(())
}

/// Navigate a new tab to `url`. The request carries no `Authorization` header.
pub fn open_in_new_tab(url: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.open_with_url_and_target(url, "_blank")?;
    Ok(())
}
