//! Browser-side delivery of export artifacts: file downloads via a blob
//! object URL and clipboard writes. Failures here are surfaced as toasts
//! and never touch derived state, so every export is retryable.

use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::feedback::Toasts;

pub fn js_text(value: JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{value:?}"))
}

/// Triggers a download of `contents` through a temporary anchor element.
pub fn save_text_file(filename: &str, mime: &str, contents: &str) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("no document"))?;

	let parts = js_sys::Array::of1(&JsValue::from_str(contents));
	let options = BlobPropertyBag::new();
	options.set_type(mime);
	let blob = Blob::new_with_str_sequence_and_options(parts.as_ref(), &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(filename);
	anchor.click();

	Url::revoke_object_url(&url)?;
	Ok(())
}

/// Writes `text` to the clipboard and reports the outcome as a toast.
pub fn copy_text(text: String, toasts: Toasts, done_title: &'static str, done_message: &'static str) {
	let Some(window) = web_sys::window() else {
		toasts.error("Error", "no hay acceso al navegador");
		return;
	};
	let clipboard = window.navigator().clipboard();
	spawn_local(async move {
		match JsFuture::from(clipboard.write_text(&text)).await {
			Ok(_) => toasts.notify(done_title, done_message),
			Err(e) => {
				log::warn!("clipboard write failed: {}", js_text(e.clone()));
				toasts.error("Error", "No se pudo copiar al portapapeles.");
			}
		}
	});
}
