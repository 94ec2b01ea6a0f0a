use wasm_bindgen::{JsCast, JsValue};

use super::Delivery;
use crate::error::DeliveryError;
use crate::package::Artifact;

/// Triggers a browser file-save through a temporary object URL and anchor click
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownload;

impl BrowserDownload {
    fn download(artifact: &Artifact) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(artifact.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/octet-stream");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        anchor.set_href(&url);
        anchor.set_download(&artifact.filename);
        body.append_child(&anchor)?;
        anchor.click();
        anchor.remove();
        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    }
}

impl Delivery for BrowserDownload {
    fn deliver(&mut self, artifact: &Artifact) -> Result<(), DeliveryError> {
        Self::download(artifact).map_err(|err| DeliveryError::Browser {
            filename: artifact.filename.clone(),
            reason: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        })
    }
}
