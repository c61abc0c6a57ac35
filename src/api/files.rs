//! File Input Helpers
//!
//! Reads a picked file into memory so it can travel in a multipart body.

use reqwest::multipart::Part;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::{ApiError, ApiResult};
use crate::models::Upload;

/// First file of an `<input type="file">` change event
pub fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

pub async fn read_upload(file: &web_sys::File) -> ApiResult<Upload> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::File(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::debug!("[FILE] read {} ({} bytes)", file.name(), bytes.len());
    Ok(Upload {
        name: file.name(),
        mime: file.type_(),
        bytes,
    })
}

/// Multipart part for an upload, typed when the browser reported a MIME type
pub(crate) fn upload_part(upload: &Upload) -> ApiResult<Part> {
    let part = Part::bytes(upload.bytes.clone()).file_name(upload.name.clone());
    if upload.mime.is_empty() {
        return Ok(part);
    }
    part.mime_str(&upload.mime).map_err(ApiError::from)
}
