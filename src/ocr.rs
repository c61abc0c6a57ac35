//! Plate OCR
//!
//! Binding to Tesseract.js (loaded by index.html) for pre-filling the bike
//! number from a photo. Any failure leaves the field for manual entry.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::plate::normalize_plate;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Tesseract, js_name = recognize, catch)]
    async fn tesseract_recognize(image: &JsValue, lang: &str) -> Result<JsValue, JsValue>;
}

#[derive(Deserialize)]
struct Recognition {
    data: RecognizedText,
}

#[derive(Deserialize)]
struct RecognizedText {
    #[serde(default)]
    text: String,
}

/// Recognise a plate number in an uploaded image
pub async fn recognize_plate(image: &web_sys::File) -> Option<String> {
    log::debug!("[OCR] recognising {} ({} bytes)", image.name(), image.size());
    let raw = match tesseract_recognize(&JsValue::from(image.clone()), "eng").await {
        Ok(value) => value,
        Err(err) => {
            log::warn!("[OCR] recognition failed: {:?}", err);
            return None;
        }
    };
    let parsed: Recognition = match serde_wasm_bindgen::from_value(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::warn!("[OCR] unexpected result shape: {}", err);
            return None;
        }
    };
    let plate = normalize_plate(&parsed.data.text);
    log::info!("[OCR] plate guess: {:?}", plate);
    plate
}
