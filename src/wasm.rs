//! WebAssembly bindings for the pack validator

use crate::loader::load_bundle_from_archive_bytes;
use crate::models::PackSummary;
use crate::validator::Validator;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Validate a ZIP-bundled sticker pack
/// Returns a JSON summary of the pack or a JSON error {code, message, fatal}
#[wasm_bindgen]
pub fn validate_pack_zip(zip_data: &[u8]) -> Result<String, JsValue> {
    console_log!("Loading pack bundle ({} bytes)...", zip_data.len());

    let bundle = load_bundle_from_archive_bytes(zip_data)
        .map_err(|e| JsValue::from_str(&format!("Failed to load bundle: {:#}", e)))?;

    console_log!(
        "Pack loaded: {} ({} stickers)",
        bundle.pack.identifier,
        bundle.pack.stickers.len()
    );

    let validator = Validator::new();
    validator
        .validate_pack(&bundle.pack, bundle.loader.as_ref())
        .map_err(|e| {
            let failure = serde_json::json!({
                "code": e.code(),
                "message": e.message(),
                "fatal": e.fatal(),
            });
            JsValue::from_str(&failure.to_string())
        })?;

    console_log!("Pack {} is valid", bundle.pack.identifier);

    summary_json(&PackSummary::of(&bundle.pack))
}

/// Get a pack's metadata as JSON without validating its assets
#[wasm_bindgen]
pub fn inspect_pack_zip(zip_data: &[u8]) -> Result<String, JsValue> {
    let bundle = load_bundle_from_archive_bytes(zip_data)
        .map_err(|e| JsValue::from_str(&format!("Failed to load bundle: {:#}", e)))?;

    summary_json(&PackSummary::of(&bundle.pack))
}

fn summary_json(summary: &PackSummary) -> Result<String, JsValue> {
    serde_json::to_string_pretty(summary)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize summary: {}", e)))
}
