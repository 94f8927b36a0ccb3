//! WASM bindings for the scssgen generator.
//!
//! Exposes `generate()` and `check()` to JavaScript via wasm-bindgen. Both
//! take a JSON tree description (see `scssgen_ast::json`).

use wasm_bindgen::prelude::*;

/// Render a JSON tree to SCSS.
///
/// Throws a JS error if the tree fails to decode or generate.
#[wasm_bindgen]
pub fn generate(json: &str) -> Result<String, JsError> {
    render(json).map_err(|e| JsError::new(&e))
}

/// Validate a JSON tree without keeping the output.
///
/// Returns a JS object `{ ok: boolean, error?: string }`.
#[wasm_bindgen]
pub fn check(json: &str) -> Result<JsValue, JsError> {
    let js_obj = js_sys::Object::new();
    let result = render(json);
    js_sys::Reflect::set(&js_obj, &"ok".into(), &result.is_ok().into())
        .map_err(|_| JsError::new("Failed to set ok property"))?;
    if let Err(message) = result {
        js_sys::Reflect::set(&js_obj, &"error".into(), &message.into())
            .map_err(|_| JsError::new("Failed to set error property"))?;
    }
    Ok(js_obj.into())
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn render(json: &str) -> Result<String, String> {
    let tree = scssgen_ast::json::from_str(json).map_err(|e| e.to_string())?;
    scssgen_codegen::generate(&tree).map_err(|e| e.to_string())
}
