//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod todo;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Backend rejections arrive as plain strings
fn rejection_text(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use todo::*;
