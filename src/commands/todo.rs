//! Todo Commands
//!
//! Frontend bindings for the todo backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Todo;
use super::{invoke, rejection_text};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddArgs<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct FavoriteArgs<'a> {
    id: &'a str,
    favorite: bool,
}

#[derive(Serialize)]
struct CompleteArgs<'a> {
    id: &'a str,
    completed: bool,
}

// ========================
// Commands
// ========================

async fn call<A: Serialize>(cmd: &str, args: &A) -> Result<JsValue, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    invoke(cmd, js_args).await.map_err(rejection_text)
}

pub async fn get_all_todos() -> Result<Vec<Todo>, String> {
    let result = invoke("get_all_todos", JsValue::NULL).await.map_err(rejection_text)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn add(description: &str) -> Result<Todo, String> {
    let result = call("add", &AddArgs { description }).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete(id: &str) -> Result<Todo, String> {
    let result = call("delete", &IdArgs { id }).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// `favorite` is the value currently shown; the backend stores its negation
pub async fn favorite(id: &str, favorite: bool) -> Result<Todo, String> {
    let result = call("favorite", &FavoriteArgs { id, favorite }).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// `completed` is the value currently shown; the backend stores its negation
pub async fn complete(id: &str, completed: bool) -> Result<Todo, String> {
    let result = call("complete", &CompleteArgs { id, completed }).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
