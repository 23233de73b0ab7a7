//! List Service Client
//!
//! One async wrapper per server capability. Reads are GET, mutations are
//! POST with a JSON body. An `Err(String)` is a transport or decode
//! failure; a server-reported problem comes back as an `ApiResponse`
//! with a non-success status, and callers branch on both.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{ApiResponse, ListItem};

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
pub struct VoiceCommandArgs<'a> {
    pub command: &'a str,
}

#[derive(Serialize)]
pub struct EditItemArgs<'a> {
    pub item_id: &'a str,
    pub item_name: &'a str,
    pub quantity: &'a str,
    pub unit: &'a str,
    pub note: &'a str,
}

#[derive(Serialize)]
pub struct ItemIdArgs<'a> {
    pub item_id: &'a str,
}

#[derive(Serialize)]
pub struct EmptyArgs {}

// ========================
// Transport
// ========================

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

async fn fetch_json<T>(request: Request) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into::<Response>()
        .map_err(js_error)?;
    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

async fn get<T>(path: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let request = Request::new_with_str(path).map_err(js_error)?;
    fetch_json(request).await
}

async fn post<T, B>(path: &str, body: &B) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
    B: Serialize,
{
    let body = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(headers.as_ref());
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;
    fetch_json(request).await
}

// ========================
// Operations
// ========================

pub async fn process_voice_command(command: &str) -> Result<ApiResponse, String> {
    post("/api/process_voice_command", &VoiceCommandArgs { command }).await
}

pub async fn get_list_items() -> Result<Vec<ListItem>, String> {
    get("/api/get_list_items").await
}

pub async fn get_recommendations() -> Result<Vec<String>, String> {
    get("/api/get_recommendations").await
}

pub async fn edit_item(args: &EditItemArgs<'_>) -> Result<ApiResponse, String> {
    post("/api/edit_item", args).await
}

pub async fn toggle_item_bought(item_id: &str) -> Result<ApiResponse, String> {
    post("/api/toggle_item_bought", &ItemIdArgs { item_id }).await
}

pub async fn delete_item(item_id: &str) -> Result<ApiResponse, String> {
    post("/api/delete_item", &ItemIdArgs { item_id }).await
}

pub async fn clear_list() -> Result<ApiResponse, String> {
    post("/api/clear_list", &EmptyArgs {}).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_item_body_uses_server_field_names() {
        let args = EditItemArgs {
            item_id: "abc123",
            item_name: "milk",
            quantity: "3",
            unit: "liters",
            note: "for Friday",
        };
        let body: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&args).unwrap()).unwrap();
        assert_eq!(body["item_id"], "abc123");
        assert_eq!(body["item_name"], "milk");
        assert_eq!(body["quantity"], "3");
        assert_eq!(body["unit"], "liters");
        assert_eq!(body["note"], "for Friday");
    }

    #[test]
    fn voice_command_body() {
        let body = serde_json::to_string(&VoiceCommandArgs { command: "add milk" }).unwrap();
        assert_eq!(body, r#"{"command":"add milk"}"#);
    }

    #[test]
    fn item_id_body() {
        let body = serde_json::to_string(&ItemIdArgs { item_id: "x1" }).unwrap();
        assert_eq!(body, r#"{"item_id":"x1"}"#);
    }

    #[test]
    fn clear_list_body_is_empty_object() {
        assert_eq!(serde_json::to_string(&EmptyArgs {}).unwrap(), "{}");
    }
}
