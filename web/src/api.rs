use gloo_net::http::{Request, Response};
use serde_json::json;

use shared::array::ArrayRecord;
use shared::endpoint::ApiEndpoint;
use shared::error::ApiError;
use shared::monitor::MonitorRecord;
use shared::session::{ArrayCreatePayload, ArrayUpdatePayload, MonitorPayload};

/// Pulls the backend's `message` field out of a rejected response; falls
/// back to the status code when the body is not the expected error JSON.
async fn reject_message(resp: Response) -> String {
    match resp.json::<ApiError>().await {
        Ok(err) => err.message,
        Err(_) => format!("HTTP {}", resp.status()),
    }
}

async fn expect_ok(resp: Response) -> Result<(), String> {
    if resp.ok() {
        Ok(())
    } else {
        Err(reject_message(resp).await)
    }
}

pub async fn fetch_arrays() -> Result<Vec<ArrayRecord>, String> {
    Request::get(ApiEndpoint::Arrays.to_str())
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

pub async fn create_array(payload: &ArrayCreatePayload) -> Result<(), String> {
    let resp = Request::post(ApiEndpoint::Arrays.to_str())
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}

pub async fn update_array(id: &str, payload: &ArrayUpdatePayload) -> Result<(), String> {
    let resp = Request::put(&ApiEndpoint::Array.with_id(id))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}

pub async fn delete_array(id: &str) -> Result<(), String> {
    let resp = Request::delete(&ApiEndpoint::Array.with_id(id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}

/// Partial update flipping only the collection flag.
pub async fn set_array_enabled(id: &str, enabled: bool) -> Result<(), String> {
    let resp = Request::put(&ApiEndpoint::Array.with_id(id))
        .json(&json!({ "enabled": enabled }))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}

pub async fn fetch_monitors() -> Result<Vec<MonitorRecord>, String> {
    Request::get(ApiEndpoint::Monitors.to_str())
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

pub async fn create_monitor(payload: &MonitorPayload) -> Result<(), String> {
    let resp = Request::post(ApiEndpoint::Monitors.to_str())
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}

pub async fn update_monitor(id: &str, payload: &MonitorPayload) -> Result<(), String> {
    let resp = Request::put(&ApiEndpoint::Monitor.with_id(id))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}

pub async fn delete_monitor(id: &str) -> Result<(), String> {
    let resp = Request::delete(&ApiEndpoint::Monitor.with_id(id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}

pub async fn set_monitor_enabled(id: &str, enabled: bool) -> Result<(), String> {
    let resp = Request::put(&ApiEndpoint::Monitor.with_id(id))
        .json(&json!({ "enabled": enabled }))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}
