use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{any, get},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Shared in-memory state. Ids are handed out sequentially starting at 1.
#[derive(Clone, Default)]
pub struct AppState {
    items: Arc<RwLock<BTreeMap<u64, Item>>>,
    next_id: Arc<AtomicU64>,
    echo: Arc<RwLock<Option<Value>>>,
}

pub fn app() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .route("/echo", get(get_echo).post(store_echo))
        .route("/status/{code}", any(respond_with_status))
        .route("/headers", get(request_headers))
        .with_state(AppState::default())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.items.read().await;
    Json(items.values().cloned().collect())
}

async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let item = Item {
        id: state.next_id.fetch_add(1, Ordering::Relaxed) + 1,
        name: input.name,
        created_at: input.created_at,
    };
    tracing::debug!(id = item.id, "created item");
    state.items.write().await.insert(item.id, item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, StatusCode> {
    let items = state.items.read().await;
    items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateItem>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = state.items.write().await;
    let item = items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        item.name = name;
    }
    if let Some(created_at) = input.created_at {
        item.created_at = Some(created_at);
    }
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut items = state.items.write().await;
    items.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn store_echo(
    State(state): State<AppState>,
    Json(document): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *state.echo.write().await = Some(document.clone());
    (StatusCode::CREATED, Json(document))
}

async fn get_echo(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    state.echo.read().await.clone().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Answers with whatever status the path names, for any method.
async fn respond_with_status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

async fn request_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    Json(
        headers
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
    )
}
