//! In-memory items CRUD service.
//!
//! Exposes `ping` plus create/list/get/update/delete over JSON, backed by an
//! [`ItemStore`] that lives for the lifetime of the process.

pub mod config;
pub mod error;
pub mod store;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::{AppError, ServerError};
pub use store::{ItemStore, StoreError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update body. Unknown fields, `id` included, are ignored.
///
/// `description` distinguishes a missing key (`None`, keep) from an explicit
/// `null` (`Some(None)`, clear).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(ItemStore::new())
}

pub fn router(store: ItemStore) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item)
                .patch(update_item)
                .put(update_item)
                .delete(delete_item),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve `store` on `listener` until Ctrl+C or SIGTERM.
pub async fn run(listener: TcpListener, store: ItemStore) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}

async fn list_items(State(store): State<ItemStore>) -> Json<ItemList> {
    let items = store.list().await;
    tracing::debug!(count = items.len(), "listing items");
    Json(ItemList { items })
}

async fn create_item(
    State(store): State<ItemStore>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let item = store.create(input).await;
    (StatusCode::CREATED, Json(item))
}

async fn get_item(
    State(store): State<ItemStore>,
    Path(id): Path<String>,
) -> Result<Json<Item>, AppError> {
    tracing::debug!(%id, "fetching item");
    Ok(Json(store.get(&id).await?))
}

async fn update_item(
    State(store): State<ItemStore>,
    Path(id): Path<String>,
    Json(input): Json<UpdateItem>,
) -> Result<Json<Item>, AppError> {
    Ok(Json(store.update(&id, input).await?))
}

async fn delete_item(
    State(store): State<ItemStore>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    store.delete(&id).await?;
    Ok(Json(DeleteResponse { success: true }))
}

async fn not_found() -> AppError {
    AppError::RouteNotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
