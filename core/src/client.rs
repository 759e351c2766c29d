//! Stateless request builder and response parser for the items API.
//!
//! # Design
//! `ItemClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`, so the network round-trip stays with the
//! caller and everything here is deterministic.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateItem, DeleteResponse, Item, ItemList, PingResponse, UpdateItem};

/// Address the service listens on when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl Default for ItemClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_ping(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/ping".to_string(), None)
    }

    pub fn build_create_item(&self, input: &CreateItem) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(self.request(HttpMethod::Post, "/items".to_string(), Some(body)))
    }

    pub fn build_list_items(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/items".to_string(), None)
    }

    pub fn build_get_item(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, item_path(id), None)
    }

    pub fn build_update_item(&self, id: &str, input: &UpdateItem) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(self.request(HttpMethod::Patch, item_path(id), Some(body)))
    }

    pub fn build_delete_item(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, item_path(id), None)
    }

    pub fn parse_ping(&self, response: HttpResponse) -> Result<PingResponse, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<ItemList, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<DeleteResponse, ApiError> {
        parse_json(response)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let headers = if body.is_some() {
            vec![("content-type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }
}

fn item_path(id: &str) -> String {
    format!("/items/{}", urlencoding::encode(id))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to the matching `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
