//! Stateless HTTP request builder and response parser for the catalog API.
//!
//! # Design
//! `CatalogClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ApiMessage, Book, TranslateRequest, Translation};

/// Synchronous, stateless client for the catalog API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a lookup request for an exact title match.
    ///
    /// The title is URL-encoded into the query string. An empty title still
    /// builds a request; the server answers it with a 400 and a message.
    pub fn build_search_book(&self, title: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!(
                "{}/books?title={}",
                self.base_url,
                urlencoding::encode(title)
            ),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_search_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn build_translate_description(
        &self,
        input: &TranslateRequest,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/translate", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_translate_description(
        &self,
        response: HttpResponse,
    ) -> Result<Translation, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-2xx responses to `HttpError`, extracting the body's `message`
/// field when the body parses as one.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ApiMessage>(&response.body)
        .ok()
        .map(|m| m.message);
    Err(ApiError::HttpError {
        status: response.status,
        message,
    })
}
