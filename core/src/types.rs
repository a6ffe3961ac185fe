//! Domain DTOs for the catalog API.
//!
//! # Design
//! Wire field names come from the backend: the book record uses PascalCase
//! keys and the translation endpoint camelCase, so the structs carry serde
//! renames rather than leaking wire spelling into Rust field names. All
//! fields are opaque text passed through verbatim; validation belongs to
//! the backend, not this client.

use serde::{Deserialize, Serialize};

/// A book record returned by the lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub description: String,
}

/// Request payload for the translation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(rename = "targetLang")]
    pub target_lang: String,
}

/// Successful translation response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translation {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Target languages offered to the user, as `(code, display name)` pairs.
///
/// Mirrors the set the backend accepts. The client sends whatever code it
/// is handed without checking it against this list; the backend answers an
/// unknown code with a 400 and a message.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("it", "Italian"),
    ("pl", "Polish"),
    ("ru", "Russian"),
];
