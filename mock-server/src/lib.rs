//! In-memory stand-in for the book catalog backend.
//!
//! Implements the two endpoints the client core talks to, with the same
//! observable behavior as the real service: `GET /books?title=` looks a
//! book up by exact title and `POST /translate` produces a translation of
//! a text into one of the allowed target languages. Translation is faked
//! deterministically so tests can assert on the output.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub title: String,
}

#[derive(Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "targetLang", default = "default_target_lang")]
    pub target_lang: String,
}

fn default_target_lang() -> String {
    "it".to_string()
}

#[derive(Serialize, Deserialize)]
pub struct Translation {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Error body shape for every non-2xx response.
#[derive(Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Target languages the translate endpoint accepts.
pub const ALLOWED_LANGUAGES: &[&str] = &["it", "pl", "ru"];

pub type Catalog = Arc<HashMap<String, Book>>;

/// Router over the default seeded catalog.
pub fn app() -> Router {
    app_with_catalog(seed_books())
}

/// Router over an explicit catalog, keyed by exact title.
pub fn app_with_catalog(books: Vec<Book>) -> Router {
    let catalog: Catalog = Arc::new(books.into_iter().map(|b| (b.title.clone(), b)).collect());
    Router::new()
        .route("/books", get(get_book))
        .route("/translate", post(translate))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Titles available out of the box.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: "Paul Atreides leads the nomads of the desert planet Arrakis in a fight over the spice that binds the empire.".to_string(),
        },
        Book {
            title: "Solaris".to_string(),
            author: "Stanislaw Lem".to_string(),
            description: "A psychologist joins a station orbiting an ocean planet that answers human grief with apparitions.".to_string(),
        },
        Book {
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            description: "An envoy to the planet Gethen is drawn into its politics and a desperate crossing of the northern ice.".to_string(),
        },
    ]
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<ApiMessage>) {
    (
        status,
        Json(ApiMessage {
            message: message.to_string(),
        }),
    )
}

async fn get_book(
    State(catalog): State<Catalog>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Book>, (StatusCode, Json<ApiMessage>)> {
    if params.title.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Title parameter is required"));
    }
    catalog
        .get(&params.title)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Book not found"))
}

async fn translate(
    Json(input): Json<TranslateRequest>,
) -> Result<Json<Translation>, (StatusCode, Json<ApiMessage>)> {
    if !ALLOWED_LANGUAGES.contains(&input.target_lang.as_str()) {
        return Err(error(
            StatusCode::BAD_REQUEST,
            &format!("Invalid target language. Choose one of {ALLOWED_LANGUAGES:?}"),
        ));
    }
    if input.text.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Text is required"));
    }
    Ok(Json(Translation {
        translated_text: mock_translate(&input.text, &input.target_lang),
    }))
}

/// Deterministic stand-in for a machine-translation service: tags the text
/// with the target code so callers can assert the round-trip.
fn mock_translate(text: &str, target_lang: &str) -> String {
    format!("[{target_lang}] {text}")
}
