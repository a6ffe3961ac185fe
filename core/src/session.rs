//! Session state shared by the search and translate operations.
//!
//! # Design
//! The selected book lives in an explicit `Session` value owned by the host
//! rather than in ambient module state. The session follows the same
//! host-does-IO split as `CatalogClient`: `build_*` methods produce requests
//! and `apply_*` methods consume round-trip outcomes, updating the
//! selected-book slot and the two rendered output regions.
//!
//! Outcomes carry no request identity and are applied in arrival order, so
//! a host that overlaps two operations gets "last response wins", whichever
//! request was issued first. Nothing here guards against that; every write
//! goes through `&mut self`, which keeps the race visible but data-safe.

use crate::client::CatalogClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Book, TranslateRequest, Translation};

/// Fixed text rendered when a search round-trip fails outright.
pub const SEARCH_FAILED: &str = "Something went wrong. Please try again.";

/// Fixed text rendered when a translate round-trip fails outright.
pub const TRANSLATE_FAILED: &str = "Translation failed.";

/// One user session: the selected-book slot plus the two output regions.
///
/// The results region holds the rendered outcome of the last search, the
/// translation region the rendered outcome of the last translate. Both are
/// plain text for the host to display.
#[derive(Debug, Clone)]
pub struct Session {
    client: CatalogClient,
    selected_book: Option<Book>,
    results: String,
    translation: String,
}

impl Session {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: CatalogClient::new(base_url),
            selected_book: None,
            results: String::new(),
            translation: String::new(),
        }
    }

    /// The book held by the last successful search, if any.
    pub fn selected_book(&self) -> Option<&Book> {
        self.selected_book.as_ref()
    }

    /// Rendered contents of the results region.
    pub fn results(&self) -> &str {
        &self.results
    }

    /// Rendered contents of the translation region.
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Build a lookup request for `title`.
    pub fn build_search(&self, title: &str) -> HttpRequest {
        self.client.build_search_book(title)
    }

    /// Apply the outcome of a search round-trip.
    ///
    /// A parsed book overwrites the selected-book slot, renders the result
    /// block and clears any prior translation. A non-2xx response renders
    /// the server's message verbatim (or clears the region when the body
    /// carries none); a transport or parse failure renders [`SEARCH_FAILED`].
    /// Failures never touch the slot, so a book from an earlier successful
    /// search stays selected and stays translatable.
    pub fn apply_search(&mut self, outcome: Result<HttpResponse, ApiError>) {
        let parsed = outcome.and_then(|response| self.client.parse_search_book(response));
        match parsed {
            Ok(book) => {
                self.results = render_book(&book);
                self.translation.clear();
                self.selected_book = Some(book);
            }
            Err(ApiError::HttpError {
                message: Some(message),
                ..
            }) => {
                self.results = message;
            }
            Err(ApiError::HttpError { message: None, .. }) => {
                self.results.clear();
            }
            Err(_) => {
                self.results = SEARCH_FAILED.to_string();
            }
        }
    }

    /// Build a translate request carrying the selected book's description.
    ///
    /// Fails with [`ApiError::NoBookSelected`] when no search has succeeded
    /// yet. No request is built in that case, so the host has nothing to
    /// execute and no network call can happen.
    pub fn build_translate(&self, target_lang: &str) -> Result<HttpRequest, ApiError> {
        let book = self.selected_book.as_ref().ok_or(ApiError::NoBookSelected)?;
        let input = TranslateRequest {
            text: book.description.clone(),
            target_lang: target_lang.to_string(),
        };
        self.client.build_translate_description(&input)
    }

    /// Apply the outcome of a translate round-trip.
    ///
    /// Mirrors [`Session::apply_search`] but only ever writes the
    /// translation region: the selected book and the results region are
    /// left as they are.
    pub fn apply_translate(&mut self, outcome: Result<HttpResponse, ApiError>) {
        let parsed =
            outcome.and_then(|response| self.client.parse_translate_description(response));
        match parsed {
            Ok(translation) => {
                self.translation = render_translation(&translation);
            }
            Err(ApiError::HttpError {
                message: Some(message),
                ..
            }) => {
                self.translation = message;
            }
            Err(ApiError::HttpError { message: None, .. }) => {
                self.translation.clear();
            }
            Err(_) => {
                self.translation = TRANSLATE_FAILED.to_string();
            }
        }
    }
}

fn render_book(book: &Book) -> String {
    format!(
        "{}\nAuthor: {}\nDescription: {}",
        book.title, book.author, book.description
    )
}

fn render_translation(translation: &Translation) -> String {
    format!("Translated description:\n{}", translation.translated_text)
}
