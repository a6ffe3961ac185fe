//! Synchronous API client core for the book catalog and translation service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `CatalogClient` is stateless; it holds only `base_url`. Each API
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `Session` holds the single piece of client state, the currently
//!   selected book, plus the two rendered output regions the host displays.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod session;
pub mod types;

pub use client::CatalogClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::Session;
pub use types::{ApiMessage, Book, TranslateRequest, Translation, TARGET_LANGUAGES};
