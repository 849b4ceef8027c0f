//! # Flight Service Module
//!
//! Groups the flight route endpoints under `/api/flights`.
//!
//! ## Sub-modules:
//! - `path`: validates flight legs and collapses them into a single route.
//! - `sort`: HTTP handler that exposes `path` to clients.

pub mod path;
mod sort;

use actix_web::error::InternalError;
use actix_web::web::{post, scope, JsonConfig};
use actix_web::{HttpResponse, Scope};

/// The base path for all flight-related API endpoints.
const API_PATH: &str = "/api/flights";

/// Configures and returns the Actix `Scope` for all flight-related routes.
///
/// # Registered Routes:
///
/// *   **`POST /sorted`**:
///     - **Handler**: `sort::process`
///     - **Description**: Takes an unordered list of flight legs and returns the
///       origin and destination of the single route they form, or a typed error.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/sorted", post().to(sort::process))
}

/// JSON extractor settings for the flight routes.
///
/// Caps the body at `limit` bytes and answers undecodable bodies with a
/// `MalformedRequest` error instead of actix's plain text default.
pub fn json_config(limit: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let body = sort::malformed_body(err.to_string());
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}
