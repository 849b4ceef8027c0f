//! # Sorted Flight Service
//!
//! Backend logic for the `POST /api/flights/sorted` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives a `SortFlightsRequest` holding the
//!     flight legs in arbitrary order.
//!
//! 2.  **Reconstruction**: the legs are handed to `path::reconstruct`, which
//!     validates them and collapses them into a single route.
//!
//! 3.  **HTTP Response**: on success the overall origin and destination are
//!     returned as a `SortFlightsResponse` with `200 OK`. Any `PathError` becomes a
//!     `400 Bad Request` whose `ErrorResponse` carries the error kind and message.
//!
//! The handler keeps no state between requests.

use crate::services::flights::path::{self, PathError};
use actix_web::{web, HttpResponse, Responder};
use common::model::error::ErrorKind;
use common::requests::{ErrorResponse, SortFlightsRequest, SortFlightsResponse};
use log::{debug, warn};

/// Actix web handler for `POST /api/flights/sorted`.
///
/// # Returns
/// - `200 OK` with a `SortFlightsResponse` when the flights form one route.
/// - `400 Bad Request` with an `ErrorResponse` otherwise.
pub(crate) async fn process(payload: web::Json<SortFlightsRequest>) -> impl Responder {
    let request = payload.into_inner();
    match path::reconstruct(&request.flights) {
        Ok(result) => {
            debug!("Sorted {} flight(s) into {}", request.flights.len(), result);
            HttpResponse::Ok().json(SortFlightsResponse { result })
        }
        Err(err) => {
            warn!("Rejected {} flight(s): {}", request.flights.len(), err);
            HttpResponse::BadRequest().json(error_body(&err))
        }
    }
}

fn error_body(err: &PathError) -> ErrorResponse {
    ErrorResponse {
        kind: err.kind(),
        message: err.to_string(),
    }
}

/// Body sent back when the JSON payload itself cannot be decoded.
pub(crate) fn malformed_body(message: String) -> ErrorResponse {
    ErrorResponse {
        kind: ErrorKind::MalformedRequest,
        message,
    }
}

#[cfg(test)]
mod tests {
    use crate::services::flights::{configure_routes, json_config};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::error::ErrorKind;
    use common::model::flight::Flight;
    use common::requests::{ErrorResponse, SortFlightsResponse};
    use serde_json::json;

    const URI: &str = "/api/flights/sorted";

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(json_config(64 * 1024))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn returns_overall_route() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri(URI)
            .set_json(json!({
                "flights": [
                    { "source": "IND", "target": "EWR" },
                    { "source": "SFO", "target": "ATL" },
                    { "source": "GSO", "target": "IND" },
                    { "source": "ATL", "target": "GSO" }
                ]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: SortFlightsResponse = test::read_body_json(resp).await;
        assert_eq!(body.result, Flight::new("SFO", "EWR"));
    }

    #[actix_web::test]
    async fn reports_error_kind_for_each_rejection() {
        let app = app!();
        let cases = [
            (json!([]), ErrorKind::EmptyInput),
            (json!([{ "source": "", "target": "SFO" }]), ErrorKind::InvalidIdentifier),
            (json!([{ "source": "SFO", "target": "SFO" }]), ErrorKind::DegenerateSegment),
            (
                json!([
                    { "source": "1", "target": "2" },
                    { "source": "2", "target": "1" }
                ]),
                ErrorKind::InvalidTopology,
            ),
            (
                json!([
                    { "source": "A", "target": "B" },
                    { "source": "C", "target": "D" }
                ]),
                ErrorKind::InvalidTopology,
            ),
        ];

        for (flights, kind) in cases {
            let req = test::TestRequest::post()
                .uri(URI)
                .set_json(json!({ "flights": flights }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.kind, kind);
            assert!(!body.message.is_empty());
        }
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri(URI)
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"flights": [{"source": "SFO"}]}"#)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::MalformedRequest);
    }

    #[actix_web::test]
    async fn oversized_json_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(json_config(32))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::post()
            .uri(URI)
            .set_json(json!({
                "flights": [{ "source": "SFO", "target": "EWR" }]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::MalformedRequest);
        assert!(body.message.contains("larger than allowed"));
    }

    #[actix_web::test]
    async fn only_post_is_routed() {
        let app = app!();
        let req = test::TestRequest::get().uri(URI).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
