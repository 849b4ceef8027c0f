use crate::model::error::ErrorKind;
use crate::model::flight::Flight;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Request payload for the sorted flight endpoint.
/// The flights may be listed in any order.
pub struct SortFlightsRequest {
    pub flights: Vec<Flight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Successful response: the overall origin and final destination.
pub struct SortFlightsResponse {
    pub result: Flight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body returned with every rejected request.
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}
