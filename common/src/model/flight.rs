use serde::{Deserialize, Serialize};
use std::fmt;

/// A single directed flight leg between two airports.
///
/// The same shape is used for the legs a client submits and for the merged
/// route the backend returns: in the latter case `source` is the overall
/// origin and `target` the final destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Departure airport code (e.g. `SFO`).
    pub source: String,
    /// Arrival airport code (e.g. `EWR`).
    pub target: String,
}

impl Flight {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_wire_field_names() {
        let flight: Flight = serde_json::from_str(r#"{"source":"SFO","target":"EWR"}"#).unwrap();
        assert_eq!(flight, Flight::new("SFO", "EWR"));
    }

    #[test]
    fn display_shows_direction() {
        assert_eq!(Flight::new("ATL", "GSO").to_string(), "ATL -> GSO");
    }
}
