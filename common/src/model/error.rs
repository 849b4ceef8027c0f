use serde::{Deserialize, Serialize};

/// Reason a flight list was rejected, as seen on the wire.
///
/// Serialized by variant name, so clients can match on the `kind` field of an
/// `ErrorResponse` without parsing the human readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No flights were supplied.
    EmptyInput,
    /// A flight has an empty source or target airport.
    InvalidIdentifier,
    /// A flight departs from and arrives at the same airport.
    DegenerateSegment,
    /// The flights branch, loop, or do not join into a single route.
    InvalidTopology,
    /// The request body could not be decoded. Never produced by the path check itself.
    MalformedRequest,
}
