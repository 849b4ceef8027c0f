//! # Route Reconstruction
//!
//! Collapses an unordered list of flight legs into the single route they
//! describe and reports its overall origin and final destination.
//!
//! ## Algorithm
//!
//! Legs are merged one at a time into *fragments*: runs of already merged legs
//! that form a simple sub-route. A `PathIndex` tracks every live fragment by its
//! two boundary airports:
//!
//! - `next`: fragment start -> fragment end
//! - `prev`: fragment end -> fragment start
//!
//! When a leg `u -> v` arrives it is checked, in this order, for:
//!
//! 1.  an empty airport code (`InvalidIdentifier`),
//! 2.  `u == v` (`DegenerateSegment`),
//! 3.  a second departure from `u` (fan-out),
//! 4.  a second arrival into `v` (fan-in),
//! 5.  `v` being the start of the fragment that ends at `u` (cycle).
//!
//! If it passes, the leg is glued to the fragment ending at `u` and to the
//! fragment starting at `v` (either or both may be absent). The superseded
//! boundary keys are dropped, so `next` and `prev` always hold exactly one entry
//! per fragment and stay inverse to each other.
//!
//! Once every leg is merged a valid input leaves exactly one fragment. More
//! than one means the legs describe several disjoint routes, which is rejected.
//!
//! All state is local to one call; nothing is shared between requests.

use common::model::error::ErrorKind;
use common::model::flight::Flight;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Why a list of legs does not form a single simple route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// No legs were supplied.
    EmptyInput,
    /// Leg at `index` has an empty source or target.
    InvalidIdentifier { index: usize },
    /// Leg at `index` departs from and arrives at `airport`.
    DegenerateSegment { index: usize, airport: String },
    /// Leg at `index` (or the merged result) breaks the single route shape.
    InvalidTopology {
        index: Option<usize>,
        violation: TopologyViolation,
    },
}

/// The specific shape problem behind `PathError::InvalidTopology`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyViolation {
    /// A second leg departs from `airport`.
    FanOut { airport: String },
    /// A second leg arrives at `airport`.
    FanIn { airport: String },
    /// The leg `source -> target` closes a loop.
    Cycle { source: String, target: String },
    /// The legs form `fragments` separate routes.
    Disconnected { fragments: usize },
}

impl PathError {
    /// Wire level kind reported to clients.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            Self::DegenerateSegment { .. } => ErrorKind::DegenerateSegment,
            Self::InvalidTopology { .. } => ErrorKind::InvalidTopology,
        }
    }

    fn topology(index: usize, violation: TopologyViolation) -> Self {
        Self::InvalidTopology {
            index: Some(index),
            violation,
        }
    }
}

impl fmt::Display for TopologyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FanOut { airport } => write!(f, "more than one flight departs from '{airport}'"),
            Self::FanIn { airport } => write!(f, "more than one flight arrives at '{airport}'"),
            Self::Cycle { source, target } => {
                write!(f, "flight '{source}' -> '{target}' closes a cycle")
            }
            Self::Disconnected { fragments } => {
                write!(f, "flights form {fragments} separate routes instead of one")
            }
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "path should not be empty"),
            Self::InvalidIdentifier { index } => {
                write!(f, "flight #{index}: airport name should not be empty")
            }
            Self::DegenerateSegment { index, airport } => {
                write!(f, "flight #{index}: target '{airport}' should not be the same as source")
            }
            Self::InvalidTopology {
                index: Some(index),
                violation,
            } => write!(f, "flight #{index}: invalid path: {violation}"),
            Self::InvalidTopology {
                index: None,
                violation,
            } => write!(f, "invalid path: {violation}"),
        }
    }
}

impl std::error::Error for PathError {}

/// Incremental index of the route fragments seen so far.
///
/// Feed legs through [`PathIndex::merge`] and finish with
/// [`PathIndex::into_route`]. A failed merge leaves the index untouched.
#[derive(Debug, Default)]
pub struct PathIndex {
    /// Fragment start -> fragment end.
    next: HashMap<String, String>,
    /// Fragment end -> fragment start.
    prev: HashMap<String, String>,
    /// Airports that already have an outgoing leg.
    departures: HashSet<String>,
    /// Airports that already have an incoming leg.
    arrivals: HashSet<String>,
    merged: usize,
}

impl PathIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `flight` against the fragments merged so far and glues it in.
    ///
    /// On success returns the boundary of the fragment the leg now belongs to.
    pub fn merge(&mut self, flight: &Flight) -> Result<Flight, PathError> {
        let index = self.merged;
        let (u, v) = (flight.source.as_str(), flight.target.as_str());

        if u.is_empty() || v.is_empty() {
            return Err(PathError::InvalidIdentifier { index });
        }
        if u == v {
            return Err(PathError::DegenerateSegment {
                index,
                airport: u.to_string(),
            });
        }
        if self.departures.contains(u) {
            return Err(PathError::topology(
                index,
                TopologyViolation::FanOut {
                    airport: u.to_string(),
                },
            ));
        }
        if self.arrivals.contains(v) {
            return Err(PathError::topology(
                index,
                TopologyViolation::FanIn {
                    airport: v.to_string(),
                },
            ));
        }
        if self.next.get(v).is_some_and(|end| end == u) {
            return Err(PathError::topology(
                index,
                TopologyViolation::Cycle {
                    source: u.to_string(),
                    target: v.to_string(),
                },
            ));
        }

        let start = match self.prev.remove(u) {
            Some(head) => {
                self.next.remove(&head);
                head
            }
            None => u.to_string(),
        };
        let end = match self.next.remove(v) {
            Some(tail) => {
                self.prev.remove(&tail);
                tail
            }
            None => v.to_string(),
        };

        self.next.insert(start.clone(), end.clone());
        self.prev.insert(end.clone(), start.clone());
        self.departures.insert(u.to_string());
        self.arrivals.insert(v.to_string());
        self.merged += 1;

        Ok(Flight {
            source: start,
            target: end,
        })
    }

    /// Number of fragments currently tracked.
    pub fn fragments(&self) -> usize {
        self.next.len()
    }

    /// Consumes the index and returns the origin and destination of the one
    /// route every merged leg belongs to.
    pub fn into_route(self) -> Result<Flight, PathError> {
        let fragments = self.fragments();
        if fragments > 1 {
            return Err(PathError::InvalidTopology {
                index: None,
                violation: TopologyViolation::Disconnected { fragments },
            });
        }
        match self.next.into_iter().next() {
            Some((source, target)) => Ok(Flight { source, target }),
            None => Err(PathError::EmptyInput),
        }
    }
}

/// Reconstructs the overall origin and destination of `flights`.
///
/// Fails on the first invalid leg in input order; no partial result is ever
/// returned.
pub fn reconstruct(flights: &[Flight]) -> Result<Flight, PathError> {
    if flights.is_empty() {
        return Err(PathError::EmptyInput);
    }

    let mut index = PathIndex::new();
    for flight in flights {
        index.merge(flight)?;
    }
    index.into_route()
}
