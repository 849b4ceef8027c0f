pub mod error;
pub mod flight;
