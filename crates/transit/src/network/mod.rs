//! Construction of server requests from model values.
//!
//! The crate builds request URLs only; issuing them is left to the host app's
//! networking layer.

pub mod request;

pub use request::arrival_departure_url;
