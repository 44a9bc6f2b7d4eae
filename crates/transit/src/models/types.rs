//! Core data types and errors for arrival/departure tracking.

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// Composite key identifying one arrival/departure event on the server.
///
/// The five fields together are sufficient for the regional server to resolve
/// a single arrival-and-departure record. Values are immutable once built;
/// cloning yields an equal, independently owned key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalDepartureKey {
    pub stop_id: StopIdentifier,
    pub trip_id: TripIdentifier,
    /// Epoch milliseconds of the service day this schedule instance belongs to.
    /// May differ from the calendar day for late-night trips.
    pub service_date: i64,
    pub vehicle_id: VehicleIdentifier,
    /// Ordinal position of the stop within the trip's stop sequence.
    pub stop_sequence: u32,
}

impl ArrivalDepartureKey {
    pub fn new(
        stop_id: StopIdentifier,
        trip_id: TripIdentifier,
        service_date: i64,
        vehicle_id: VehicleIdentifier,
        stop_sequence: u32,
    ) -> Self {
        Self {
            stop_id,
            trip_id,
            service_date,
            vehicle_id,
            stop_sequence,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("unrecognized deep link: {0}")]
    DeepLinkUnrecognized(String),

    #[error("deep link is missing the `{0}` parameter")]
    DeepLinkMissingParam(&'static str),

    #[error("deep link parameter `{name}` has invalid value `{value}`")]
    DeepLinkInvalidParam { name: &'static str, value: String },

    #[error("base url cannot carry a path: {0}")]
    InvalidBaseUrl(url::Url),
}

pub type Result<T> = std::result::Result<T, TransitError>;
