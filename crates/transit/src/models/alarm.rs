//! User-configured arrival alarms.

use chrono::{DateTime, TimeDelta, Utc};

use crate::identifiers::*;
use crate::models::traits::ArrivalDepartureRef;
use crate::models::types::ArrivalDepartureKey;

/// An alarm the user set for one tracked arrival.
///
/// Carries the full arrival/departure key plus the alarm's own settings. The
/// push registration that actually fires the alarm lives server-side; this
/// model only records what the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalAlarm {
    pub stop_id: StopIdentifier,
    pub trip_id: TripIdentifier,
    pub service_date: i64,
    pub vehicle_id: VehicleIdentifier,
    pub stop_sequence: u32,

    /// Region whose server owns the referenced arrival.
    pub region_id: RegionIdentifier,
    /// How far ahead of the predicted arrival the alarm fires.
    pub minutes_before: u32,
}

impl ArrivalAlarm {
    pub fn new(key: ArrivalDepartureKey, region_id: RegionIdentifier, minutes_before: u32) -> Self {
        Self {
            stop_id: key.stop_id,
            trip_id: key.trip_id,
            service_date: key.service_date,
            vehicle_id: key.vehicle_id,
            stop_sequence: key.stop_sequence,
            region_id,
            minutes_before,
        }
    }

    /// When the alarm should fire, given the current arrival prediction.
    pub fn trigger_date(&self, predicted_arrival: DateTime<Utc>) -> DateTime<Utc> {
        predicted_arrival - TimeDelta::minutes(i64::from(self.minutes_before))
    }
}

impl ArrivalDepartureRef for ArrivalAlarm {
    fn stop_id(&self) -> &StopIdentifier {
        &self.stop_id
    }

    fn trip_id(&self) -> &TripIdentifier {
        &self.trip_id
    }

    fn service_date(&self) -> i64 {
        self.service_date
    }

    fn vehicle_id(&self) -> &VehicleIdentifier {
        &self.vehicle_id
    }

    fn stop_sequence(&self) -> u32 {
        self.stop_sequence
    }
}
