//! The shared arrival/departure reference contract.
//!
//! Several unrelated model types (user-configured alarms, shared trip deep
//! links) each carry enough state to name one arrival/departure event on the
//! server. This trait is the common read-only surface over that state, so
//! callers can resolve the event without caring which concrete type supplied
//! the key.

use chrono::{DateTime, NaiveDate, Utc};

use crate::identifiers::*;
use crate::models::types::ArrivalDepartureKey;

/// Read-only view of the composite key for one arrival/departure event.
///
/// Conforming types expose five stored fields and nothing else: no setters,
/// no side effects, and no failure modes. Callers must treat this trait as
/// the whole capability and never downcast to a concrete model.
pub trait ArrivalDepartureRef: Send + Sync {
    fn stop_id(&self) -> &StopIdentifier;

    fn trip_id(&self) -> &TripIdentifier;

    /// Epoch milliseconds identifying the service day's schedule instance.
    fn service_date(&self) -> i64;

    fn vehicle_id(&self) -> &VehicleIdentifier;

    /// Ordinal position of the stop within the trip's stop sequence.
    fn stop_sequence(&self) -> u32;

    /// Snapshot the five fields into an owned, value-comparable key.
    ///
    /// Two references denote the same arrival/departure iff their keys are
    /// equal, regardless of concrete type.
    fn key(&self) -> ArrivalDepartureKey {
        ArrivalDepartureKey {
            stop_id: self.stop_id().clone(),
            trip_id: self.trip_id().clone(),
            service_date: self.service_date(),
            vehicle_id: self.vehicle_id().clone(),
            stop_sequence: self.stop_sequence(),
        }
    }

    /// UTC calendar day of the service date, or `None` if the timestamp is
    /// outside chrono's representable range.
    fn service_day(&self) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp_millis(self.service_date()).map(|dt| dt.date_naive())
    }
}

/// The owned key is itself a valid reference to the event it names.
impl ArrivalDepartureRef for ArrivalDepartureKey {
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

    fn key(&self) -> ArrivalDepartureKey {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::alarm::ArrivalAlarm;
    use crate::models::deeplink::TripDeepLink;

    fn scenario_key() -> ArrivalDepartureKey {
        ArrivalDepartureKey::new(
            StopIdentifier::new("123"),
            TripIdentifier::new("T1"),
            1_700_000_000_000,
            VehicleIdentifier::new("V9"),
            4,
        )
    }

    #[test]
    fn test_accessors_through_trait_object() {
        let alarm = ArrivalAlarm::new(scenario_key(), RegionIdentifier::new("puget-sound"), 10);
        let reference: &dyn ArrivalDepartureRef = &alarm;

        assert_eq!(reference.stop_id().as_str(), "123");
        assert_eq!(reference.trip_id().as_str(), "T1");
        assert_eq!(reference.service_date(), 1_700_000_000_000);
        assert_eq!(reference.vehicle_id().as_str(), "V9");
        assert_eq!(reference.stop_sequence(), 4);

        // Same values whether observed concretely or polymorphically
        assert_eq!(alarm.key(), reference.key());
    }

    #[test]
    fn test_accessors_are_pure() {
        let key = scenario_key();
        let reference: &dyn ArrivalDepartureRef = &key;

        assert_eq!(reference.stop_id(), reference.stop_id());
        assert_eq!(reference.trip_id(), reference.trip_id());
        assert_eq!(reference.service_date(), reference.service_date());
        assert_eq!(reference.vehicle_id(), reference.vehicle_id());
        assert_eq!(reference.stop_sequence(), reference.stop_sequence());
    }

    #[test]
    fn test_key_equality_across_concrete_types() {
        let alarm = ArrivalAlarm::new(scenario_key(), RegionIdentifier::new("puget-sound"), 5);
        let link = TripDeepLink::new(
            "Route 545 to Redmond",
            RegionIdentifier::new("puget-sound"),
            scenario_key(),
        );

        let refs: [&dyn ArrivalDepartureRef; 2] = [&alarm, &link];
        assert_eq!(refs[0].key(), refs[1].key());

        let elsewhere = ArrivalAlarm::new(
            ArrivalDepartureKey {
                stop_id: StopIdentifier::new("456"),
                ..scenario_key()
            },
            RegionIdentifier::new("puget-sound"),
            5,
        );
        assert_ne!(elsewhere.key(), link.key());
    }

    #[test]
    fn test_service_day() {
        // 2023-11-14T22:13:20Z
        let key = scenario_key();
        assert_eq!(
            key.service_day(),
            NaiveDate::from_ymd_opt(2023, 11, 14),
        );
    }
}
