//! Shareable deep links to a tracked trip.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use url::Url;

use crate::identifiers::*;
use crate::models::traits::ArrivalDepartureRef;
use crate::models::types::{ArrivalDepartureKey, Result, TransitError};

const APP_SCHEME: &str = "headway";
const VIEW_TRIP_HOST: &str = "view-trip";

/// A deep link one user shares with another to open a specific arrival.
///
/// Encodes as a `headway://view-trip` app link. `created_at` records when the
/// link entered this device and is ignored by equality: receiving the same
/// link twice yields the same value.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripDeepLink {
    /// Human-readable label, e.g. the route headsign.
    pub name: Arc<str>,
    pub region_id: RegionIdentifier,
    pub stop_id: StopIdentifier,
    pub trip_id: TripIdentifier,
    pub service_date: i64,
    pub vehicle_id: VehicleIdentifier,
    pub stop_sequence: u32,
    pub created_at: DateTime<Utc>,
}

impl TripDeepLink {
    pub fn new(
        name: impl Into<Arc<str>>,
        region_id: RegionIdentifier,
        key: ArrivalDepartureKey,
    ) -> Self {
        Self {
            name: name.into(),
            region_id,
            stop_id: key.stop_id,
            trip_id: key.trip_id,
            service_date: key.service_date,
            vehicle_id: key.vehicle_id,
            stop_sequence: key.stop_sequence,
            created_at: Utc::now(),
        }
    }

    /// Render the link as a shareable app URL.
    pub fn to_url(&self) -> Url {
        let mut url = Url::parse("headway://view-trip").unwrap();
        url.query_pairs_mut()
            .append_pair("name", &self.name)
            .append_pair("region", self.region_id.as_str())
            .append_pair("stop", self.stop_id.as_str())
            .append_pair("trip", self.trip_id.as_str())
            .append_pair("serviceDate", &self.service_date.to_string())
            .append_pair("vehicle", self.vehicle_id.as_str())
            .append_pair("stopSequence", &self.stop_sequence.to_string());
        url
    }

    /// Decode an incoming app URL into a deep link.
    ///
    /// `created_at` is stamped with the time of receipt.
    pub fn parse(url: &Url) -> Result<TripDeepLink> {
        if url.scheme() != APP_SCHEME || url.host_str() != Some(VIEW_TRIP_HOST) {
            warn!(%url, "rejecting deep link with unexpected scheme or host");
            return Err(TransitError::DeepLinkUnrecognized(url.to_string()));
        }

        let link = TripDeepLink {
            name: query_param(url, "name")?.into(),
            region_id: RegionIdentifier::new(query_param(url, "region")?),
            stop_id: StopIdentifier::new(query_param(url, "stop")?),
            trip_id: TripIdentifier::new(query_param(url, "trip")?),
            service_date: numeric_param(url, "serviceDate")?,
            vehicle_id: VehicleIdentifier::new(query_param(url, "vehicle")?),
            stop_sequence: numeric_param(url, "stopSequence")?,
            created_at: Utc::now(),
        };
        debug!(trip = %link.trip_id, stop = %link.stop_id, "parsed trip deep link");
        Ok(link)
    }
}

fn query_param(url: &Url, name: &'static str) -> Result<String> {
    url.query_pairs()
        .find(|(k, _)| k.as_ref() == name)
        .map(|(_, v)| v.into_owned())
        .ok_or(TransitError::DeepLinkMissingParam(name))
}

fn numeric_param<T: FromStr>(url: &Url, name: &'static str) -> Result<T> {
    let raw = query_param(url, name)?;
    raw.parse()
        .map_err(|_| TransitError::DeepLinkInvalidParam { name, value: raw })
}

// created_at is local bookkeeping, not part of the link's identity
impl PartialEq for TripDeepLink {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.region_id == other.region_id
            && self.stop_id == other.stop_id
            && self.trip_id == other.trip_id
            && self.service_date == other.service_date
            && self.vehicle_id == other.vehicle_id
            && self.stop_sequence == other.stop_sequence
    }
}

impl Eq for TripDeepLink {}

impl ArrivalDepartureRef for TripDeepLink {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_link() -> TripDeepLink {
        TripDeepLink::new(
            "Route 545 to Redmond",
            RegionIdentifier::new("puget-sound"),
            ArrivalDepartureKey::new(
                StopIdentifier::new("1_75403"),
                TripIdentifier::new("1_604925"),
                1_700_000_000_000,
                VehicleIdentifier::new("1_4361"),
                3,
            ),
        )
    }

    #[test]
    fn test_url_round_trip() {
        let link = sample_link();
        let url = link.to_url();

        assert_eq!(url.scheme(), "headway");
        assert_eq!(url.host_str(), Some("view-trip"));

        let parsed = TripDeepLink::parse(&url).unwrap();
        assert_eq!(parsed, link);
        assert_eq!(parsed.key(), link.key());
    }

    #[test]
    fn test_rejects_foreign_urls() {
        let url = Url::parse("https://example.com/view-trip?trip=1").unwrap();
        assert!(matches!(
            TripDeepLink::parse(&url),
            Err(TransitError::DeepLinkUnrecognized(_)),
        ));

        let url = Url::parse("headway://settings").unwrap();
        assert!(matches!(
            TripDeepLink::parse(&url),
            Err(TransitError::DeepLinkUnrecognized(_)),
        ));
    }

    #[test]
    fn test_rejects_missing_parameter() {
        let url = Url::parse("headway://view-trip?name=x").unwrap();
        assert!(matches!(
            TripDeepLink::parse(&url),
            Err(TransitError::DeepLinkMissingParam("region")),
        ));
    }

    #[test]
    fn test_rejects_malformed_number() {
        let mut url = sample_link().to_url();
        let query = url.query().unwrap().replace("1700000000000", "later");
        url.set_query(Some(&query));

        match TripDeepLink::parse(&url) {
            Err(TransitError::DeepLinkInvalidParam { name, value }) => {
                assert_eq!(name, "serviceDate");
                assert_eq!(value, "later");
            }
            other => panic!("expected invalid-param error, got {other:?}"),
        }
    }

    #[test]
    fn test_equality_ignores_created_at() {
        let link = sample_link();
        let mut later = link.clone();
        later.created_at = link.created_at + chrono::TimeDelta::hours(1);

        assert_eq!(link, later);
    }
}
