//! The arrival-and-departure-for-stop lookup request.

use tracing::debug;
use url::Url;

use crate::models::traits::ArrivalDepartureRef;
use crate::models::types::{Result, TransitError};

/// Build the lookup URL for one arrival/departure against a region's API base.
///
/// The stop id becomes a percent-escaped path segment; the remaining key
/// fields travel as query parameters.
pub fn arrival_departure_url(base: &Url, reference: &dyn ArrivalDepartureRef) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| TransitError::InvalidBaseUrl(base.clone()))?
        .pop_if_empty()
        .extend(["api", "where", "arrival-and-departure-for-stop"])
        .push(&format!("{}.json", reference.stop_id().as_str()));

    url.query_pairs_mut()
        .append_pair("tripId", reference.trip_id().as_str())
        .append_pair("serviceDate", &reference.service_date().to_string())
        .append_pair("vehicleId", reference.vehicle_id().as_str())
        .append_pair("stopSequence", &reference.stop_sequence().to_string());

    debug!(%url, "built arrival-and-departure request");
    Ok(url)
}
