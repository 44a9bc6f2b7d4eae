//! # headway-transit
//!
//! Shared transit model layer for the Headway app.
//!
//! ## Features
//!
//! - **One key, many sources**: alarms and trip deep links both name a single
//!   arrival/departure event through [`ArrivalDepartureRef`]
//! - **Value semantics**: keys and models clone cheaply and compare by value
//! - **App links**: encode/decode `headway://view-trip` URLs
//! - **Pluggable networking**: this crate builds request URLs, the host app
//!   owns the HTTP client
//!
//! ## Example
//!
//! ```
//! use headway_transit::prelude::*;
//! use url::Url;
//!
//! // A user sets an alarm for a tracked arrival...
//! let alarm = ArrivalAlarm::new(
//!     ArrivalDepartureKey::new(
//!         StopIdentifier::new("1_75403"),
//!         TripIdentifier::new("1_604925"),
//!         1_700_000_000_000,
//!         VehicleIdentifier::new("1_4361"),
//!         3,
//!     ),
//!     RegionIdentifier::new("puget-sound"),
//!     10,
//! );
//!
//! // ...and shares a deep link to the same arrival.
//! let link = TripDeepLink::new(
//!     "Route 545 to Redmond",
//!     RegionIdentifier::new("puget-sound"),
//!     alarm.key(),
//! );
//!
//! // Either one resolves the same server record.
//! let base = Url::parse("https://api.example.com/").unwrap();
//! let refs: [&dyn ArrivalDepartureRef; 2] = [&alarm, &link];
//! let urls: Vec<_> = refs
//!     .iter()
//!     .map(|r| arrival_departure_url(&base, *r).unwrap())
//!     .collect();
//! assert_eq!(urls[0], urls[1]);
//! ```

pub mod identifiers;
pub mod models;
pub mod network;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{
        alarm::ArrivalAlarm,
        deeplink::TripDeepLink,
        traits::ArrivalDepartureRef,
        types::{ArrivalDepartureKey, Result, TransitError},
    };
    pub use crate::network::request::arrival_departure_url;
}

// Module declarations
pub use prelude::*;
