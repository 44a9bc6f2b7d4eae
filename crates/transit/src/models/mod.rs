//! Transit data models, types, and traits.

pub mod alarm;
pub mod deeplink;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use alarm::ArrivalAlarm;
pub use deeplink::TripDeepLink;
pub use traits::ArrivalDepartureRef;
pub use types::{ArrivalDepartureKey, Result, TransitError};
