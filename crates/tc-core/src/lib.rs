//! `tc-core` — foundational types for the `tower_compass` navigation core.
//!
//! This crate is a dependency of every other `tc-*` crate.  It has no `tc-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, `distance`, `bearing`, `centroid`            |
//! | [`poi`]     | `PointOfInterest`                                        |
//! | [`time`]    | `Timestamp`, `Throttle`                                  |
//! | [`config`]  | `NavConfig`                                              |
//! | [`error`]   | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod poi;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NavConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{bearing, centroid, distance, normalize_degrees, GeoPoint, EARTH_RADIUS_M};
pub use poi::PointOfInterest;
pub use time::{Throttle, Timestamp};
