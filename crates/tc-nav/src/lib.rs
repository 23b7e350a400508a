//! `tc-nav` — the navigation session for the `tower_compass` core.
//!
//! A [`NavigationSession`] merges location and heading updates, keeps the
//! nearest point of interest cached until the user moves far enough, and
//! hands a [`Reading`] (distance, bearing, needle angle) to a
//! [`DisplaySink`] on every processed update.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`session`] | `NavigationSession`, `UpdateOutcome`                        |
//! | [`builder`] | `SessionBuilder`                                            |
//! | [`state`]   | `Phase`, `NavigationState`, `NearestCache`, `Reading`       |
//! | [`sink`]    | `DisplaySink`, `NoopSink`, `Status`, `Sensor`               |
//! | [`display`] | `TextDisplay`, `Needle`, `format_distance`                  |
//! | [`error`]   | `NavError`, `NavResult<T>`, `SourceError`                   |

pub mod builder;
pub mod display;
pub mod error;
pub mod session;
pub mod sink;
pub mod state;


pub use builder::SessionBuilder;
pub use display::{format_distance, Needle, TextDisplay};
pub use error::{NavError, NavResult, SourceError};
pub use session::{NavigationSession, UpdateOutcome};
pub use sink::{DisplaySink, NoopSink, Sensor, Status};
pub use state::{relative_bearing, NavigationState, NearestCache, Phase, Reading};
