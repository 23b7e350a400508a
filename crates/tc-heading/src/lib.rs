//! `tc-heading` — compass heading samples and smoothing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`sample`] | `HeadingSample`, `RawOrientation`                            |
//! | [`filter`] | `HeadingHistory`, `HeadingFilter`, `should_publish`          |
//! | [`error`]  | `HeadingError`, `HeadingResult<T>`                           |

pub mod error;
pub mod filter;
pub mod sample;


pub use error::{HeadingError, HeadingResult};
pub use filter::{should_publish, HeadingFilter, HeadingHistory};
pub use sample::{HeadingSample, RawOrientation};
