//! `tc-spatial` — nearest-target search and point-of-interest datasets.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`nearest`] | `should_recompute`, `find_nearest`, `Nearest`, `PoiIndex`   |
//! | [`dataset`] | GeoJSON and CSV loaders, `DatasetOptions`, `Dataset`        |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |

pub mod dataset;
pub mod error;
pub mod nearest;

#[cfg(test)]
mod tests;

pub use dataset::{
    load_csv_path, load_csv_reader, load_geojson_path, load_geojson_reader, Dataset, DatasetOptions,
};
pub use error::{SpatialError, SpatialResult};
pub use nearest::{find_nearest, should_recompute, Nearest, PoiIndex};
