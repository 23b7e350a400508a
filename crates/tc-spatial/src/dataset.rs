//! Point-of-interest dataset loaders.
//!
//! # GeoJSON
//!
//! A `FeatureCollection` as exported from OpenStreetMap (the tower set is an
//! Overpass export of `man_made=water_tower`):
//!
//! ```json
//! { "type": "FeatureCollection", "features": [
//!   { "type": "Feature",
//!     "properties": { "name": "Stewartby Tower", "county": "Bedfordshire" },
//!     "geometry": { "type": "Point", "coordinates": [-0.52, 52.07] } }
//! ] }
//! ```
//!
//! | Geometry     | Becomes                                          |
//! |--------------|--------------------------------------------------|
//! | `Point`      | the point itself (`[lon, lat]`, extra axes ignored) |
//! | `LineString` | centroid of all vertices                         |
//! | `Polygon`    | centroid of the outer ring                       |
//! | anything else, `null` or malformed | skipped                    |
//!
//! Features whose coordinates end up out of range are skipped and counted.
//!
//! # CSV
//!
//! ```csv
//! name,category,latitude,longitude
//! Stewartby Tower,Bedfordshire,52.07,-0.52
//! ```
//!
//! CSV files are hand-made, so a bad coordinate is an error rather than a
//! skipped row.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use tc_core::{centroid, GeoPoint, PointOfInterest};

use crate::{SpatialError, SpatialResult};

// ── Options & result ──────────────────────────────────────────────────────────

/// Which properties supply a point's name and category, and what to use when
/// they are missing.
#[derive(Clone, Debug)]
pub struct DatasetOptions {
    pub name_key:         String,
    pub category_key:     String,
    pub default_name:     String,
    pub default_category: String,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            name_key:         "name".into(),
            category_key:     "county".into(),
            default_name:     "Unnamed Tower".into(),
            default_category: "Unknown County".into(),
        }
    }
}

/// Points read from a dataset plus the number of features that were dropped.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub points:  Vec<PointOfInterest>,
    pub skipped: usize,
}

impl Dataset {
    pub fn into_points(self) -> Vec<PointOfInterest> {
        self.points
    }
}

// ── GeoJSON records ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    /// Kept as raw JSON so one malformed geometry skips its feature instead
    /// of failing the whole collection.
    #[serde(default)]
    geometry:   Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Vec<f64>> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    #[serde(other)]
    Unsupported,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a GeoJSON `FeatureCollection` from a file.
pub fn load_geojson_path(path: &Path, options: &DatasetOptions) -> SpatialResult<Dataset> {
    let file = std::fs::File::open(path)?;
    load_geojson_reader(std::io::BufReader::new(file), options)
}

/// Like [`load_geojson_path`] but accepts any `Read` source.
pub fn load_geojson_reader<R: Read>(reader: R, options: &DatasetOptions) -> SpatialResult<Dataset> {
    let collection: FeatureCollection = serde_json::from_reader(reader)?;
    let mut dataset = Dataset {
        points:  Vec::with_capacity(collection.features.len()),
        skipped: 0,
    };

    for (i, feature) in collection.features.into_iter().enumerate() {
        let geometry = feature
            .geometry
            .and_then(|g| serde_json::from_value::<Geometry>(g).ok());
        let Some(position) = geometry.as_ref().and_then(geometry_position) else {
            tracing::warn!(feature = i, "skipping feature without a usable geometry");
            dataset.skipped += 1;
            continue;
        };
        let props = feature.properties.as_ref();
        dataset.points.push(PointOfInterest::new(
            position,
            property(props, &options.name_key).unwrap_or_else(|| options.default_name.clone()),
            property(props, &options.category_key).unwrap_or_else(|| options.default_category.clone()),
        ));
    }

    tracing::info!(points = dataset.points.len(), skipped = dataset.skipped, "loaded GeoJSON dataset");
    Ok(dataset)
}

/// Load a `name,category,latitude,longitude` CSV file.
pub fn load_csv_path(path: &Path, options: &DatasetOptions) -> SpatialResult<Dataset> {
    let file = std::fs::File::open(path)?;
    load_csv_reader(file, options)
}

/// Like [`load_csv_path`] but accepts any `Read` source.
pub fn load_csv_reader<R: Read>(reader: R, options: &DatasetOptions) -> SpatialResult<Dataset> {
    #[derive(Deserialize)]
    struct PoiRecord {
        name:      String,
        category:  String,
        latitude:  f64,
        longitude: f64,
    }

    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();

    for (row, result) in csv_reader.deserialize::<PoiRecord>().enumerate() {
        let rec = result?;
        let position = GeoPoint::try_new(rec.latitude, rec.longitude)
            .map_err(|e| SpatialError::Parse(format!("row {}: {e}", row + 1)))?;
        points.push(PointOfInterest::new(
            position,
            non_empty(rec.name).unwrap_or_else(|| options.default_name.clone()),
            non_empty(rec.category).unwrap_or_else(|| options.default_category.clone()),
        ));
    }

    tracing::info!(points = points.len(), "loaded CSV dataset");
    Ok(Dataset { points, skipped: 0 })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Reduce a geometry to one representative point.
fn geometry_position(geometry: &Geometry) -> Option<GeoPoint> {
    match geometry {
        Geometry::Point { coordinates } => lon_lat(coordinates),
        Geometry::LineString { coordinates } => ring_centroid(coordinates),
        Geometry::Polygon { coordinates } => coordinates.first().and_then(|outer| ring_centroid(outer)),
        Geometry::Unsupported => None,
    }
}

fn ring_centroid(ring: &[Vec<f64>]) -> Option<GeoPoint> {
    let vertices: Vec<GeoPoint> = ring
        .iter()
        .map(|c| lon_lat(c))
        .collect::<Option<_>>()?;
    centroid(&vertices, 1)
}

/// GeoJSON positions are `[lon, lat, (alt)]`.
fn lon_lat(coords: &[f64]) -> Option<GeoPoint> {
    match coords {
        [lon, lat, ..] => GeoPoint::try_new(*lat, *lon).ok(),
        _ => None,
    }
}

fn property(props: Option<&Map<String, Value>>, key: &str) -> Option<String> {
    match props?.get(key)? {
        Value::String(s) => non_empty(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
