//! Unit tests for tc-spatial.
//!
//! All tests use hand-written point sets and in-memory datasets.

#[cfg(test)]
mod helpers {
    use tc_core::{GeoPoint, PointOfInterest};

    pub fn tower(name: &str, lat: f64, lon: f64) -> PointOfInterest {
        PointOfInterest::new(GeoPoint::new(lat, lon), name, "Testshire")
    }
}

// ── Recompute policy ──────────────────────────────────────────────────────────

#[cfg(test)]
mod recompute {
    use tc_core::GeoPoint;

    use crate::should_recompute;

    #[test]
    fn first_call_always_recomputes() {
        let here = GeoPoint::new(51.0, -1.0);
        assert!(should_recompute(None, here, 100.0));
        assert!(should_recompute(None, here, f64::MAX));
    }

    #[test]
    fn threshold_separates_small_and_large_moves() {
        let p = GeoPoint::new(51.0, -1.0);
        let near = p.destination(30.0, 50.0);
        let far = p.destination(30.0, 150.0);
        assert!(!should_recompute(Some(p), near, 100.0));
        assert!(should_recompute(Some(p), far, 100.0));
    }

    #[test]
    fn non_finite_reference_forces_recompute() {
        let nan = GeoPoint::new(f64::NAN, f64::NAN);
        assert!(should_recompute(Some(nan), GeoPoint::new(51.0, -1.0), 100.0));
    }

    #[test]
    fn no_movement_does_not_recompute() {
        let p = GeoPoint::new(51.0, -1.0);
        assert!(!should_recompute(Some(p), p, 100.0));
        assert!(!should_recompute(Some(p), p, 0.0));
    }
}

// ── Nearest search ────────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use tc_core::GeoPoint;

    use super::helpers::tower;
    use crate::{find_nearest, PoiIndex};

    #[test]
    fn empty_candidates() {
        assert!(find_nearest(GeoPoint::new(51.0, -1.0), &[], 50_000.0).is_none());
    }

    #[test]
    fn picks_closest() {
        let towers = [
            tower("far", 51.2, -1.0),
            tower("near", 51.01, -1.0),
            tower("mid", 51.05, -1.0),
        ];
        let hit = find_nearest(GeoPoint::new(51.0, -1.0), &towers, 50_000.0).unwrap();
        assert_eq!(hit.poi.name, "near");
        assert_eq!(hit.index, 1);
        assert!((hit.distance_m - 1_111.95).abs() < 1.0, "got {}", hit.distance_m);
    }

    #[test]
    fn out_of_radius_is_absent() {
        let towers = [tower("distant", 52.0, -1.0)]; // ~111 km
        assert!(find_nearest(GeoPoint::new(51.0, -1.0), &towers, 50_000.0).is_none());
    }

    #[test]
    fn never_returns_candidate_beyond_radius() {
        let here = GeoPoint::new(51.0, -1.0);
        let towers: Vec<_> = (0..40)
            .map(|i| {
                let p = here.destination(i as f64 * 9.0, 500.0 * (i + 1) as f64);
                tower(&format!("t{i}"), p.lat, p.lon)
            })
            .collect();
        for radius in [100.0, 499.0, 750.0, 5_000.0, 19_999.0, 50_000.0] {
            if let Some(hit) = find_nearest(here, &towers, radius) {
                assert!(hit.distance_m <= radius);
            } else {
                assert!(radius < 500.0, "radius {radius} should reach t0");
            }
        }
    }

    #[test]
    fn ties_go_to_first_listed() {
        let towers = [
            tower("first", 51.01, -1.0),
            tower("second", 51.01, -1.0),
        ];
        let hit = find_nearest(GeoPoint::new(51.0, -1.0), &towers, 50_000.0).unwrap();
        assert_eq!(hit.poi.name, "first");
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn index_delegates_to_scan() {
        let index = PoiIndex::from(vec![tower("a", 51.0, -1.0), tower("b", 51.3, -1.0)]);
        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
        let hit = index.find_nearest(GeoPoint::new(51.25, -1.0), 50_000.0).unwrap();
        assert_eq!(hit.poi.name, "b");
        assert_eq!(index.get(hit.index).map(|p| p.name.as_str()), Some("b"));
        assert!(PoiIndex::default().find_nearest(GeoPoint::new(0.0, 0.0), 1e9).is_none());
    }
}

// ── GeoJSON loading ───────────────────────────────────────────────────────────

#[cfg(test)]
mod geojson {
    use std::io::{Cursor, Write};

    use crate::{load_geojson_path, load_geojson_reader, DatasetOptions, SpatialError};

    const TOWERS: &str = r#"{
      "type": "FeatureCollection",
      "features": [
        { "type": "Feature",
          "properties": { "name": "Point Tower", "county": "Bedfordshire" },
          "geometry": { "type": "Point", "coordinates": [-0.5, 52.0] } },
        { "type": "Feature",
          "properties": { "name": "Polygon Tower" },
          "geometry": { "type": "Polygon", "coordinates": [
            [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]],
            [[0.5, 0.5], [0.6, 0.5], [0.6, 0.6]]
          ] } },
        { "type": "Feature",
          "properties": { "name": "" },
          "geometry": { "type": "LineString", "coordinates": [[-1.0, 51.0], [-1.0, 51.2]] } },
        { "type": "Feature", "properties": { "name": "No Geometry" }, "geometry": null },
        { "type": "Feature",
          "properties": { "name": "Multi" },
          "geometry": { "type": "MultiPoint", "coordinates": [[0.0, 0.0]] } },
        { "type": "Feature",
          "properties": { "name": "Broken" },
          "geometry": { "type": "Point", "coordinates": [0.0, 95.0] } },
        { "type": "Feature",
          "properties": { "name": "With Altitude", "county": "Kent" },
          "geometry": { "type": "Point", "coordinates": [1.0, 51.1, 87.0] } }
      ]
    }"#;

    #[test]
    fn reduces_geometries_and_skips_unusable_features() {
        let ds = load_geojson_reader(Cursor::new(TOWERS), &DatasetOptions::default()).unwrap();
        let names: Vec<&str> = ds.points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Point Tower", "Polygon Tower", "Unnamed Tower", "With Altitude"]);
        assert_eq!(ds.skipped, 3);

        let point = &ds.points[0];
        assert_eq!((point.position.lat, point.position.lon), (52.0, -0.5));
        assert_eq!(point.category, "Bedfordshire");

        // Outer ring only; holes are ignored.
        let polygon = &ds.points[1];
        assert!((polygon.position.lat - 1.0).abs() < 1e-12);
        assert!((polygon.position.lon - 1.0).abs() < 1e-12);
        assert_eq!(polygon.category, "Unknown County");

        let line = &ds.points[2];
        assert!((line.position.lat - 51.1).abs() < 1e-12);
        assert!((line.position.lon + 1.0).abs() < 1e-12);

        assert_eq!(ds.points[3].category, "Kent");
    }

    #[test]
    fn malformed_geometry_skips_only_that_feature() {
        let json = r#"{ "type": "FeatureCollection", "features": [
          { "type": "Feature", "properties": { "name": "No Type" },
            "geometry": { "coordinates": [0.1, 52.1] } },
          { "type": "Feature", "properties": { "name": "Flat Polygon" },
            "geometry": { "type": "Polygon", "coordinates": [0.1, 52.1] } },
          { "type": "Feature", "properties": { "name": "Good" },
            "geometry": { "type": "Point", "coordinates": [0.2, 52.2] } } ] }"#;
        let ds = load_geojson_reader(Cursor::new(json), &DatasetOptions::default()).unwrap();
        assert_eq!(ds.points.len(), 1);
        assert_eq!(ds.points[0].name, "Good");
        assert_eq!(ds.skipped, 2);
    }

    #[test]
    fn custom_property_keys() {
        let json = r#"{ "type": "FeatureCollection", "features": [
          { "type": "Feature",
            "properties": { "ref": 42, "operator": "Anglian Water" },
            "geometry": { "type": "Point", "coordinates": [0.1, 52.1] } } ] }"#;
        let opts = DatasetOptions {
            name_key: "ref".into(),
            category_key: "operator".into(),
            ..DatasetOptions::default()
        };
        let ds = load_geojson_reader(Cursor::new(json), &opts).unwrap();
        assert_eq!(ds.points[0].name, "42");
        assert_eq!(ds.points[0].category, "Anglian Water");
    }

    #[test]
    fn empty_collection() {
        let ds = load_geojson_reader(Cursor::new(r#"{"type":"FeatureCollection"}"#), &DatasetOptions::default())
            .unwrap();
        assert!(ds.points.is_empty());
        assert_eq!(ds.skipped, 0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = load_geojson_reader(Cursor::new("{ not json"), &DatasetOptions::default()).unwrap_err();
        assert!(matches!(err, SpatialError::Json(_)));
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TOWERS.as_bytes()).unwrap();
        let ds = load_geojson_path(file.path(), &DatasetOptions::default()).unwrap();
        assert_eq!(ds.into_points().len(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_geojson_path(std::path::Path::new("/nonexistent/wt.geojson"), &DatasetOptions::default())
            .unwrap_err();
        assert!(matches!(err, SpatialError::Io(_)));
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_loader {
    use std::io::{Cursor, Write};

    use crate::{load_csv_path, load_csv_reader, DatasetOptions, SpatialError};

    #[test]
    fn parses_rows_and_fills_defaults() {
        let csv = "name,category,latitude,longitude\n\
                   Stewartby Tower,Bedfordshire,52.07,-0.52\n\
                   ,,51.5,-0.1\n";
        let ds = load_csv_reader(Cursor::new(csv), &DatasetOptions::default()).unwrap();
        assert_eq!(ds.points.len(), 2);
        assert_eq!(ds.points[0].name, "Stewartby Tower");
        assert_eq!(ds.points[0].position.lat, 52.07);
        assert_eq!(ds.points[1].name, "Unnamed Tower");
        assert_eq!(ds.points[1].category, "Unknown County");
    }

    #[test]
    fn out_of_range_row_is_rejected() {
        let csv = "name,category,latitude,longitude\nBad,X,123.0,0.0\n";
        let err = load_csv_reader(Cursor::new(csv), &DatasetOptions::default()).unwrap_err();
        match err {
            SpatialError::Parse(msg) => assert!(msg.starts_with("row 1:"), "got {msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_row_is_csv_error() {
        let csv = "name,category,latitude,longitude\nBad,X,north,0.0\n";
        let err = load_csv_reader(Cursor::new(csv), &DatasetOptions::default()).unwrap_err();
        assert!(matches!(err, SpatialError::Csv(_)));
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,category,latitude,longitude").unwrap();
        writeln!(file, "A,B,51.0,-1.0").unwrap();
        let ds = load_csv_path(file.path(), &DatasetOptions::default()).unwrap();
        assert_eq!(ds.points.len(), 1);
    }
}
