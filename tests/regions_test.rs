// End-to-end simplification of the statistical regions fixture
use geojson_simplify::simplify::{SR_ID, SR_UIME};
use geojson_simplify::{
    count, process, read_feature_collection, to_compact_json, FeatureGeometry, Geometry,
};
use serde_json::json;
use std::time::Instant;

const REGIONS: &str = "tests/data/regions.geojson";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_simplification() {
        let collection = read_feature_collection(REGIONS).expect("Failed to load regions");
        assert_eq!(collection.features.len(), 6);
        assert_eq!(count(&collection), 173);

        let start = Instant::now();
        let (output, stats) = process(&collection, 0.001).expect("Failed to simplify");
        println!("Simplified in {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);

        assert_eq!(stats.features, 6);
        assert_eq!(stats.input_coordinates, 173);
        assert_eq!(stats.output_coordinates, 27);
        assert_eq!(stats.output_coordinates, count(&output));
        assert_eq!(stats.geometry.collapsed_rings, 1);
        assert_eq!(stats.geometry.unsupported_geometries, 1);
        assert_eq!(stats.geometry.null_geometries, 1);
        assert_eq!(stats.geometry.malformed_rings, 0);
        println!("Reduction: {:.1}%", stats.coordinate_reduction_percent());
    }

    #[test]
    fn test_order_and_property_reduction() {
        let collection = read_feature_collection(REGIONS).expect("Failed to load regions");
        let (output, _) = process(&collection, 0.001).expect("Failed to simplify");

        let ids: Vec<_> = output.features.iter().map(|f| f.properties[SR_ID].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(3), json!(4), json!(null), json!(6)]);

        for (input, simplified) in collection.features.iter().zip(&output.features) {
            assert_eq!(simplified.properties.keys().collect::<Vec<_>>(), vec![SR_ID, SR_UIME]);
            assert_eq!(input.properties.get(SR_ID).unwrap_or(&json!(null)), &simplified.properties[SR_ID]);
        }

        // Missing SR_UIME becomes the empty string
        assert_eq!(output.features[3].properties[SR_UIME], json!(""));
        assert_eq!(output.features[1].properties[SR_UIME], json!("Podravska"));
    }

    #[test]
    fn test_noisy_outer_ring_reduced() {
        let collection = read_feature_collection(REGIONS).expect("Failed to load regions");
        let (output, _) = process(&collection, 0.001).expect("Failed to simplify");

        let Some(FeatureGeometry::Supported(Geometry::Polygon { coordinates })) = &output.features[0].geometry else {
            panic!("expected polygon");
        };
        assert_eq!(coordinates.len(), 2, "hole must be kept");

        let outer = &coordinates[0];
        println!("Outer ring: 101 -> {} coordinates", outer.len());
        assert!(outer.len() <= 10);
        assert!(outer.len() >= 4);
        assert_eq!(outer.first(), outer.last());

        for ring in coordinates {
            assert!(ring.len() >= 4);
            assert_eq!(ring.first(), ring.last());
        }
    }

    #[test]
    fn test_collapsing_triangle_kept() {
        let collection = read_feature_collection(REGIONS).expect("Failed to load regions");
        let (output, _) = process(&collection, 0.001).expect("Failed to simplify");

        let (Some(FeatureGeometry::Supported(Geometry::MultiPolygon { coordinates: before })),
             Some(FeatureGeometry::Supported(Geometry::MultiPolygon { coordinates: after }))) =
            (&collection.features[1].geometry, &output.features[1].geometry)
        else {
            panic!("expected multipolygons");
        };
        assert_eq!(after.len(), 2);
        assert_eq!(after[1], before[1], "collapsing triangle falls back to the original");
        assert!(after[0][0].len() < before[0][0].len());
    }

    #[test]
    fn test_unsupported_geometry_echoed() {
        let collection = read_feature_collection(REGIONS).expect("Failed to load regions");
        let (output, _) = process(&collection, 0.001).expect("Failed to simplify");

        assert_eq!(output.features[5].geometry, collection.features[5].geometry);
        let json = serde_json::to_value(&output.features[5]).unwrap();
        assert_eq!(
            json["geometry"],
            json!({"type": "MultiLineString", "coordinates": [[[13.7, 45.5], [13.8, 45.6]]]})
        );
        assert_eq!(serde_json::to_value(&output.features[4]).unwrap()["geometry"], json!(null));
    }

    #[test]
    fn test_monotonic_reduction() {
        let collection = read_feature_collection(REGIONS).expect("Failed to load regions");

        let mut previous = count(&collection);
        for tolerance in [0.0, 0.0001, 0.0005, 0.001, 0.01, 0.1, 1.0] {
            let (output, stats) = process(&collection, tolerance).expect("Failed to simplify");
            println!("tolerance {}: {} coordinates", tolerance, stats.output_coordinates);
            assert!(count(&output) <= previous);
            previous = count(&output);
        }
    }

    #[test]
    fn test_zero_tolerance_keeps_geometry() {
        let collection = read_feature_collection(REGIONS).expect("Failed to load regions");
        let (output, stats) = process(&collection, 0.0).expect("Failed to simplify");

        assert_eq!(stats.input_coordinates, stats.output_coordinates);
        for (input, simplified) in collection.features.iter().zip(&output.features) {
            assert_eq!(input.geometry, simplified.geometry);
        }
    }

    #[test]
    fn test_compact_output() {
        let collection = read_feature_collection(REGIONS).expect("Failed to load regions");
        let (output, _) = process(&collection, 0.001).expect("Failed to simplify");

        let text = String::from_utf8(to_compact_json(&output).unwrap()).unwrap();
        assert!(!text.contains('\n'));
        assert!(!text.contains(": "));
        assert!(text.starts_with(r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":"#));
        assert!(!text.contains("AREA"));
        assert!(!text.contains("statisticne_regije"));
    }
}
