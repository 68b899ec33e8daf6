//! Per-type geometry simplification
//!
//! Routes each geometry kind to the right strategy and reassembles the
//! result in original order. Points are returned as-is, LineStrings go
//! through Douglas-Peucker directly, polygon rings go through the ring guard.

use crate::geojson::{Coordinate, FeatureGeometry, Geometry, Ring};
use super::douglas_peucker::douglas_peucker;
use super::ring::simplify_ring;
use super::stats::GeometryDiagnostics;

/// Simplify a supported geometry.
/// Never fails: parts that cannot be simplified are kept and counted.
pub fn simplify_geometry(geometry: &Geometry, tolerance: f64) -> (Geometry, GeometryDiagnostics) {
    let mut diagnostics = GeometryDiagnostics::default();
    let simplified = simplify_with(geometry, tolerance, &mut diagnostics);
    (simplified, diagnostics)
}

/// Simplify the geometry slot of a feature.
/// Null and unsupported geometries are passed through and counted.
pub fn simplify_feature_geometry(
    geometry: Option<&FeatureGeometry>,
    tolerance: f64,
) -> (Option<FeatureGeometry>, GeometryDiagnostics) {
    match geometry {
        None => {
            let diagnostics = GeometryDiagnostics {
                null_geometries: 1,
                ..Default::default()
            };
            (None, diagnostics)
        }
        Some(FeatureGeometry::Unsupported(raw)) => {
            let diagnostics = GeometryDiagnostics {
                unsupported_geometries: 1,
                ..Default::default()
            };
            (Some(FeatureGeometry::Unsupported(raw.clone())), diagnostics)
        }
        Some(FeatureGeometry::Supported(geometry)) => {
            let (simplified, diagnostics) = simplify_geometry(geometry, tolerance);
            (Some(FeatureGeometry::Supported(simplified)), diagnostics)
        }
    }
}

fn simplify_with(geometry: &Geometry, tolerance: f64, diagnostics: &mut GeometryDiagnostics) -> Geometry {
    match geometry {
        Geometry::Point { coordinates } => Geometry::Point {
            coordinates: *coordinates,
        },
        Geometry::LineString { coordinates } => Geometry::LineString {
            coordinates: simplify_line(coordinates, tolerance, diagnostics),
        },
        Geometry::Polygon { coordinates } => Geometry::Polygon {
            coordinates: simplify_polygon(coordinates, tolerance, diagnostics),
        },
        Geometry::MultiPolygon { coordinates } => Geometry::MultiPolygon {
            coordinates: coordinates
                .iter()
                .map(|polygon| simplify_polygon(polygon, tolerance, diagnostics))
                .collect(),
        },
    }
}

fn simplify_line(
    coordinates: &[Coordinate],
    tolerance: f64,
    diagnostics: &mut GeometryDiagnostics,
) -> Vec<Coordinate> {
    if coordinates.len() < 2 {
        diagnostics.malformed_lines += 1;
        return coordinates.to_vec();
    }
    douglas_peucker(coordinates, tolerance)
}

/// Outer ring first, then holes, each simplified independently
fn simplify_polygon(rings: &[Ring], tolerance: f64, diagnostics: &mut GeometryDiagnostics) -> Vec<Ring> {
    rings
        .iter()
        .map(|ring| {
            let result = simplify_ring(ring, tolerance);
            diagnostics.record_ring(result.fallback);
            result.coordinates
        })
        .collect()
}
