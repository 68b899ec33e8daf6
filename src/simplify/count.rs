//! Coordinate counting for before/after compression metrics

use crate::geojson::{Feature, FeatureCollection, FeatureGeometry, Geometry};

/// Anything that holds coordinates.
/// Each coordinate present counts once; closing points of rings included.
pub trait CoordinateCount {
    fn coordinate_count(&self) -> usize;
}

/// Count the coordinates in a collection, feature or geometry
pub fn count<T: CoordinateCount + ?Sized>(item: &T) -> usize {
    item.coordinate_count()
}

impl CoordinateCount for Geometry {
    fn coordinate_count(&self) -> usize {
        match self {
            Geometry::Point { .. } => 1,
            Geometry::LineString { coordinates } => coordinates.len(),
            Geometry::Polygon { coordinates } => coordinates.iter().map(Vec::len).sum(),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter())
                .map(Vec::len)
                .sum(),
        }
    }
}

impl CoordinateCount for FeatureGeometry {
    fn coordinate_count(&self) -> usize {
        match self {
            FeatureGeometry::Supported(geometry) => geometry.coordinate_count(),
            FeatureGeometry::Unsupported(_) => 0,
        }
    }
}

impl<T: CoordinateCount> CoordinateCount for Option<T> {
    fn coordinate_count(&self) -> usize {
        self.as_ref().map_or(0, CoordinateCount::coordinate_count)
    }
}

impl CoordinateCount for Feature {
    fn coordinate_count(&self) -> usize {
        self.geometry.coordinate_count()
    }
}

impl CoordinateCount for [Feature] {
    fn coordinate_count(&self) -> usize {
        self.iter().map(Feature::coordinate_count).sum()
    }
}

impl CoordinateCount for FeatureCollection {
    fn coordinate_count(&self) -> usize {
        self.features.coordinate_count()
    }
}
