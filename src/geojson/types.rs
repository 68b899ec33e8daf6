//! Core GeoJSON types for feature collections
//!
//! These mirror the subset of GeoJSON the simplifier understands: 2D
//! coordinates, the four supported geometry kinds, features and the
//! top-level collection. Anything else is kept as raw JSON so it can be
//! echoed back untouched.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Top-level `type` tag of a feature collection
pub const FEATURE_COLLECTION_TYPE: &str = "FeatureCollection";

/// A 2D position in input units (longitude, latitude in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.x)?;
        tuple.serialize_element(&self.y)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CoordinateVisitor;

        impl<'de> Visitor<'de> for CoordinateVisitor {
            type Value = Coordinate;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a position array [x, y] or [x, y, z]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Coordinate, A::Error> {
                let x: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let y: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                // Elevation and measure components are dropped
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Coordinate { x, y })
            }
        }

        deserializer.deserialize_seq(CoordinateVisitor)
    }
}

/// A closed sequence of coordinates bounding a polygon or hole.
/// Closure is checked by the ring simplifier, not by parsing.
pub type Ring = Vec<Coordinate>;

/// Geometry kinds the simplifier knows how to reduce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Coordinate },
    LineString { coordinates: Vec<Coordinate> },
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

impl Geometry {
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }
}

/// Geometry slot of a feature: either a supported geometry or any other
/// JSON value (MultiLineString, GeometryCollection, malformed coordinates)
/// that is passed through verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureGeometry {
    Supported(Geometry),
    Unsupported(Value),
}

impl FeatureGeometry {
    /// GeoJSON `type` tag, if there is one
    pub fn type_name(&self) -> Option<&str> {
        match self {
            FeatureGeometry::Supported(geometry) => Some(geometry.type_name()),
            FeatureGeometry::Unsupported(value) => value.get("type").and_then(Value::as_str),
        }
    }
}

impl From<Geometry> for FeatureGeometry {
    fn from(geometry: Geometry) -> Self {
        FeatureGeometry::Supported(geometry)
    }
}

/// `type` tag of a feature object, always written as "Feature"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FeatureType {
    #[default]
    Feature,
}

/// A single GeoJSON feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", skip_deserializing)]
    pub kind: FeatureType,
    #[serde(default)]
    pub geometry: Option<FeatureGeometry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: IndexMap<String, Value>,
}

impl Feature {
    pub fn new(geometry: Option<FeatureGeometry>, properties: IndexMap<String, Value>) -> Self {
        Self {
            kind: FeatureType::Feature,
            geometry,
            properties,
        }
    }
}

/// Top-level GeoJSON container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: FEATURE_COLLECTION_TYPE.to_string(),
            features,
        }
    }

    pub fn is_feature_collection(&self) -> bool {
        self.kind == FEATURE_COLLECTION_TYPE
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IndexMap<String, Value>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_drops_third_component() {
        let c: Coordinate = serde_json::from_str("[14.5, 46.05, 300.0]").unwrap();
        assert_eq!(c, Coordinate::new(14.5, 46.05));
        assert_eq!(serde_json::to_string(&c).unwrap(), "[14.5,46.05]");
    }

    #[test]
    fn test_coordinate_requires_two_components() {
        assert!(serde_json::from_str::<Coordinate>("[14.5]").is_err());
    }

    #[test]
    fn test_geometry_tagging() {
        let geometry: Geometry =
            serde_json::from_str(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#).unwrap();
        assert_eq!(
            geometry,
            Geometry::LineString {
                coordinates: vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]
            }
        );
        assert_eq!(
            serde_json::to_string(&geometry).unwrap(),
            r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,1.0]]}"#
        );
    }

    #[test]
    fn test_unknown_geometry_kept_raw() {
        let raw = r#"{"type":"MultiLineString","coordinates":[[[0,0],[1,1]]]}"#;
        let geometry: FeatureGeometry = serde_json::from_str(raw).unwrap();
        assert!(matches!(geometry, FeatureGeometry::Unsupported(_)));
        assert_eq!(geometry.type_name(), Some("MultiLineString"));
        assert_eq!(serde_json::to_string(&geometry).unwrap(), raw);
    }

    #[test]
    fn test_malformed_polygon_kept_raw() {
        let raw = r#"{"type":"Polygon","coordinates":[[[0,0],[1]]]}"#;
        let geometry: FeatureGeometry = serde_json::from_str(raw).unwrap();
        assert!(matches!(geometry, FeatureGeometry::Unsupported(_)));
    }

    #[test]
    fn test_feature_null_geometry_and_properties() {
        let feature: Feature =
            serde_json::from_str(r#"{"type":"Feature","geometry":null,"properties":null}"#).unwrap();
        assert!(feature.geometry.is_none());
        assert!(feature.properties.is_empty());
        assert_eq!(
            serde_json::to_string(&feature).unwrap(),
            r#"{"type":"Feature","geometry":null,"properties":{}}"#
        );
    }
}
