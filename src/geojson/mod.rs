//! GeoJSON data model
//!
//! # Submodules
//! - `types` - Coordinates, geometries, features and the collection container

mod types;

pub use types::{
    Coordinate,
    Ring,
    Geometry,
    FeatureGeometry,
    FeatureType,
    Feature,
    FeatureCollection,
    FEATURE_COLLECTION_TYPE,
};
