//! GeoJSON simplification for constrained clients
//!
//! Reduces the coordinate density of Point, LineString, Polygon and
//! MultiPolygon features with Douglas-Peucker, keeping polygon rings closed
//! and non-degenerate, and reports before/after coordinate counts.
//!
//! # Example
//! ```ignore
//! let collection = read_feature_collection("regions.geojson")?;
//! let (simplified, stats) = process(&collection, DEFAULT_TOLERANCE)?;
//! write_feature_collection("regions.min.geojson", &simplified)?;
//! println!("{:.1}% fewer coordinates", stats.coordinate_reduction_percent());
//! ```

pub mod error;
pub mod geojson;
pub mod io;
pub mod simplify;

pub use error::{Error, Result};

pub use geojson::{
    Coordinate,
    Feature,
    FeatureCollection,
    FeatureGeometry,
    Geometry,
};

pub use io::{
    parse_feature_collection,
    read_feature_collection,
    to_compact_json,
    write_feature_collection,
};

pub use simplify::{
    CoordinateCount,
    DEFAULT_TOLERANCE,
    GeometryDiagnostics,
    SimplifyOptions,
    SimplifyStats,
    count,
    douglas_peucker,
    process,
    process_with,
    simplify_geometry,
    simplify_ring,
};
