//! Simplification engine for GeoJSON feature collections
//!
//! Reduces coordinate density with Douglas-Peucker while keeping polygon
//! rings closed and non-degenerate.
//!
//! # Submodules
//! - `douglas_peucker` - Path simplification primitive
//! - `ring` - Ring simplification with closure and collapse guards
//! - `dispatch` - Per-geometry-type routing
//! - `collection` - Feature collection processing and property reduction
//! - `count` - Coordinate counting
//! - `stats` - Run statistics and per-geometry diagnostics
//! - `options` - Run configuration

mod douglas_peucker;
mod ring;
mod dispatch;
mod collection;
mod count;
mod stats;
mod options;

pub use douglas_peucker::douglas_peucker;

pub use ring::{
    MIN_RING_LEN,
    RingFallback,
    SimplifiedRing,
    simplify_ring,
};

pub use dispatch::{
    simplify_geometry,
    simplify_feature_geometry,
};

pub use collection::{
    SR_ID,
    SR_UIME,
    process,
    process_with,
    simplify_feature,
    reduce_properties,
};

pub use count::{
    CoordinateCount,
    count,
};

pub use stats::{
    GeometryDiagnostics,
    SimplifyStats,
};

pub use options::{
    DEFAULT_TOLERANCE,
    SimplifyOptions,
};
