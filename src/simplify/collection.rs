//! Feature collection processing
//!
//! Builds a fresh output collection: one feature per input feature, in the
//! same order, with properties reduced to `SR_ID` and `SR_UIME` and the
//! geometry simplified. The input is never modified.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::geojson::{Feature, FeatureCollection};
use super::count::count;
use super::dispatch::simplify_feature_geometry;
use super::options::SimplifyOptions;
use super::stats::{GeometryDiagnostics, SimplifyStats};

/// Region identifier property, `null` when missing
pub const SR_ID: &str = "SR_ID";
/// Region name property, empty string when missing
pub const SR_UIME: &str = "SR_UIME";

/// Progress is logged every this many features on the sequential path
const PROGRESS_INTERVAL: usize = 10;

/// Simplify every feature of a collection with the given tolerance
pub fn process(collection: &FeatureCollection, tolerance: f64) -> Result<(FeatureCollection, SimplifyStats)> {
    process_with(collection, &SimplifyOptions::with_tolerance(tolerance))
}

/// Simplify every feature of a collection
pub fn process_with(
    collection: &FeatureCollection,
    options: &SimplifyOptions,
) -> Result<(FeatureCollection, SimplifyStats)> {
    if !collection.is_feature_collection() {
        return Err(Error::NotAFeatureCollection(collection.kind.clone()));
    }
    options.validate()?;

    let tolerance = options.tolerance;
    let total = collection.features.len();
    let input_coordinates = count(collection);
    info!(
        "Simplifying {} features ({} coordinates) with tolerance {}",
        total, input_coordinates, tolerance
    );

    let results: Vec<(Feature, GeometryDiagnostics)> = if options.parallel {
        collection
            .features
            .par_iter()
            .enumerate()
            .map(|(index, feature)| simplify_indexed(index, feature, tolerance))
            .collect()
    } else {
        collection
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                if (index + 1) % PROGRESS_INTERVAL == 0 {
                    info!("Processing feature {}/{}", index + 1, total);
                }
                simplify_indexed(index, feature, tolerance)
            })
            .collect()
    };

    let mut stats = SimplifyStats {
        features: total,
        input_coordinates,
        tolerance,
        ..Default::default()
    };

    // Combine results sequentially
    let mut features = Vec::with_capacity(total);
    for (feature, diagnostics) in results {
        stats.geometry.merge(&diagnostics);
        features.push(feature);
    }

    let output = FeatureCollection::new(features);
    stats.output_coordinates = count(&output);

    info!(
        "Simplified {} -> {} coordinates ({:.1}% reduction), {} warnings",
        stats.input_coordinates,
        stats.output_coordinates,
        stats.coordinate_reduction_percent(),
        stats.warnings()
    );

    Ok((output, stats))
}

/// Simplify one feature: reduced properties plus simplified geometry
pub fn simplify_feature(feature: &Feature, tolerance: f64) -> (Feature, GeometryDiagnostics) {
    let properties = reduce_properties(&feature.properties);
    let (geometry, diagnostics) = simplify_feature_geometry(feature.geometry.as_ref(), tolerance);
    (Feature::new(geometry, properties), diagnostics)
}

/// Keep only `SR_ID` and `SR_UIME`, filling in defaults for missing keys
pub fn reduce_properties(properties: &IndexMap<String, Value>) -> IndexMap<String, Value> {
    let mut reduced = IndexMap::with_capacity(2);
    reduced.insert(
        SR_ID.to_string(),
        properties.get(SR_ID).cloned().unwrap_or(Value::Null),
    );
    reduced.insert(
        SR_UIME.to_string(),
        properties
            .get(SR_UIME)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new())),
    );
    reduced
}

fn simplify_indexed(index: usize, feature: &Feature, tolerance: f64) -> (Feature, GeometryDiagnostics) {
    let (simplified, diagnostics) = simplify_feature(feature, tolerance);
    log_diagnostics(index, &simplified, &diagnostics);
    (simplified, diagnostics)
}

fn log_diagnostics(index: usize, feature: &Feature, diagnostics: &GeometryDiagnostics) {
    let sr_id = feature.properties.get(SR_ID).unwrap_or(&Value::Null);

    if diagnostics.null_geometries > 0 {
        debug!("Feature {} (SR_ID={}) has no geometry", index, sr_id);
    }
    if diagnostics.unsupported_geometries > 0 {
        let kind = feature
            .geometry
            .as_ref()
            .and_then(|g| g.type_name())
            .unwrap_or("unknown");
        warn!(
            "Feature {} (SR_ID={}): unsupported geometry '{}' passed through",
            index, sr_id, kind
        );
    }
    if diagnostics.collapsed_rings > 0 {
        warn!(
            "Feature {} (SR_ID={}): {} ring(s) would collapse, kept original",
            index, sr_id, diagnostics.collapsed_rings
        );
    }
    if diagnostics.malformed_rings > 0 || diagnostics.malformed_lines > 0 {
        warn!(
            "Feature {} (SR_ID={}): {} malformed ring(s), {} malformed line(s) passed through",
            index, sr_id, diagnostics.malformed_rings, diagnostics.malformed_lines
        );
    }
}
