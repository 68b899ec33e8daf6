//! Simplification statistics and per-geometry diagnostics

use serde::Serialize;

use super::ring::RingFallback;

/// Per-geometry fallback counters.
/// Every counted event left the affected part of the geometry unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeometryDiagnostics {
    /// Rings that would have lost their area and were kept as-is
    pub collapsed_rings: usize,
    /// Rings that were open, too short, or degenerate on input
    pub malformed_rings: usize,
    /// LineStrings with fewer than 2 coordinates
    pub malformed_lines: usize,
    /// Geometries of an unknown type or with unparseable coordinates
    pub unsupported_geometries: usize,
    /// Features without a geometry
    pub null_geometries: usize,
}

impl GeometryDiagnostics {
    pub(crate) fn record_ring(&mut self, fallback: Option<RingFallback>) {
        match fallback {
            Some(RingFallback::Collapsed) => self.collapsed_rings += 1,
            Some(RingFallback::Malformed) => self.malformed_rings += 1,
            None => {}
        }
    }

    pub fn merge(&mut self, other: &GeometryDiagnostics) {
        self.collapsed_rings += other.collapsed_rings;
        self.malformed_rings += other.malformed_rings;
        self.malformed_lines += other.malformed_lines;
        self.unsupported_geometries += other.unsupported_geometries;
        self.null_geometries += other.null_geometries;
    }

    /// Total number of pass-through events
    pub fn warnings(&self) -> usize {
        self.collapsed_rings
            + self.malformed_rings
            + self.malformed_lines
            + self.unsupported_geometries
            + self.null_geometries
    }

    pub fn is_clean(&self) -> bool {
        self.warnings() == 0
    }
}

/// Collection-level statistics for one simplification run
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct SimplifyStats {
    pub features: usize,
    pub input_coordinates: usize,
    pub output_coordinates: usize,
    pub tolerance: f64,
    pub geometry: GeometryDiagnostics,
}

impl SimplifyStats {
    /// Percentage of coordinates removed, 0 for an empty input
    pub fn coordinate_reduction_percent(&self) -> f64 {
        if self.input_coordinates == 0 {
            return 0.0;
        }
        let removed = self.input_coordinates.saturating_sub(self.output_coordinates);
        removed as f64 / self.input_coordinates as f64 * 100.0
    }

    pub fn warnings(&self) -> usize {
        self.geometry.warnings()
    }
}
