//! Ring simplification with closure and collapse guards
//!
//! Polygon boundaries and holes are simplified as open paths (closing
//! duplicate removed) and then re-closed. A ring that would lose its area
//! is clamped to its smallest valid form (both path endpoints plus the
//! vertex farthest from them) and flagged for the caller. Malformed input
//! rings are returned as they were.
//!
//! Only collapse is detected. A simplified ring may still cross itself or a
//! neighbouring ring; no intersection test is performed.

use crate::geojson::Coordinate;
use super::douglas_peucker::{douglas_peucker, point_segment_distance};

/// Smallest valid ring: three distinct vertices plus the closing point
pub const MIN_RING_LEN: usize = 4;

/// Why a ring did not come out of plain Douglas-Peucker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingFallback {
    /// Simplification left fewer than three distinct vertices; the ring was
    /// clamped to a minimal one (or kept as-is if no minimal ring exists)
    Collapsed,
    /// Input ring was open, too short, or already degenerate
    Malformed,
}

/// Result of simplifying one ring
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifiedRing {
    pub coordinates: Vec<Coordinate>,
    pub fallback: Option<RingFallback>,
}

impl SimplifiedRing {
    fn original(ring: &[Coordinate], reason: RingFallback) -> Self {
        Self {
            coordinates: ring.to_vec(),
            fallback: Some(reason),
        }
    }
}

/// Simplify a closed ring, never emitting an open or degenerate one
pub fn simplify_ring(ring: &[Coordinate], tolerance: f64) -> SimplifiedRing {
    if ring.len() < MIN_RING_LEN || ring.first() != ring.last() {
        return SimplifiedRing::original(ring, RingFallback::Malformed);
    }

    let open = &ring[..ring.len() - 1];
    if !has_three_distinct(open) {
        return SimplifiedRing::original(ring, RingFallback::Malformed);
    }

    let mut simplified = douglas_peucker(open, tolerance);
    if !has_three_distinct(&simplified) {
        let Some(mut clamped) = clamp_to_minimal(open) else {
            return SimplifiedRing::original(ring, RingFallback::Collapsed);
        };
        clamped.push(ring[0]);
        return SimplifiedRing {
            coordinates: clamped,
            fallback: Some(RingFallback::Collapsed),
        };
    }

    simplified.push(ring[0]);
    SimplifiedRing {
        coordinates: simplified,
        fallback: None,
    }
}

/// Smallest ring-forming subsequence of an open ring: both endpoints plus the
/// vertex farthest from the chord between them. When the endpoints coincide,
/// a second vertex farthest from the first chord is added.
fn clamp_to_minimal(open: &[Coordinate]) -> Option<Vec<Coordinate>> {
    let first = open[0];
    let last = open[open.len() - 1];

    let far = farthest_interior(open, first, last, &[first, last])?;
    let mut indices = vec![0, far, open.len() - 1];
    if first == last {
        let second = farthest_interior(open, first, open[far], &[first, open[far]])?;
        indices.push(second);
        indices.sort_unstable();
    }

    Some(indices.into_iter().map(|i| open[i]).collect())
}

/// Index of the interior vertex farthest from chord `a`-`b`, skipping `exclude`
fn farthest_interior(
    open: &[Coordinate],
    a: Coordinate,
    b: Coordinate,
    exclude: &[Coordinate],
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in open.iter().enumerate().take(open.len() - 1).skip(1) {
        if exclude.contains(p) {
            continue;
        }
        let d = point_segment_distance(*p, a, b);
        if best.map_or(true, |(_, dmax)| d > dmax) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

fn has_three_distinct(points: &[Coordinate]) -> bool {
    let mut seen: Vec<Coordinate> = Vec::with_capacity(3);
    for p in points {
        if !seen.contains(p) {
            seen.push(*p);
            if seen.len() == 3 {
                return true;
            }
        }
    }
    false
}
