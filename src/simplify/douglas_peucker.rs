//! Douglas-Peucker path simplification
//!
//! Reduces an ordered run of coordinates to the subsequence whose removed
//! points all lie within `tolerance` of the retained chords. Distances are
//! planar, in the same units as the input.

use crate::geojson::Coordinate;

/// Douglas-Peucker polyline simplification
/// Reduces number of points while maintaining shape within tolerance.
/// The output is a subsequence of `points` that always keeps both endpoints.
/// A tolerance of zero (or anything not strictly positive) returns the input unchanged.
pub fn douglas_peucker(points: &[Coordinate], tolerance: f64) -> Vec<Coordinate> {
    if points.len() < 3 || tolerance.is_nan() || tolerance <= 0.0 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    // Pending spans, each split at its farthest point until within tolerance
    let mut spans = vec![(0, points.len() - 1)];
    while let Some((start, end)) = spans.pop() {
        if end <= start + 1 {
            continue;
        }

        let mut dmax = 0.0;
        let mut index = start;

        // Find the point with maximum distance from the chord
        for i in (start + 1)..end {
            let d = point_segment_distance(points[i], points[start], points[end]);
            if d > dmax {
                dmax = d;
                index = i;
            }
        }

        if dmax > tolerance {
            keep[index] = true;
            spans.push((index, end));
            spans.push((start, index));
        }
    }

    points
        .iter()
        .zip(&keep)
        .filter_map(|(p, &k)| if k { Some(*p) } else { None })
        .collect()
}

/// Distance from `p` to the chord `a`-`b`.
/// Equals the perpendicular distance when the projection falls inside the chord.
pub(super) fn point_segment_distance(p: Coordinate, a: Coordinate, b: Coordinate) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return (p.x - a.x).hypot(p.y - a.y);
    }

    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let proj_x = a.x + t * dx;
    let proj_y = a.y + t * dy;

    (p.x - proj_x).hypot(p.y - proj_y)
}
