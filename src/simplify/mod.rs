//! Polyline simplification via Ramer-Douglas-Peucker.
//!
//! Latitude/longitude are treated as planar Cartesian coordinates for the
//! perpendicular-distance computation, an acceptable approximation at
//! city/country route scales. Tolerances are therefore in degrees.

use crate::domain::Coordinate;

/// Reduce a point sequence to an order-preserving subsequence whose
/// perpendicular deviation from the original path stays within
/// `tolerance_deg`. The first and last point are always kept exactly;
/// sequences of length two or less are returned unchanged.
pub fn simplify(points: &[Coordinate], tolerance_deg: f64) -> Vec<Coordinate> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_dist = 0.0f64;
    let mut max_idx = 0usize;
    for (i, p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let dist = perpendicular_distance(*p, first, last);
        if dist > max_dist {
            max_dist = dist;
            max_idx = i;
        }
    }

    if max_dist > tolerance_deg {
        // Split at the most deviant point; it is shared by both halves and
        // must appear exactly once in the result.
        let mut left = simplify(&points[..=max_idx], tolerance_deg);
        let right = simplify(&points[max_idx..], tolerance_deg);
        left.extend_from_slice(&right[1..]);
        left
    } else {
        vec![first, last]
    }
}

/// Pick a simplification tolerance from the total route distance: tight for
/// short routes, aggressive for long ones.
pub fn tolerance_for(distance_m: f64) -> f64 {
    if distance_m < 50_000.0 {
        0.000_05
    } else if distance_m < 300_000.0 {
        0.000_1
    } else {
        0.000_2
    }
}

/// Planar distance from `p` to the segment line through `a` and `b`.
/// Falls back to point distance when the segment is degenerate.
fn perpendicular_distance(p: Coordinate, a: Coordinate, b: Coordinate) -> f64 {
    let dx = b.lat - a.lat;
    let dy = b.lon - a.lon;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        let px = p.lat - a.lat;
        let py = p.lon - a.lon;
        return (px * px + py * py).sqrt();
    }
    (dx * (p.lon - a.lon) - dy * (p.lat - a.lat)).abs() / len_sq.sqrt()
}
