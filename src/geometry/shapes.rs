use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Default segment count for circle outlines
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 12;

/// Axis-aligned rectangle outline centered on the origin.
///
/// Width spans local X, length spans local Y. The corner order is fixed
/// and clockwise, so the outline extrudes without reversal.
pub fn rectangle(width: f32, length: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(width / 2.0, length / 2.0),
        Vec2::new(width / 2.0, -length / 2.0),
        Vec2::new(-width / 2.0, -length / 2.0),
        Vec2::new(-width / 2.0, length / 2.0),
    ]
}

/// Regular polygon approximating a circle of the given radius.
///
/// Vertex i sits at angle ((segments − i) / segments) · 2π + π/segments.
/// The descending index makes the traversal clockwise and the
/// half-segment phase keeps the seam off the X axis; both are load-bearing
/// for downstream winding checks, so the formula stays as-is.
pub fn circle(radius: f32, segments: usize) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let theta =
                ((segments - i) as f32 / segments as f32) * TAU + PI / segments as f32;
            Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Adapt an externally supplied point list into an outline.
///
/// The order is taken as-is; winding is not guaranteed, so callers must
/// run the outline through the winding check (and reverse if needed)
/// before extruding.
pub fn from_points(points: &[(f32, f32)]) -> Vec<Vec2> {
    points.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}
