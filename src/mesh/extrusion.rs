use glam::Vec2;
use log::warn;
use thiserror::Error;

use super::builder::{Mesh, face_normal};
use super::transform::RigidTransform;
use crate::geometry::winding::is_clockwise;

/// Why an outline was rejected before any triangulation happened
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtrudeError {
    #[error("polygon has {0} vertices, at least 3 required")]
    TooFewVertices(usize),
    #[error("polygon winding is not clockwise")]
    NotClockwise,
}

/// Extrude a clockwise 2D outline into a closed flat-shaded prism.
///
/// The outline is lifted to ±height/2 along local Z, fan-triangulated
/// into two caps, walled with one quad per edge, and every vertex is
/// placed by `placement` (composed once for the whole call). Triangles
/// are emitted top cap, then side walls in edge order, then bottom cap;
/// an outline of n vertices yields 12n − 12 vertices and as many
/// normals.
///
/// Winding is checked but self-intersection is not: a clockwise
/// self-intersecting outline extrudes best-effort, with both caps
/// sharing a normal that may be meaningless. [`validate_mesh`] is the
/// opt-in detector for callers that need more.
///
/// [`validate_mesh`]: super::validation::validate_mesh
pub fn extrude_polygon(
    polygon: &[Vec2],
    height: f32,
    placement: &RigidTransform,
) -> Result<Mesh, ExtrudeError> {
    if polygon.len() < 3 {
        return Err(ExtrudeError::TooFewVertices(polygon.len()));
    }
    if !is_clockwise(polygon) {
        return Err(ExtrudeError::NotClockwise);
    }

    let n = polygon.len();
    let half = height / 2.0;
    let matrix = placement.matrix();
    let top = |i: usize| matrix.transform_point3(polygon[i].extend(half));
    let bottom = |i: usize| matrix.transform_point3(polygon[i].extend(-half));

    let mut mesh = Mesh::with_capacity(12 * n - 12);

    // Top cap: fan around vertex 0. The cap is planar, so the normal of
    // the first fan triangle is shared by every top triangle.
    let top_normal = face_normal(top(0), top(1), top(2));
    for i in 2..n {
        mesh.push_triangle([top(0), top(i - 1), top(i)], top_normal);
    }

    // Side walls: one quad per edge, split into two triangles that share
    // the quad's flat normal. Adjacent walls keep distinct normals; the
    // vertical seams stay unsmoothed.
    for i in 0..n {
        let j = (i + 1) % n;
        let quad = [top(i), bottom(i), bottom(j), top(j)];
        let normal = face_normal(quad[0], quad[1], quad[2]);
        mesh.push_triangle([quad[0], quad[1], quad[2]], normal);
        mesh.push_triangle([quad[0], quad[2], quad[3]], normal);
    }

    // Bottom cap: reversed fan order flips the winding so the face points
    // down; the normal is the mirror of the top cap's.
    let bottom_normal = -top_normal;
    for i in 2..n {
        mesh.push_triangle([bottom(0), bottom(i), bottom(i - 1)], bottom_normal);
    }

    Ok(mesh)
}

/// Like [`extrude_polygon`], but a rejected outline is logged and turned
/// into an empty mesh so callers can proceed with nothing to draw.
pub fn extrude_polygon_or_empty(
    polygon: &[Vec2],
    height: f32,
    placement: &RigidTransform,
) -> Mesh {
    match extrude_polygon(polygon, height, placement) {
        Ok(mesh) => mesh,
        Err(err) => {
            warn!("outline rejected, emitting empty mesh: {err}");
            Mesh::default()
        }
    }
}
