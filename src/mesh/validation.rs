//! Mesh validation utilities
//!
//! Checks a flat-shaded mesh for structural problems (vertex and normal
//! arrays out of lockstep), invalid coordinates (NaN/Inf), degenerate
//! zero-area triangles, and flat-shading violations (a triangle whose
//! three normal entries differ).

use super::builder::Mesh;
use glam::Vec3;

/// Result of mesh validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Total number of triangles validated
    pub total: usize,
    /// Structural violation: array lengths differ or are not a multiple of 3
    pub malformed_layout: bool,
    /// Number of degenerate triangles (zero or near-zero area)
    pub degenerate: usize,
    /// Number of triangles with invalid coordinates (NaN/Inf)
    pub invalid_coords: usize,
    /// Number of triangles whose three normal entries are not identical
    pub mixed_normals: usize,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Check if the mesh passed validation without critical issues
    pub fn is_valid(&self) -> bool {
        !self.malformed_layout && self.invalid_coords == 0
    }

    /// Check if the mesh has any issues at all
    pub fn has_issues(&self) -> bool {
        self.malformed_layout
            || self.degenerate > 0
            || self.invalid_coords > 0
            || self.mixed_normals > 0
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!("Mesh valid: {} triangles, no issues", self.total)
        } else {
            format!(
                "Mesh issues: {} total, {} degenerate, {} invalid coords, {} mixed normals",
                self.total, self.degenerate, self.invalid_coords, self.mixed_normals
            )
        }
    }
}

/// Minimum area threshold for non-degenerate triangles
const MIN_TRIANGLE_AREA: f32 = 1e-10;

/// Validate a mesh and return a detailed report
pub fn validate_mesh(mesh: &Mesh) -> ValidationResult {
    let mut result = ValidationResult {
        total: mesh.triangle_count(),
        ..Default::default()
    };

    if mesh.vertices.len() != mesh.normals.len() || mesh.vertices.len() % 3 != 0 {
        result.malformed_layout = true;
        result.warnings.push(format!(
            "Layout broken: {} vertices / {} normals (both must match and be a multiple of 3)",
            mesh.vertices.len(),
            mesh.normals.len()
        ));
        return result;
    }

    for (i, (corners, _)) in mesh.triangles().enumerate() {
        let normals = &mesh.normals[i * 3..i * 3 + 3];

        if has_invalid_coords(&corners, normals) {
            result.invalid_coords += 1;
            result
                .warnings
                .push(format!("Triangle {} has NaN/Inf coordinates", i));
            continue;
        }

        if is_degenerate(&corners) {
            result.degenerate += 1;
        }

        if normals[0] != normals[1] || normals[1] != normals[2] {
            result.mixed_normals += 1;
        }
    }

    if result.degenerate > 0 {
        result
            .warnings
            .push(format!("{} degenerate triangles detected", result.degenerate));
    }
    if result.mixed_normals > 0 {
        result.warnings.push(format!(
            "{} triangles break flat shading (normals differ within a face)",
            result.mixed_normals
        ));
    }

    result
}

/// Check if a triangle has any invalid (NaN/Inf) coordinates
fn has_invalid_coords(corners: &[Vec3; 3], normals: &[Vec3]) -> bool {
    corners.iter().chain(normals.iter()).any(|v| !v.is_finite())
}

/// Check if a triangle is degenerate (zero or near-zero area)
fn is_degenerate(corners: &[Vec3; 3]) -> bool {
    triangle_area(corners) < MIN_TRIANGLE_AREA
}

/// Calculate the area of a triangle from its vertices
fn triangle_area(corners: &[Vec3; 3]) -> f32 {
    let edge_a = corners[1] - corners[0];
    let edge_b = corners[2] - corners[0];
    0.5 * edge_a.cross(edge_b).length()
}

/// Remove degenerate and invalid triangles from a mesh
///
/// Filters whole triangles, keeping the vertex and normal arrays in
/// lockstep; surviving faces keep their original flat normals.
pub fn remove_degenerate(mesh: &Mesh) -> Mesh {
    let mut cleaned = Mesh::with_capacity(mesh.vertices.len());
    for (i, (corners, normal)) in mesh.triangles().enumerate() {
        let normals = &mesh.normals[i * 3..i * 3 + 3];
        if has_invalid_coords(&corners, normals) || is_degenerate(&corners) {
            continue;
        }
        cleaned.push_triangle(corners, normal);
    }
    cleaned
}
