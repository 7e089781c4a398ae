use glam::Vec3;

/// A flat-shaded triangle-list mesh
///
/// `vertices` and `normals` are parallel arrays of identical length,
/// always a multiple of 3; each consecutive triple of vertices is one
/// triangle, and the three normal entries of a triangle are identical
/// (one flat normal per face, no smoothing across faces).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the given number of vertices
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
        }
    }

    /// Append one triangle, repeating its flat normal for all three vertices
    pub fn push_triangle(&mut self, corners: [Vec3; 3], normal: Vec3) {
        self.vertices.extend_from_slice(&corners);
        self.normals.extend_from_slice(&[normal; 3]);
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate face-wise: three corners plus the face's flat normal
    pub fn triangles(&self) -> impl Iterator<Item = ([Vec3; 3], Vec3)> + '_ {
        self.vertices
            .chunks_exact(3)
            .zip(self.normals.chunks_exact(3))
            .map(|(v, n)| ([v[0], v[1], v[2]], n[0]))
    }
}

/// Outward flat normal of a triangle from two of its edge vectors.
///
/// Computed as cross(v2 − v0, v1 − v0); with the corner orderings the
/// extruder emits for clockwise outlines, this points away from the
/// solid. The result is left unnormalized.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v2 - v0).cross(v1 - v0)
}
