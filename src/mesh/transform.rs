use glam::{Mat4, Quat, Vec3};

/// Rigid placement of the local extrusion frame in the output frame
///
/// Local X/Y span the outline plane and local Z is the extrusion axis;
/// the transform is rotate-then-translate with a unit quaternion, no
/// scaling or shear. Values are immutable and supplied per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl RigidTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    /// Compose the 4×4 homogeneous matrix (rotate, then translate).
    ///
    /// Callers transforming many points should compose once and reuse the
    /// matrix; the extruder does exactly that, so every vertex of one call
    /// goes through an identical placement.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Transform a single point (homogeneous multiply, w dropped)
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point3(point)
    }

    /// Transform a batch of points through one composed matrix
    pub fn apply_points(&self, points: &[Vec3]) -> Vec<Vec3> {
        let matrix = self.matrix();
        points.iter().map(|&p| matrix.transform_point3(p)).collect()
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
