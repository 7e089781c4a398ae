use glam::{Quat, Vec3};

/// A pose sample along a path, tagged with its longitudinal velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPose {
    pub position: Vec3,
    /// Unit orientation of the path frame at this sample
    pub orientation: Quat,
    /// Longitudinal velocity at this sample, in m/s
    pub velocity: f32,
}

/// One triangle-strip vertex of the ribbon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonVertex {
    pub position: Vec3,
    pub velocity: f32,
}

/// Build a velocity-tagged triangle strip along a path.
///
/// Each pose is offset sideways by ±width/2 along its local Y axis,
/// emitting the left (−) then right (+) vertex; consecutive pose pairs
/// form the strip. Both vertices of a pair carry the pose's velocity,
/// so a renderer can color the ribbon by speed.
pub fn ribbon_strip(poses: &[PathPose], width: f32) -> Vec<RibbonVertex> {
    let half_width = width / 2.0;

    let mut strip = Vec::with_capacity(poses.len() * 2);
    for pose in poses {
        for side in [-half_width, half_width] {
            let offset = pose.orientation * Vec3::new(0.0, side, 0.0);
            strip.push(RibbonVertex {
                position: pose.position + offset,
                velocity: pose.velocity,
            });
        }
    }

    strip
}
