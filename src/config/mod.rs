use serde::Deserialize;
use std::path::{Path, PathBuf};

use glam::{Quat, Vec2, Vec3};

use crate::geometry::{DEFAULT_CIRCLE_SEGMENTS, circle, from_points, rectangle};
use crate::mesh::RigidTransform;

fn default_height() -> f32 {
    1.0
}
fn default_segments() -> usize {
    DEFAULT_CIRCLE_SEGMENTS
}
fn default_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

/// One outline to extrude, as written in the scene file
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutlineSpec {
    Rectangle {
        width: f32,
        length: f32,
    },
    Circle {
        radius: f32,
        #[serde(default = "default_segments")]
        segments: usize,
    },
    /// Explicit point list; winding is the author's responsibility
    Points { points: Vec<[f32; 2]> },
}

impl OutlineSpec {
    pub fn outline(&self) -> Vec<Vec2> {
        match self {
            Self::Rectangle { width, length } => rectangle(*width, *length),
            Self::Circle { radius, segments } => circle(*radius, *segments),
            Self::Points { points } => {
                from_points(&points.iter().map(|p| (p[0], p[1])).collect::<Vec<_>>())
            }
        }
    }
}

/// One prism in the scene: an outline, a height, and a placement
#[derive(Debug, Clone, Deserialize)]
pub struct PrismSpec {
    pub shape: OutlineSpec,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default)]
    pub translation: [f32; 3],
    /// Quaternion as [x, y, z, w]; normalized on conversion
    #[serde(default = "default_rotation")]
    pub rotation: [f32; 4],
}

impl PrismSpec {
    pub fn placement(&self) -> RigidTransform {
        let [x, y, z] = self.translation;
        let [qx, qy, qz, qw] = self.rotation;
        RigidTransform::new(
            Vec3::new(x, y, z),
            Quat::from_xyzw(qx, qy, qz, qw).normalize(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub prisms: Vec<PrismSpec>,
}

impl SceneConfig {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse scene file: {}", path.display()))
    }

    /// Look for `prismgen.toml` in the working directory
    pub fn load() -> Option<Self> {
        for path in [Path::new("prismgen.toml"), Path::new(".prismgen.toml")] {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse scene file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scene() {
        let scene: SceneConfig = toml::from_str(
            r#"
            output = "scene.stl"

            [[prisms]]
            shape = { kind = "rectangle", width = 2.0, length = 4.0 }
            height = 1.0
            translation = [0.0, 0.0, 0.5]

            [[prisms]]
            shape = { kind = "circle", radius = 1.5 }
            "#,
        )
        .unwrap();

        assert_eq!(scene.output.as_deref(), Some(Path::new("scene.stl")));
        assert_eq!(scene.prisms.len(), 2);
        assert_eq!(scene.prisms[0].translation, [0.0, 0.0, 0.5]);
        // Defaults fill in height, rotation, and circle segments
        assert_eq!(scene.prisms[1].height, 1.0);
        assert_eq!(scene.prisms[1].rotation, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(scene.prisms[1].shape.outline().len(), DEFAULT_CIRCLE_SEGMENTS);
    }

    #[test]
    fn test_parse_point_list() {
        let scene: SceneConfig = toml::from_str(
            r#"
            [[prisms]]
            shape = { kind = "points", points = [[0.0, 0.0], [2.0, 2.0], [2.0, 0.0]] }
            height = 0.5
            "#,
        )
        .unwrap();

        let outline = scene.prisms[0].shape.outline();
        assert_eq!(outline.len(), 3);
        assert_eq!(outline[1], Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_placement_normalizes_rotation() {
        let spec = PrismSpec {
            shape: OutlineSpec::Rectangle {
                width: 1.0,
                length: 1.0,
            },
            height: 1.0,
            translation: [1.0, 2.0, 3.0],
            rotation: [0.0, 0.0, 2.0, 0.0],
        };
        let placement = spec.placement();
        assert!((placement.rotation.length() - 1.0).abs() < 1e-6);
        assert_eq!(placement.translation, Vec3::new(1.0, 2.0, 3.0));
    }
}
