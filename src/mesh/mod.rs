pub mod builder;
pub mod extrusion;
pub mod ribbon;
pub mod stl;
pub mod transform;
pub mod validation;

pub use builder::{Mesh, face_normal};
pub use extrusion::{ExtrudeError, extrude_polygon, extrude_polygon_or_empty};
pub use ribbon::{PathPose, RibbonVertex, ribbon_strip};
pub use stl::write_stl;
pub use transform::RigidTransform;
pub use validation::{ValidationResult, remove_degenerate, validate_mesh};
