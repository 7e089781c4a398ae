pub mod shapes;
pub mod winding;

pub use shapes::{DEFAULT_CIRCLE_SEGMENTS, circle, from_points, rectangle};
pub use winding::{is_clockwise, reverse_winding};
