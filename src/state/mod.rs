pub mod arbiter;
pub mod camera;
pub mod gesture;
pub mod touch;

pub use arbiter::HitSurface;
pub use camera::{CoordinateSystem, Vector2};
pub use gesture::{AnimationToken, BoardEvent, GestureController};
pub use touch::{ScreenMapping, TouchPoint};
