/// Camera path command.
pub mod camera;
/// Geometry plus light-set batch command.
pub mod export;
/// Per-shader geometry command.
pub mod geometry;
/// Static lamp command.
pub mod lamps;
/// Light-set sweep command.
pub mod lights;
/// Scene document command.
pub mod scene;
/// Shared argument and output helpers.
pub mod util;
