mod camera;
mod compression;
mod config;
mod coords;
mod document;
mod error;
mod geometry;
mod grid;
mod lamps;
mod light;
mod name;
mod scene;
mod snapshot;
mod spawner;

/// Camera rig sampling and path document.
pub use camera::{CameraFrame, CameraFrameJson, CameraPathDocument, CameraRig, sample_camera_path};
/// Compression detection result.
pub use compression::Compression;
/// Export configuration and built-in profiles.
pub use config::{ExportConfig, PROFILE_NAMES};
/// Host-to-nTiled coordinate conversion.
pub use coords::{swap_euler, to_ntiled};
#[cfg(test)]
pub(crate) use coords::from_ntiled;
/// Shared document fragments and the JSON writer.
pub use document::{Rgb, Xyz, write_json};
/// Error and result aliases.
pub use error::{ExportError, Result};
/// Geometry extraction types and entry points.
pub use geometry::{GeometryDocument, GeometryExtraction, Mesh, OBJECT_TAG, ObjectJson, PlacedObject, TypeCounter, extract_geometry};
/// Light grid generation.
pub use grid::{Density, GridRegion, LightSet, generate_lights, random_rgb_colour, spawn_lights, sweep_light_sets};
/// Static lamp conversion.
pub use lamps::extract_lamps;
/// Point light and lights document.
pub use light::{Light, LightJson, LightsDocument};
/// `<tag>::<rest>` object name convention.
pub use name::TaggedName;
/// Scene document types.
pub use scene::{CameraOutput, Clip, SceneCamera, SceneDocument, SceneLog, TileSize, Viewport};
/// Scene snapshot model and source trait.
pub use snapshot::{LampData, ObjectKind, SceneObject, SceneSnapshot, SceneSource, TrackKey};
/// Light spawner parsing and extraction.
pub use spawner::{AnchorName, LIGHT_TAG, LightSpawner, RadiusPolicy, SpawnerVariant, axis_empty_name, extract_spawners, parse_anchor_name};
