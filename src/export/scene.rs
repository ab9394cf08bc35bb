use serde::{Deserialize, Serialize};

use crate::export::Xyz;

/// Tile dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSize {
	/// Tile width.
	pub x: u32,
	/// Tile height.
	pub y: u32,
}

/// Output window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
	/// Window width.
	pub width: u32,
	/// Window height.
	pub height: u32,
}

/// Near and far clip planes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clip {
	/// Near plane distance.
	pub near: f64,
	/// Far plane distance.
	pub far: f64,
}

/// Frame capture settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraOutput {
	/// Capture mode understood by the renderer.
	#[serde(rename = "type")]
	pub kind: String,
	/// First captured frame.
	pub frames_start: i64,
	/// Last captured frame.
	pub frames_end: i64,
	/// Path prefix for captured images.
	pub image_base_path: String,
}

/// Initial camera and its controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneCamera {
	/// Eye position.
	pub eye: Xyz,
	/// Look-at target.
	pub center: Xyz,
	/// Up direction.
	pub up: Xyz,
	/// Vertical field of view.
	pub fovy: f64,
	/// Width over height.
	pub aspect: f64,
	/// Clip planes.
	pub clip: Clip,
	/// Controller name (for example `path` to replay a camera path).
	pub control: String,
	/// Camera path document; empty means the configured camera output path.
	pub frames_path: String,
	/// Capture settings.
	pub output: CameraOutput,
}

/// Renderer frame-time logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneLog {
	/// Whether logging is on.
	pub is_logging: bool,
	/// Log output path.
	pub output_path: String,
	/// First logged frame.
	pub frame_start: i64,
	/// Last logged frame.
	pub frame_end: i64,
}

/// Top-level nTiled scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDocument {
	/// Pipeline name.
	pub pipeline: String,
	/// Light-culling tile size.
	pub tile_size: TileSize,
	/// Window size.
	pub viewport: Viewport,
	/// Camera setup.
	pub camera: SceneCamera,
	/// Frame after which the renderer exits.
	pub exit_frame: i64,
	/// Frame-time logging.
	pub log: SceneLog,
	/// Geometry document paths.
	pub geometry: Vec<String>,
	/// Lights document paths.
	pub lights: Vec<String>,
}

impl Default for SceneDocument {
	fn default() -> Self {
		Self {
			pipeline: "forward".to_owned(),
			tile_size: TileSize { x: 32, y: 32 },
			viewport: Viewport { width: 1200, height: 720 },
			camera: SceneCamera {
				eye: Xyz { x: 0.0, y: 5.0, z: 10.0 },
				center: Xyz { x: 0.0, y: 0.0, z: 0.0 },
				up: Xyz { x: 0.0, y: 1.0, z: 0.0 },
				fovy: 45.0,
				aspect: 1200.0 / 720.0,
				clip: Clip { near: 1.0, far: 1000.0 },
				control: "path".to_owned(),
				frames_path: String::new(),
				output: CameraOutput {
					kind: "none".to_owned(),
					frames_start: 0,
					frames_end: 0,
					image_base_path: String::new(),
				},
			},
			exit_frame: 1000,
			log: SceneLog {
				is_logging: false,
				output_path: String::new(),
				frame_start: 0,
				frame_end: 0,
			},
			geometry: Vec::new(),
			lights: Vec::new(),
		}
	}
}

impl SceneDocument {
	/// Fill unset file references with the given defaults.
	pub fn with_defaults(mut self, frames_path: &str, geometry: &str, lights: &str) -> Self {
		if self.camera.frames_path.is_empty() {
			self.camera.frames_path = frames_path.to_owned();
		}
		if self.geometry.is_empty() {
			self.geometry.push(geometry.to_owned());
		}
		if self.lights.is_empty() {
			self.lights.push(lights.to_owned());
		}
		self
	}
}
