use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::export::{ExportError, Result, SceneSource, Xyz, to_ntiled};

/// Helper objects whose translations drive the camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraRig {
	/// Object at the eye position.
	pub eye: String,
	/// Object the camera looks at.
	pub center: String,
	/// Object offset from the eye along the up direction.
	pub up: String,
}

impl Default for CameraRig {
	fn default() -> Self {
		Self {
			eye: "EyeHandle".to_owned(),
			center: "CenterHandle".to_owned(),
			up: "UpHandle".to_owned(),
		}
	}
}

/// Camera sample at one frame, in nTiled space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
	/// Eye position.
	pub eye: DVec3,
	/// Look-at target.
	pub center: DVec3,
	/// Up direction (up handle minus eye).
	pub up: DVec3,
}

/// Sample the rig once per frame over the scene's frame range.
///
/// Leaves the scene's frame cursor on the last sampled frame.
pub fn sample_camera_path<S: SceneSource + ?Sized>(scene: &mut S, rig: &CameraRig) -> Result<Vec<CameraFrame>> {
	for name in [&rig.eye, &rig.center, &rig.up] {
		if scene.object(name).is_none() {
			return Err(ExportError::MissingRigHandle { name: name.clone() });
		}
	}

	let mut frames = Vec::new();
	for frame in scene.frame_range() {
		scene.set_frame(frame);

		let eye = handle_location(&*scene, &rig.eye)?;
		let center = handle_location(&*scene, &rig.center)?;
		let up = handle_location(&*scene, &rig.up)? - eye;

		frames.push(CameraFrame {
			eye: to_ntiled(eye),
			center: to_ntiled(center),
			up: to_ntiled(up),
		});
	}

	log::info!("sampled {} camera frames", frames.len());
	Ok(frames)
}

fn handle_location<S: SceneSource + ?Sized>(scene: &S, name: &str) -> Result<DVec3> {
	let object = scene.object(name).ok_or_else(|| ExportError::MissingRigHandle { name: name.to_owned() })?;
	Ok(scene.world_location(object))
}

/// Camera frame as written to the path document. Fields are in sorted key order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFrameJson {
	/// Look-at target.
	pub center: Xyz,
	/// Eye position.
	pub eye: Xyz,
	/// Up direction.
	pub up: Xyz,
}

/// `{ "frames": [...] }` camera path document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPathDocument {
	/// One entry per frame, in frame order.
	pub frames: Vec<CameraFrameJson>,
}

impl CameraPathDocument {
	/// Build a path document from sampled frames.
	pub fn new(frames: &[CameraFrame]) -> Self {
		Self {
			frames: frames
				.iter()
				.map(|frame| CameraFrameJson {
					center: frame.center.into(),
					eye: frame.eye.into(),
					up: frame.up.into(),
				})
				.collect(),
		}
	}
}
