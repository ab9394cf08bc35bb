use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use glam::DVec3;
use serde::Deserialize;

use crate::export::compression::decode_bytes;
use crate::export::{Compression, Result};

/// Host object categories relevant to the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ObjectKind {
	/// Non-rendering marker object.
	Empty,
	/// Light source (`LAMP` in older hosts, `LIGHT` in newer ones).
	Lamp,
	/// Mesh geometry.
	Mesh,
	/// Camera object.
	Camera,
	/// Anything else the host reports.
	Other,
}

impl From<String> for ObjectKind {
	fn from(value: String) -> Self {
		match value.to_ascii_lowercase().as_str() {
			"empty" => Self::Empty,
			"lamp" | "light" => Self::Lamp,
			"mesh" => Self::Mesh,
			"camera" => Self::Camera,
			_ => Self::Other,
		}
	}
}

/// Light properties attached to a lamp object.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LampData {
	/// Scalar emission strength.
	pub energy: f64,
	/// Linear RGB color.
	pub color: [f64; 3],
	/// Falloff distance.
	pub distance: f64,
}

/// World translation of an animated object at one frame.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TrackKey {
	/// Frame number.
	pub frame: i32,
	/// World-space translation at `frame`.
	pub location: [f64; 3],
}

/// One object from the host scene, in host (Z-up) world space.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneObject {
	/// Unique host object name.
	pub name: String,
	/// Host object category.
	pub kind: ObjectKind,
	/// World translation at the snapshot's rest frame.
	#[serde(default)]
	pub location: [f64; 3],
	/// World rotation as XYZ Euler angles in radians.
	#[serde(default)]
	pub rotation: [f64; 3],
	/// Host selection state.
	#[serde(default)]
	pub selected: bool,
	/// Light properties for lamp objects.
	#[serde(default)]
	pub lamp: Option<LampData>,
	/// Per-frame world translations for animated objects.
	#[serde(default)]
	pub track: Vec<TrackKey>,
}

impl SceneObject {
	/// Create an unanimated object at the world origin.
	pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
		Self {
			name: name.into(),
			kind,
			location: [0.0; 3],
			rotation: [0.0; 3],
			selected: false,
			lamp: None,
			track: Vec::new(),
		}
	}

	/// Replace the rest-frame world translation.
	pub fn at(mut self, location: [f64; 3]) -> Self {
		self.location = location;
		self
	}

	/// Replace the world rotation.
	#[cfg(test)]
	pub(crate) fn rotated(mut self, rotation: [f64; 3]) -> Self {
		self.rotation = rotation;
		self
	}

	/// World translation at `frame`, falling back to the rest location for unsampled frames.
	pub fn location_at(&self, frame: i32) -> DVec3 {
		let location = self.track.iter().find(|key| key.frame == frame).map_or(self.location, |key| key.location);
		DVec3::from_array(location)
	}

	/// World rotation as a vector of Euler angles.
	pub fn euler(&self) -> DVec3 {
		DVec3::from_array(self.rotation)
	}
}

/// Read access to a host scene, plus the frame cursor the camera exporter advances.
pub trait SceneSource {
	/// All scene objects in host order.
	fn objects(&self) -> &[SceneObject];

	/// Inclusive animation frame range.
	fn frame_range(&self) -> RangeInclusive<i32>;

	/// Frame that world translations are currently sampled at.
	fn current_frame(&self) -> i32;

	/// Move the frame cursor. Not restored by callers.
	fn set_frame(&mut self, frame: i32);

	/// Look up an object by exact name.
	fn object(&self, name: &str) -> Option<&SceneObject> {
		self.objects().iter().find(|object| object.name == name)
	}

	/// World translation of `object` at the current frame.
	fn world_location(&self, object: &SceneObject) -> DVec3 {
		object.location_at(self.current_frame())
	}
}

/// Serialized copy of a host scene.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneSnapshot {
	/// First animation frame.
	#[serde(default = "default_frame_start")]
	pub frame_start: i32,
	/// Last animation frame, inclusive.
	#[serde(default = "default_frame_end")]
	pub frame_end: i32,
	#[serde(default, rename = "frame_current")]
	current: Option<i32>,
	/// Scene objects in host order.
	#[serde(default)]
	pub objects: Vec<SceneObject>,
	/// Compression the snapshot was stored with.
	#[serde(skip)]
	pub compression: Compression,
}

fn default_frame_start() -> i32 {
	1
}

fn default_frame_end() -> i32 {
	250
}

impl SceneSnapshot {
	/// Build an in-memory snapshot over `frame_start..=frame_end`.
	pub fn new(objects: Vec<SceneObject>, frame_start: i32, frame_end: i32) -> Self {
		Self {
			frame_start,
			frame_end,
			current: None,
			objects,
			compression: Compression::None,
		}
	}

	/// Read a JSON or zstd-compressed JSON snapshot from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		let (compression, bytes) = decode_bytes(raw)?;
		let mut snapshot: Self = serde_json::from_slice(&bytes)?;
		snapshot.compression = compression;

		log::debug!(
			"loaded snapshot {} ({} objects, frames {}..={}, compression={})",
			path.display(),
			snapshot.objects.len(),
			snapshot.frame_start,
			snapshot.frame_end,
			compression.as_str()
		);
		Ok(snapshot)
	}

	/// Parse an uncompressed snapshot document.
	#[cfg(test)]
	pub(crate) fn from_json_str(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}
}

impl SceneSource for SceneSnapshot {
	fn objects(&self) -> &[SceneObject] {
		&self.objects
	}

	fn frame_range(&self) -> RangeInclusive<i32> {
		self.frame_start..=self.frame_end
	}

	fn current_frame(&self) -> i32 {
		self.current.unwrap_or(self.frame_start)
	}

	fn set_frame(&mut self, frame: i32) {
		self.current = Some(frame);
	}
}

#[cfg(test)]
mod tests {
	use glam::DVec3;

	use super::{ObjectKind, SceneSnapshot, SceneSource};

	#[test]
	fn snapshot_parses_host_kinds_and_defaults() {
		let snapshot = SceneSnapshot::from_json_str(
			r#"{
				"objects": [
					{"name": "obj::Crate1", "kind": "EMPTY", "location": [1, 2, 3]},
					{"name": "Lamp", "kind": "LIGHT", "lamp": {"energy": 2.0, "color": [1, 0.5, 0], "distance": 30}},
					{"name": "Ground", "kind": "MESH"},
					{"name": "Speaker", "kind": "SPEAKER"}
				]
			}"#,
		)
		.expect("snapshot parses");

		assert_eq!(snapshot.frame_range(), 1..=250);
		assert_eq!(snapshot.current_frame(), 1);
		let kinds: Vec<_> = snapshot.objects.iter().map(|object| object.kind).collect();
		assert_eq!(kinds, vec![ObjectKind::Empty, ObjectKind::Lamp, ObjectKind::Mesh, ObjectKind::Other]);
		assert_eq!(snapshot.objects[1].lamp.map(|lamp| lamp.distance), Some(30.0));
	}

	#[test]
	fn world_location_follows_frame_cursor() {
		let mut snapshot = SceneSnapshot::from_json_str(
			r#"{
				"frame_start": 3,
				"frame_end": 4,
				"objects": [
					{"name": "EyeHandle", "kind": "EMPTY", "location": [0, 0, 0],
					 "track": [{"frame": 4, "location": [1, 1, 1]}]}
				]
			}"#,
		)
		.expect("snapshot parses");

		let eye = snapshot.object("EyeHandle").cloned().expect("eye exists");
		assert_eq!(snapshot.world_location(&eye), DVec3::ZERO);
		snapshot.set_frame(4);
		assert_eq!(snapshot.world_location(&eye), DVec3::ONE);
	}
}
