use std::fs;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::export::Result;

/// `{x, y, z}` vector as nTiled documents spell it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
	/// X component.
	pub x: f64,
	/// Y component.
	pub y: f64,
	/// Z component.
	pub z: f64,
}

impl From<DVec3> for Xyz {
	fn from(v: DVec3) -> Self {
		Self { x: v.x, y: v.y, z: v.z }
	}
}

impl From<Xyz> for DVec3 {
	fn from(v: Xyz) -> Self {
		DVec3::new(v.x, v.y, v.z)
	}
}

/// `{r, g, b}` color triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
	/// Red channel.
	pub r: f64,
	/// Green channel.
	pub g: f64,
	/// Blue channel.
	pub b: f64,
}

impl From<[f64; 3]> for Rgb {
	fn from([r, g, b]: [f64; 3]) -> Self {
		Self { r, g, b }
	}
}

/// Write `value` as two-space indented JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)?;
	}

	let mut text = serde_json::to_string_pretty(value)?;
	text.push('\n');
	fs::write(path, text)?;
	log::info!("wrote {}", path.display());
	Ok(())
}
