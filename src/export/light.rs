use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::export::{Rgb, Xyz};

/// Point light in nTiled space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
	/// Position, already remapped to nTiled axes.
	pub position: DVec3,
	/// RGB intensity in `[0, 1]`.
	pub intensity: [f64; 3],
	/// Radius of the light volume.
	pub radius: f64,
}

/// One entry of a lights document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightJson {
	/// Light position.
	pub position: Xyz,
	/// Light intensity.
	pub intensity: Rgb,
	/// Light volume radius.
	pub radius: f64,
}

/// `{ "lights": [...] }` document read by nTiled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightsDocument {
	/// All lights in emission order.
	pub lights: Vec<LightJson>,
}

impl From<&Light> for LightJson {
	fn from(light: &Light) -> Self {
		Self {
			position: light.position.into(),
			intensity: light.intensity.into(),
			radius: light.radius,
		}
	}
}

impl LightsDocument {
	/// Build a document from lights in order.
	pub fn new(lights: &[Light]) -> Self {
		Self {
			lights: lights.iter().map(LightJson::from).collect(),
		}
	}
}
