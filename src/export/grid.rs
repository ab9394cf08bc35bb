use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::export::{Light, LightSpawner, RadiusPolicy, Result, to_ntiled};

/// Channel pairs `(full, partial)` a spawned light color is drawn from.
const CHANNEL_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)];

/// Light density multipliers along the X, Y and Z axis empties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Density {
	/// Multiplier along the X axis empty.
	pub x: u32,
	/// Multiplier along the Y axis empty.
	pub y: u32,
	/// Multiplier along the Z axis empty.
	pub z: u32,
}

impl Density {
	/// Uniform density of one light per size unit.
	pub const ONE: Self = Self { x: 1, y: 1, z: 1 };

	/// Build a density from per-axis multipliers.
	pub fn new(x: u32, y: u32, z: u32) -> Self {
		Self { x, y, z }
	}
}

/// Box spanned by an origin and three edge vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRegion {
	/// Anchor position.
	pub origin: DVec3,
	/// Edge vectors from the anchor towards the X, Y and Z axis empties.
	pub axes: [DVec3; 3],
}

impl GridRegion {
	/// Edge lengths.
	pub fn extents(&self) -> [f64; 3] {
		self.axes.map(DVec3::length)
	}

	/// Distance between neighbouring points along each edge for `counts` points per edge.
	pub fn spacing(&self, counts: [u32; 3]) -> [f64; 3] {
		let [ex, ey, ez] = self.extents();
		let [cx, cy, cz] = counts;
		[ex / (f64::from(cx) + 1.0), ey / (f64::from(cy) + 1.0), ez / (f64::from(cz) + 1.0)]
	}

	/// Interior grid points, X outermost and Z innermost.
	///
	/// Points sit at `1..=count` spacings along each edge, so none touches the anchor or the far face.
	/// A zero-length edge collapses that axis onto the anchor plane.
	pub fn points(&self, counts: [u32; 3]) -> Vec<DVec3> {
		let spacing = self.spacing(counts);
		let step: [DVec3; 3] = std::array::from_fn(|axis| self.axes[axis].normalize_or_zero() * spacing[axis]);
		let [cx, cy, cz] = counts;

		let total = [cx, cy, cz].into_iter().try_fold(1_usize, |total, count| total.checked_mul(count as usize));
		let mut points = Vec::with_capacity(total.unwrap_or_default());
		for x in 1..=cx {
			for y in 1..=cy {
				for z in 1..=cz {
					points.push(self.origin + step[0] * f64::from(x) + step[1] * f64::from(y) + step[2] * f64::from(z));
				}
			}
		}
		points
	}
}

/// Saturated two-channel color: one channel at 1, one uniform in `[0, 1)`, one at 0.
pub fn random_rgb_colour<R: Rng + ?Sized>(rng: &mut R) -> [f64; 3] {
	let (full, partial) = CHANNEL_PAIRS[rng.gen_range(0..CHANNEL_PAIRS.len())];
	let mut colour = [0.0; 3];
	colour[full] = 1.0;
	colour[partial] = rng.gen_range(0.0..1.0);
	colour
}

/// Lights for one spawner, positioned in nTiled space.
pub fn spawn_lights<R: Rng + ?Sized>(spawner: &LightSpawner, density: Density, radius: f64, rng: &mut R) -> Result<Vec<Light>> {
	let counts = spawner.light_counts(density)?;
	Ok(spawner
		.region
		.points(counts)
		.into_iter()
		.map(|point| Light {
			intensity: random_rgb_colour(rng),
			position: to_ntiled(point),
			radius,
		})
		.collect())
}

/// Lights for every spawner at one density, in spawner order.
pub fn generate_lights<R: Rng + ?Sized>(spawners: &[LightSpawner], density: Density, radius: &RadiusPolicy, rng: &mut R) -> Result<Vec<Light>> {
	let mut lights = Vec::new();
	for spawner in spawners {
		lights.extend(spawn_lights(spawner, density, spawner.radius(radius)?, rng)?);
	}
	Ok(lights)
}

/// Lights generated for one density.
#[derive(Debug, Clone, PartialEq)]
pub struct LightSet {
	/// Density the set was generated at.
	pub density: Density,
	/// Generated lights.
	pub lights: Vec<Light>,
}

impl LightSet {
	/// `<count>#<x>x_<y>y_<z>z.json`.
	pub fn file_name(&self) -> String {
		let Density { x, y, z } = self.density;
		format!("{}#{x}x_{y}y_{z}z.json", self.lights.len())
	}
}

/// Regenerate lights for every density in `1..=max_density` per axis.
///
/// Sets come out with X outermost, then Z, then Y.
pub fn sweep_light_sets<R: Rng + ?Sized>(spawners: &[LightSpawner], max_density: u32, radius: &RadiusPolicy, rng: &mut R) -> Result<Vec<LightSet>> {
	let mut sets = Vec::new();
	for x in 1..=max_density {
		for z in 1..=max_density {
			for y in 1..=max_density {
				let density = Density::new(x, y, z);
				let lights = generate_lights(spawners, density, radius, rng)?;
				sets.push(LightSet { density, lights });
			}
		}
	}
	Ok(sets)
}
