use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::export::name::split_pair;
use crate::export::{Density, ExportError, GridRegion, ObjectKind, Result, SceneSource, TaggedName};

/// Name tag shared by anchors and axis empties.
pub const LIGHT_TAG: &str = "light";
const ANCHOR_MARKER: &str = "Anchor";
const AXIS_NAMES: [&str; 3] = ["X", "Y", "Z"];

/// Anchor naming scheme used by a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpawnerVariant {
	/// `light::<Big|Small>_<Depth>#Anchor.<Index>`.
	Alley,
	/// `light::<Class>$<X>_<Y>_<Z>#Anchor.<Index>`.
	Indoor,
}

impl SpawnerVariant {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Alley => "alley",
			Self::Indoor => "indoor",
		}
	}

	/// Multipliers for the X, Y and Z axis empties at sweep `density`.
	///
	/// Alley grids take the sweep's `x` along their width (the Z empty) and `z` along their
	/// depth (the X empty). Indoor grids take `z` along the Y empty and `y` along the Z empty.
	pub fn axis_multipliers(self, density: Density) -> [u32; 3] {
		let Density { x, y, z } = density;
		match self {
			Self::Alley => [z, y, x],
			Self::Indoor => [x, z, y],
		}
	}
}

/// How spawned lights get their radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusPolicy {
	/// Every light gets the same radius.
	Fixed(f64),
	/// Radius looked up by the anchor's class token.
	ByClass(BTreeMap<String, f64>),
}

/// Fields decoded from an anchor name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorName {
	/// Size multipliers along the X, Y and Z axis empties.
	pub size: [u32; 3],
	/// Radius class token (indoor only).
	pub class: Option<String>,
	/// Text between `#` and the index suffix.
	pub label: String,
	/// Index suffix shared with the axis empties.
	pub index: String,
}

/// Decode the part of an anchor name after `light::`.
///
/// Returns `Ok(None)` when `rest` does not have the anchor shape. Alley width tokens other
/// than `Big`/`Small` are fatal; the indoor scheme has no width token to check.
pub fn parse_anchor_name(variant: SpawnerVariant, full_name: &str, rest: &str) -> Result<Option<AnchorName>> {
	let required: &[char] = match variant {
		SpawnerVariant::Alley => &['.', '#', '_'],
		SpawnerVariant::Indoor => &['.', '#', '_', '$'],
	};
	if !rest.contains(ANCHOR_MARKER) || !required.iter().all(|delim| rest.contains(*delim)) {
		return Ok(None);
	}

	let Some((head, index)) = split_pair(rest, '.') else {
		return Ok(None);
	};

	match variant {
		SpawnerVariant::Alley => {
			let Some((size, label)) = split_pair(head, '#') else {
				return Ok(None);
			};
			let Some((width, depth)) = split_pair(size, '_') else {
				return Ok(None);
			};

			let width = match width {
				"Big" => 5,
				"Small" => 1,
				other => {
					return Err(ExportError::WidthNotRecognised {
						token: other.to_owned(),
						name: full_name.to_owned(),
					});
				}
			};
			let depth = parse_size(depth, full_name)?;

			Ok(Some(AnchorName {
				size: [depth, 1, width],
				class: None,
				label: label.to_owned(),
				index: index.to_owned(),
			}))
		}
		SpawnerVariant::Indoor => {
			let Some((class, head)) = split_pair(head, '$') else {
				return Ok(None);
			};
			let Some((size, label)) = split_pair(head, '#') else {
				return Ok(None);
			};
			let parts: Vec<&str> = size.split('_').collect();
			let [x, y, z] = parts.as_slice() else {
				return Ok(None);
			};

			Ok(Some(AnchorName {
				size: [parse_size(x, full_name)?, parse_size(y, full_name)?, parse_size(z, full_name)?],
				class: Some(class.to_owned()),
				label: label.to_owned(),
				index: index.to_owned(),
			}))
		}
	}
}

fn parse_size(token: &str, full_name: &str) -> Result<u32> {
	token.parse::<u32>().map_err(|_| ExportError::InvalidSpawnerSize {
		token: token.to_owned(),
		name: full_name.to_owned(),
	})
}

/// Name of the axis empty `axis` (`X`, `Y` or `Z`) paired with anchor `index`.
pub fn axis_empty_name(axis: &str, index: &str) -> String {
	format!("{LIGHT_TAG}::{axis}.{index}")
}

/// Grid light generator anchored at one empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LightSpawner {
	/// Anchor object name.
	pub name: String,
	/// Naming scheme the anchor was parsed with.
	pub variant: SpawnerVariant,
	/// Decoded anchor name fields.
	pub anchor: AnchorName,
	/// Region spanned by the anchor and its axis empties, in host space.
	pub region: GridRegion,
}

impl LightSpawner {
	/// Lights per axis for sweep `density`.
	///
	/// Fails when a per-axis count or the total light count does not fit in a `u32`.
	pub fn light_counts(&self, density: Density) -> Result<[u32; 3]> {
		let multipliers = self.variant.axis_multipliers(density);
		let mut counts = [0; 3];
		for ((count, size), multiplier) in counts.iter_mut().zip(self.anchor.size).zip(multipliers) {
			*count = size.checked_mul(multiplier).ok_or_else(|| self.too_many_lights(density))?;
		}

		let [cx, cy, cz] = counts;
		cx.checked_mul(cy)
			.and_then(|total| total.checked_mul(cz))
			.ok_or_else(|| self.too_many_lights(density))?;
		Ok(counts)
	}

	fn too_many_lights(&self, density: Density) -> ExportError {
		ExportError::LightCountOverflow {
			name: self.name.clone(),
			size: self.anchor.size,
			density: [density.x, density.y, density.z],
		}
	}

	/// Radius for lights spawned here.
	pub fn radius(&self, policy: &RadiusPolicy) -> Result<f64> {
		match policy {
			RadiusPolicy::Fixed(radius) => Ok(*radius),
			RadiusPolicy::ByClass(table) => {
				let class = self.anchor.class.as_deref().unwrap_or_default();
				table.get(class).copied().ok_or_else(|| ExportError::UnknownRadiusClass {
					class: class.to_owned(),
					name: self.name.clone(),
				})
			}
		}
	}
}

/// Collect every spawner in `scene`, sampling positions at the current frame.
pub fn extract_spawners<S: SceneSource + ?Sized>(scene: &S, variant: SpawnerVariant) -> Result<Vec<LightSpawner>> {
	let mut spawners = Vec::new();

	for object in scene.objects() {
		if object.kind != ObjectKind::Empty {
			continue;
		}
		let Some(tagged) = TaggedName::parse(&object.name) else {
			continue;
		};
		if tagged.tag != LIGHT_TAG {
			continue;
		}
		let Some(anchor) = parse_anchor_name(variant, &object.name, tagged.rest)? else {
			continue;
		};

		let origin = scene.world_location(object);
		let mut axes = [origin; 3];
		for (axis, name) in axes.iter_mut().zip(AXIS_NAMES) {
			let empty_name = axis_empty_name(name, &anchor.index);
			let empty = scene.object(&empty_name).ok_or(ExportError::MissingAxisEmpty { name: empty_name })?;
			*axis = scene.world_location(empty) - origin;
		}

		log::debug!("spawner {} size={:?} class={:?}", object.name, anchor.size, anchor.class);
		spawners.push(LightSpawner {
			name: object.name.clone(),
			variant,
			anchor,
			region: GridRegion { origin, axes },
		});
	}

	log::info!("found {} {} light spawners", spawners.len(), variant.as_str());
	Ok(spawners)
}
