use crate::export::{Light, ObjectKind, SceneSource, to_ntiled};

/// Convert lamp objects into point lights.
///
/// Intensity is `energy * color` clamped to `[0, 1]` per channel and the radius is the lamp's
/// falloff distance. Lamps without light data are skipped.
pub fn extract_lamps<S: SceneSource + ?Sized>(scene: &S, only_selected: bool) -> Vec<Light> {
	let mut lights = Vec::new();

	for object in scene.objects() {
		if object.kind != ObjectKind::Lamp || (only_selected && !object.selected) {
			continue;
		}
		let Some(lamp) = object.lamp else {
			log::warn!("lamp {} has no light data, skipping", object.name);
			continue;
		};

		lights.push(Light {
			position: to_ntiled(scene.world_location(object)),
			intensity: lamp.color.map(|channel| (lamp.energy * channel).clamp(0.0, 1.0)),
			radius: lamp.distance,
		});
	}

	log::info!("exported {} lamps", lights.len());
	lights
}
