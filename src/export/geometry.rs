use std::collections::HashMap;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::export::{ObjectKind, SceneSource, TaggedName, Xyz, swap_euler, to_ntiled};

/// Name tag marking placed-geometry empties.
pub const OBJECT_TAG: &str = "obj";

/// Mesh asset referenced by placed objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mesh {
	/// Asset identifier, shared with [`PlacedObject::mesh_id`].
	pub id: String,
	/// Path of the `.obj` file.
	pub path: String,
}

/// One placed mesh instance in nTiled space.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
	/// Referenced mesh identifier.
	pub mesh_id: String,
	/// Unique `<mesh_id>.<n>` instance name.
	pub name: String,
	/// Axis-swapped Euler rotation.
	pub rotation: DVec3,
	/// Translation in nTiled space.
	pub translation: DVec3,
}

/// Per-type instance counters over an ordered whitelist.
#[derive(Debug, Clone)]
pub struct TypeCounter {
	order: Vec<String>,
	counts: HashMap<String, usize>,
}

impl TypeCounter {
	/// Build zeroed counters; duplicate whitelist entries keep their first position.
	pub fn new<I, S>(whitelist: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut order = Vec::new();
		let mut counts = HashMap::new();
		for name in whitelist {
			let name = name.into();
			if !counts.contains_key(&name) {
				counts.insert(name.clone(), 0);
				order.push(name);
			}
		}
		Self { order, counts }
	}

	/// Return the next instance index for `name`, or `None` when it is not whitelisted.
	pub fn next(&mut self, name: &str) -> Option<usize> {
		let count = self.counts.get_mut(name)?;
		let index = *count;
		*count += 1;
		Some(index)
	}

	/// Instances seen so far for `name`.
	pub fn count(&self, name: &str) -> usize {
		self.counts.get(name).copied().unwrap_or(0)
	}

	/// Whitelisted names with at least one instance, in whitelist order.
	pub fn used(&self) -> impl Iterator<Item = &str> {
		self.order.iter().map(String::as_str).filter(|name| self.count(name) > 0)
	}
}

/// Mesh list and instance list pulled from one scene.
#[derive(Debug, Clone, Default)]
pub struct GeometryExtraction {
	/// Distinct meshes with at least one instance.
	pub meshes: Vec<Mesh>,
	/// All instances in scene order.
	pub objects: Vec<PlacedObject>,
}

/// Scan `scene` for `obj::<Type>[.suffix]` empties whose type is whitelisted.
///
/// Objects that do not follow the naming convention are skipped without error.
pub fn extract_geometry<S: SceneSource + ?Sized>(scene: &S, whitelist: &[String], obj_dir: &Path) -> GeometryExtraction {
	let mut counter = TypeCounter::new(whitelist.iter().cloned());
	let mut objects = Vec::new();

	for object in scene.objects() {
		if object.kind != ObjectKind::Empty {
			continue;
		}
		let Some(tagged) = TaggedName::parse(&object.name) else {
			continue;
		};
		if tagged.tag != OBJECT_TAG {
			continue;
		}

		let mesh_id = tagged.base();
		let Some(index) = counter.next(mesh_id) else {
			log::debug!("skipping {}: {mesh_id} is not a known asset", object.name);
			continue;
		};

		objects.push(PlacedObject {
			mesh_id: mesh_id.to_owned(),
			name: format!("{mesh_id}.{index}"),
			rotation: swap_euler(object.euler()),
			translation: to_ntiled(scene.world_location(object)),
		});
	}

	let meshes = counter
		.used()
		.map(|id| Mesh {
			id: id.to_owned(),
			path: obj_dir.join(format!("{id}.obj")).display().to_string(),
		})
		.collect();

	log::info!("extracted {} objects over {} meshes", objects.len(), counter.used().count());
	GeometryExtraction { meshes, objects }
}

/// Placed object as written to a geometry document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectJson {
	/// Referenced mesh identifier.
	pub mesh_id: String,
	/// Unique instance name.
	pub name: String,
	/// Shader the renderer binds to this object.
	pub shader_id: String,
	/// Euler rotation.
	pub rotation: Xyz,
	/// Translation.
	pub translation: Xyz,
}

/// `{ "meshes": [...], "objects": [...] }` document for one shader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryDocument {
	/// Mesh assets.
	pub meshes: Vec<Mesh>,
	/// Placed instances.
	pub objects: Vec<ObjectJson>,
}

impl GeometryExtraction {
	/// Render the extraction with every object bound to `shader_id`.
	pub fn document(&self, shader_id: &str) -> GeometryDocument {
		GeometryDocument {
			meshes: self.meshes.clone(),
			objects: self
				.objects
				.iter()
				.map(|object| ObjectJson {
					mesh_id: object.mesh_id.clone(),
					name: object.name.clone(),
					shader_id: shader_id.to_owned(),
					rotation: object.rotation.into(),
					translation: object.translation.into(),
				})
				.collect(),
		}
	}
}
