use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::export::{CameraRig, ExportError, RadiusPolicy, Result, SceneDocument, SpawnerVariant};

/// Names accepted by [`ExportConfig::builtin`].
pub const PROFILE_NAMES: [&str; 2] = ["pipers-alley", "spaceship-indoor"];

const SHADERS: [&str; 8] = [
	"forward_attenuated",
	"forward_tiled",
	"forward_clustered",
	"forward_hashed",
	"deferred_attenuated",
	"deferred_tiled",
	"deferred_clustered",
	"deferred_hashed",
];

const PIPERS_ALLEY_ASSETS: [&str; 38] = [
	"Arch",
	"Barrel",
	"Building_01",
	"Building_02",
	"Building_03",
	"Building_04",
	"Building_05",
	"Building_06",
	"Building_07",
	"Building_08",
	"Building_09",
	"Building_10",
	"Building_11",
	"Cart1",
	"Cart2",
	"ClockTower",
	"Crate1",
	"Crate2",
	"Crate3",
	"crow",
	"Houses_far",
	"Planks1",
	"Planks2",
	"Planks3",
	"Planks4",
	"RoadUpper",
	"RoadLower",
	"RoadCover",
	"Seagull",
	"StreetLamp",
	"ThrashCan_closed",
	"ThrashCan_fallen",
	"ThrashCan_lid",
	"ThrashCan_open",
	"UtilityPole_close",
	"UtilityPole_far",
	"WaterHydrant",
	"WaterTower",
];

const SPACESHIP_INDOOR_ASSETS: [&str; 15] = [
	"Box",
	"CornerLeft",
	"CornerRight",
	"CorridorSmall",
	"CorridorWide",
	"Junction-4",
	"Junction-T-stw",
	"Junction-T-wts",
	"PanelA",
	"PanelB",
	"PanelC",
	"PanelD",
	"PanelE",
	"PanelF",
	"PanelG",
];

/// Everything the exporters need besides the scene itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
	/// Profile label used in logs and summaries.
	pub name: String,
	/// Directory holding `<mesh>.obj` assets, as referenced from geometry documents.
	pub obj_dir: PathBuf,
	/// Output directory for per-shader geometry documents.
	pub geometry_dir: PathBuf,
	/// Output directory for light-set documents.
	pub light_dir: PathBuf,
	/// Output path of the camera path document.
	pub camera_path: PathBuf,
	/// Output path of the static lamp document.
	pub lamps_path: PathBuf,
	/// Output path of the scene document.
	pub scene_path: PathBuf,
	/// Shader ids that each get a geometry document.
	pub shaders: Vec<String>,
	/// Asset identifiers recognised by the geometry extractor, in mesh-list order.
	pub whitelist: Vec<String>,
	/// Anchor naming scheme.
	pub spawner: SpawnerVariant,
	/// Spawned light radius.
	pub radius: RadiusPolicy,
	/// Highest per-axis density in the light-set sweep.
	pub max_density: u32,
	/// Only export selected lamps.
	pub only_selected: bool,
	/// Camera rig helper names.
	pub rig: CameraRig,
	/// Scene document template.
	pub scene: SceneDocument,
}

impl Default for ExportConfig {
	fn default() -> Self {
		Self::pipers_alley()
	}
}

impl ExportConfig {
	/// Outdoor alley scene: `Big`/`Small` anchors, fixed 180 unit radius.
	pub fn pipers_alley() -> Self {
		let root = Path::new("scenes").join("pipers-alley");
		Self {
			name: "pipers-alley".to_owned(),
			obj_dir: root.join("obj"),
			geometry_dir: root.join("geo-json"),
			light_dir: root.join("lights-json"),
			camera_path: root.join("camera").join("camera.json"),
			lamps_path: root.join("lights").join("lamps.json"),
			scene_path: root.join("scene-json").join("scene.json"),
			shaders: SHADERS.map(str::to_owned).to_vec(),
			whitelist: PIPERS_ALLEY_ASSETS.map(str::to_owned).to_vec(),
			spawner: SpawnerVariant::Alley,
			radius: RadiusPolicy::Fixed(180.0),
			max_density: 3,
			only_selected: false,
			rig: CameraRig::default(),
			scene: SceneDocument::default(),
		}
	}

	/// Indoor spaceship scene: per-axis sized anchors, radius by `small`/`big` class.
	pub fn spaceship_indoor() -> Self {
		let root = Path::new("scenes").join("spaceship-indoor");
		Self {
			name: "spaceship-indoor".to_owned(),
			obj_dir: root.join("obj"),
			geometry_dir: root.join("geometry"),
			light_dir: root.join("lights"),
			camera_path: root.join("camera").join("camera.json"),
			lamps_path: root.join("lights").join("components_test_suite").join("BoxLights.json"),
			scene_path: root.join("scene.json"),
			shaders: SHADERS.map(str::to_owned).to_vec(),
			whitelist: SPACESHIP_INDOOR_ASSETS.map(str::to_owned).to_vec(),
			spawner: SpawnerVariant::Indoor,
			radius: RadiusPolicy::ByClass([("small".to_owned(), 16.0), ("big".to_owned(), 23.0)].into_iter().collect()),
			max_density: 3,
			only_selected: false,
			rig: CameraRig::default(),
			scene: SceneDocument::default(),
		}
	}

	/// Look up a built-in profile by name.
	pub fn builtin(name: &str) -> Result<Self> {
		match name {
			"pipers-alley" => Ok(Self::pipers_alley()),
			"spaceship-indoor" => Ok(Self::spaceship_indoor()),
			_ => Err(ExportError::UnknownProfile { name: name.to_owned() }),
		}
	}

	/// Read a JSON config; omitted fields take the `pipers-alley` values.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let text = fs::read_to_string(path)?;
		let config: Self = serde_json::from_str(&text)?;
		log::debug!("loaded config {} ({})", path.display(), config.name);
		Ok(config)
	}

	/// Path of the geometry document for `shader`.
	pub fn geometry_path(&self, shader: &str) -> PathBuf {
		self.geometry_dir.join(format!("{shader}.json"))
	}

	/// Scene template with unset file references pointed at this config's outputs.
	pub fn scene_document(&self) -> SceneDocument {
		let geometry = self.shaders.first().map(|shader| self.geometry_path(shader)).unwrap_or_default();
		self.scene.clone().with_defaults(
			&self.camera_path.display().to_string(),
			&geometry.display().to_string(),
			&self.lamps_path.display().to_string(),
		)
	}
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use super::{ExportConfig, PROFILE_NAMES};
	use crate::export::{ExportError, RadiusPolicy, SpawnerVariant};

	#[test]
	fn every_profile_name_resolves() {
		for name in PROFILE_NAMES {
			let config = ExportConfig::builtin(name).expect("profile exists");
			assert_eq!(config.name, name);
			assert_eq!(config.shaders.len(), 8);
		}
	}

	#[test]
	fn unknown_profile_is_rejected() {
		let err = ExportConfig::builtin("ziggurat-city").expect_err("not a profile");
		assert!(matches!(err, ExportError::UnknownProfile { .. }));
	}

	#[test]
	fn profiles_differ_in_spawner_scheme() {
		let alley = ExportConfig::pipers_alley();
		let indoor = ExportConfig::spaceship_indoor();
		assert_eq!(alley.spawner, SpawnerVariant::Alley);
		assert_eq!(alley.radius, RadiusPolicy::Fixed(180.0));
		assert_eq!(indoor.spawner, SpawnerVariant::Indoor);
		assert!(matches!(indoor.radius, RadiusPolicy::ByClass(ref table) if table.get("big") == Some(&23.0)));
		assert_eq!(indoor.whitelist.first().map(String::as_str), Some("Box"));
	}

	#[test]
	fn partial_config_fills_from_defaults() {
		let config: ExportConfig = serde_json::from_str(
			r#"{
				"name": "custom",
				"spawner": "indoor",
				"radius": {"by_class": {"tiny": 4.0}},
				"whitelist": ["Box"]
			}"#,
		)
		.expect("config parses");

		assert_eq!(config.name, "custom");
		assert_eq!(config.spawner, SpawnerVariant::Indoor);
		assert_eq!(config.whitelist, vec!["Box".to_owned()]);
		assert_eq!(config.max_density, 3);
		assert_eq!(config.rig.eye, "EyeHandle");
	}

	#[test]
	fn scene_document_points_at_config_outputs() {
		let config = ExportConfig::pipers_alley();
		let scene = config.scene_document();
		assert_eq!(scene.geometry, vec![config.geometry_path("forward_attenuated").display().to_string()]);
		assert!(Path::new(&scene.camera.frames_path).ends_with(Path::new("camera").join("camera.json")));
		assert_eq!(scene.lights, vec![config.lamps_path.display().to_string()]);
	}
}
