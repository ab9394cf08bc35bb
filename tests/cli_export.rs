#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

#[test]
fn geometry_writes_one_document_per_shader() {
	let out = scratch_dir("geometry");
	let json = run_json(&[
		"geometry",
		&fixture_arg("alley_scene.json"),
		"--out",
		&out.display().to_string(),
		"--json",
	]);

	assert_eq!(json["meshes"], 2);
	assert_eq!(json["objects"], 3);
	assert_eq!(json["files"].as_array().map(Vec::len), Some(8));

	let document = read_json(&out.join("forward_tiled.json"));
	let meshes = document["meshes"].as_array().expect("meshes array");
	let ids: Vec<&str> = meshes.iter().filter_map(|mesh| mesh["id"].as_str()).collect();
	assert_eq!(ids, ["Barrel", "Crate1"]);
	assert!(meshes[1]["path"].as_str().is_some_and(|path| path.ends_with("Crate1.obj")));

	let objects = document["objects"].as_array().expect("objects array");
	let names: Vec<&str> = objects.iter().filter_map(|object| object["name"].as_str()).collect();
	assert_eq!(names, ["Crate1.0", "Crate1.1", "Barrel.0"]);
	assert!(objects.iter().all(|object| object["shader_id"] == "forward_tiled"));

	let translation = &objects[0]["translation"];
	assert_eq!(translation["x"], 1.0);
	assert_eq!(translation["y"], 0.5);
	assert_eq!(translation["z"], -2.0);
	assert!((objects[0]["rotation"]["y"].as_f64().unwrap_or_default() - 1.5707963).abs() < 1e-9);
}

#[test]
fn alley_lights_fill_the_spawner_grid() {
	let out = scratch_dir("alley-lights");
	let json = run_json(&[
		"lights",
		&fixture_arg("alley_scene.json"),
		"--out",
		&out.display().to_string(),
		"--seed",
		"7",
		"--max-density",
		"1",
		"--json",
	]);

	assert_eq!(json["spawners"], 1);
	let sets = json["sets"].as_array().expect("sets array");
	assert_eq!(sets.len(), 1);
	assert_eq!(sets[0]["lights"], 10);

	let document = read_json(&out.join("10#1x_1y_1z.json"));
	let lights = document["lights"].as_array().expect("lights array");
	assert_eq!(lights.len(), 10);
	for light in lights {
		assert_eq!(light["radius"], 180.0);
		let y = light["position"]["y"].as_f64().expect("y coordinate");
		assert!((y - 2.5).abs() < 1e-9, "lights sit halfway up the Y axis empty");
		let x = light["position"]["x"].as_f64().expect("x coordinate");
		assert!(x > 0.0 && x < 10.0, "lights stay inside the X extent");
		let intensity = &light["intensity"];
		let channels = [&intensity["r"], &intensity["g"], &intensity["b"]];
		assert!(channels.iter().any(|channel| **channel == 1.0), "one channel is at full strength");
	}
}

#[test]
fn light_sweep_names_every_density() {
	let out = scratch_dir("sweep");
	let json = run_json(&[
		"lights",
		&fixture_arg("alley_scene.json"),
		"--out",
		&out.display().to_string(),
		"--seed",
		"1",
		"--max-density",
		"2",
		"--json",
	]);

	let sets = json["sets"].as_array().expect("sets array");
	assert_eq!(sets.len(), 8);
	assert_eq!(sets[0]["density"], serde_json::json!({ "x": 1, "y": 1, "z": 1 }));
	assert_eq!(sets[1]["density"], serde_json::json!({ "x": 1, "y": 2, "z": 1 }));
	assert_eq!(sets[7]["lights"], 80);
	assert!(out.join("80#2x_2y_2z.json").is_file());
	assert!(out.join("20#2x_1y_1z.json").is_file());

	// Sweep `x` doubles the alley width (Z empty), not the depth (X empty).
	let document = read_json(&out.join("20#2x_1y_1z.json"));
	let lights = document["lights"].as_array().expect("lights array");
	let distinct = |axis: &str| {
		let mut values: Vec<u64> = lights.iter().filter_map(|light| light["position"][axis].as_f64()).map(f64::to_bits).collect();
		values.sort_unstable();
		values.dedup();
		values.len()
	};
	assert_eq!(distinct("x"), 2);
	assert_eq!(distinct("z"), 10);
}

#[test]
fn seeded_light_sets_are_reproducible() {
	let first = scratch_dir("seed-a");
	let second = scratch_dir("seed-b");
	for out in [&first, &second] {
		run_ok(&[
			"lights",
			&fixture_arg("alley_scene.json"),
			"--out",
			&out.display().to_string(),
			"--seed",
			"42",
			"--max-density",
			"1",
		]);
	}

	let a = fs::read_to_string(first.join("10#1x_1y_1z.json")).expect("first set");
	let b = fs::read_to_string(second.join("10#1x_1y_1z.json")).expect("second set");
	assert_eq!(a, b);
}

#[test]
fn indoor_lights_use_class_radius() {
	let out = scratch_dir("indoor-lights");
	let json = run_json(&[
		"lights",
		&fixture_arg("indoor_scene.json"),
		"--profile",
		"spaceship-indoor",
		"--out",
		&out.display().to_string(),
		"--seed",
		"3",
		"--max-density",
		"1",
		"--json",
	]);

	assert_eq!(json["spawners"], 2);
	let document = read_json(&out.join("4#1x_1y_1z.json"));
	let radii: Vec<f64> = document["lights"]
		.as_array()
		.expect("lights array")
		.iter()
		.filter_map(|light| light["radius"].as_f64())
		.collect();
	assert_eq!(radii, [16.0, 16.0, 23.0, 23.0]);
}

#[test]
fn unknown_alley_width_fails_the_export() {
	let out = scratch_dir("bad-width");
	let output = run(&[
		"lights",
		&fixture_arg("bad_width_scene.json"),
		"--out",
		&out.display().to_string(),
	]);

	assert!(!output.status.success(), "unknown width should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("width not recognised"), "stderr was: {stderr}");
}

#[test]
fn camera_path_samples_every_frame() {
	let out = scratch_dir("camera").join("camera.json");
	let json = run_json(&[
		"camera",
		&fixture_arg("alley_scene.json"),
		"--out",
		&out.display().to_string(),
		"--json",
	]);

	assert_eq!(json["frames"], 3);
	assert_eq!(json["frame_start"], 1);
	assert_eq!(json["frame_end"], 3);

	let document = read_json(&out);
	let frames = document["frames"].as_array().expect("frames array");
	assert_eq!(frames.len(), 3);
	assert_eq!(frames[0]["eye"], serde_json::json!({ "x": 0.0, "y": 2.0, "z": 20.0 }));
	assert_eq!(frames[2]["eye"], serde_json::json!({ "x": 2.0, "y": 2.0, "z": 18.0 }));
	assert_eq!(frames[1]["center"], serde_json::json!({ "x": 0.0, "y": 1.0, "z": 0.0 }));
	assert_eq!(frames[1]["up"]["y"], 1.0);
}

#[test]
fn camera_rig_names_can_be_overridden() {
	let out = scratch_dir("camera-rig").join("camera.json");
	let output = run(&[
		"camera",
		&fixture_arg("alley_scene.json"),
		"--out",
		&out.display().to_string(),
		"--eye",
		"MissingEye",
	]);

	assert!(!output.status.success(), "missing rig handle should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("MissingEye"));
	assert!(!out.exists(), "no document is written when a handle is missing");
}

#[test]
fn lamps_export_converts_energy_and_color() {
	let out = scratch_dir("lamps").join("lamps.json");
	let json = run_json(&[
		"lamps",
		&fixture_arg("alley_scene.json"),
		"--out",
		&out.display().to_string(),
		"--json",
	]);
	assert_eq!(json["lights"], 2);

	let document = read_json(&out);
	let street = &document["lights"][0];
	assert_eq!(street["position"], serde_json::json!({ "x": 4.0, "y": 6.0, "z": -5.0 }));
	assert_eq!(street["intensity"], serde_json::json!({ "r": 1.0, "g": 0.5, "b": 1.0 }));
	assert_eq!(street["radius"], 30.0);
}

#[test]
fn lamps_export_can_keep_only_selected() {
	let out = scratch_dir("lamps-selected").join("lamps.json");
	let json = run_json(&[
		"lamps",
		&fixture_arg("alley_scene.json"),
		"--out",
		&out.display().to_string(),
		"--selected",
		"--json",
	]);
	assert_eq!(json["lights"], 1);
}

#[test]
fn scene_json_prints_profile_document() {
	let json = run_json(&["scene", "--profile", "spaceship-indoor", "--json"]);

	assert_eq!(json["pipeline"], "forward");
	assert_eq!(json["camera"]["control"], "path");
	assert_eq!(json["camera"]["output"]["type"], "none");
	assert!(json["camera"]["frames_path"].as_str().is_some_and(|path| path.ends_with("camera.json")));
	assert!(json["geometry"][0].as_str().is_some_and(|path| path.contains("spaceship-indoor")));
	assert!(json["lights"][0].as_str().is_some_and(|path| path.ends_with("BoxLights.json")));
}

#[test]
fn unknown_profile_is_reported() {
	let output = run(&["scene", "--profile", "moon-base", "--json"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("moon-base"));
}

#[test]
fn export_reads_compressed_snapshots() {
	let dir = scratch_dir("export");
	let raw = fs::read(fixture_path("alley_scene.json")).expect("fixture readable");
	let compressed = zstd::stream::encode_all(raw.as_slice(), 3).expect("compress fixture");
	let snapshot = dir.join("alley_scene.json.zst");
	fs::write(&snapshot, compressed).expect("write compressed snapshot");

	let config = dir.join("config.json");
	let config_json = serde_json::json!({
		"name": "alley-test",
		"geometry_dir": dir.join("geo"),
		"light_dir": dir.join("lights"),
		"shaders": ["forward_tiled", "deferred_tiled"],
		"max_density": 1,
	});
	fs::write(&config, config_json.to_string()).expect("write config");

	let json = run_json(&[
		"export",
		&snapshot.display().to_string(),
		"--config",
		&config.display().to_string(),
		"--seed",
		"5",
		"--json",
	]);

	assert_eq!(json["profile"], "alley-test");
	assert_eq!(json["compression"], "zstd");
	assert_eq!(json["geometry"]["files"].as_array().map(Vec::len), Some(2));
	assert_eq!(json["lights"]["sets"].as_array().map(Vec::len), Some(1));
	assert!(dir.join("geo").join("deferred_tiled.json").is_file());
	assert!(dir.join("lights").join("10#1x_1y_1z.json").is_file());
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_ntiled-export")).args(args).output().expect("command executes")
}

fn run_ok(args: &[&str]) -> Output {
	let output = run(args);
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	output
}

fn run_json(args: &[&str]) -> Value {
	let output = run_ok(args);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn read_json(path: &Path) -> Value {
	let text = fs::read_to_string(path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()));
	serde_json::from_str(&text).expect("document should be valid json")
}

fn scratch_dir(name: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("ntiled-export-{name}-{}", std::process::id()));
	let _ = fs::remove_dir_all(&dir);
	fs::create_dir_all(&dir).expect("create scratch dir");
	dir
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn fixture_arg(name: &str) -> String {
	fixture_path(name).display().to_string()
}
