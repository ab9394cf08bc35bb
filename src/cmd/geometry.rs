use std::path::PathBuf;

use ntiled_export::export::{ExportConfig, Result, SceneSnapshot, SceneSource, extract_geometry, write_json};
use serde::Serialize;

use crate::cmd::util::{ProfileArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Scene snapshot (JSON or zstd-compressed JSON).
	pub snapshot: PathBuf,
	#[command(flatten)]
	pub profile: ProfileArgs,
	/// Output directory for per-shader documents.
	#[arg(long)]
	pub out: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeometrySummary {
	pub(crate) meshes: usize,
	pub(crate) objects: usize,
	pub(crate) files: Vec<String>,
}

/// Write one geometry document per configured shader.
pub fn run(args: Args) -> Result<()> {
	let Args { snapshot, profile, out, json } = args;

	let mut config = profile.load()?;
	if let Some(out) = out {
		config.geometry_dir = out;
	}
	let scene = SceneSnapshot::open(&snapshot)?;
	let summary = write_geometry(&scene, &config)?;

	if json {
		return emit_json(&summary);
	}

	println!("snapshot: {}", snapshot.display());
	println!("profile: {}", config.name);
	println!("meshes: {}", summary.meshes);
	println!("objects: {}", summary.objects);
	println!("files:");
	for file in &summary.files {
		println!("  {file}");
	}
	Ok(())
}

pub(crate) fn write_geometry<S: SceneSource + ?Sized>(scene: &S, config: &ExportConfig) -> Result<GeometrySummary> {
	let geometry = extract_geometry(scene, &config.whitelist, &config.obj_dir);

	let mut files = Vec::with_capacity(config.shaders.len());
	for shader in &config.shaders {
		let path = config.geometry_path(shader);
		write_json(&path, &geometry.document(shader))?;
		files.push(path.display().to_string());
	}

	Ok(GeometrySummary {
		meshes: geometry.meshes.len(),
		objects: geometry.objects.len(),
		files,
	})
}
