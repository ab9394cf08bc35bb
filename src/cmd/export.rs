use std::path::PathBuf;

use ntiled_export::export::{Result, SceneSnapshot};
use serde::Serialize;

use crate::cmd::geometry::{GeometrySummary, write_geometry};
use crate::cmd::lights::{LightsSummary, write_light_sets};
use crate::cmd::util::{ProfileArgs, emit_json, rng_from_seed};

#[derive(clap::Args)]
pub struct Args {
	/// Scene snapshot (JSON or zstd-compressed JSON).
	pub snapshot: PathBuf,
	#[command(flatten)]
	pub profile: ProfileArgs,
	/// Seed for light colors.
	#[arg(long)]
	pub seed: Option<u64>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct ExportSummary {
	profile: String,
	compression: &'static str,
	geometry: GeometrySummary,
	lights: LightsSummary,
}

/// Write every geometry document and the full light-set sweep for one profile.
pub fn run(args: Args) -> Result<()> {
	let Args { snapshot, profile, seed, json } = args;

	let config = profile.load()?;
	let scene = SceneSnapshot::open(&snapshot)?;

	let summary = ExportSummary {
		profile: config.name.clone(),
		compression: scene.compression.as_str(),
		geometry: write_geometry(&scene, &config)?,
		lights: write_light_sets(&scene, &config, &mut rng_from_seed(seed))?,
	};
	if json {
		return emit_json(&summary);
	}

	println!("snapshot: {}", snapshot.display());
	println!("profile: {}", summary.profile);
	println!("compression: {}", summary.compression);
	println!("geometry_files: {}", summary.geometry.files.len());
	println!("light_sets: {}", summary.lights.sets.len());
	println!("spawners: {}", summary.lights.spawners);
	Ok(())
}
