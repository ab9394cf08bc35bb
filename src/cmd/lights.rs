use std::path::PathBuf;

use ntiled_export::export::{Density, ExportConfig, LightsDocument, Result, SceneSnapshot, SceneSource, extract_spawners, sweep_light_sets, write_json};
use rand::Rng;
use serde::Serialize;

use crate::cmd::util::{ProfileArgs, emit_json, rng_from_seed};

#[derive(clap::Args)]
pub struct Args {
	/// Scene snapshot (JSON or zstd-compressed JSON).
	pub snapshot: PathBuf,
	#[command(flatten)]
	pub profile: ProfileArgs,
	/// Output directory for light-set documents.
	#[arg(long)]
	pub out: Option<PathBuf>,
	/// Seed for light colors.
	#[arg(long)]
	pub seed: Option<u64>,
	/// Highest per-axis density in the sweep.
	#[arg(long = "max-density")]
	pub max_density: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct LightSetSummary {
	pub(crate) file: String,
	pub(crate) density: Density,
	pub(crate) lights: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct LightsSummary {
	pub(crate) spawners: usize,
	pub(crate) sets: Vec<LightSetSummary>,
}

/// Generate and write the light-set sweep for every spawner in the snapshot.
pub fn run(args: Args) -> Result<()> {
	let Args {
		snapshot,
		profile,
		out,
		seed,
		max_density,
		json,
	} = args;

	let mut config = profile.load()?;
	if let Some(out) = out {
		config.light_dir = out;
	}
	if let Some(max_density) = max_density {
		config.max_density = max_density;
	}

	let scene = SceneSnapshot::open(&snapshot)?;
	let summary = write_light_sets(&scene, &config, &mut rng_from_seed(seed))?;

	if json {
		return emit_json(&summary);
	}

	println!("snapshot: {}", snapshot.display());
	println!("profile: {}", config.name);
	println!("spawners: {}", summary.spawners);
	println!("sets:");
	for set in &summary.sets {
		println!("  {} ({} lights)", set.file, set.lights);
	}
	Ok(())
}

pub(crate) fn write_light_sets<S, R>(scene: &S, config: &ExportConfig, rng: &mut R) -> Result<LightsSummary>
where
	S: SceneSource + ?Sized,
	R: Rng + ?Sized,
{
	let spawners = extract_spawners(scene, config.spawner)?;
	let sets = sweep_light_sets(&spawners, config.max_density, &config.radius, rng)?;

	let mut written = Vec::with_capacity(sets.len());
	for set in &sets {
		let path = config.light_dir.join(set.file_name());
		write_json(&path, &LightsDocument::new(&set.lights))?;
		written.push(LightSetSummary {
			file: path.display().to_string(),
			density: set.density,
			lights: set.lights.len(),
		});
	}

	Ok(LightsSummary {
		spawners: spawners.len(),
		sets: written,
	})
}
