use std::path::PathBuf;

use ntiled_export::export::{LightsDocument, Result, SceneSnapshot, extract_lamps, write_json};
use serde::Serialize;

use crate::cmd::util::{ProfileArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Scene snapshot (JSON or zstd-compressed JSON).
	pub snapshot: PathBuf,
	#[command(flatten)]
	pub profile: ProfileArgs,
	/// Output path of the lights document.
	#[arg(long)]
	pub out: Option<PathBuf>,
	/// Only export selected lamps.
	#[arg(long)]
	pub selected: bool,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct LampsSummary {
	file: String,
	lights: usize,
}

/// Convert the snapshot's lamps into a lights document.
pub fn run(args: Args) -> Result<()> {
	let Args {
		snapshot,
		profile,
		out,
		selected,
		json,
	} = args;

	let config = profile.load()?;
	let path = out.unwrap_or(config.lamps_path);
	let only_selected = selected || config.only_selected;

	let scene = SceneSnapshot::open(&snapshot)?;
	let lights = extract_lamps(&scene, only_selected);
	write_json(&path, &LightsDocument::new(&lights))?;

	let summary = LampsSummary {
		file: path.display().to_string(),
		lights: lights.len(),
	};
	if json {
		return emit_json(&summary);
	}

	println!("snapshot: {}", snapshot.display());
	println!("lights: {}", summary.lights);
	println!("file: {}", summary.file);
	Ok(())
}
