use std::path::PathBuf;

use ntiled_export::export::{CameraPathDocument, Result, SceneSnapshot, SceneSource, sample_camera_path, write_json};
use serde::Serialize;

use crate::cmd::util::{ProfileArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Scene snapshot (JSON or zstd-compressed JSON).
	pub snapshot: PathBuf,
	#[command(flatten)]
	pub profile: ProfileArgs,
	/// Output path of the camera path document.
	#[arg(long)]
	pub out: Option<PathBuf>,
	/// Eye handle object name.
	#[arg(long)]
	pub eye: Option<String>,
	/// Center handle object name.
	#[arg(long)]
	pub center: Option<String>,
	/// Up handle object name.
	#[arg(long)]
	pub up: Option<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct CameraSummary {
	file: String,
	frame_start: i32,
	frame_end: i32,
	frames: usize,
}

/// Sample the camera rig over the snapshot's frame range and write the path document.
pub fn run(args: Args) -> Result<()> {
	let Args {
		snapshot,
		profile,
		out,
		eye,
		center,
		up,
		json,
	} = args;

	let config = profile.load()?;
	let mut rig = config.rig.clone();
	if let Some(eye) = eye {
		rig.eye = eye;
	}
	if let Some(center) = center {
		rig.center = center;
	}
	if let Some(up) = up {
		rig.up = up;
	}
	let path = out.unwrap_or(config.camera_path);

	let mut scene = SceneSnapshot::open(&snapshot)?;
	let range = scene.frame_range();
	let frames = sample_camera_path(&mut scene, &rig)?;
	write_json(&path, &CameraPathDocument::new(&frames))?;

	let summary = CameraSummary {
		file: path.display().to_string(),
		frame_start: *range.start(),
		frame_end: *range.end(),
		frames: frames.len(),
	};
	if json {
		return emit_json(&summary);
	}

	println!("snapshot: {}", snapshot.display());
	println!("frames: {} ({}..={})", summary.frames, summary.frame_start, summary.frame_end);
	println!("file: {}", summary.file);
	Ok(())
}
