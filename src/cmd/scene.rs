use std::path::PathBuf;

use ntiled_export::export::{Result, write_json};

use crate::cmd::util::{ProfileArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub profile: ProfileArgs,
	/// Output path of the scene document.
	#[arg(long)]
	pub out: Option<PathBuf>,
	/// Print the document instead of writing it.
	#[arg(long)]
	pub json: bool,
}

/// Write the profile's scene document.
pub fn run(args: Args) -> Result<()> {
	let Args { profile, out, json } = args;

	let config = profile.load()?;
	let document = config.scene_document();
	if json {
		return emit_json(&document);
	}

	let path = out.unwrap_or(config.scene_path);
	write_json(&path, &document)?;
	println!("profile: {}", config.name);
	println!("file: {}", path.display());
	Ok(())
}
