#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "ntiled-export", about = "Export scene snapshots to nTiled documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Per-shader geometry documents.
	Geometry(cmd::geometry::Args),
	/// Grid light sets for every density in the sweep.
	Lights(cmd::lights::Args),
	/// Camera path over the snapshot's frame range.
	Camera(cmd::camera::Args),
	/// Static lamps as a lights document.
	Lamps(cmd::lamps::Args),
	/// Scene document for a profile.
	Scene(cmd::scene::Args),
	/// Geometry documents plus the light-set sweep.
	Export(cmd::export::Args),
}

fn main() {
	pretty_env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> ntiled_export::export::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Geometry(args) => cmd::geometry::run(args),
		Commands::Lights(args) => cmd::lights::run(args),
		Commands::Camera(args) => cmd::camera::run(args),
		Commands::Lamps(args) => cmd::lamps::run(args),
		Commands::Scene(args) => cmd::scene::run(args),
		Commands::Export(args) => cmd::export::run(args),
	}
}
