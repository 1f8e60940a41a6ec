use std::io::Write;
use std::path::PathBuf;

use tracing::info;
use warpaint::protodef::{ProtoDefError, ProtoDefFile, Result, write_json};

#[derive(clap::Args)]
pub struct Args {
	/// Input `proto_defs` container.
	#[arg(short = 'i', long = "input", value_name = "PATH")]
	pub input: PathBuf,
	/// Output JSON document.
	#[arg(short = 'o', long = "output", value_name = "PATH")]
	pub output: PathBuf,
	/// Indent the JSON document.
	#[arg(long)]
	pub pretty: bool,
	/// Print block and record statistics as JSON to stdout.
	#[arg(long)]
	pub stats: bool,
}

/// Extract every registered record from `input` and write the document to `output`.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output,
		pretty,
		stats,
	} = args;

	let file = ProtoDefFile::open(&input)?;
	let map = file.extract()?;
	let stats = if stats { Some(file.scan_stats()?) } else { None };

	write_json(&map, &output, pretty)?;
	info!(output = %output.display(), types = map.type_count(), definitions = map.len(), "document written");

	if let Some(stats) = stats {
		let text = serde_json::to_string_pretty(&stats)?;
		writeln!(std::io::stdout().lock(), "{text}").map_err(ProtoDefError::WriteStats)?;
	}

	Ok(())
}
