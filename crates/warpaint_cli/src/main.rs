#![allow(missing_docs)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "warpaint", about = "Extract paint kit definitions from proto_defs containers")]
struct Cli {
	#[command(flatten)]
	extract: cmd::extract::Args,
	/// Raise log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = cmd::extract::run(cli.extract) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
