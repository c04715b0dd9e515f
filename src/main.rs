use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use envcast_cli::convert::Direction;
use envcast_cli::driver::{ConversionRequest, run as run_conversion};

#[derive(Parser)]
#[command(name = "envcast")]
#[command(
	author,
	version,
	about = "CLI tool for converting between .env files and JSON with wildcard key filtering and renaming"
)]
struct Cli {
	/// Conversion type: `env-to-json` or `json-to-env`
	#[arg(long = "type", value_name = "TYPE", value_parser = Direction::from_str)]
	direction: Direction,

	/// Input file path(s); each value may itself be a space-separated list
	#[arg(long, value_name = "PATH", num_args = 1.., required = true)]
	input: Vec<String>,

	/// Path of the combined output file
	#[arg(long, value_name = "PATH")]
	output: PathBuf,

	/// Wildcard rule for keys to drop (`*` matches any characters)
	#[arg(long, value_name = "RULE")]
	ignore: Option<String>,

	/// Wildcard rule for keys to rename
	#[arg(long, value_name = "RULE")]
	replace: Option<String>,

	/// Prefix prepended to keys matching the replace rule
	#[arg(long = "replace-to", value_name = "PREFIX", default_value = "")]
	replace_to: String,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let request = ConversionRequest {
		direction: cli.direction,
		inputs: cli.input,
		output: cli.output,
		ignore: cli.ignore,
		replace: cli.replace,
		replace_to: cli.replace_to,
	};

	run_conversion(&request).context("Conversion failed")?;

	Ok(ExitCode::SUCCESS)
}
