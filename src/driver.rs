//! Conversion driver for envcast.
//!
//! Owns everything around the converters: input path resolution, file reads,
//! output accumulation, and the single combined write.

use crate::convert::{self, Direction};
use crate::error::{EnvcastError, Result};
use crate::rules::KeyRules;
use std::path::{Path, PathBuf};

/// A single conversion run: one direction, one or more inputs, one output.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
	/// Which converter to run.
	pub direction: Direction,

	/// Input path strings; each is whitespace-split into individual paths.
	pub inputs: Vec<String>,

	/// Path of the single combined output file.
	pub output: PathBuf,

	/// Optional wildcard rule for keys to drop.
	pub ignore: Option<String>,

	/// Optional wildcard rule for keys to replace.
	pub replace: Option<String>,

	/// Prefix prepended to renamed keys.
	pub replace_to: String,
}

/// Split the raw input strings into individual non-empty paths.
pub fn resolve_inputs(inputs: &[String]) -> Vec<&str> {
	inputs
		.iter()
		.flat_map(|raw| raw.split_whitespace())
		.collect()
}

/// Run a conversion request end to end.
///
/// Inputs are read and converted strictly in order; each converted chunk is
/// appended to the accumulator preceded by a newline. Inputs with empty
/// content are read but skipped. The combined output is written once, to
/// `request.output`, creating parent directories as needed. Returns the
/// combined output. Rule compilation and direction selection happen before
/// any file I/O.
pub fn run(request: &ConversionRequest) -> Result<String> {
	let rules = KeyRules::compile(
		request.ignore.as_deref(),
		request.replace.as_deref(),
		&request.replace_to,
	)?;

	let paths = resolve_inputs(&request.inputs);
	if paths.is_empty() {
		return Err(EnvcastError::NoInputs);
	}

	let mut output = String::new();

	for path in paths {
		let content = read_input(Path::new(path))?;
		println!("input:\n{content}");

		if content.is_empty() {
			continue;
		}

		let chunk = convert::convert(request.direction, &content, &rules)?;
		output.push('\n');
		output.push_str(&chunk);
	}

	write_output(&request.output, &output)?;
	println!("output:\n{output}");

	Ok(output)
}

/// Read one input file as UTF-8 text.
fn read_input(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| EnvcastError::InputRead {
		path: path.to_path_buf(),
		source,
	})
}

/// Write the combined output, creating parent directories first.
fn write_output(path: &Path, content: &str) -> Result<()> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		std::fs::create_dir_all(parent).map_err(|source| EnvcastError::OutputWrite {
			path: path.to_path_buf(),
			source,
		})?;
	}

	std::fs::write(path, content).map_err(|source| EnvcastError::OutputWrite {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn request(direction: Direction, inputs: Vec<String>, output: PathBuf) -> ConversionRequest {
		ConversionRequest {
			direction,
			inputs,
			output,
			ignore: None,
			replace: None,
			replace_to: String::new(),
		}
	}

	#[test]
	fn test_resolve_inputs_splits_on_whitespace() {
		let inputs = vec!["a.env b.env".to_string(), "c.env".to_string()];
		assert_eq!(resolve_inputs(&inputs), vec!["a.env", "b.env", "c.env"]);
	}

	#[test]
	fn test_resolve_inputs_drops_empty_tokens() {
		let inputs = vec!["  a.env   ".to_string(), "".to_string()];
		assert_eq!(resolve_inputs(&inputs), vec!["a.env"]);
	}

	#[test]
	fn test_run_fails_without_inputs() {
		let req = request(
			Direction::EnvToJson,
			vec!["   ".to_string()],
			PathBuf::from("out.json"),
		);
		assert!(matches!(run(&req), Err(EnvcastError::NoInputs)));
	}

	#[test]
	fn test_run_fails_on_missing_input() {
		let temp = tempfile::tempdir().unwrap();
		let req = request(
			Direction::EnvToJson,
			vec![temp.path().join("missing.env").display().to_string()],
			temp.path().join("out.json"),
		);
		assert!(matches!(run(&req), Err(EnvcastError::InputRead { .. })));
	}

	#[test]
	fn test_run_single_input_writes_output() {
		let temp = tempfile::tempdir().unwrap();
		let input = temp.path().join("app.env");
		let output = temp.path().join("app.json");
		fs::write(&input, "A=1\nB=2\n").unwrap();

		let req = request(
			Direction::EnvToJson,
			vec![input.display().to_string()],
			output.clone(),
		);
		let result = run(&req).unwrap();

		assert_eq!(result, "\n{\n  \"A\": \"1\",\n  \"B\": \"2\"\n}");
		assert_eq!(fs::read_to_string(&output).unwrap(), result);
	}

	#[test]
	fn test_run_concatenates_multiple_inputs_in_order() {
		let temp = tempfile::tempdir().unwrap();
		let first = temp.path().join("first.env");
		let second = temp.path().join("second.env");
		let output = temp.path().join("out.json");
		fs::write(&first, "A=1").unwrap();
		fs::write(&second, "B=2").unwrap();

		let req = request(
			Direction::EnvToJson,
			vec![format!("{} {}", first.display(), second.display())],
			output.clone(),
		);
		let result = run(&req).unwrap();

		assert_eq!(
			result,
			"\n{\n  \"A\": \"1\"\n}\n{\n  \"B\": \"2\"\n}"
		);
	}

	#[test]
	fn test_run_skips_empty_input_content() {
		let temp = tempfile::tempdir().unwrap();
		let empty = temp.path().join("empty.env");
		let full = temp.path().join("full.env");
		let output = temp.path().join("out.json");
		fs::write(&empty, "").unwrap();
		fs::write(&full, "A=1").unwrap();

		let req = request(
			Direction::EnvToJson,
			vec![empty.display().to_string(), full.display().to_string()],
			output,
		);
		let result = run(&req).unwrap();

		assert_eq!(result, "\n{\n  \"A\": \"1\"\n}");
	}

	#[test]
	fn test_run_creates_output_parent_directories() {
		let temp = tempfile::tempdir().unwrap();
		let input = temp.path().join("app.env");
		let output = temp.path().join("deeply/nested/dir/out.json");
		fs::write(&input, "A=1").unwrap();

		let req = request(
			Direction::EnvToJson,
			vec![input.display().to_string()],
			output.clone(),
		);
		run(&req).unwrap();

		assert!(output.exists());
	}

	#[test]
	fn test_run_json_to_env_with_rules() {
		let temp = tempfile::tempdir().unwrap();
		let input = temp.path().join("app.json");
		let output = temp.path().join("app.env");
		fs::write(&input, r#"{"KEEP": "1", "SECRET_TOKEN": "x"}"#).unwrap();

		let mut req = request(
			Direction::JsonToEnv,
			vec![input.display().to_string()],
			output,
		);
		req.ignore = Some("SECRET_*".to_string());
		let result = run(&req).unwrap();

		assert_eq!(result, "\nKEEP=1\n");
	}
}
