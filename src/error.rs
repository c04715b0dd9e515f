use std::path::PathBuf;

/// Library-level structured errors for envcast.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum EnvcastError {
	#[error("Conversion type `{value}` not allowed (expected `env-to-json` or `json-to-env`)")]
	UnsupportedType { value: String },

	#[error("No input paths given")]
	NoInputs,

	#[error("Invalid wildcard rule: {pattern}")]
	InvalidRule {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read input file: {path}")]
	InputRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse JSON input as a flat object")]
	JsonParse {
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to serialize JSON output")]
	JsonSerialize {
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to write output file: {path}")]
	OutputWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using EnvcastError.
pub type Result<T> = std::result::Result<T, EnvcastError>;
