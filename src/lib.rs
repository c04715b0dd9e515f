//! Envcast - CLI tool for converting between .env files and JSON.
//!
//! This library provides the core functionality for envcast, including:
//! - Glob-like wildcard rule matching and key renaming
//! - Key transformation (ignore/rename) over flat mappings
//! - Env ⇄ JSON format conversion
//! - The conversion driver: multi-input reads, combined single-file output
//!
//! # Example
//!
//! ```
//! use envcast_cli::convert::env_to_json;
//! use envcast_cli::rules::KeyRules;
//!
//! let rules = KeyRules::compile(Some("SECRET_*"), None, "").unwrap();
//! let json = env_to_json("HOST=localhost\nSECRET_KEY=shh\n", &rules).unwrap();
//!
//! assert!(json.contains("\"HOST\": \"localhost\""));
//! assert!(!json.contains("SECRET_KEY"));
//! ```

pub mod convert;
pub mod driver;
pub mod error;
pub mod rules;

pub use error::{EnvcastError, Result};
