//! Configuration loading and layering
//!
//! Precedence, lowest to highest: built-in defaults, `.env` file,
//! `BBENCH_*` environment variables, command-line arguments. The merged
//! configuration is validated before any burst runs.

pub mod env;
pub mod parser;

pub use env::EnvManager;
pub use parser::{load_config, ConfigParser};
