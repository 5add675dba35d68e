// Configuration module.
// Resolves settings from built-in defaults, the TOML config file and CLI flags.

pub mod paths;
pub mod settings;

pub use settings::{Args, Settings};
