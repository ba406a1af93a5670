#[cfg(feature = "cli")]
pub mod cli;
pub mod script;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, CliScript};
pub use script::ScriptConfig;
