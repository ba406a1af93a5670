pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ScriptConfig;
pub use core::runner::ScriptRunner;
pub use domain::model::{Action, Person, Step};
pub use domain::ports::ScriptProvider;
pub use utils::error::{PersonError, Result};
