pub mod runner;

pub use crate::domain::model::{Action, Person, Step};
pub use crate::domain::ports::ScriptProvider;
pub use crate::utils::error::Result;
