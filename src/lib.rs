pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::script::{Operand, Script, ScriptEngine, Step};
pub use crate::domain::model::StringSeq;
pub use crate::domain::ports::{Comparator, NaturalOrder, Transform, Uppercase};
pub use crate::utils::error::{Result, SeqError};
