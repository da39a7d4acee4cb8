pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::case::{is_lower, to_lower, to_lower_bytes};
pub use crate::core::fold::FoldEngine;
pub use crate::core::slots::{NextElem, NextPtrElem, SlotBuf};
pub use utils::error::{Result, UtilError};
