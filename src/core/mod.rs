pub mod case;
pub mod fold;
pub mod slots;

pub use crate::domain::model::{FoldReport, OutputFormat};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
