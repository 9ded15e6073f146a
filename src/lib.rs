pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, ColorModeConfig};

pub use adapters::{storage::FileStore, storage::MemoryStore, FixedScheme};
pub use crate::core::{theme::ColorModeController, title::TitleValidator};
pub use domain::model::{ColorMode, ThemeConfig, TitleCandidate};
pub use utils::error::{AppError, Result, TitleError};
pub use utils::logger::Logger;
