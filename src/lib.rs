pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{console::ConsoleDisplay, http::NumbersApiBackend};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::coordinator::NumbersCoordinator;
pub use crate::domain::model::{FactItem, FetchResult, NumberQuery, PresentationState};
pub use crate::domain::ports::{ConfigProvider, DisplaySurface, FactsBackend};
pub use crate::utils::error::{FactsError, Result};
