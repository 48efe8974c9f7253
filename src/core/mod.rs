pub mod coordinator;
pub mod presentation;

pub use crate::domain::model::{FactItem, FetchResult, NumberQuery, PresentationState};
pub use crate::domain::ports::{ConfigProvider, DisplaySurface, FactsBackend};
pub use crate::utils::error::Result;
