pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::catalog::{MessagePattern, StaticCatalog};
pub use crate::core::differ::calendar_diff;
pub use crate::core::formatter::DateTimeFormatter;
pub use crate::domain::model::{CalendarDiff, DateTimeInput, TimeUnit, MESSAGE_DOMAIN};
pub use crate::domain::ports::MessageLookup;
pub use crate::utils::error::{LookupError, Result, TimeDiffError};
pub use crate::utils::logger::init_logger;
