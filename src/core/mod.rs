pub mod differ;
pub mod formatter;

pub use crate::domain::model::{CalendarDiff, DateTimeInput, TimeUnit, MESSAGE_DOMAIN};
pub use crate::domain::ports::MessageLookup;
pub use crate::utils::error::Result;
