//! Shared data model for chatdigest: chat messages, the batches built from
//! them, and the summary records persisted between pipeline stages.

mod batch;
mod config;
mod message;
mod period;
mod summary;
mod templates;

pub use batch::{Group, RawDivision};
pub use config::{BatchConfig, SummaryConfig};
pub use message::ChatMessage;
pub use period::YearMonth;
pub use summary::{MonthSummaryFile, MonthSummaryRecord, SummaryRecord};
pub use templates::{DEFAULT_GROUP_PROMPT, DEFAULT_MONTH_PROMPT};
