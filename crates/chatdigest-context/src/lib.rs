mod coalesce;
mod error;
mod markup;
mod months;
mod pipeline;
mod reduce;
mod segment;
mod summarize;
mod tokens;

pub use coalesce::coalesce;
pub use error::{ContextError, Result};
pub use markup::unwrap_link_markup;
pub use months::{month_window, plan_months};
pub use pipeline::DigestPipeline;
pub use reduce::{reduce_month, reduce_month_summaries};
pub use segment::segment;
pub use summarize::{build_group_prompt, summarize_groups};
pub use tokens::{TiktokenCounter, TokenCounter};
