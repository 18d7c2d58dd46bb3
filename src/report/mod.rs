pub mod period;
pub mod summary;

pub use period::filter;
pub use summary::{summarize, Summary, RECENT_LIMIT};
