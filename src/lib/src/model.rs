//! Domain types the dashboard core operates on

pub mod log_entry;
pub mod page_result;
pub mod session;

pub use crate::model::log_entry::LogEntry;
pub use crate::model::page_result::PageResult;
pub use crate::model::session::{FetchStatus, Session};
