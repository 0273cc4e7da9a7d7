use serde::{Deserialize, Serialize};

use crate::constants;
use crate::model::LogEntry;

/// The normalized outcome of one fetch against the remote list source.
///
/// Replaced wholesale on every successful fetch, never patched
/// incrementally. `items.len() <= per_page` and `total_pages >= 1` hold
/// for every value constructed by this crate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub items: Vec<LogEntry>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageResult {
    /// Placeholder held by a session before the first successful fetch
    pub fn empty() -> PageResult {
        PageResult {
            items: vec![],
            page: constants::DEFAULT_PAGE_NUM,
            per_page: constants::DEFAULT_PAGE_SIZE,
            total_items: 0,
            total_pages: 1,
        }
    }
}
