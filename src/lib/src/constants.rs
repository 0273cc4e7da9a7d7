//! Constants for talking to the remote list source and driving the dashboard

/// Name of the remote collection holding the log records
pub const LOGS_COLLECTION: &str = "logs";

/// Number of records requested per page. Fixed, not caller-configurable.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Sort applied to every list request, newest records first
pub const DEFAULT_SORT: &str = "-created";

/// First page number. The remote list source is 1-indexed.
pub const DEFAULT_PAGE_NUM: usize = 1;

/// Maximum number of page buttons shown in the pagination strip
pub const MAX_VISIBLE_PAGES: usize = 5;

pub const DEFAULT_REMOTE_SCHEME: &str = "https";
pub const DEFAULT_REMOTE_HOST: &str = "zenith.pockethost.io";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// The one account the built-in credential check accepts
pub const DASHBOARD_EMAIL: &str = "bolaybuthd@gmail.com";
pub const DASHBOARD_PASSWORD: &str = "stre123ngth";

pub const ZENITH_VERSION: &str = env!("CARGO_PKG_VERSION");
