use crate::model::PageResult;

/// Lifecycle of the one outstanding fetch, exposed to the view layer so
/// it can render a spinner or an error panel with a retry action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// The in-memory record of authentication status and the latest fetched
/// page for the running client. Exactly one exists per client, owned by
/// [`crate::session::SessionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub email: Option<String>,
    pub page_result: PageResult,
    pub fetch: FetchStatus,
    /// True once any fetch has succeeded. Gates high-bound clamping of
    /// page navigation, since before the first result the page count is
    /// unknown. Reset by logout.
    pub has_loaded: bool,
}

impl Session {
    /// The initial state, also restored by logout
    pub fn logged_out() -> Session {
        Session {
            is_authenticated: false,
            email: None,
            page_result: PageResult::empty(),
            fetch: FetchStatus::Idle,
            has_loaded: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetch == FetchStatus::Loading
    }

    /// Upper page bound for navigation, once known
    pub fn page_bound(&self) -> Option<usize> {
        if self.has_loaded {
            Some(self.page_result.total_pages)
        } else {
            None
        }
    }
}
