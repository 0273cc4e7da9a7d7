//! Single-writer owner of the in-memory [`Session`]
//!
//! All mutation funnels through `&self` methods over one mutex, so a
//! reader never observes a partially-applied update. Share between the
//! controller and the view layer with an `Arc`.

use parking_lot::Mutex;

use crate::model::{FetchStatus, PageResult, Session};

#[derive(Debug)]
pub struct SessionState {
    session: Mutex<Session>,
}

impl SessionState {
    pub fn new() -> SessionState {
        SessionState {
            session: Mutex::new(Session::logged_out()),
        }
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Session {
        self.session.lock().clone()
    }

    /// Record a successful credential check
    pub fn login_succeeded(&self, email: impl AsRef<str>) {
        let mut session = self.session.lock();
        session.is_authenticated = true;
        session.email = Some(email.as_ref().to_string());
    }

    /// Reset to the initial logged-out state
    pub fn logout(&self) {
        *self.session.lock() = Session::logged_out();
    }

    /// Replace the stored page result. The result, fetch status, and
    /// loaded marker change under one lock acquisition.
    pub fn update_page(&self, result: PageResult) {
        let mut session = self.session.lock();
        session.page_result = result;
        session.fetch = FetchStatus::Loaded;
        session.has_loaded = true;
    }

    pub fn set_loading(&self) {
        self.session.lock().fetch = FetchStatus::Loading;
    }

    /// Mark the fetch failed. The previous page result stays visible.
    pub fn set_failed(&self, message: impl AsRef<str>) {
        self.session.lock().fetch = FetchStatus::Failed(message.as_ref().to_string());
    }
}

impl Default for SessionState {
    fn default() -> SessionState {
        SessionState::new()
    }
}
