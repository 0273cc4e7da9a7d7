//! # Controller - the view-facing surface of the dashboard core
//!
//! [`Dashboard`] owns the session, the credential verifier, and the
//! fetch lifecycle. The view layer reads [`Dashboard::session`] and
//! [`Dashboard::page_controls`] to render, and calls `login`, `logout`,
//! `goto_page`, and `retry` as event handlers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api;
use crate::auth::{CredentialVerifier, StaticCredentialVerifier};
use crate::config::RemoteConfig;
use crate::constants;
use crate::controller::pagination::PageControl;
use crate::error::ZenithError;
use crate::model::{PageResult, Session};
use crate::session::SessionState;

pub mod pagination;

pub struct Dashboard {
    config: RemoteConfig,
    verifier: Arc<dyn CredentialVerifier>,
    state: Arc<SessionState>,
    // Bumped on every navigation and logout. A fetch result is applied
    // only if its ticket still matches, so the last page change wins and
    // a late result can never overwrite newer state.
    generation: AtomicU64,
}

impl Dashboard {
    pub fn new(config: RemoteConfig) -> Dashboard {
        Dashboard::with_verifier(config, Arc::new(StaticCredentialVerifier::default()))
    }

    pub fn with_verifier(config: RemoteConfig, verifier: Arc<dyn CredentialVerifier>) -> Dashboard {
        Dashboard {
            config,
            verifier,
            state: Arc::new(SessionState::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current session for rendering
    pub fn session(&self) -> Session {
        self.state.current()
    }

    /// Shared handle to the session owner, for view layers that want to
    /// read without going through the controller
    pub fn state(&self) -> Arc<SessionState> {
        Arc::clone(&self.state)
    }

    /// Check credentials. On a match the session becomes authenticated
    /// for `email`; on a mismatch it returns to logged-out and the call
    /// returns false. A mismatch is not an error.
    pub fn login(&self, email: &str, password: &str) -> bool {
        if self.verifier.verify(email, password) {
            self.state.login_succeeded(email);
            true
        } else {
            log::debug!("controller::login rejected credentials");
            self.state.logout();
            false
        }
    }

    pub fn logout(&self) {
        // invalidate any in-flight fetch before resetting the session
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.logout();
    }

    /// Navigate to page `page`, fetching it from the remote source.
    ///
    /// The request is clamped to `[1, total_pages]`; the high bound only
    /// applies once a fetch has succeeded, before that the page count is
    /// unknown. Bounds come from the live session at call time. On
    /// failure the previous page result stays in place and the error is
    /// returned for the view to surface with a retry action.
    pub async fn goto_page(&self, page: usize) -> Result<(), ZenithError> {
        let page = clamp_page(page, self.state.current().page_bound());

        let ticket = self.begin_fetch();
        let result = api::client::logs::list(&self.config, page).await;
        self.apply_fetch(ticket, result)
    }

    /// Re-fetch the current page, the manual "try again" action
    pub async fn retry(&self) -> Result<(), ZenithError> {
        let page = self.state.current().page_result.page;
        self.goto_page(page).await
    }

    /// Pagination controls for the current session
    pub fn page_controls(&self) -> Vec<PageControl> {
        let session = self.state.current();
        pagination::compute_window(
            session.page_result.page,
            session.page_result.total_pages,
            constants::MAX_VISIBLE_PAGES,
        )
    }

    fn begin_fetch(&self) -> u64 {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.set_loading();
        ticket
    }

    fn apply_fetch(
        &self,
        ticket: u64,
        result: Result<PageResult, ZenithError>,
    ) -> Result<(), ZenithError> {
        if self.generation.load(Ordering::SeqCst) != ticket {
            log::debug!(
                "controller: discarding superseded fetch {ticket} ({})",
                if result.is_ok() { "ok" } else { "err" }
            );
            return Ok(());
        }
        match result {
            Ok(page_result) => {
                self.state.update_page(page_result);
                Ok(())
            }
            Err(err) => {
                log::error!("controller: fetch failed: {err}");
                self.state.set_failed(err.to_string());
                Err(err)
            }
        }
    }
}

fn clamp_page(page: usize, bound: Option<usize>) -> usize {
    let page = page.max(constants::DEFAULT_PAGE_NUM);
    match bound {
        Some(total_pages) => page.min(total_pages.max(1)),
        None => page,
    }
}
