//! # libzenith
//!
//! Client core for the Zenith log dashboard: a login gate over a single
//! credential pair, an in-memory session, and a paginated viewer for log
//! records fetched from a remote collection.
//!
//! # Examples
//!
//! Logging in and loading the first page:
//!
//! ```no_run
//! use libzenith::config::RemoteConfig;
//! use libzenith::controller::Dashboard;
//! use libzenith::error::ZenithError;
//!
//! # async fn run() -> Result<(), ZenithError> {
//! let dashboard = Dashboard::new(RemoteConfig::default());
//! if dashboard.login("bolaybuthd@gmail.com", "stre123ngth") {
//!     dashboard.goto_page(1).await?;
//! }
//!
//! let session = dashboard.session();
//! for entry in &session.page_result.items {
//!     println!("{} {:?}", entry.id, entry.email);
//! }
//! for control in dashboard.page_controls() {
//!     // render a button, an ellipsis, or the prev/next arrows
//!     let _ = control;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod model;
pub mod session;
pub mod view;

pub use crate::controller::Dashboard;
