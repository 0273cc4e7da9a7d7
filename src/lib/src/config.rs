//! Configuration for reaching the remote list source

pub mod remote_config;

pub use crate::config::remote_config::RemoteConfig;
