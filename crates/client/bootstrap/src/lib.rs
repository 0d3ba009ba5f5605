//! Shared bootstrap utilities for campaign front-ends.
//!
//! Provides configuration loading and session assembly (content, director,
//! repository and corpus catalog) that can be reused by the CLI or any other
//! front-end crate.
pub mod builder;
pub mod config;

pub use builder::{CampaignSession, SessionBuilder};
pub use config::SessionConfig;
