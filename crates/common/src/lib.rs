//! Shared utilities, configuration, and error handling for Tourdesk
//!
//! This crate provides common functionality used across the back-office client:
//! - Client configuration following 12-factor principles
//! - UI preference overrides built once at startup
//! - The single transport-level error type
//! - The paginated query / result envelope shared by every resource

pub mod config;
pub mod error;
pub mod pagination;
pub mod preferences;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use pagination::{Page, PageQuery, PageResult};
pub use preferences::Preferences;
