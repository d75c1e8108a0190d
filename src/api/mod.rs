//! X API module.
//!
//! This module provides:
//! - HTTP client for the v2 REST API
//! - Bearer authorization
//! - Field/expansion selectors and request options
//! - Wire response types and the domain values built from them
//! - The `TimelineSource` seam used by the paginator

pub mod auth;
pub mod client;
pub mod fields;
pub mod model;
pub mod options;
pub mod source;
pub mod types;

pub use client::{XApi, API_HOST};
pub use model::{Account, MediaTable, Page, Post};
pub use options::{TimelineOptions, UserLookupOptions, DEFAULT_MAX_RESULTS};
pub use source::TimelineSource;
