//! # harmonium-innertube
//!
//! `YouTube` Music `InnerTube` search client for Harmonium.
//!
//! Implements the category search surface Harmonium needs: one POST per
//! call, opaque continuation tokens passed back verbatim for pagination.
//! Failures surface to the caller; there are no retries and no response
//! caching in this client.

pub mod client;
pub mod context;
pub mod endpoints;
pub mod parser;
pub mod types;

pub use client::InnerTubeClient;
pub use context::ClientContext;
pub use types::SearchFilter;
