//! `InnerTube` endpoint implementations.

pub mod search;
