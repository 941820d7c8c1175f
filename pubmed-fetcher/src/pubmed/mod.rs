//! PubMed client for searching and fetching paper metadata
//!
//! - `client/mod.rs` - Client struct, constructors, ESearch and request plumbing
//! - `client/summary` - ESummary API for paper records

pub mod client;
pub mod models;
pub mod responses;

// Re-export public types
pub use client::{MAX_RETRIEVABLE, PubMedClient};
pub use models::{Author, PaperRecord};
