//! # pcokit Domain
//!
//! Wire-level types and shared definitions for the Planning Center Online
//! (PCO) API client.
//!
//! This crate contains:
//! - The JSON:API-style response envelope types (`Envelope`, `Resource`)
//! - Error types and Result definitions
//! - Domain constants (API root, resource bases, paging defaults)
//!
//! ## Architecture
//! - No dependencies on other pcokit crates
//! - No HTTP or I/O dependencies; pure data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
