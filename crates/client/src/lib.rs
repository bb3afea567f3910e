//! # pcokit Client
//!
//! HTTP client layer for the Planning Center Online API.
//!
//! This crate contains:
//! - The credential provider (`auth`)
//! - The generic resource client core and pagination engine (`client`)
//! - Typed facades for the People and Publishing products
//!   (`people`, `publishing`)
//!
//! Every facade operation routes through one shared [`ResourceClient`];
//! callers never construct raw URLs and never see transport-level errors,
//! only [`pcokit_domain::PcoError`].

pub mod auth;
pub mod client;
pub mod people;
pub mod publishing;
mod request;

pub use auth::Credentials;
pub use client::{ResourceClient, ResourceClientBuilder};
pub use people::PeopleClient;
pub use publishing::PublishingClient;
pub use request::RequestDescriptor;
