//! Domain constants
//!
//! Centralized location for the API endpoints, paging defaults, and
//! environment variable names used throughout the client.

use std::time::Duration;

/// Root of the PCO API; resource bases are mounted under it.
pub const API_ROOT: &str = "https://api.planningcenteronline.com";

/// Versioned namespace for the People product.
pub const PEOPLE_BASE: &str = "people/v2";
/// Versioned namespace for the Publishing product.
pub const PUBLISHING_BASE: &str = "publishing/v2";

/// Page size requested when the caller supplies no query parameters.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Pause after every page fetch; PCO enforces a flat ~5 req/sec ceiling.
pub const PAGE_DELAY: Duration = Duration::from_millis(200);

// Environment variables consumed by the credential provider
pub const ENV_APPLICATION_ID: &str = "PCO_APPLICATION_ID";
pub const ENV_SECRET: &str = "PCO_SECRET";
pub const ENV_API_ROOT: &str = "PCO_API_ROOT";
