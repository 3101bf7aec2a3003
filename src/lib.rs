//! # CI/CD Demo Application
//!
//! Small demo library used to exercise a CI/CD pipeline end to end.
//!
//! Two leaf modules with no shared state:
//!
//! - **app**: application info and generic helpers (version, greeting,
//!   arithmetic, validity check)
//! - **profile**: user profile rendering, validation and lookup backed by
//!   a single sample record
//!
//! Every exported function is pure and total; missing or malformed input
//! maps to a defined default output instead of an error. Logging and
//! configuration are owned by the binary entry point, never by the
//! library functions themselves.

pub mod app;
pub mod config;
pub mod profile;

pub use app::{add, get_version, greet, init_app, is_valid, APP_VERSION};
pub use config::{Config, ConfigError};

// Re-export profile types for easy access
pub use profile::{
    display_user_profile, format_display_name, get_user_by_id, is_valid_user, User, SAMPLE_USER,
};
