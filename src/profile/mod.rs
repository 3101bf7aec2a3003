//! User profile aggregate
//!
//! Contains the user model, the simulated single-record store, and the
//! rendering helpers.

pub mod model;
pub mod render;
pub mod store;

// Re-export model types
pub use model::{is_valid_user, User, SAMPLE_USER};

// Re-export rendering helpers
pub use render::{display_user_profile, format_display_name};

// Re-export store lookup
pub use store::get_user_by_id;
