//! Simulated single-record user store

use tracing::debug;

use super::model::{User, SAMPLE_USER};

/// Get user by ID (simulated).
///
/// The store holds exactly one record, the sample user; every other id
/// resolves to `None`.
pub fn get_user_by_id(id: i64) -> Option<User> {
    if id == SAMPLE_USER.id {
        return Some(SAMPLE_USER.clone());
    }
    debug!("No user with id={id}");
    None
}
