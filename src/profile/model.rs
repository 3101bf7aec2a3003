//! User model

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// User record.
///
/// Validity is a derived predicate, never enforced at construction: the
/// type happily represents partial records, with missing fields held as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Sample user data, immutable for the process lifetime
pub static SAMPLE_USER: LazyLock<User> = LazyLock::new(|| User {
    id: 1,
    name: "John Doe".to_string(),
    email: "john@example.com".to_string(),
    role: "Developer".to_string(),
});

/// Validate a user record.
///
/// A user is valid when the name is non-empty and the email contains an
/// `@`. Id and role are not checked.
pub fn is_valid_user(user: Option<&User>) -> bool {
    match user {
        Some(user) => !user.name.is_empty() && user.email.contains('@'),
        None => false,
    }
}
