//! Application info and generic helpers

use serde_json::Value;
use tracing::info;

/// Current application version
pub const APP_VERSION: &str = "1.0.0";

/// Initialize the application.
///
/// Logs a version-stamped startup message and reports success so a host
/// adapter can register this as its load hook.
pub fn init_app() -> bool {
    info!("App initialized - Version {APP_VERSION}");
    true
}

/// Get application version
pub fn get_version() -> &'static str {
    APP_VERSION
}

/// Format a greeting message.
///
/// A missing or empty name falls back to the guest greeting. The name is
/// interpolated verbatim, without trimming or escaping.
pub fn greet(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("Hello, {name}!"),
        _ => "Hello, Guest!".to_string(),
    }
}

/// Calculate the sum of two numbers
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Check if a value is valid.
///
/// `Null` and the empty string are invalid; every other value is valid,
/// including the number `0` and `false`.
pub fn is_valid(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
