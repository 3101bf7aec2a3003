//! Profile rendering and display-name formatting

use super::model::User;

/// Render a user profile as an HTML fragment.
///
/// Field values are interpolated raw, without HTML escaping. A missing
/// user or an empty name renders the placeholder paragraph instead.
pub fn display_user_profile(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.name.is_empty() => format!(
            "<h3>Welcome, {}!</h3>\n<p>Email: {}</p>\n<p>Role: {}</p>",
            user.name, user.email, user.role
        ),
        _ => "<p>No user data available</p>".to_string(),
    }
}

/// Format user display name.
///
/// The role is interpolated unguarded: a missing role renders as an empty
/// parenthetical.
pub fn format_display_name(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.name.is_empty() => format!("{} ({})", user.name, user.role),
        _ => "Anonymous User".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_user_profile_html() {
        let user = User {
            name: "Test User".to_string(),
            email: "test@test.com".to_string(),
            role: "Tester".to_string(),
            ..User::default()
        };
        let html = display_user_profile(Some(&user));
        assert!(html.contains("Welcome, Test User!"));
        assert!(html.contains("test@test.com"));
        assert!(html.contains("Tester"));
    }

    #[test]
    fn test_display_missing_user() {
        assert_eq!(display_user_profile(None), "<p>No user data available</p>");
    }

    #[test]
    fn test_display_user_without_name() {
        let user = User {
            email: "test@test.com".to_string(),
            ..User::default()
        };
        assert_eq!(
            display_user_profile(Some(&user)),
            "<p>No user data available</p>"
        );
    }

    #[test]
    fn test_format_display_name_with_role() {
        let user = User {
            name: "Jane Doe".to_string(),
            role: "Admin".to_string(),
            ..User::default()
        };
        assert_eq!(format_display_name(Some(&user)), "Jane Doe (Admin)");
    }

    #[test]
    fn test_format_display_name_without_role() {
        let user = User {
            name: "Jane Doe".to_string(),
            ..User::default()
        };
        assert_eq!(format_display_name(Some(&user)), "Jane Doe ()");
    }

    #[test]
    fn test_format_display_name_anonymous() {
        assert_eq!(format_display_name(None), "Anonymous User");
        let user = User {
            role: "Guest".to_string(),
            ..User::default()
        };
        assert_eq!(format_display_name(Some(&user)), "Anonymous User");
    }
}
