//! CI/CD demo entry point.
//!
//! Thin environment adapter around the pure library: initializes logging,
//! loads configuration from the environment, runs the init hook and
//! writes the rendered sample profile to stdout.

use tracing::{info, warn};

use cicd_demo::config::Config;
use cicd_demo::{app, profile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config = match Config::from_env() {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.log_level)),
                )
                .init();
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            Config::default()
        }
    };

    app::init_app();

    // ── Render the configured profile ──────────────────────────
    let user = profile::get_user_by_id(config.profile_user_id);
    if user.is_none() {
        warn!("No profile found for user id {}", config.profile_user_id);
    }

    println!("{}", profile::display_user_profile(user.as_ref()));

    if let Some(user) = &user {
        info!(
            "Rendered profile for {}",
            profile::format_display_name(Some(user))
        );
    }

    Ok(())
}
