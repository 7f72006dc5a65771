//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use serde::{Deserialize, Serialize};
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Sets up the tracing subscriber based on the selected profile. Only the
/// first call has any effect.
///
/// # Profiles
///
/// - **Development**: Human-readable logs on stderr, debug level
/// - **Production**: JSON structured logs on stderr, info level
/// - **Test**: Bare registry; use `init_test_capture()` to record events
///
/// `RUST_LOG` overrides the profile's default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("discodiff=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("discodiff=info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
