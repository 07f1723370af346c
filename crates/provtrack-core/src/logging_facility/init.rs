//! Logging initialization

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, debug level
    Development,
    /// JSON lines, info level
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

impl Profile {
    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "provtrack=debug",
            Profile::Production | Profile::Test => "provtrack=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global tracing subscriber for `profile`.
///
/// Only the first call has an effect. `RUST_LOG` overrides the profile's
/// default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                // see test_capture::init_test_capture
                tracing_subscriber::registry().init();
            }
        }
    });
}
