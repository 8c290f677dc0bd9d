//! Velobook: a Zellij plugin for booking bike rentals from a terminal pane.
//!
//! Velobook renders a small booking form for one bike: pick a start and end
//! date, watch the live price breakdown (subtotal, service fee, total), and
//! submit the rental. The pane then shows either a booking confirmation or
//! one of two error messages. Pricing and availability live entirely in an
//! external booking API; the plugin is a thin, well-typed client in front of
//! it.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Booking logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Domain Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (domain/)     │
//! │ - Rendering   │   │ - Wire DTOs   │   │ - Date range  │
//! │ - Theming     │   │ - web_request │   │ - Quote       │
//! │ - Components  │   │ - Responses   │   │ - Outcome     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Tracing with file export (observability/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Event flow
//!
//! All work is driven by discrete events on the single plugin thread. A date
//! edit mutates the range (which enforces `start <= end` by clamping and
//! dragging), then issues a quote refresh through Zellij's non-blocking
//! `web_request`; the response arrives later as an event carrying the
//! generation token the request was tagged with, and is applied only if no
//! newer edit has been made since. Submission follows the same path and
//! resolves into a confirmed booking or one of two user-facing error kinds.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/velobook.wasm" {
//!         api_url "http://127.0.0.1:3000"
//!         bike_id "7"
//!         user_id "42"
//!         bike_name "Aluminum racer"
//!         bike_type "Road"
//!         bike_image_url "https://cdn.example/bikes/7.jpg"
//!         rate_by_day "85.0"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! The user identity is part of this configuration on purpose: the booking
//! flow receives everything it needs at construction time instead of reading
//! ambient process state.

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FormFocus};
pub use domain::{Bike, Quote, Result, VelobookError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization. Every field has a
/// default, so a bare `plugin location=...` line produces a working (if
/// demo-flavored) pane.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the booking API.
    pub api_url: String,

    /// Identifier of the bike this pane books.
    pub bike_id: u64,

    /// Identifier of the renting user.
    ///
    /// Injected here rather than read from the environment so the booking
    /// flow has no ambient inputs.
    pub user_id: u64,

    /// Display name of the bike.
    pub bike_name: String,

    /// Category label of the bike (e.g. "Road", "City").
    pub bike_type: String,

    /// URL of the bike's primary image, shown on the confirmation view.
    pub bike_image_url: String,

    /// Daily rate used for the pre-fetch placeholder quote.
    pub rate_by_day: f64,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for exported spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3000".to_string(),
            bike_id: 1,
            user_id: 1,
            bike_name: "Demo bike".to_string(),
            bike_type: "City".to_string(),
            bike_image_url: String::new(),
            rate_by_day: 100.0,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Missing or unparseable values fall back to the
    /// field defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use velobook::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("bike_id".to_string(), "7".to_string());
    /// map.insert("rate_by_day".to_string(), "85.0".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.bike_id, 7);
    /// assert_eq!(config.rate_by_day, 85.0);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            api_url: config
                .get("api_url")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.api_url),
            bike_id: config
                .get("bike_id")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.bike_id),
            user_id: config
                .get("user_id")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.user_id),
            bike_name: config
                .get("bike_name")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.bike_name),
            bike_type: config
                .get("bike_type")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.bike_type),
            bike_image_url: config
                .get("bike_image_url")
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.bike_image_url),
            rate_by_day: config
                .get("rate_by_day")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.rate_by_day),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the booking session from configuration.
///
/// Resolves the theme (custom file, then built-in name, then default) and
/// creates an [`AppState`] anchored on today's date: a single-day range and
/// the locally estimated placeholder quote, ready for event processing.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(bike_id = config.bike_id, "initializing velobook plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let bike = Bike::new(
        config.bike_id,
        config.bike_name.clone(),
        config.bike_type.clone(),
        config.bike_image_url.clone(),
    );

    let today = chrono::Utc::now().date_naive();

    AppState::new(bike, config.user_id, config.rate_by_day, today, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_defaults_for_bad_values() {
        let mut map = BTreeMap::new();
        map.insert("bike_id".to_string(), "not a number".to_string());
        map.insert("api_url".to_string(), "  ".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.bike_id, 1);
        assert_eq!(config.api_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn config_reads_all_booking_fields() {
        let mut map = BTreeMap::new();
        map.insert("api_url".to_string(), "http://bikes.example".to_string());
        map.insert("bike_id".to_string(), "7".to_string());
        map.insert("user_id".to_string(), "42".to_string());
        map.insert("bike_name".to_string(), "Aluminum racer".to_string());
        map.insert("bike_type".to_string(), "Road".to_string());
        map.insert("rate_by_day".to_string(), "85.5".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.api_url, "http://bikes.example");
        assert_eq!(config.bike_id, 7);
        assert_eq!(config.user_id, 42);
        assert_eq!(config.bike_name, "Aluminum racer");
        assert_eq!(config.bike_type, "Road");
        assert_eq!(config.rate_by_day, 85.5);
    }

    #[test]
    fn initialize_seeds_a_single_day_range_with_estimate() {
        let state = initialize(&Config::default());
        assert_eq!(state.range.start(), state.range.end());
        assert_eq!(state.quote, Quote::estimate(100.0));
        assert_eq!(state.outcome, domain::SubmitOutcome::Pending);
    }
}
