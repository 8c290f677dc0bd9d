//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Velobook
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Plugin lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, and
//!    `PermissionRequestResult` events
//! 3. **Update**: Translate Zellij events to library events, delegate to
//!    `handle_event`, execute the returned actions
//! 4. **Render**: Call the library render function
//!
//! # Event mapping
//!
//! - `Key(Tab/j/k/↑/↓)` → focus movement
//! - `Key(h/l/←/→)` → date adjustment on the focused field
//! - `Key(Enter)` → submit (on the button) or focus advance (elsewhere)
//! - `Key(q/Esc)` → close the pane
//! - `WebRequestResult` → typed booking API response (quote or rent)
//!
//! # Network
//!
//! Actions that need the booking API are executed through Zellij's
//! non-blocking `web_request` host call; the `WebAccess` permission is
//! requested on load. Responses come back as events with the request context
//! attached, which the api layer uses to route and de-duplicate them.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use velobook::api;
use velobook::{handle_event, Action, Config, Event, FormFocus};

// Register plugin with Zellij
register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-specific configuration
/// needed when executing actions (the booking API base URL).
struct State {
    /// Core application state from the library layer.
    app: velobook::app::AppState,

    /// Base URL of the booking API, from plugin configuration.
    api_url: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: velobook::initialize(&default_config),
            api_url: default_config.api_url,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, builds the booking state,
    /// requests the `WebAccess` permission, and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        velobook::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(bike_id = config.bike_id, api_url = %config.api_url, "plugin loading started");
        self.app = velobook::initialize(&config);
        self.api_url = config.api_url;
        tracing::debug!("app state initialized");

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match api::interpret_response(status, &body, &context) {
                    Some(response) => Event::Api(response),
                    None => {
                        tracing::debug!("ignoring web request result with foreign context");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::handle_permission_result(permissions);
                return true;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        velobook::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::FocusPrev);
        }

        Some(match key.bare_key {
            BareKey::Tab | BareKey::Down | BareKey::Char('j') => Event::FocusNext,
            BareKey::Up | BareKey::Char('k') => Event::FocusPrev,
            BareKey::Left | BareKey::Char('h') => Event::DateBack,
            BareKey::Right | BareKey::Char('l') => Event::DateForward,
            BareKey::Enter => match self.app.focus {
                FormFocus::SubmitButton => Event::Submit,
                FormFocus::StartDate | FormFocus::EndDate => Event::FocusNext,
            },
            BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// No network call is needed up front (the initial quote is a local
    /// estimate), so a grant only unblocks future refreshes and submissions.
    fn handle_permission_result(permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("web access granted");
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - quotes and booking will not work");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchQuote { ref request, token } => {
                api::client::request_amount(&self.api_url, request, *token);
            }
            Action::SubmitRent { ref request } => {
                api::client::submit_rent(&self.api_url, request);
            }
        }
    }
}
