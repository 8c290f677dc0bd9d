//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and booking API responses, translating them into state changes and action
//! sequences. It is the single place where booking state transitions happen.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (key presses, web request results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `DateRange` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event categories
//!
//! - **Navigation**: `FocusNext`, `FocusPrev`
//! - **Date edits**: `DateBack`, `DateForward` (step the focused date field)
//! - **Booking**: `Submit`, plus [`ApiResponse`] resolutions wrapped in `Api`
//! - **Pane**: `CloseFocus`
//!
//! Once the outcome is `Confirmed`, every event except `CloseFocus` is
//! ignored: the confirmation view is permanent for this pane instance.

use chrono::Days;

use crate::api::ApiResponse;
use crate::app::modes::FormFocus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::SubmitOutcome;

/// Events triggered by user input or booking API responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves focus to the next form control (wraps around).
    FocusNext,
    /// Moves focus to the previous form control (wraps around).
    FocusPrev,
    /// Steps the focused date field one day back.
    DateBack,
    /// Steps the focused date field one day forward.
    DateForward,
    /// Submits the current date range as a rental request.
    Submit,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Wraps a resolved booking API response.
    Api(ApiResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. The first element of the returned tuple indicates whether
/// the UI should re-render.
///
/// # Errors
///
/// Returns errors from state mutation; the current transitions are
/// infallible, so callers mostly see `Ok`.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    // A confirmed booking is final for this pane instance.
    if state.outcome.is_confirmed() {
        return match event {
            Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
            _ => Ok((false, vec![])),
        };
    }

    match event {
        Event::FocusNext => {
            state.focus = state.focus.next();
            Ok((true, vec![]))
        }
        Event::FocusPrev => {
            state.focus = state.focus.prev();
            Ok((true, vec![]))
        }
        Event::DateBack => step_focused_date(state, Direction::Back),
        Event::DateForward => step_focused_date(state, Direction::Forward),
        Event::Submit => {
            let request = state.rent_request();
            tracing::debug!(
                date_from = %request.date_from,
                date_to = %request.date_to,
                "submitting rental request"
            );

            // A fresh attempt clears any previous failure banner.
            state.outcome = SubmitOutcome::Pending;
            Ok((true, vec![Action::SubmitRent { request }]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Api(response) => handle_api_response(state, response),
    }
}

/// Which way a date-adjustment key steps the focused field.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Back,
    Forward,
}

/// Steps the focused date field by one day and triggers a quote refresh.
///
/// Out-of-bounds steps are clamped by [`DateRange`](crate::domain::DateRange);
/// a refresh is issued after every accepted edit, clamped or not, tagged with
/// a fresh generation token.
fn step_focused_date(state: &mut AppState, direction: Direction) -> Result<(bool, Vec<Action>)> {
    let one_day = Days::new(1);

    match state.focus {
        FormFocus::StartDate => {
            let stepped = match direction {
                Direction::Back => state.range.start().checked_sub_days(one_day),
                Direction::Forward => state.range.start().checked_add_days(one_day),
            };
            let Some(date) = stepped else {
                return Ok((false, vec![]));
            };
            state.range.set_start(date);
        }
        FormFocus::EndDate => {
            let stepped = match direction {
                Direction::Back => state.range.end().checked_sub_days(one_day),
                Direction::Forward => state.range.end().checked_add_days(one_day),
            };
            let Some(date) = stepped else {
                return Ok((false, vec![]));
            };
            state.range.set_end(date);
        }
        FormFocus::SubmitButton => return Ok((false, vec![])),
    }

    let token = state.next_quote_token();
    let request = state.amount_request();
    tracing::debug!(
        date_from = %request.date_from,
        date_to = %request.date_to,
        token = token,
        "date range changed - refreshing quote"
    );

    Ok((true, vec![Action::FetchQuote { request, token }]))
}

/// Applies a resolved booking API response to the state.
fn handle_api_response(state: &mut AppState, response: &ApiResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        ApiResponse::AmountLoaded { token, quote } => {
            let applied = state.apply_quote(*token, quote.clone());
            Ok((applied, vec![]))
        }
        ApiResponse::AmountFailed { token, message } => {
            // Refresh failures are swallowed: the previous quote stays on
            // screen and no error surfaces.
            tracing::debug!(token = token, error = %message, "quote refresh failed");
            Ok((false, vec![]))
        }
        ApiResponse::RentConfirmed { quote } => {
            tracing::debug!(total = quote.total_amount, "rental confirmed");
            state.outcome = SubmitOutcome::Confirmed(quote.clone());
            Ok((true, vec![]))
        }
        ApiResponse::RentRejected { kind, message } => {
            tracing::debug!(kind = ?kind, error = %message, "rental rejected");
            state.outcome = SubmitOutcome::Failed(*kind);
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bike, ErrorKind, Quote};
    use crate::ui::theme::Theme;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn test_state() -> AppState {
        let bike = Bike::new(
            1,
            "Aluminum racer".to_string(),
            "Road".to_string(),
            "https://cdn.example/bikes/1.jpg".to_string(),
        );
        AppState::new(bike, 42, 100.0, day(10), Theme::default())
    }

    fn confirmed_quote() -> Quote {
        Quote {
            rent_amount: 130.0,
            fee: 19.5,
            total_amount: 149.5,
        }
    }

    #[test]
    fn stepping_start_past_end_drags_end_and_fetches() {
        let mut state = test_state();

        let (render, actions) = handle_event(&mut state, &Event::DateForward).unwrap();
        assert!(render);
        assert_eq!(state.range.start(), day(11));
        assert_eq!(state.range.end(), day(11));
        assert_eq!(
            actions,
            vec![Action::FetchQuote {
                request: state.amount_request(),
                token: 1,
            }]
        );
    }

    #[test]
    fn stepping_end_then_start_keeps_longer_range() {
        let mut state = test_state();

        state.focus = FormFocus::EndDate;
        for _ in 0..5 {
            handle_event(&mut state, &Event::DateForward).unwrap();
        }
        state.focus = FormFocus::StartDate;
        handle_event(&mut state, &Event::DateForward).unwrap();
        handle_event(&mut state, &Event::DateForward).unwrap();

        assert_eq!(state.range.start(), day(12));
        assert_eq!(state.range.end(), day(15));
    }

    #[test]
    fn each_edit_advances_the_quote_token() {
        let mut state = test_state();
        state.focus = FormFocus::EndDate;

        handle_event(&mut state, &Event::DateForward).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::DateForward).unwrap();

        assert!(matches!(
            actions.as_slice(),
            [Action::FetchQuote { token: 2, .. }]
        ));
    }

    #[test]
    fn date_keys_are_ignored_on_the_submit_button() {
        let mut state = test_state();
        state.focus = FormFocus::SubmitButton;

        let (render, actions) = handle_event(&mut state, &Event::DateForward).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.range.start(), day(10));
    }

    #[test]
    fn submit_emits_request_and_resets_outcome() {
        let mut state = test_state();
        state.outcome = SubmitOutcome::Failed(ErrorKind::ServerError);

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(render);
        assert_eq!(state.outcome, SubmitOutcome::Pending);
        assert_eq!(
            actions,
            vec![Action::SubmitRent {
                request: state.rent_request(),
            }]
        );
    }

    #[test]
    fn confirmed_response_switches_to_confirmation_view() {
        let mut state = test_state();

        let event = Event::Api(ApiResponse::RentConfirmed {
            quote: confirmed_quote(),
        });
        let (render, _) = handle_event(&mut state, &event).unwrap();

        assert!(render);
        assert!(state.outcome.is_confirmed());
        assert!(state.compute_viewmodel().confirmation.is_some());
    }

    #[test]
    fn confirmed_outcome_ignores_further_form_input() {
        let mut state = test_state();
        state.outcome = SubmitOutcome::Confirmed(confirmed_quote());

        for event in [Event::DateForward, Event::Submit, Event::FocusNext] {
            let (render, actions) = handle_event(&mut state, &event).unwrap();
            assert!(!render);
            assert!(actions.is_empty());
        }
        assert!(state.outcome.is_confirmed());
    }

    #[test]
    fn rejected_response_sets_failure_kind() {
        let mut state = test_state();

        let event = Event::Api(ApiResponse::RentRejected {
            kind: ErrorKind::BikeUnavailable,
            message: "booked".to_string(),
        });
        handle_event(&mut state, &event).unwrap();

        assert_eq!(state.outcome, SubmitOutcome::Failed(ErrorKind::BikeUnavailable));
    }

    #[test]
    fn quote_failure_keeps_previous_quote_without_rendering() {
        let mut state = test_state();
        let token = state.next_quote_token();

        let event = Event::Api(ApiResponse::AmountFailed {
            token,
            message: "status 500".to_string(),
        });
        let (render, actions) = handle_event(&mut state, &event).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.quote, Quote::estimate(100.0));
    }

    #[test]
    fn stale_quote_response_is_not_applied() {
        let mut state = test_state();
        let stale = state.next_quote_token();
        let current = state.next_quote_token();

        let event = Event::Api(ApiResponse::AmountLoaded {
            token: stale,
            quote: confirmed_quote(),
        });
        let (render, _) = handle_event(&mut state, &event).unwrap();
        assert!(!render);
        assert_eq!(state.quote, Quote::estimate(100.0));

        let event = Event::Api(ApiResponse::AmountLoaded {
            token: current,
            quote: confirmed_quote(),
        });
        let (render, _) = handle_event(&mut state, &event).unwrap();
        assert!(render);
        assert_eq!(state.quote, confirmed_quote());
    }
}
