//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin: the bike on offer, the rental date range, the currently displayed
//! quote, the submission outcome, and the form focus. It serves as the single
//! source of truth for everything the renderer shows.
//!
//! # Architecture
//!
//! State is mutated only by the event handler in response to key events and
//! booking API responses. The renderer never mutates: it reads an immutable
//! view model computed on demand from a state snapshot, so re-rendering with
//! unchanged state always yields identical output.
//!
//! # Quote generations
//!
//! Every accepted date edit bumps a monotonic generation token and issues a
//! quote refresh tagged with it. A response is applied only when its token
//! matches the most recently issued one; responses from superseded edits are
//! discarded regardless of network arrival order, so the displayed quote
//! always reflects the user's latest intent.

use chrono::NaiveDate;

use crate::api::{AmountRequest, RentRequest};
use crate::app::modes::FormFocus;
use crate::domain::{Bike, DateRange, ErrorKind, Quote, SubmitOutcome};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    format_amount, ConfirmationView, DateField, FooterInfo, FormView, HeaderInfo, PriceRow,
    SubmitInfo, UiViewModel, SERVER_ERROR_MESSAGE, UNAVAILABLE_MESSAGE,
};

/// Central application state container.
///
/// Holds the booking session for one bike. Mutated by the event handler; view
/// models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The bike this pane is booking.
    pub bike: Bike,

    /// Identifier of the renting user, injected via plugin configuration.
    pub user_id: u64,

    /// Daily rate used for the pre-fetch placeholder quote.
    pub rate_by_day: f64,

    /// Selected rental dates. Maintains `min <= start <= end` internally.
    pub range: DateRange,

    /// Quote currently on display.
    ///
    /// Starts as the locally derived placeholder and is replaced wholesale by
    /// every accepted server response. A failed refresh leaves it untouched.
    pub quote: Quote,

    /// Result of the most recent submission attempt.
    ///
    /// Once `Confirmed`, the pane permanently shows the confirmation view and
    /// ignores further form input.
    pub outcome: SubmitOutcome,

    /// Form control that currently has input focus.
    pub focus: FormFocus,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Generation token of the most recently issued quote refresh.
    quote_token: u64,
}

impl AppState {
    /// Creates the booking session for one bike.
    ///
    /// The date range starts as a single-day rental anchored on `today`, and
    /// the quote starts as the synchronous local estimate so the form never
    /// renders with empty pricing.
    #[must_use]
    pub fn new(bike: Bike, user_id: u64, rate_by_day: f64, today: NaiveDate, theme: Theme) -> Self {
        Self {
            bike,
            user_id,
            rate_by_day,
            range: DateRange::starting(today),
            quote: Quote::estimate(rate_by_day),
            outcome: SubmitOutcome::Pending,
            focus: FormFocus::StartDate,
            theme,
            quote_token: 0,
        }
    }

    /// Advances the quote generation and returns the new token.
    ///
    /// Called once per accepted date edit, before issuing the refresh that
    /// carries the returned token.
    pub fn next_quote_token(&mut self) -> u64 {
        self.quote_token += 1;
        self.quote_token
    }

    /// Applies a resolved quote if it belongs to the current generation.
    ///
    /// Returns `true` when the quote was applied, `false` when it was stale
    /// (a newer refresh has been issued since) and therefore discarded.
    pub fn apply_quote(&mut self, token: u64, quote: Quote) -> bool {
        if token == self.quote_token {
            self.quote = quote;
            true
        } else {
            tracing::debug!(
                response_token = token,
                current_token = self.quote_token,
                "discarding stale quote response"
            );
            false
        }
    }

    /// Payload for a quote refresh of the current date range.
    #[must_use]
    pub fn amount_request(&self) -> AmountRequest {
        AmountRequest {
            bike_id: self.bike.id,
            date_from: self.range.start(),
            date_to: self.range.end(),
        }
    }

    /// Payload for submitting the current date range as a rental.
    ///
    /// Built fresh on every submission; nothing is persisted client-side.
    #[must_use]
    pub fn rent_request(&self) -> RentRequest {
        RentRequest {
            bike_id: self.bike.id,
            user_id: self.user_id,
            date_from: self.range.start(),
            date_to: self.range.end(),
        }
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Chooses between the booking form and the confirmation layout based on
    /// the submission outcome. Pure with respect to state: repeated calls on
    /// unchanged state return identical view models.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        if let SubmitOutcome::Confirmed(_) = &self.outcome {
            return UiViewModel {
                header: self.compute_header(),
                footer: FooterInfo {
                    keybindings: "q: close".to_string(),
                },
                form: None,
                confirmation: Some(ConfirmationView {
                    title: "Thank you!".to_string(),
                    subtitle: "Your bike is booked.".to_string(),
                    bike_name: self.bike.name.clone(),
                    bike_kind: self.bike.kind.clone(),
                    image_url: self.bike.image_url.clone(),
                }),
            };
        }

        UiViewModel {
            header: self.compute_header(),
            footer: FooterInfo {
                keybindings: "Tab or j/k: switch field  h/l or ←/→: adjust date  Enter: book  q: quit"
                    .to_string(),
            },
            form: Some(FormView {
                section_title: "Select date and time".to_string(),
                start_date: DateField {
                    label: "Start date".to_string(),
                    value: self.range.start().to_string(),
                    is_focused: self.focus == FormFocus::StartDate,
                },
                end_date: DateField {
                    label: "End date".to_string(),
                    value: self.range.end().to_string(),
                    is_focused: self.focus == FormFocus::EndDate,
                },
                overview_title: "Booking Overview".to_string(),
                price_rows: self.compute_price_rows(),
                submit: SubmitInfo {
                    label: "Add to booking".to_string(),
                    is_focused: self.focus == FormFocus::SubmitButton,
                },
                error_banner: self.compute_error_banner(),
            }),
            confirmation: None,
        }
    }

    /// Header title: bike name plus its daily rate.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " {} · {}/day ",
                self.bike.name,
                format_amount(self.rate_by_day)
            ),
        }
    }

    /// The three price rows, amounts formatted exactly as displayed.
    fn compute_price_rows(&self) -> Vec<PriceRow> {
        vec![
            PriceRow {
                label: "Subtotal".to_string(),
                amount: format_amount(self.quote.rent_amount),
                emphasized: false,
            },
            PriceRow {
                label: "Service Fee".to_string(),
                amount: format_amount(self.quote.fee),
                emphasized: false,
            },
            PriceRow {
                label: "Total".to_string(),
                amount: format_amount(self.quote.total_amount),
                emphasized: true,
            },
        ]
    }

    /// Error banner text for a failed submission, `None` otherwise.
    fn compute_error_banner(&self) -> Option<String> {
        match &self.outcome {
            SubmitOutcome::Failed(ErrorKind::BikeUnavailable) => {
                Some(UNAVAILABLE_MESSAGE.to_string())
            }
            SubmitOutcome::Failed(ErrorKind::ServerError) => Some(SERVER_ERROR_MESSAGE.to_string()),
            SubmitOutcome::Pending | SubmitOutcome::Confirmed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        let bike = Bike::new(
            1,
            "Aluminum racer".to_string(),
            "Road".to_string(),
            "https://cdn.example/bikes/1.jpg".to_string(),
        );
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        AppState::new(bike, 42, 100.0, today, Theme::default())
    }

    fn price_amounts(state: &AppState) -> Vec<String> {
        let vm = state.compute_viewmodel();
        vm.form
            .expect("form should be visible")
            .price_rows
            .into_iter()
            .map(|row| row.amount)
            .collect()
    }

    #[test]
    fn initial_rows_show_local_estimate() {
        let state = test_state();
        assert_eq!(price_amounts(&state), ["100.00 €", "15.00 €", "115.00 €"]);
    }

    #[test]
    fn resolved_quote_replaces_all_three_rows() {
        let mut state = test_state();
        let token = state.next_quote_token();
        assert!(state.apply_quote(
            token,
            Quote {
                rent_amount: 130.0,
                fee: 19.5,
                total_amount: 149.5,
            },
        ));
        assert_eq!(price_amounts(&state), ["130.00 €", "19.50 €", "149.50 €"]);
    }

    #[test]
    fn stale_quote_is_discarded() {
        let mut state = test_state();
        let first = state.next_quote_token();
        let _second = state.next_quote_token();
        assert!(!state.apply_quote(
            first,
            Quote {
                rent_amount: 130.0,
                fee: 19.5,
                total_amount: 149.5,
            },
        ));
        assert_eq!(price_amounts(&state), ["100.00 €", "15.00 €", "115.00 €"]);
    }

    #[test]
    fn viewmodel_is_idempotent_for_unchanged_state() {
        let state = test_state();
        assert_eq!(state.compute_viewmodel(), state.compute_viewmodel());
    }

    #[test]
    fn confirmation_shows_bike_name_and_image_url() {
        let mut state = test_state();
        state.outcome = SubmitOutcome::Confirmed(Quote::estimate(100.0));

        let vm = state.compute_viewmodel();
        assert!(vm.form.is_none());
        let confirmation = vm.confirmation.expect("confirmation should be visible");
        assert_eq!(confirmation.bike_name, "Aluminum racer");
        assert_eq!(confirmation.image_url, "https://cdn.example/bikes/1.jpg");
    }

    #[test]
    fn failed_outcome_renders_exact_banner_messages() {
        let mut state = test_state();

        state.outcome = SubmitOutcome::Failed(ErrorKind::BikeUnavailable);
        let vm = state.compute_viewmodel();
        assert_eq!(
            vm.form.unwrap().error_banner.as_deref(),
            Some("Bike is not available for the days selected.")
        );

        state.outcome = SubmitOutcome::Failed(ErrorKind::ServerError);
        let vm = state.compute_viewmodel();
        assert_eq!(
            vm.form.unwrap().error_banner.as_deref(),
            Some("Sorry but went something wrong, please try again latter.")
        );
    }

    #[test]
    fn rent_request_uses_current_range_and_ids() {
        let mut state = test_state();
        state.range.set_end(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());

        let request = state.rent_request();
        assert_eq!(request.bike_id, 1);
        assert_eq!(request.user_id, 42);
        assert_eq!(request.date_from, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(request.date_to, NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
    }
}
