//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are created via
//! `AppState::compute_viewmodel()` and consumed by the renderer; they contain
//! no business logic, only display-ready data: monetary amounts arrive here
//! already formatted as the strings the user will see.

/// Error banner text for a rejected booking due to a date conflict.
pub const UNAVAILABLE_MESSAGE: &str = "Bike is not available for the days selected.";

/// Error banner text for every other submission failure.
pub const SERVER_ERROR_MESSAGE: &str = "Sorry but went something wrong, please try again latter.";

/// Formats a monetary amount the way the widget displays it.
///
/// Two decimal places followed by the euro symbol, e.g. `115.00 €`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2} €")
}

/// Complete UI view model for rendering.
///
/// Exactly one of `form` and `confirmation` is present: the confirmation
/// layout permanently replaces the form once a booking is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct UiViewModel {
    /// Header information (bike name, daily rate).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// The booking form, while no booking has been confirmed.
    pub form: Option<FormView>,

    /// The post-booking confirmation layout.
    pub confirmation: Option<ConfirmationView>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
    /// Title text to display in the header bar.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "Tab: switch field  Enter: book").
    pub keybindings: String,
}

/// The booking form: date pickers, price breakdown, submit button, and an
/// optional error banner.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Heading above the date fields.
    pub section_title: String,

    /// The start-date field.
    pub start_date: DateField,

    /// The end-date field.
    pub end_date: DateField,

    /// Heading above the price breakdown.
    pub overview_title: String,

    /// Subtotal, service fee, and total, in display order.
    pub price_rows: Vec<PriceRow>,

    /// The booking button.
    pub submit: SubmitInfo,

    /// Error message for a failed submission, if any.
    pub error_banner: Option<String>,
}

/// One date field of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct DateField {
    /// Field label ("Start date" / "End date").
    pub label: String,

    /// Date value formatted `YYYY-MM-DD`.
    pub value: String,

    /// Whether this field currently has input focus.
    pub is_focused: bool,
}

/// One row of the price breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    /// Row label ("Subtotal", "Service Fee", "Total").
    pub label: String,

    /// Pre-formatted amount, e.g. `115.00 €`.
    pub amount: String,

    /// Whether the row is rendered emphasized (the total).
    pub emphasized: bool,
}

/// The booking button.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitInfo {
    /// Button label.
    pub label: String,

    /// Whether the button currently has input focus.
    pub is_focused: bool,
}

/// The post-booking confirmation layout.
///
/// Shown instead of the form once the booking API accepts a rental; stays on
/// screen until the pane is reloaded for another bike.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationView {
    /// Primary heading ("Thank you!").
    pub title: String,

    /// Secondary heading ("Your bike is booked.").
    pub subtitle: String,

    /// Name of the booked bike.
    pub bike_name: String,

    /// Category label of the booked bike.
    pub bike_kind: String,

    /// URL of the bike's primary image; empty when not configured.
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_render_two_decimals_with_euro_suffix() {
        assert_eq!(format_amount(115.0), "115.00 €");
        assert_eq!(format_amount(19.5), "19.50 €");
        assert_eq!(format_amount(149.5), "149.50 €");
        assert_eq!(format_amount(0.0), "0.00 €");
    }
}
