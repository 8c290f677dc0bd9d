//! Confirmation component renderer.
//!
//! Renders the static thank-you layout shown once a booking is confirmed:
//! heading, booked-bike image URL, name, and category, all centered. A
//! terminal pane cannot display the image itself, so the URL is shown as a
//! dimmed reference line instead.

use crate::ui::helpers::{center_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConfirmationView;

/// Renders the confirmation layout starting at the specified row.
///
/// ```text
///                  Thank you!
///             Your bike is booked.
///
///       https://cdn.example/bikes/1.jpg
///
///                Aluminum racer
///                     Road
/// ```
///
/// The image URL line is skipped when no URL is configured.
pub fn render_confirmation(row: usize, confirmation: &ConfirmationView, theme: &Theme, cols: usize) {
    let mut current_row = row + 1;

    current_row = render_centered(
        current_row,
        &confirmation.title,
        &theme.colors.success_fg,
        true,
        cols,
    );
    current_row = render_centered(
        current_row,
        &confirmation.subtitle,
        &theme.colors.text_normal,
        false,
        cols,
    );

    if !confirmation.image_url.is_empty() {
        current_row += 1;
        current_row = render_centered(
            current_row,
            &confirmation.image_url,
            &theme.colors.text_dim,
            false,
            cols,
        );
    }

    current_row += 1;
    current_row = render_centered(
        current_row,
        &confirmation.bike_name,
        &theme.colors.text_normal,
        true,
        cols,
    );
    render_centered(
        current_row,
        &confirmation.bike_kind,
        &theme.colors.text_dim,
        false,
        cols,
    );
}

/// Renders one centered line and returns the next row.
fn render_centered(row: usize, text: &str, color: &str, bold: bool, cols: usize) -> usize {
    let padding = center_padding(cols, text);

    position_cursor(row, padding + 1);
    if bold {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", Theme::reset());
    row + 1
}
