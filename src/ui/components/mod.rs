//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the parts of the
//! booking pane. Each component renders one piece of the interface at a given
//! row and returns the next available row.
//!
//! # Components
//!
//! - [`header`]: Title bar (bike name and daily rate)
//! - [`footer`]: Keybinding hints
//! - [`dates`]: The two date field boxes
//! - [`prices`]: Price breakdown rows
//! - [`submit`]: Booking button
//! - [`banner`]: Submission error banner
//! - [`confirmation`]: Post-booking thank-you layout
//!
//! # Layout modes
//!
//! Two high-level layout functions mirror the widget's two states:
//!
//! - [`render_form_mode`]: header + date fields + price overview + button
//!   (+ error banner)
//! - [`render_confirmation_mode`]: header + thank-you layout

mod banner;
mod confirmation;
mod dates;
mod footer;
mod header;
mod prices;
mod submit;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmationView, FormView, UiViewModel};

use banner::render_error_banner;
use confirmation::render_confirmation;
use dates::render_date_fields;
use footer::render_footer;
use header::render_header;
use prices::render_price_rows;
use submit::render_submit_button;

/// Left margin for the form body, in columns.
const BODY_MARGIN: usize = 2;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer) and as the
/// divider above the price breakdown.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a bold section heading at the body margin.
fn render_section_title(row: usize, title: &str, theme: &Theme) -> usize {
    position_cursor(row, BODY_MARGIN + 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the booking form layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Section title: Select date and time]
/// [Date fields - 3 lines]
/// [Section title: Booking Overview]
/// [Divider]
/// [Price rows]
/// [Booking button]
/// [Error banner, when a submission failed]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_form_mode(vm: &UiViewModel, form: &FormView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    current_row += 1;
    current_row = render_section_title(current_row, &form.section_title, theme);
    current_row = render_date_fields(current_row, &form.start_date, &form.end_date, theme, cols);

    current_row += 1;
    current_row = render_section_title(current_row, &form.overview_title, theme);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_price_rows(current_row, &form.price_rows, theme, cols);

    current_row += 1;
    current_row = render_submit_button(current_row, &form.submit, theme, cols);

    if let Some(message) = &form.error_banner {
        current_row += 1;
        render_error_banner(current_row, message, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the post-booking confirmation layout.
///
/// Replaces the entire form with a centered thank-you block showing the
/// booked bike's image URL, name, and category.
pub fn render_confirmation_mode(
    vm: &UiViewModel,
    confirmation: &ConfirmationView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    let body_row = render_border(current_row, &theme.colors.border, cols);

    render_confirmation(body_row + 1, confirmation, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
