//! Error banner component renderer.
//!
//! Renders the submission error message centered below the booking button.
//! The text comes pre-selected from the view model; this component only
//! styles and places it.

use crate::ui::helpers::{center_padding, position_cursor};
use crate::ui::theme::Theme;

/// Renders the error banner at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_error_banner(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    let padding = center_padding(cols, message);

    position_cursor(row, padding + 1);
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{message}");
    print!("{}", Theme::reset());
    row + 1
}
