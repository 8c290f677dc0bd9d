//! Booking button component renderer.
//!
//! Renders the "Add to booking" button centered below the price breakdown.
//! While focused, the button is drawn with the theme's button colors as a
//! solid block so the confirm key's target is unambiguous.

use crate::ui::helpers::{center_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SubmitInfo;

/// Renders the booking button at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_submit_button(row: usize, submit: &SubmitInfo, theme: &Theme, cols: usize) -> usize {
    let text = format!("[ {} ]", submit.label);
    let padding = center_padding(cols, &text);

    position_cursor(row, padding + 1);
    if submit.is_focused {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{text}");
    print!("{}", Theme::reset());
    row + 1
}
