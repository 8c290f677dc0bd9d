//! Header component renderer.
//!
//! Renders the pane title bar: the bike's name and daily rate, centered,
//! with theme-aware colors and optional background styling.

use crate::ui::helpers::{center_padding, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// The title is centered horizontally with bold styling; the line is padded
/// to fill the entire terminal width so an optional header background forms
/// a solid bar.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_width = display_width(&header.title);
    let padding = center_padding(cols, &header.title);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_width)));

    print!("{}", Theme::reset());
    row + 1
}
