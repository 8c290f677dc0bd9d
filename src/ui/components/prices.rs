//! Price breakdown component renderer.
//!
//! Renders the booking overview rows (subtotal, service fee, total) with the
//! label on the left and the pre-formatted amount right-aligned. The total
//! row is emphasized.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PriceRow;

/// Horizontal margin on both sides of the breakdown.
const PRICE_MARGIN: usize = 2;

/// Renders all price rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_price_rows(row: usize, items: &[PriceRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_price_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single price row.
///
/// ```text
///   Subtotal                              115.00 €
/// ```
///
/// Emphasized rows (the total) are rendered bold in the header color; the
/// others use the normal text color.
fn render_price_row(row: usize, item: &PriceRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, PRICE_MARGIN + 1);

    if item.emphasized {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let inner_width = cols.saturating_sub(PRICE_MARGIN * 2);
    let padding =
        inner_width.saturating_sub(display_width(&item.label) + display_width(&item.amount));

    print!("{}", item.label);
    print!("{}", " ".repeat(padding));
    print!("{}", item.amount);

    print!("{}", Theme::reset());
    row + 1
}
