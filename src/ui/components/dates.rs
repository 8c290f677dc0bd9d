//! Date field component renderer.
//!
//! Renders the two date pickers as side-by-side bordered boxes with the
//! field label embedded in the top border. The focused box draws its border
//! in the theme's focus color so the user can tell which date the adjustment
//! keys apply to.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DateField;

/// Horizontal margin before the first box and after the second.
const FIELD_MARGIN: usize = 2;

/// Gap between the two boxes.
const FIELD_GAP: usize = 2;

/// Renders the start and end date boxes at the specified row.
///
/// Both boxes are 3 lines tall and split the available width evenly:
///
/// ```text
/// ┌ Start date ──────┐  ┌ End date ────────┐
/// │ 2024-06-10       │  │ 2024-06-12       │
/// └──────────────────┘  └──────────────────┘
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_date_fields(
    row: usize,
    start: &DateField,
    end: &DateField,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(FIELD_MARGIN * 2 + FIELD_GAP) / 2;
    let left_col = FIELD_MARGIN + 1;
    let right_col = FIELD_MARGIN + box_width + FIELD_GAP + 1;

    render_date_box(row, left_col, box_width, start, theme);
    render_date_box(row, right_col, box_width, end, theme);

    row + 3
}

/// Renders a single 3-line date box at the given column.
fn render_date_box(row: usize, col: usize, width: usize, field: &DateField, theme: &Theme) {
    let border_color = if field.is_focused {
        &theme.colors.field_border_focused
    } else {
        &theme.colors.field_border
    };
    let inner_width = width.saturating_sub(2);

    let title = format!(" {} ", field.label);
    let title_fill = inner_width.saturating_sub(display_width(&title));

    position_cursor(row, col);
    print!("{}", Theme::fg(border_color));
    print!("┌{title}{}┐", "─".repeat(title_fill));
    print!("{}", Theme::reset());

    let value = format!(" {}", field.value);
    let value_fill = inner_width.saturating_sub(display_width(&value));

    position_cursor(row + 1, col);
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{value}");
    print!("{}", " ".repeat(value_fill));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, col);
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
