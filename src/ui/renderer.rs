//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to the UI components. The widget has two
//! layouts (the booking form and the post-booking confirmation) and the
//! view model decides which one is active.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// active layout. Prints ANSI-styled output using `print!`; does not clear
/// the screen or manage cursor visibility (Zellij owns the pane).
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with the layout it selects.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(confirmation) = &vm.confirmation {
        components::render_confirmation_mode(vm, confirmation, theme, cols, rows);
    } else if let Some(form) = &vm.form {
        components::render_form_mode(vm, form, theme, cols, rows);
    }
}
