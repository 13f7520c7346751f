//! Callback handlers wiring the window to the canvas.
//!
//! - `regions` - selection mode, region creation and activation
//! - `panel` - chat panel visibility and questions

pub mod panel;
pub mod regions;

use crate::{AppWindow, RegionOverlay};
use magic_canvas::Canvas;
use magic_canvas::overlay::{Overlay, overlays};
use slint::Model;

fn to_ui(overlay: Overlay) -> RegionOverlay {
    RegionOverlay {
        id: overlay.id.into(),
        kind: overlay.kind.as_str().into(),
        x: overlay.frame.x,
        y: overlay.frame.y,
        width: overlay.frame.width,
        height: overlay.frame.height,
        active: overlay.active,
        path_commands: overlay.path_commands.into(),
    }
}

/// Replace all overlays in a VecModel
fn replace_overlays(model: &slint::VecModel<RegionOverlay>, items: Vec<RegionOverlay>) {
    for _ in (0..model.row_count()).rev() {
        model.remove(model.row_count() - 1);
    }
    for item in items {
        model.push(item);
    }
}

/// Push the canvas state into the window properties.
pub fn refresh_view(ui: &AppWindow, canvas: &Canvas, model: &slint::VecModel<RegionOverlay>) {
    let state = canvas.state();
    replace_overlays(model, overlays(&state.store).into_iter().map(to_ui).collect());

    ui.set_selection_mode(state.mode.as_str().into());
    ui.set_show_chat(state.panel.visible);
    ui.set_answer(state.panel.answer.as_str().into());
    if ui.get_question().as_str() != state.panel.question {
        ui.set_question(state.panel.question.as_str().into());
    }
}
