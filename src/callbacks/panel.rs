//! Chat panel callbacks.
//!
//! Handles: toggle_chat, question_edited, ask_question

use super::refresh_view;
use crate::{AppWindow, RegionOverlay};
use magic_canvas::{Action, Canvas};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Sets up all panel-related callbacks on the UI.
pub fn setup_panel_callbacks(
    ui: &AppWindow,
    canvas: Rc<RefCell<Canvas>>,
    overlays: Rc<slint::VecModel<RegionOverlay>>,
) {
    setup_toggle_chat(ui, canvas.clone(), overlays.clone());
    setup_question_edited(ui, canvas.clone());
    setup_ask_question(ui, canvas, overlays);
}

fn setup_toggle_chat(
    ui: &AppWindow,
    canvas: Rc<RefCell<Canvas>>,
    overlays: Rc<slint::VecModel<RegionOverlay>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_toggle_chat(move || {
        let mut canvas = canvas.borrow_mut();
        canvas.dispatch(Action::TogglePanel);

        if let Some(ui) = ui_weak.upgrade() {
            refresh_view(&ui, &canvas, &overlays);
        }
    });
}

// Keeps the draft in sync without refreshing the view, so typing is not
// interrupted.
fn setup_question_edited(ui: &AppWindow, canvas: Rc<RefCell<Canvas>>) {
    ui.on_question_edited(move |text| {
        canvas
            .borrow_mut()
            .dispatch(Action::SetQuestion(text.to_string()));
    });
}

fn setup_ask_question(
    ui: &AppWindow,
    canvas: Rc<RefCell<Canvas>>,
    overlays: Rc<slint::VecModel<RegionOverlay>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_ask_question(move |text| {
        let mut canvas = canvas.borrow_mut();
        canvas.dispatch(Action::SetQuestion(text.to_string()));
        canvas.dispatch(Action::SubmitQuestion);

        if let Some(ui) = ui_weak.upgrade() {
            refresh_view(&ui, &canvas, &overlays);
        }
    });
}
