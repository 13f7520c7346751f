//! Region callbacks.
//!
//! Handles: set_selection_mode, create_region, select_region

use super::refresh_view;
use crate::{AppWindow, RegionOverlay};
use magic_canvas::{Action, Canvas, SelectionMode};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Sets up all region-related callbacks on the UI.
pub fn setup_region_callbacks(
    ui: &AppWindow,
    canvas: Rc<RefCell<Canvas>>,
    overlays: Rc<slint::VecModel<RegionOverlay>>,
) {
    setup_set_selection_mode(ui, canvas.clone(), overlays.clone());
    setup_create_region(ui, canvas.clone(), overlays.clone());
    setup_select_region(ui, canvas, overlays);
}

fn setup_set_selection_mode(
    ui: &AppWindow,
    canvas: Rc<RefCell<Canvas>>,
    overlays: Rc<slint::VecModel<RegionOverlay>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_set_selection_mode(move |mode| {
        let Some(ui) = ui_weak.upgrade() else { return };

        match mode.parse::<SelectionMode>() {
            Ok(mode) => {
                let mut canvas = canvas.borrow_mut();
                canvas.dispatch(Action::SetMode(mode));
                refresh_view(&ui, &canvas, &overlays);
                ui.set_status_text(format!("Selection mode: {mode}").into());
            }
            Err(e) => {
                log::warn!("{e}");
                ui.set_status_text(e.to_string().into());
            }
        }
    });
}

fn setup_create_region(
    ui: &AppWindow,
    canvas: Rc<RefCell<Canvas>>,
    overlays: Rc<slint::VecModel<RegionOverlay>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_create_region(move || {
        let mut canvas = canvas.borrow_mut();
        let region = canvas.create_region();

        if let Some(ui) = ui_weak.upgrade() {
            refresh_view(&ui, &canvas, &overlays);
            ui.set_status_text(
                format!(
                    "Added {} ({}), {} region(s)",
                    region.id,
                    region.kind(),
                    canvas.state().store.len()
                )
                .into(),
            );
        }
    });
}

fn setup_select_region(
    ui: &AppWindow,
    canvas: Rc<RefCell<Canvas>>,
    overlays: Rc<slint::VecModel<RegionOverlay>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_select_region(move |id| {
        let mut canvas = canvas.borrow_mut();
        canvas.dispatch(Action::SetActive(id.to_string()));

        if let Some(ui) = ui_weak.upgrade() {
            refresh_view(&ui, &canvas, &overlays);
            ui.set_status_text(format!("Selected {id}").into());
        }
    });
}
