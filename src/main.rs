slint::include_modules!();

mod callbacks;
mod utils;

use magic_canvas::config::load_config;
use magic_canvas::{AnnotationPanel, Canvas, CanvasState};
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();

    // Image from CLI arg overrides the configured one.
    let image_source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.canvas.image_source.clone());

    let state = CanvasState {
        image_source,
        mode: config.canvas.default_mode,
        panel: AnnotationPanel::new(config.appearance.show_panel_on_start),
        ..CanvasState::default()
    };
    let canvas = Rc::new(RefCell::new(Canvas::demo(state)));

    let ui = AppWindow::new()?;
    let overlays = Rc::new(slint::VecModel::from(Vec::<RegionOverlay>::new()));
    ui.set_regions(overlays.clone().into());
    ui.set_panel_width(config.appearance.panel_width as f32);

    let (image, status) = utils::load_image_source(&canvas.borrow().state().image_source);
    ui.set_image_source(image);
    ui.set_status_text(status.into());

    callbacks::refresh_view(&ui, &canvas.borrow(), &overlays);
    callbacks::regions::setup_region_callbacks(&ui, canvas.clone(), overlays.clone());
    callbacks::panel::setup_panel_callbacks(&ui, canvas, overlays);

    log::info!("Starting canvas window");
    ui.run()?;
    Ok(())
}
