// End-to-end flows through the public canvas API.

use magic_canvas::overlay::overlays;
use magic_canvas::providers::CANNED_ANSWER;
use magic_canvas::{
    Action, Canvas, CanvasState, Geometry, Rect, RegionKind, SelectionMode, Services, reduce,
};

/// Run a list of actions from an empty canvas with the demo collaborators
fn run(actions: &[Action]) -> CanvasState {
    let services = Services::demo();
    actions.iter().cloned().fold(CanvasState::default(), |state, action| {
        reduce(state, action, &services)
    })
}

#[test]
fn first_rectangle_region() {
    let state = run(&[Action::CreateRegion]);

    assert_eq!(state.store.len(), 1);
    let region = &state.store.regions()[0];
    assert_eq!(region.id, "region_1");
    assert_eq!(region.kind(), RegionKind::Rectangle);
    assert_eq!(
        region.geometry,
        Geometry::Rectangle(Rect::new(100.0, 100.0, 200.0, 150.0))
    );
    assert_eq!(state.store.active_id(), Some("region_1"));
}

#[test]
fn many_regions_keep_order_and_unique_ids() {
    let mut canvas = Canvas::default();
    let mut created = Vec::new();
    for i in 0..20 {
        let mode = if i % 3 == 0 {
            SelectionMode::Polygon
        } else {
            SelectionMode::Rectangle
        };
        canvas.dispatch(Action::SetMode(mode));
        created.push(canvas.create_region());
    }

    let store = &canvas.state().store;
    assert_eq!(store.len(), 20);
    assert_eq!(store.regions(), created.as_slice());
    for (i, region) in store.iter().enumerate() {
        assert_eq!(region.id, format!("region_{}", i + 1));
    }
    assert_eq!(store.active_id(), Some("region_20"));
}

#[test]
fn polygon_bounds_contain_points() {
    let state = run(&[Action::SetMode(SelectionMode::Polygon), Action::CreateRegion]);
    let region = state.store.active_region().expect("polygon should be active");

    let Geometry::Polygon(polygon) = &region.geometry else {
        panic!("expected polygon, got {:?}", region.kind());
    };
    assert_eq!(polygon.points().len(), 4);
    for point in polygon.points() {
        assert!(polygon.bounds().contains(*point), "{point:?} outside bounds");
    }
}

#[test]
fn mode_toggle_does_not_touch_existing_regions() {
    let before = run(&[Action::CreateRegion, Action::CreateRegion]);
    let services = Services::demo();
    let after = [
        Action::SetMode(SelectionMode::Polygon),
        Action::SetMode(SelectionMode::Rectangle),
        Action::SetMode(SelectionMode::Polygon),
    ]
    .into_iter()
    .fold(before.clone(), |state, action| reduce(state, action, &services));

    assert_eq!(after.store, before.store);
}

#[test]
fn ask_flow() {
    let mut canvas = Canvas::default();

    assert_eq!(canvas.ask(""), None);
    assert_eq!(canvas.ask("   "), None);
    assert!(!canvas.state().panel.visible);
    assert!(canvas.state().panel.answer.is_empty());

    assert_eq!(canvas.ask("what is this?").as_deref(), Some(CANNED_ANSWER));
    assert!(canvas.state().panel.visible);

    canvas.create_region();
    assert_eq!(canvas.ask("and this region?").as_deref(), Some(CANNED_ANSWER));
}

#[test]
fn panel_toggle_and_enter_key() {
    let state = run(&[
        Action::TogglePanel,
        Action::SetQuestion("what is this?".into()),
        Action::TogglePanel,
        Action::SubmitQuestion,
    ]);

    assert!(state.panel.visible);
    assert_eq!(state.panel.question, "what is this?");
    assert_eq!(state.panel.answer, CANNED_ANSWER);

    let hidden = reduce(state, Action::TogglePanel, &Services::demo());
    assert!(!hidden.panel.visible);
    assert_eq!(hidden.panel.answer, CANNED_ANSWER);
}

#[test]
fn clicking_regions_moves_highlight() {
    let state = run(&[
        Action::CreateRegion,
        Action::SetMode(SelectionMode::Polygon),
        Action::CreateRegion,
        Action::SetActive("region_1".into()),
    ]);

    let active: Vec<bool> = overlays(&state.store).iter().map(|o| o.active).collect();
    assert_eq!(active, [true, false]);

    let dangling = reduce(state, Action::SetActive("region_99".into()), &Services::demo());
    assert_eq!(dangling.store.active_id(), Some("region_99"));
    assert!(dangling.store.active_region().is_none());
    assert!(overlays(&dangling.store).iter().all(|o| !o.active));
}
