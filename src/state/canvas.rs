//! Canvas state, the actions that change it, and the reducer.

use super::panel::AnnotationPanel;
use super::store::RegionStore;
use super::types::{Region, SelectionMode};
use crate::providers::{CannedAnswerer, DemoGeometry, GeometryProvider, QuestionAnswerer};

/// Default image shown when nothing else is configured.
pub const DEFAULT_IMAGE_SOURCE: &str = "https://placehold.co/800x600";

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    /// Opaque image reference (URL or local path).
    pub image_source: String,
    pub mode: SelectionMode,
    pub store: RegionStore,
    pub panel: AnnotationPanel,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            image_source: DEFAULT_IMAGE_SOURCE.to_string(),
            mode: SelectionMode::default(),
            store: RegionStore::new(),
            panel: AnnotationPanel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetMode(SelectionMode),
    CreateRegion,
    SetActive(String),
    TogglePanel,
    SetQuestion(String),
    Ask(String),
    /// Enter pressed in the question input.
    SubmitQuestion,
    SetImage(String),
}

/// Collaborators the reducer consults.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub geometry: &'a dyn GeometryProvider,
    pub answerer: &'a dyn QuestionAnswerer,
}

impl Services<'static> {
    pub fn demo() -> Self {
        Services {
            geometry: &DemoGeometry,
            answerer: &CannedAnswerer,
        }
    }
}

/// Apply `action` to `state`.
pub fn reduce(mut state: CanvasState, action: Action, services: &Services<'_>) -> CanvasState {
    apply(&mut state, action, services);
    state
}

fn apply(state: &mut CanvasState, action: Action, services: &Services<'_>) {
    log::debug!("Applying {action:?}");
    match action {
        Action::SetMode(mode) => state.mode = mode,
        Action::CreateRegion => {
            create_region(state, services);
        }
        Action::SetActive(id) => state.store.set_active(id),
        Action::TogglePanel => state.panel.toggle(),
        Action::SetQuestion(text) => state.panel.set_question(text),
        Action::Ask(question) => {
            state
                .panel
                .ask(&question, state.store.active_region(), services.answerer);
        }
        Action::SubmitQuestion => {
            state
                .panel
                .submit(state.store.active_region(), services.answerer);
        }
        Action::SetImage(source) => state.image_source = source,
    }
}

fn create_region(state: &mut CanvasState, services: &Services<'_>) -> Region {
    state.store.create_region(state.mode, services.geometry)
}

/// A canvas session: state plus the collaborators that feed it.
pub struct Canvas {
    state: CanvasState,
    geometry: Box<dyn GeometryProvider>,
    answerer: Box<dyn QuestionAnswerer>,
}

impl Canvas {
    pub fn new(
        state: CanvasState,
        geometry: Box<dyn GeometryProvider>,
        answerer: Box<dyn QuestionAnswerer>,
    ) -> Self {
        Self {
            state,
            geometry,
            answerer,
        }
    }

    /// Session backed by the fixed demo shapes and the canned answer.
    pub fn demo(state: CanvasState) -> Self {
        Self::new(state, Box::new(DemoGeometry), Box::new(CannedAnswerer))
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let services = Services {
            geometry: self.geometry.as_ref(),
            answerer: self.answerer.as_ref(),
        };
        apply(&mut self.state, action, &services);
    }

    /// Same as dispatching [`Action::CreateRegion`], returning the new region.
    pub fn create_region(&mut self) -> Region {
        log::debug!("Applying {:?}", Action::CreateRegion);
        let services = Services {
            geometry: self.geometry.as_ref(),
            answerer: self.answerer.as_ref(),
        };
        create_region(&mut self.state, &services)
    }

    /// Dispatch [`Action::Ask`]; `None` for blank input.
    pub fn ask(&mut self, question: &str) -> Option<String> {
        if question.trim().is_empty() {
            return None;
        }
        self.dispatch(Action::Ask(question.to_string()));
        Some(self.state.panel.answer.clone())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::demo(CanvasState::default())
    }
}
