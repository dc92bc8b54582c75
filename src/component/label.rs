//! Label - purely decorative text.
//!
//! A label never accepts focus, never highlights, never activates: every
//! event delivery answers `Ignored` and the state stays DEFAULT. It
//! still carries a style table so themes apply to it like to everything
//! else.

use crate::component::machine::InteractionCore;
use crate::component::renderer::{ComponentRenderer, RenderProps};
use crate::component::{ComponentMetadata, ComponentState};
use crate::events::{MouseEvent, UIEventPhase, UIEventResponse, UIEventTarget};
use crate::style::StyleSet;
use crate::surface::{BasicSurface, TileSurface};
use crate::types::{Position, Size};

// =============================================================================
// Label
// =============================================================================

/// Non-interactive text.
pub struct Label {
    position: Position,
    graphics: BasicSurface,
    core: InteractionCore,
    renderer: Box<dyn ComponentRenderer>,
    text: String,
}

impl Label {
    /// Create a label and paint it.
    pub fn new(
        metadata: ComponentMetadata,
        renderer: impl ComponentRenderer + 'static,
        text: impl Into<String>,
    ) -> Self {
        let mut label = Self {
            position: metadata.position,
            graphics: BasicSurface::new(metadata.size),
            core: InteractionCore::new(false, metadata.styles),
            renderer: Box::new(renderer),
            text: text.into(),
        };
        label.render();
        label
    }

    /// The text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text (one repaint).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.render();
    }

    /// Always DEFAULT (or DISABLED, administratively).
    pub fn state(&self) -> ComponentState {
        self.core.state()
    }

    /// The style resolved for the current state.
    pub fn current_style(&self) -> StyleSet {
        self.core.current_style()
    }

    /// Offset inside the parent.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Widget extent.
    pub fn size(&self) -> Size {
        self.graphics.size()
    }

    /// The painted surface.
    pub fn graphics(&self) -> &BasicSurface {
        &self.graphics
    }

    fn render(&mut self) {
        let props = RenderProps {
            state: self.core.state(),
            style: self.core.current_style(),
            text: self.text.clone(),
            checked: None,
        };
        self.renderer.render(&mut self.graphics, &props);
    }
}

impl UIEventTarget for Label {
    fn mouse_entered(&mut self, _event: MouseEvent, _phase: UIEventPhase) -> UIEventResponse {
        UIEventResponse::Ignored
    }

    fn mouse_exited(&mut self, _event: MouseEvent, _phase: UIEventPhase) -> UIEventResponse {
        UIEventResponse::Ignored
    }

    fn focus_given(&mut self) -> UIEventResponse {
        let (response, _) = self.core.focus_given();
        response
    }

    fn focus_taken(&mut self) -> UIEventResponse {
        UIEventResponse::Ignored
    }

    fn activated(&mut self) -> UIEventResponse {
        UIEventResponse::Ignored
    }

    fn accepts_focus(&self) -> bool {
        self.core.accepts_focus()
    }
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Label").field("text", &self.text).finish()
    }
}

// =============================================================================
// DefaultLabelRenderer
// =============================================================================

/// Paints the text on row 0 in the resolved style.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabelRenderer;

impl ComponentRenderer for DefaultLabelRenderer {
    fn render(&mut self, surface: &mut BasicSurface, props: &RenderProps) {
        surface.clear(props.style);
        surface.draw_text(&props.text, Position::ZERO, props.style);
    }
}

// =============================================================================
// Tests
// =============================================================================
