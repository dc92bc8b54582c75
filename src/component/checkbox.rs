//! Checkbox - a focusable, toggleable widget.
//!
//! Renders as a 4-cell button prefix (`[ ] ` / `[x] `) followed by the
//! label text, all in the style resolved for the current interaction
//! state. Activation toggles the checked flag, which is why activation
//! repaints twice: once entering the ACTIVE look, once for the changed
//! content.

use crate::component::machine::InteractionCore;
use crate::component::renderer::{ComponentRenderer, RenderProps};
use crate::component::{ComponentMetadata, ComponentState};
use crate::events::{MouseEvent, UIEventPhase, UIEventResponse, UIEventTarget};
use crate::style::StyleSet;
use crate::surface::{BasicSurface, TileSurface};
use crate::types::{Position, Size};

// =============================================================================
// Checkbox
// =============================================================================

/// A checkbox with a text label and a checked flag.
pub struct Checkbox {
    position: Position,
    graphics: BasicSurface,
    core: InteractionCore,
    renderer: Box<dyn ComponentRenderer>,
    text: String,
    checked: bool,
}

impl Checkbox {
    /// Create a checkbox and paint its initial (DEFAULT) appearance.
    pub fn new(
        metadata: ComponentMetadata,
        renderer: impl ComponentRenderer + 'static,
        text: impl Into<String>,
    ) -> Self {
        let mut checkbox = Self {
            position: metadata.position,
            graphics: BasicSurface::new(metadata.size),
            core: InteractionCore::new(true, metadata.styles),
            renderer: Box::new(renderer),
            text: text.into(),
            checked: false,
        };
        checkbox.render();
        checkbox
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The checked flag.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked flag directly (one content repaint if it changed).
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.render();
        }
    }

    /// The current interaction state.
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

    /// The trigger completed (e.g. mouse released over the widget).
    pub fn activation_ended(&mut self) -> Option<ComponentState> {
        let changed = self.core.activation_ended();
        if changed.is_some() {
            self.render();
        }
        changed
    }

    /// Administratively enable or disable.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.core.set_enabled(enabled).is_some() {
            self.render();
        }
    }

    fn render(&mut self) {
        let props = RenderProps {
            state: self.core.state(),
            style: self.core.current_style(),
            text: self.text.clone(),
            checked: Some(self.checked),
        };
        self.renderer.render(&mut self.graphics, &props);
    }
}

impl UIEventTarget for Checkbox {
    fn mouse_entered(&mut self, _event: MouseEvent, phase: UIEventPhase) -> UIEventResponse {
        if phase != UIEventPhase::Target {
            return UIEventResponse::Ignored;
        }
        match self.core.mouse_entered() {
            Some(_) => {
                self.render();
                UIEventResponse::Processed
            }
            None => UIEventResponse::Ignored,
        }
    }

    fn mouse_exited(&mut self, _event: MouseEvent, phase: UIEventPhase) -> UIEventResponse {
        if phase != UIEventPhase::Target {
            return UIEventResponse::Ignored;
        }
        match self.core.mouse_exited() {
            Some(_) => {
                self.render();
                UIEventResponse::Processed
            }
            None => UIEventResponse::Ignored,
        }
    }

    fn focus_given(&mut self) -> UIEventResponse {
        let (response, changed) = self.core.focus_given();
        if changed.is_some() {
            self.render();
        }
        response
    }

    fn focus_taken(&mut self) -> UIEventResponse {
        match self.core.focus_taken() {
            Some(_) => {
                self.render();
                UIEventResponse::Processed
            }
            None => UIEventResponse::Ignored,
        }
    }

    fn activated(&mut self) -> UIEventResponse {
        match self.core.activated() {
            Some(_) => {
                // Two observable repaints: the ACTIVE look, then the
                // content change caused by the activation.
                self.render();
                self.checked = !self.checked;
                self.render();
                UIEventResponse::Processed
            }
            None => UIEventResponse::Ignored,
        }
    }

    fn accepts_focus(&self) -> bool {
        self.core.accepts_focus()
    }
}

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("text", &self.text)
            .field("checked", &self.checked)
            .field("state", &self.core.state())
            .finish()
    }
}

// =============================================================================
// DefaultCheckboxRenderer
// =============================================================================

/// Paints `[ ] label` / `[x] label` on row 0, label at cell offset 4.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCheckboxRenderer;

impl ComponentRenderer for DefaultCheckboxRenderer {
    fn render(&mut self, surface: &mut BasicSurface, props: &RenderProps) {
        surface.clear(props.style);
        let marker = if props.checked == Some(true) {
            "[x] "
        } else {
            "[ ] "
        };
        let covered = surface.draw_text(marker, Position::ZERO, props.style);
        surface.draw_text(&props.text, Position::new(covered as i32, 0), props.style);
    }
}

// =============================================================================
// Tests
// =============================================================================
