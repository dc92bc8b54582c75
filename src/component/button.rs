//! Button - a focusable, triggerable widget.
//!
//! Same interaction protocol as the checkbox, but its activation content
//! change is firing the registered activation callback instead of
//! flipping a flag. The two-repaint activation contract still holds: one
//! repaint entering ACTIVE, one after the callback ran.

use crate::component::machine::InteractionCore;
use crate::component::renderer::{ComponentRenderer, RenderProps};
use crate::component::{ComponentMetadata, ComponentState};
use crate::events::{MouseEvent, UIEventPhase, UIEventResponse, UIEventTarget};
use crate::style::StyleSet;
use crate::surface::{BasicSurface, TileSurface};
use crate::types::{Position, Size};

// =============================================================================
// Button
// =============================================================================

/// A push button with a text label.
pub struct Button {
    position: Position,
    graphics: BasicSurface,
    core: InteractionCore,
    renderer: Box<dyn ComponentRenderer>,
    text: String,
    on_activate: Option<Box<dyn FnMut() + Send>>,
}

impl Button {
    /// Create a button and paint its initial (DEFAULT) appearance.
    pub fn new(
        metadata: ComponentMetadata,
        renderer: impl ComponentRenderer + 'static,
        text: impl Into<String>,
    ) -> Self {
        let mut button = Self {
            position: metadata.position,
            graphics: BasicSurface::new(metadata.size),
            core: InteractionCore::new(true, metadata.styles),
            renderer: Box::new(renderer),
            text: text.into(),
            on_activate: None,
        };
        button.render();
        button
    }

    /// Register the callback fired on activation.
    pub fn on_activate(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_activate = Some(Box::new(callback));
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
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
            checked: None,
        };
        self.renderer.render(&mut self.graphics, &props);
    }
}

impl UIEventTarget for Button {
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
                self.render();
                if let Some(callback) = self.on_activate.as_mut() {
                    callback();
                }
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

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text)
            .field("state", &self.core.state())
            .finish()
    }
}

// =============================================================================
// DefaultButtonRenderer
// =============================================================================

/// Paints the label on row 0 in the resolved style.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultButtonRenderer;

impl ComponentRenderer for DefaultButtonRenderer {
    fn render(&mut self, surface: &mut BasicSurface, props: &RenderProps) {
        surface.clear(props.style);
        surface.draw_text(&props.text, Position::ZERO, props.style);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::renderer::RendererStub;
    use crate::style::ComponentStyleSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn target() -> (Button, RendererStub) {
        let stub = RendererStub::wrapping(DefaultButtonRenderer);
        let metadata = ComponentMetadata::new(
            Size::new(10, 1),
            Position::ZERO,
            ComponentStyleSet::default(),
        );
        let button = Button::new(metadata, stub.clone(), "OK");
        stub.clear();
        (button, stub)
    }

    #[test]
    fn test_activation_fires_callback_between_renders() {
        let (mut button, stub) = target();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        button.on_activate(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        button.focus_given();
        stub.clear();
        let result = button.activated();

        assert_eq!(result, UIEventResponse::Processed);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(stub.render_count(), 2);
        assert_eq!(button.state(), ComponentState::Active);
    }

    #[test]
    fn test_activation_end_returns_to_focused() {
        let (mut button, _stub) = target();
        button.focus_given();
        button.activated();
        assert_eq!(button.activation_ended(), Some(ComponentState::Focused));
        assert_eq!(button.state(), ComponentState::Focused);
    }
}
