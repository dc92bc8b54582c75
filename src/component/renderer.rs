//! The component renderer contract, plus a recording test double.
//!
//! The state machine calls `render` exactly once per applied transition
//! and exactly twice for an activation (once for the ACTIVE style, once
//! for the content change the activation caused). Renderers return
//! nothing; a panicking renderer propagates to whoever drove the
//! transition - failures are never swallowed here.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::component::ComponentState;
use crate::style::StyleSet;
use crate::surface::BasicSurface;

// =============================================================================
// RenderProps
// =============================================================================

/// Everything a renderer gets to look at for one repaint: the state the
/// component is in, the style resolved for it, and the widget content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderProps {
    pub state: ComponentState,
    pub style: StyleSet,
    pub text: String,
    /// `Some` for widgets with a checked flag (checkbox), `None` otherwise.
    pub checked: Option<bool>,
}

// =============================================================================
// ComponentRenderer
// =============================================================================

/// Paints one component's current appearance into its surface.
pub trait ComponentRenderer: Send {
    fn render(&mut self, surface: &mut BasicSurface, props: &RenderProps);
}

// =============================================================================
// RendererStub
// =============================================================================

/// A recording renderer for tests.
///
/// Cloning yields another view onto the same recording, so a test can
/// keep one clone and hand the other to the widget. Optionally wraps a
/// real renderer so the surface still gets painted.
#[derive(Clone, Default)]
pub struct RendererStub {
    inner: Arc<Mutex<StubInner>>,
}

#[derive(Default)]
struct StubInner {
    renderings: Vec<RenderProps>,
    delegate: Option<Box<dyn ComponentRenderer>>,
}

impl RendererStub {
    /// A stub that records and paints nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stub that records and then delegates to `renderer`.
    pub fn wrapping(renderer: impl ComponentRenderer + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StubInner {
                renderings: Vec::new(),
                delegate: Some(Box::new(renderer)),
            })),
        }
    }

    /// Every recorded repaint, oldest first.
    pub fn renderings(&self) -> Vec<RenderProps> {
        self.inner.lock().renderings.clone()
    }

    /// Number of repaints recorded since the last `clear`.
    pub fn render_count(&self) -> usize {
        self.inner.lock().renderings.len()
    }

    /// The most recent repaint, if any.
    pub fn last_rendering(&self) -> Option<RenderProps> {
        self.inner.lock().renderings.last().cloned()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.inner.lock().renderings.clear();
    }
}

impl ComponentRenderer for RendererStub {
    fn render(&mut self, surface: &mut BasicSurface, props: &RenderProps) {
        let mut inner = self.inner.lock();
        inner.renderings.push(props.clone());
        if let Some(delegate) = inner.delegate.as_mut() {
            delegate.render(surface, props);
        }
    }
}

impl std::fmt::Debug for RendererStub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererStub")
            .field("render_count", &self.render_count())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
