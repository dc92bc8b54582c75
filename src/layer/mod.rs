//! Layers - positioned, sized surfaces composited into a stack.
//!
//! A [`Layer`] wraps a [`BasicSurface`] and adds a stable identity plus a
//! position relative to its owner. Layers live in a [`LayerStack`]
//! (z-order = index, 0 = bottom); every stack mutation hands back a
//! [`LayerHandle`], a capability object that keeps working against the
//! same layer while the stack is reordered around it, and goes inert the
//! moment the layer leaves the stack.
//!
//! # Example
//!
//! ```rust
//! use ember_tui::layer::{Layer, LayerStack};
//! use ember_tui::types::{Position, Size};
//!
//! let stack = LayerStack::new(Size::new(80, 24));
//! let handle = stack.add_layer(Layer::from_size(Position::ZERO, Size::new(10, 4)));
//! assert!(handle.move_to(Position::new(5, 5)));
//! assert!(handle.move_by_level(0));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::surface::{BasicSurface, TileSurface};
use crate::types::{Position, Rect, Size};

mod handle;
mod stack;

pub use handle::LayerHandle;
pub use stack::LayerStack;

// =============================================================================
// LayerId
// =============================================================================

/// Stable, process-unique layer identity.
///
/// Identities are never reused; removal and re-insertion of content
/// always goes through a fresh `Layer` with a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(0);

impl LayerId {
    fn next() -> Self {
        Self(NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

// =============================================================================
// LayerState
// =============================================================================

/// A point-in-time copy of one layer: where it is, how big it is, what it
/// shows. Produced by [`LayerStack::layer_states`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerState {
    pub position: Position,
    pub size: Size,
    pub content: BasicSurface,
}

// =============================================================================
// Layer
// =============================================================================

/// A positioned surface with identity.
///
/// Not `Clone`: a layer's identity exists exactly once, which is what
/// lets the stack forbid duplicate identities without checking for them.
/// Position and content sit behind their own locks so handle-driven moves
/// and renderer cell writes stay safe while the stack is read elsewhere.
#[derive(Debug)]
pub struct Layer {
    id: LayerId,
    size: Size,
    position: Mutex<Position>,
    surface: Mutex<BasicSurface>,
}

impl Layer {
    /// Create a layer from an existing surface.
    pub fn new(position: Position, surface: BasicSurface) -> Self {
        Self {
            id: LayerId::next(),
            size: surface.size(),
            position: Mutex::new(position),
            surface: Mutex::new(surface),
        }
    }

    /// Create a layer with a blank surface of `size`.
    pub fn from_size(position: Position, size: Size) -> Self {
        Self::new(position, BasicSurface::new(size))
    }

    /// The stable identity.
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// The current offset from the owner's origin.
    pub fn position(&self) -> Position {
        *self.position.lock()
    }

    /// The (fixed) extent.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The current bounding rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position(), self.size)
    }

    /// Point-in-time copy of position, size and content.
    pub fn state(&self) -> LayerState {
        LayerState {
            position: self.position(),
            size: self.size,
            content: self.surface.lock().clone(),
        }
    }

    /// Run `f` with exclusive access to the backing surface.
    ///
    /// This is the rendering path: widget renderers repaint cells through
    /// here, never through the stack.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut BasicSurface) -> R) -> R {
        f(&mut self.surface.lock())
    }

    /// Unconditional relocation. Bounds checking happens in the handle,
    /// which knows the owner.
    pub(crate) fn relocate(&self, position: Position) {
        *self.position.lock() = position;
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// A disposable listener registration associated with one layer identity.
///
/// The stack keeps at most one per layer and disposes it when the layer
/// is removed or replaced. Disposal runs the callback at most once, no
/// matter how often it is triggered (explicitly or by drop).
pub struct Subscription {
    on_dispose: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Create a subscription whose disposal runs `on_dispose`.
    pub fn new(on_dispose: impl FnOnce() + Send + 'static) -> Self {
        Self {
            on_dispose: Some(Box::new(on_dispose)),
        }
    }

    /// Dispose now, consuming the subscription.
    pub fn dispose(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(f) = self.on_dispose.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.on_dispose.is_none())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
