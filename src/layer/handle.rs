//! Layer handles - the capability returned by every stack mutation.
//!
//! A handle owns a reference to its backing layer and to the stack that
//! issued it. It never caches an index: every operation re-resolves the
//! layer by identity, so a handle keeps working across arbitrary
//! reorders and goes inert ("detached") the moment its layer leaves the
//! stack - by `remove` through this or any other handle, or by
//! `set_layer_at` replacing it. Detached handles fail every mutation
//! with a `false`/`None` result; nothing panics.
//!
//! Content queries forward to the backing layer through named methods
//! (explicit composition, no blanket delegation): a detached handle can
//! still *read* the orphaned layer, it just cannot affect the stack.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::layer::stack::StackInner;
use crate::layer::{Layer, LayerId, LayerState};
use crate::surface::BasicSurface;
use crate::types::{Position, Rect, Size};

// =============================================================================
// LayerHandle
// =============================================================================

/// Exclusive capability over one layer inside one stack.
#[derive(Debug)]
pub struct LayerHandle {
    backend: Arc<Layer>,
    stack: Arc<StackInner>,
    /// Cleared on successful removal; once cleared it never comes back.
    attached: AtomicBool,
}

impl LayerHandle {
    pub(crate) fn new(backend: Arc<Layer>, stack: Arc<StackInner>) -> Self {
        Self {
            backend,
            stack,
            attached: AtomicBool::new(true),
        }
    }

    // -------------------------------------------------------------------------
    // Forwarded content queries
    // -------------------------------------------------------------------------

    /// The backing layer's identity.
    pub fn id(&self) -> LayerId {
        self.backend.id()
    }

    /// The backing layer's current position.
    pub fn position(&self) -> Position {
        self.backend.position()
    }

    /// The backing layer's extent.
    pub fn size(&self) -> Size {
        self.backend.size()
    }

    /// The backing layer's current bounding rectangle.
    pub fn bounds(&self) -> Rect {
        self.backend.bounds()
    }

    /// Point-in-time copy of the backing layer.
    pub fn state(&self) -> LayerState {
        self.backend.state()
    }

    /// Run `f` with exclusive access to the backing surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut BasicSurface) -> R) -> R {
        self.backend.with_surface(f)
    }

    // -------------------------------------------------------------------------
    // Stack-affecting operations
    // -------------------------------------------------------------------------

    /// Whether this handle can still affect the stack.
    ///
    /// True only while the handle was never used for a successful removal
    /// *and* the backing layer is still resolvable in the stack by
    /// identity.
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire) && self.stack.contains_id(self.backend.id())
    }

    /// Remove the backing layer from the stack.
    ///
    /// Returns whether a removal occurred. Success makes this handle
    /// permanently inert; every later call fails.
    pub fn remove(&self) -> bool {
        if !self.attached.swap(false, Ordering::AcqRel) {
            return false;
        }
        self.stack.remove_by_id(self.backend.id())
    }

    /// Move the backing layer to `position`.
    ///
    /// Succeeds only while attached and only if the moved bounding
    /// rectangle stays inside the owner's bounds; otherwise returns
    /// `false` with the position unchanged.
    pub fn move_to(&self, position: Position) -> bool {
        if !self.attached.load(Ordering::Acquire) {
            return false;
        }
        self.stack.move_layer_to(&self.backend, position)
    }

    /// Re-locate the backing layer within the z-order by `delta`
    /// positions (positive = toward the top).
    ///
    /// `delta == 0` is a no-op success for any attached handle. A
    /// detached handle, or a target index outside `0..len`, fails and
    /// leaves the order untouched.
    pub fn move_by_level(&self, delta: isize) -> bool {
        if !self.is_attached() {
            return false;
        }
        if delta == 0 {
            return true;
        }
        self.stack.move_by_level(self.backend.id(), delta)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerStack;

    fn stack() -> LayerStack {
        LayerStack::new(Size::new(20, 10))
    }

    fn handle_in(stack: &LayerStack) -> LayerHandle {
        stack.add_layer(Layer::from_size(Position::ZERO, Size::new(5, 2)))
    }

    #[test]
    fn test_move_to_inside_bounds_succeeds() {
        let stack = stack();
        let handle = handle_in(&stack);
        assert!(handle.move_to(Position::new(15, 8)));
        assert_eq!(handle.position(), Position::new(15, 8));
    }

    #[test]
    fn test_move_to_outside_bounds_fails_unchanged() {
        let stack = stack();
        let handle = handle_in(&stack);
        // 16 + 5 > 20: sticks out on the right.
        assert!(!handle.move_to(Position::new(16, 0)));
        assert!(!handle.move_to(Position::new(0, 9)));
        assert!(!handle.move_to(Position::new(-1, 0)));
        assert_eq!(handle.position(), Position::ZERO);
    }

    #[test]
    fn test_move_by_level_zero_is_noop_success() {
        let stack = stack();
        let handle = handle_in(&stack);
        assert!(handle.move_by_level(0));
    }

    #[test]
    fn test_move_by_level_out_of_range_fails_order_unchanged() {
        let stack = stack();
        let a = handle_in(&stack);
        let b = handle_in(&stack);
        let c = handle_in(&stack);

        assert!(!b.move_by_level(2));
        assert!(!b.move_by_level(-2));
        assert!(!b.move_by_level(isize::MAX));
        assert!(!b.move_by_level(isize::MIN));

        let order: Vec<_> = (0..3).map(|i| stack.layer_at(i).unwrap().id()).collect();
        assert_eq!(order, vec![a.id(), b.id(), c.id()]);
    }

    #[test]
    fn test_move_by_level_reorders() {
        let stack = stack();
        let a = handle_in(&stack);
        let b = handle_in(&stack);
        let c = handle_in(&stack);

        assert!(a.move_by_level(2));
        let order: Vec<_> = (0..3).map(|i| stack.layer_at(i).unwrap().id()).collect();
        assert_eq!(order, vec![b.id(), c.id(), a.id()]);
    }

    #[test]
    fn test_every_operation_fails_after_removal() {
        let stack = stack();
        let handle = handle_in(&stack);
        assert!(handle.remove());

        assert!(!handle.is_attached());
        assert!(!handle.remove());
        assert!(!handle.move_to(Position::new(1, 1)));
        assert!(!handle.move_by_level(0));
        assert!(!handle.move_by_level(1));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_handle_resolves_by_identity_not_index() {
        let stack = stack();
        let a = handle_in(&stack);
        let _b = handle_in(&stack);
        let _c = handle_in(&stack);

        // Reorder underneath the handle: it still finds its own layer.
        assert!(a.move_by_level(2));
        assert!(a.move_by_level(-1));
        assert_eq!(stack.layer_at(1).unwrap().id(), a.id());
    }

    #[test]
    fn test_removal_through_stack_detaches_handle() {
        let stack = stack();
        let handle = handle_in(&stack);
        assert!(stack.remove_layer(handle.id()));
        assert!(!handle.is_attached());
        assert!(!handle.move_to(Position::new(1, 1)));
        assert!(!handle.move_by_level(1));
    }
}
