//! The thread-safe ordered layer collection.
//!
//! One `LayerStack` per owner (a screen or a container). All mutation
//! runs under a single stack-wide write lock so two concurrent reorders
//! can never interleave into a corrupted or duplicated index space;
//! reads take the read lock and always observe a contiguous, gap-free
//! sequence. Nothing here blocks on I/O, so every call completes in
//! bounded time.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::error::LayerError;
use crate::layer::{Layer, LayerHandle, LayerId, LayerState, Subscription};
use crate::surface::TileSurface;
use crate::types::{Position, Rect, Size};

// =============================================================================
// LayerStack
// =============================================================================

/// An owner-scoped, thread-safe, ordered collection of layers.
///
/// Z-order equals sequence order: index 0 is the bottom, the last index
/// is drawn on top. Identities are unique by construction ([`Layer`] is
/// not `Clone` and is consumed on insertion).
#[derive(Debug, Clone)]
pub struct LayerStack {
    inner: Arc<StackInner>,
}

#[derive(Debug)]
pub(crate) struct StackInner {
    size: Size,
    layers: RwLock<Vec<Arc<Layer>>>,
    subscriptions: Mutex<HashMap<LayerId, Subscription>>,
}

impl LayerStack {
    /// Create an empty stack whose owner spans `size`.
    pub fn new(size: Size) -> Self {
        Self {
            inner: Arc::new(StackInner {
                size,
                layers: RwLock::new(Vec::new()),
                subscriptions: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// The owner's bounds; layer moves are validated against this.
    pub fn size(&self) -> Size {
        self.inner.size
    }

    /// Number of layers currently in the stack.
    pub fn len(&self) -> usize {
        self.inner.layers.read().len()
    }

    /// Whether the stack holds no layers.
    pub fn is_empty(&self) -> bool {
        self.inner.layers.read().is_empty()
    }

    /// Point-in-time snapshot of every layer, bottom to top.
    ///
    /// Snapshot-copy semantics: the returned states stay valid and
    /// iterable no matter what happens to the stack afterwards.
    pub fn layer_states(&self) -> Vec<LayerState> {
        self.inner
            .layers
            .read()
            .iter()
            .map(|layer| layer.state())
            .collect()
    }

    /// The handle for the layer at `index`, or `None` when out of range.
    pub fn layer_at(&self, index: usize) -> Option<LayerHandle> {
        let layers = self.inner.layers.read();
        layers
            .get(index)
            .map(|layer| LayerHandle::new(Arc::clone(layer), Arc::clone(&self.inner)))
    }

    /// Append `layer` at the top of the stack. Always succeeds.
    pub fn add_layer(&self, layer: Layer) -> LayerHandle {
        let layer = Arc::new(layer);
        let mut layers = self.inner.layers.write();
        layers.push(Arc::clone(&layer));
        debug!(id = %layer.id(), index = layers.len() - 1, "layer added");
        LayerHandle::new(layer, Arc::clone(&self.inner))
    }

    /// Insert `layer` at `index`, shifting everything above it up.
    ///
    /// Valid indices are `0..=len`. An invalid index reports
    /// [`LayerError::InvalidIndex`] and mutates nothing.
    pub fn insert_layer_at(&self, index: usize, layer: Layer) -> Result<LayerHandle, LayerError> {
        let layer = Arc::new(layer);
        let mut layers = self.inner.layers.write();
        check_index(index, layers.len(), true)?;
        layers.insert(index, Arc::clone(&layer));
        debug!(id = %layer.id(), index, "layer inserted");
        Ok(LayerHandle::new(layer, Arc::clone(&self.inner)))
    }

    /// Replace the layer occupying `index` with `layer`.
    ///
    /// Fails on an invalid index without mutating. The subscription
    /// registered for the replaced layer's identity is disposed; any
    /// handle to the replaced layer detaches.
    pub fn set_layer_at(&self, index: usize, layer: Layer) -> Result<LayerHandle, LayerError> {
        let layer = Arc::new(layer);
        let replaced = {
            let mut layers = self.inner.layers.write();
            check_index(index, layers.len(), false)?;
            std::mem::replace(&mut layers[index], Arc::clone(&layer))
        };
        debug!(id = %layer.id(), replaced = %replaced.id(), index, "layer replaced");
        self.inner.dispose_subscription(replaced.id());
        Ok(LayerHandle::new(layer, Arc::clone(&self.inner)))
    }

    /// Remove the first layer matching `id`.
    ///
    /// Returns whether a removal occurred; removing an absent identity is
    /// a no-op returning `false`. The layer's subscription is disposed
    /// exactly once.
    pub fn remove_layer(&self, id: LayerId) -> bool {
        self.inner.remove_by_id(id)
    }

    /// Associate a disposable subscription with a layer identity.
    ///
    /// At most one subscription per identity: registering again disposes
    /// the previous one. The stack disposes the registration when the
    /// layer is removed or replaced.
    pub fn set_subscription(&self, id: LayerId, subscription: Subscription) {
        let previous = self.inner.subscriptions.lock().insert(id, subscription);
        if let Some(previous) = previous {
            previous.dispose();
        }
    }

    /// Flatten a snapshot of the stack onto `target`, bottom to top.
    ///
    /// Each layer's cells are copied at its offset; cells falling outside
    /// the target are dropped. Later (higher) layers win per cell.
    pub fn composite_onto(&self, target: &mut dyn TileSurface) {
        for state in self.layer_states() {
            for y in 0..state.size.height as i32 {
                for x in 0..state.size.width as i32 {
                    let source = Position::new(x, y);
                    if let Some(tile) = state.content.tile_at(source) {
                        target.set_tile_at(source.offset_by(state.position), tile);
                    }
                }
            }
        }
    }
}

// =============================================================================
// StackInner - shared with handles
// =============================================================================

impl StackInner {
    /// Owner bounds as a rect at the origin.
    pub(crate) fn bounds(&self) -> Rect {
        Rect::new(Position::ZERO, self.size)
    }

    pub(crate) fn remove_by_id(&self, id: LayerId) -> bool {
        let removed = {
            let mut layers = self.layers.write();
            match layers.iter().position(|layer| layer.id() == id) {
                Some(index) => {
                    layers.remove(index);
                    true
                }
                None => false,
            }
        };
        if removed {
            debug!(id = %id, "layer removed");
            self.dispose_subscription(id);
        }
        removed
    }

    /// Relocate a layer, checking attachment and owner containment under
    /// the stack's write lock so the check and the move are one step.
    pub(crate) fn move_layer_to(&self, layer: &Layer, position: Position) -> bool {
        let layers = self.layers.write();
        if !layers.iter().any(|candidate| candidate.id() == layer.id()) {
            return false;
        }
        let moved = layer.bounds().with_position(position);
        if !self.bounds().contains_rect(moved) {
            trace!(id = %layer.id(), ?position, "move rejected: outside owner bounds");
            return false;
        }
        layer.relocate(position);
        true
    }

    /// Re-locate a layer's entry within the order by `delta` positions.
    ///
    /// One atomic read-modify-write of the whole sequence: the index is
    /// resolved by identity, the target validated, and the reorder done,
    /// all under a single write-lock acquisition. Any failure leaves the
    /// sequence untouched.
    pub(crate) fn move_by_level(&self, id: LayerId, delta: isize) -> bool {
        let mut layers = self.layers.write();
        let Some(old_index) = layers.iter().position(|layer| layer.id() == id) else {
            return false;
        };
        // Checked arithmetic: an absurd delta fails cleanly instead of
        // wrapping into an accidentally valid index.
        let Some(new_index) = (old_index as isize).checked_add(delta) else {
            return false;
        };
        if new_index < 0 || new_index as usize >= layers.len() {
            return false;
        }
        let layer = layers.remove(old_index);
        layers.insert(new_index as usize, layer);
        debug!(id = %id, from = old_index, to = new_index, "layer re-leveled");
        true
    }

    pub(crate) fn contains_id(&self, id: LayerId) -> bool {
        self.layers.read().iter().any(|layer| layer.id() == id)
    }

    fn dispose_subscription(&self, id: LayerId) {
        let subscription = self.subscriptions.lock().remove(&id);
        if let Some(subscription) = subscription {
            subscription.dispose();
        }
    }
}

/// The one bounds check every indexed stack operation goes through.
///
/// `allow_end` widens the valid range from `0..len` to `0..=len`, which
/// is what insertion needs. The reported `len` is always the actual
/// stack length.
fn check_index(index: usize, len: usize, allow_end: bool) -> Result<(), LayerError> {
    let bound = if allow_end { len + 1 } else { len };
    if index < bound {
        Ok(())
    } else {
        Err(LayerError::InvalidIndex { index, len })
    }
}

// =============================================================================
// Tests
// =============================================================================
