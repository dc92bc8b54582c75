//! Error taxonomy for the layer stack.
//!
//! Expected-at-runtime failures are values, never panics: indexed stack
//! operations report `InvalidIndex`. The other failure classes have no
//! error value because their reporting channel is narrower: operations
//! through a detached handle answer `false`/`None` (see
//! [`LayerHandle`]), ignored component requests answer
//! `UIEventResponse::Ignored`, and style tables cannot be
//! under-specified at all (the builder is total over the state set).
//!
//! [`LayerHandle`]: crate::layer::LayerHandle

use thiserror::Error;

/// Failures reported by layer stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayerError {
    /// An index-based operation fell outside the valid range.
    #[error("index {index} is out of bounds for a layer stack of length {len}")]
    InvalidIndex { index: usize, len: usize },
}
