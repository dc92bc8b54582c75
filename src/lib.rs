//! # ember-tui
//!
//! Character-grid UI toolkit core for Rust.
//!
//! ember-tui composes visual *layers* into a screen and runs stateful
//! interactive widgets (buttons, checkboxes) on top of that grid, with
//! phase-based input dispatch (capture -> target -> bubble) like a
//! windowing event system - except the unit is a character cell, not a
//! pixel.
//!
//! ## Architecture
//!
//! ```text
//! input event -> Dispatcher (external) -> component state machine
//!                                              |
//!                                     style resolution (per state)
//!                                              |
//!                                     ComponentRenderer repaint
//!                                              |
//! LayerStack (thread-safe z-ordered layers) -> composite -> screen grid
//! ```
//!
//! The two load-bearing pieces are the [`layer`] module (an ordered,
//! thread-safe layer collection with capability handles) and the
//! [`component`] module (the focus/hover/activation state machine with
//! an explicit transition table). Everything else - surfaces, styles,
//! events - exists to serve those two.
//!
//! ## Modules
//!
//! - [`types`] - core value types (Position, Size, Rect, Rgba)
//! - [`style`] - modifiers, style sets, per-state style tables
//! - [`surface`] - the tile grid contract and in-memory implementation
//! - [`layer`] - layers, the layer stack, layer handles, compositing
//! - [`component`] - interaction state machine and built-in widgets
//! - [`events`] - the dispatcher-facing event contract
//! - [`error`] - failure values for stack operations

pub mod component;
pub mod error;
pub mod events;
pub mod layer;
pub mod style;
pub mod surface;
pub mod types;

// Re-export commonly used items
pub use types::{Position, Rect, Rgba, Size};

pub use style::{ComponentStyleSet, ComponentStyleSetBuilder, Modifiers, StyleSet};

pub use surface::{BasicSurface, Tile, TileSurface};

pub use layer::{Layer, LayerHandle, LayerId, LayerStack, LayerState, Subscription};

pub use component::{
    Button, Checkbox, ComponentMetadata, ComponentRenderer, ComponentState,
    DefaultButtonRenderer, DefaultCheckboxRenderer, DefaultLabelRenderer, InteractionCore,
    Label, RenderProps, RendererStub,
};

pub use events::{
    KeyCode, KeyboardEvent, MouseEvent, MouseEventType, UIEventPhase, UIEventResponse,
    UIEventTarget,
};

pub use error::LayerError;
