//! Interactive components - the per-component state machine and the
//! built-in widgets driven by it.
//!
//! Every interactive element owns an [`InteractionCore`]: the finite
//! state machine over [`ComponentState`] that tracks focus, hover
//! highlighting and activation, resolves the state's style from the
//! component's [`ComponentStyleSet`] and drives repaints through a
//! pluggable [`ComponentRenderer`].
//!
//! # Modules
//!
//! - [`transitions`] - the explicit (state, event) transition table
//! - [`machine`] - the state machine wrapper around the table
//! - [`renderer`] - the renderer contract plus a recording test double
//! - [`checkbox`], [`button`], [`label`] - built-in widgets

use crate::style::ComponentStyleSet;
use crate::types::{Position, Size};

pub mod button;
pub mod checkbox;
pub mod label;
pub mod machine;
pub mod renderer;
pub mod transitions;

pub use button::{Button, DefaultButtonRenderer};
pub use checkbox::{Checkbox, DefaultCheckboxRenderer};
pub use label::{DefaultLabelRenderer, Label};
pub use machine::InteractionCore;
pub use renderer::{ComponentRenderer, RenderProps, RendererStub};
pub use transitions::{InteractionEvent, next_state};

// =============================================================================
// ComponentState
// =============================================================================

/// The discrete interaction mode of one component.
///
/// Exactly one state holds at any instant; it is owned and mutated only
/// by the component's [`InteractionCore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(usize)]
pub enum ComponentState {
    /// At rest: no hover, no focus.
    #[default]
    Default = 0,
    /// Mouse is over the component and it is not focused.
    Highlighted = 1,
    /// Holds input focus.
    Focused = 2,
    /// Currently being triggered.
    Active = 3,
    /// Administratively disabled; overrides everything while set.
    Disabled = 4,
}

impl ComponentState {
    /// Number of enumerated states.
    pub const COUNT: usize = 5;

    /// Every state, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Default,
        Self::Highlighted,
        Self::Focused,
        Self::Active,
        Self::Disabled,
    ];
}

// =============================================================================
// ComponentMetadata
// =============================================================================

/// Construction-time data shared by every widget: where it sits inside
/// its parent, how big it is, and how each state looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentMetadata {
    pub size: Size,
    pub position: Position,
    pub styles: ComponentStyleSet,
}

impl ComponentMetadata {
    /// Create metadata.
    pub const fn new(size: Size, position: Position, styles: ComponentStyleSet) -> Self {
        Self {
            size,
            position,
            styles,
        }
    }
}
