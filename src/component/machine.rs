//! The interaction state machine.
//!
//! [`InteractionCore`] owns one component's [`ComponentState`] plus the
//! focus/hover flags that outlive individual states (a focused component
//! stays "focus-held" through an activation episode). Every method runs
//! the event through the transition table in [`transitions`] and reports
//! the new state when something changed, so the owning widget knows to
//! resolve the style and repaint - exactly once per applied transition.
//!
//! Re-entrancy: all methods take `&mut self` and widgets hand their
//! renderer disjoint `&mut` borrows, so a renderer callback cannot call
//! back into the machine that is mid-transition. Nested invocation is
//! ruled out by construction rather than documented away.
//!
//! [`transitions`]: crate::component::transitions

use tracing::trace;

use crate::component::transitions::{self, InteractionEvent};
use crate::component::ComponentState;
use crate::events::UIEventResponse;
use crate::style::{ComponentStyleSet, StyleSet};

// =============================================================================
// InteractionCore
// =============================================================================

/// Focus/hover/activation state for one interactive component.
#[derive(Debug, Clone)]
pub struct InteractionCore {
    state: ComponentState,
    focused: bool,
    hovered: bool,
    accepts_focus: bool,
    styles: ComponentStyleSet,
}

impl InteractionCore {
    /// Create a core in [`ComponentState::Default`].
    ///
    /// `accepts_focus` is the fixed per-type capability; it never changes
    /// for the lifetime of the component.
    pub fn new(accepts_focus: bool, styles: ComponentStyleSet) -> Self {
        Self {
            state: ComponentState::Default,
            focused: false,
            hovered: false,
            accepts_focus,
            styles,
        }
    }

    /// The current interaction state.
    pub fn state(&self) -> ComponentState {
        self.state
    }

    /// The style resolved for the current state.
    pub fn current_style(&self) -> StyleSet {
        self.styles.fetch_style_for(self.state)
    }

    /// The full per-state style table.
    pub fn styles(&self) -> &ComponentStyleSet {
        &self.styles
    }

    /// The fixed focus capability.
    pub fn accepts_focus(&self) -> bool {
        self.accepts_focus
    }

    /// Whether the component is administratively disabled.
    pub fn is_disabled(&self) -> bool {
        self.state == ComponentState::Disabled
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Mouse crossed in. Returns the new state if it changed.
    pub fn mouse_entered(&mut self) -> Option<ComponentState> {
        self.hovered = true;
        self.apply(InteractionEvent::MouseEntered)
    }

    /// Mouse crossed out. Returns the new state if it changed.
    pub fn mouse_exited(&mut self) -> Option<ComponentState> {
        self.hovered = false;
        self.apply(InteractionEvent::MouseExited)
    }

    /// Focus was offered.
    ///
    /// A component that cannot accept focus (by capability, or because it
    /// is disabled) answers `Ignored` and stays put. Otherwise the offer
    /// is `Processed`, with the state change (if any) alongside.
    pub fn focus_given(&mut self) -> (UIEventResponse, Option<ComponentState>) {
        if !self.accepts_focus || self.is_disabled() {
            return (UIEventResponse::Ignored, None);
        }
        self.focused = true;
        (UIEventResponse::Processed, self.apply(InteractionEvent::FocusGiven))
    }

    /// Focus was withdrawn. Unconditional.
    pub fn focus_taken(&mut self) -> Option<ComponentState> {
        self.focused = false;
        self.apply(InteractionEvent::FocusTaken)
    }

    /// The component was triggered.
    ///
    /// Legal only from `Focused` or `Highlighted`; anything else returns
    /// `None` (an ignored request, not a fault).
    pub fn activated(&mut self) -> Option<ComponentState> {
        self.apply(InteractionEvent::Activated)
    }

    /// The trigger completed; returns to `Focused` or `Highlighted`
    /// depending on the flags still held, or `Default` when neither is.
    pub fn activation_ended(&mut self) -> Option<ComponentState> {
        self.apply(InteractionEvent::ActivationEnded {
            focus_held: self.focused,
            hovered: self.hovered,
        })
    }

    /// Administratively enable or disable.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<ComponentState> {
        let event = if enabled {
            InteractionEvent::Enabled {
                focus_held: self.focused,
                hovered: self.hovered,
            }
        } else {
            InteractionEvent::Disabled
        };
        self.apply(event)
    }

    /// Run one event through the table; commit and report any change.
    fn apply(&mut self, event: InteractionEvent) -> Option<ComponentState> {
        let next = transitions::next_state(self.state, event)?;
        trace!(from = ?self.state, to = ?next, ?event, "interaction transition");
        self.state = next;
        Some(next)
    }
}

// =============================================================================
// Tests
// =============================================================================
