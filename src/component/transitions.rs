//! The interaction transition table.
//!
//! One exhaustive match over every (state, event) pair, so every
//! combination has a defined outcome - including the no-ops. `None`
//! means "legal but nothing changes": the caller skips style resolution
//! and repaint for those.
//!
//! Capability checks (can this component take focus at all?) happen
//! before the table is consulted; the table only answers what a state
//! does with an event.

use crate::component::ComponentState;

// =============================================================================
// InteractionEvent
// =============================================================================

/// An input-driven event fed to the state machine.
///
/// `ActivationEnded` and `Enabled` carry the focus/hover flags the core
/// tracked across the episode, because where those transitions land
/// depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// Mouse crossed into the component.
    MouseEntered,
    /// Mouse crossed out of the component.
    MouseExited,
    /// Focus was offered (capability already verified).
    FocusGiven,
    /// Focus was withdrawn.
    FocusTaken,
    /// The component was triggered.
    Activated,
    /// The trigger completed (e.g. mouse released).
    ActivationEnded { focus_held: bool, hovered: bool },
    /// Administrative disable.
    Disabled,
    /// Administrative re-enable.
    Enabled { focus_held: bool, hovered: bool },
}

// =============================================================================
// Transition table
// =============================================================================

/// Where `state` goes on `event`; `None` when nothing changes.
pub const fn next_state(state: ComponentState, event: InteractionEvent) -> Option<ComponentState> {
    use ComponentState::{Active, Default, Disabled, Focused, Highlighted};
    use InteractionEvent as E;

    match (state, event) {
        // Hover highlighting only applies while unfocused.
        (Default, E::MouseEntered) => Some(Highlighted),
        (Highlighted | Focused | Active | Disabled, E::MouseEntered) => None,

        (Highlighted, E::MouseExited) => Some(Default),
        (Default | Focused | Active | Disabled, E::MouseExited) => None,

        // Focus wins over hover.
        (Default | Highlighted, E::FocusGiven) => Some(Focused),
        (Focused | Active | Disabled, E::FocusGiven) => None,

        // Losing focus is unconditional and lands at rest.
        (Focused, E::FocusTaken) => Some(Default),
        (Default | Highlighted | Active | Disabled, E::FocusTaken) => None,

        // Only a focused or highlighted component can be triggered.
        (Focused | Highlighted, E::Activated) => Some(Active),
        (Default | Active | Disabled, E::Activated) => None,

        // Activation returns to wherever focus/hover still point.
        (Active, E::ActivationEnded { focus_held: true, .. }) => Some(Focused),
        (
            Active,
            E::ActivationEnded {
                focus_held: false,
                hovered: true,
            },
        ) => Some(Highlighted),
        (
            Active,
            E::ActivationEnded {
                focus_held: false,
                hovered: false,
            },
        ) => Some(Default),
        (Default | Highlighted | Focused | Disabled, E::ActivationEnded { .. }) => None,

        // Disable overrides every other state; re-enable recomputes from
        // the retained flags.
        (Default | Highlighted | Focused | Active, E::Disabled) => Some(Disabled),
        (Disabled, E::Disabled) => None,

        (Disabled, E::Enabled { focus_held: true, .. }) => Some(Focused),
        (
            Disabled,
            E::Enabled {
                focus_held: false,
                hovered: true,
            },
        ) => Some(Highlighted),
        (
            Disabled,
            E::Enabled {
                focus_held: false,
                hovered: false,
            },
        ) => Some(Default),
        (Default | Highlighted | Focused | Active, E::Enabled { .. }) => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
