//! UI events - the contract between components and the dispatcher.
//!
//! The traversal engine that walks the component tree and decides
//! delivery order lives outside this crate. What is fixed here is the
//! shape of what it delivers: mouse events tagged with a dispatch
//! [`UIEventPhase`] (capture, then target, then bubble), focus
//! give/take, and activation. Components answer every delivery with a
//! [`UIEventResponse`] so the dispatcher can tell a handled event from
//! an ignored one without exceptions or side channels.

use crate::types::Position;

// =============================================================================
// Phase
// =============================================================================

/// The stage at which an event reaches a component on the dispatch path.
///
/// Capture runs root-to-target, then the target itself, then bubble
/// target-to-root. The built-in widgets act in the target phase only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UIEventPhase {
    Capture,
    Target,
    Bubble,
}

// =============================================================================
// Response
// =============================================================================

/// What a component did with a delivered event.
///
/// `Ignored` covers every request the component cannot honor - wrong
/// phase, wrong state, missing capability. It is an answer, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UIEventResponse {
    Processed,
    Ignored,
}

impl UIEventResponse {
    /// Whether the event was accepted.
    pub const fn is_processed(self) -> bool {
        matches!(self, Self::Processed)
    }
}

// =============================================================================
// Mouse events
// =============================================================================

/// What the mouse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventType {
    MouseEntered,
    MouseExited,
    MousePressed,
    MouseReleased,
    MouseMoved,
}

/// A mouse event, in owner-relative cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub event_type: MouseEventType,
    /// 1 = left, 2 = middle, 3 = right; 0 = none.
    pub button: u8,
    pub position: Position,
}

impl MouseEvent {
    /// Create a mouse event.
    pub const fn new(event_type: MouseEventType, button: u8, position: Position) -> Self {
        Self {
            event_type,
            button,
            position,
        }
    }
}

// =============================================================================
// Keyboard events
// =============================================================================

/// A key, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Space,
    Tab,
    Escape,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
}

/// A keyboard event as the dispatcher delivers it.
///
/// The dispatcher decodes keys before components see them: an activation
/// key on the focused component arrives as [`UIEventTarget::activated`],
/// not as a raw key. `is_activation` is that decoding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyboardEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyboardEvent {
    /// Create an unmodified key event.
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    /// Whether this key triggers the focused component.
    pub const fn is_activation(&self) -> bool {
        matches!(self.code, KeyCode::Space | KeyCode::Enter)
            && !self.ctrl
            && !self.alt
            && !self.shift
    }
}

// =============================================================================
// UIEventTarget
// =============================================================================

/// The contract every interactive component honors toward the external
/// dispatcher.
///
/// Phased methods receive the phase they are being visited in; the
/// focus/activation methods are phase-less because the dispatcher
/// resolves their target before calling.
pub trait UIEventTarget {
    /// The mouse crossed into this component's bounds.
    fn mouse_entered(&mut self, event: MouseEvent, phase: UIEventPhase) -> UIEventResponse;

    /// The mouse crossed out of this component's bounds.
    fn mouse_exited(&mut self, event: MouseEvent, phase: UIEventPhase) -> UIEventResponse;

    /// Input focus was offered to this component.
    fn focus_given(&mut self) -> UIEventResponse;

    /// Input focus was taken away from this component.
    fn focus_taken(&mut self) -> UIEventResponse;

    /// The component was triggered (mouse press or key activate).
    fn activated(&mut self) -> UIEventResponse;

    /// Fixed per-type capability: can this component ever hold focus?
    ///
    /// Independent of current state; a disabled checkbox still *can*
    /// accept focus by type, it just will not right now.
    fn accepts_focus(&self) -> bool;
}

// =============================================================================
// Tests
// =============================================================================
