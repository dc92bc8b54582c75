//! Styling - colors and text modifiers.
//!
//! A [`StyleSet`] is the unit of visual appearance: foreground color,
//! background color and a set of text modifiers. Interactive components
//! carry one `StyleSet` per interaction state in a [`ComponentStyleSet`]
//! (see [`component_style`]).
//!
//! # Example
//!
//! ```rust
//! use ember_tui::style::{Modifiers, StyleSet};
//! use ember_tui::types::Rgba;
//!
//! let style = StyleSet::new(Rgba::CYAN, Rgba::BLACK)
//!     .with_modifiers(Modifiers::BOLD | Modifiers::UNDERLINE);
//! assert!(style.active_modifiers().contains(Modifiers::BOLD));
//! ```

use crate::types::Rgba;

pub mod component_style;

pub use component_style::{ComponentStyleSet, ComponentStyleSetBuilder};

// =============================================================================
// Modifiers (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text decorations as a bitfield: unordered, deduplicated, independent
    /// of color.
    ///
    /// Combine with bitwise OR: `Modifiers::BOLD | Modifiers::BLINK`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const CROSSED_OUT = 1 << 7;
    }
}

// =============================================================================
// StyleSet
// =============================================================================

/// A foreground color, a background color, and a set of text modifiers.
///
/// `Copy` on purpose: styles are stamped into every tile a renderer
/// touches, and cells compare by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSet {
    pub foreground: Rgba,
    pub background: Rgba,
    pub modifiers: Modifiers,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            foreground: Rgba::TERMINAL_DEFAULT,
            background: Rgba::TERMINAL_DEFAULT,
            modifiers: Modifiers::NONE,
        }
    }
}

impl StyleSet {
    /// Create a style with the given colors and no modifiers.
    pub const fn new(foreground: Rgba, background: Rgba) -> Self {
        Self {
            foreground,
            background,
            modifiers: Modifiers::NONE,
        }
    }

    /// This style with a different foreground.
    pub const fn with_foreground(mut self, foreground: Rgba) -> Self {
        self.foreground = foreground;
        self
    }

    /// This style with a different background.
    pub const fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// This style with the given modifier set.
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The currently active modifier set.
    pub const fn active_modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Turn a modifier (or several) on.
    pub fn enable_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers |= modifiers;
    }

    /// Turn a modifier (or several) off.
    pub fn disable_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers &= !modifiers;
    }

    /// Replace the whole modifier set.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Clear all modifiers.
    pub fn clear_modifiers(&mut self) {
        self.modifiers = Modifiers::NONE;
    }
}

// =============================================================================
// Tests
// =============================================================================
