//! Per-interaction-state style tables.
//!
//! A [`ComponentStyleSet`] maps every [`ComponentState`] to a [`StyleSet`].
//! The table is built once at component construction and never mutated;
//! coverage of the whole state set is guaranteed by the builder (states
//! not given explicitly fall back to the default style), so lookup is
//! total and infallible.

use crate::component::ComponentState;
use crate::style::StyleSet;

// =============================================================================
// ComponentStyleSet
// =============================================================================

/// An immutable style-per-state table for one interactive component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentStyleSet {
    styles: [StyleSet; ComponentState::COUNT],
}

impl ComponentStyleSet {
    /// Start building a style set.
    pub fn builder() -> ComponentStyleSetBuilder {
        ComponentStyleSetBuilder::new()
    }

    /// A style set rendering every state with `style`.
    pub const fn uniform(style: StyleSet) -> Self {
        Self {
            styles: [style; ComponentState::COUNT],
        }
    }

    /// Look up the style for `state`.
    ///
    /// Pure and total: every enumerated state has an entry by construction.
    pub const fn fetch_style_for(&self, state: ComponentState) -> StyleSet {
        self.styles[state as usize]
    }
}

impl Default for ComponentStyleSet {
    fn default() -> Self {
        Self::uniform(StyleSet::default())
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`ComponentStyleSet`].
///
/// Any state style not set explicitly falls back to the default-state
/// style, so a built table always covers the full state set.
#[derive(Debug, Clone, Default)]
pub struct ComponentStyleSetBuilder {
    default_style: StyleSet,
    highlighted: Option<StyleSet>,
    focused: Option<StyleSet>,
    active: Option<StyleSet>,
    disabled: Option<StyleSet>,
}

impl ComponentStyleSetBuilder {
    /// Create a builder with all states on the default `StyleSet`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for [`ComponentState::Default`] (and the fallback for any
    /// state left unset).
    pub fn with_default_style(mut self, style: StyleSet) -> Self {
        self.default_style = style;
        self
    }

    /// Style for [`ComponentState::Highlighted`] (mouse-over).
    pub fn with_highlighted_style(mut self, style: StyleSet) -> Self {
        self.highlighted = Some(style);
        self
    }

    /// Style for [`ComponentState::Focused`].
    pub fn with_focused_style(mut self, style: StyleSet) -> Self {
        self.focused = Some(style);
        self
    }

    /// Style for [`ComponentState::Active`].
    pub fn with_active_style(mut self, style: StyleSet) -> Self {
        self.active = Some(style);
        self
    }

    /// Style for [`ComponentState::Disabled`].
    pub fn with_disabled_style(mut self, style: StyleSet) -> Self {
        self.disabled = Some(style);
        self
    }

    /// Build the immutable table.
    pub fn build(self) -> ComponentStyleSet {
        let fallback = self.default_style;
        let mut styles = [fallback; ComponentState::COUNT];
        styles[ComponentState::Highlighted as usize] = self.highlighted.unwrap_or(fallback);
        styles[ComponentState::Focused as usize] = self.focused.unwrap_or(fallback);
        styles[ComponentState::Active as usize] = self.active.unwrap_or(fallback);
        styles[ComponentState::Disabled as usize] = self.disabled.unwrap_or(fallback);
        ComponentStyleSet { styles }
    }
}

// =============================================================================
// Tests
// =============================================================================
