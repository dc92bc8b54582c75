//! Core types for ember-tui.
//!
//! These are the value types everything else builds on: grid coordinates,
//! extents, bounding rectangles and colors. They flow through the layer
//! stack and the component state machine and define what a renderer
//! understands.

// =============================================================================
// Position
// =============================================================================

/// A cell coordinate, offset from an owner's origin.
///
/// Coordinates are signed so that intermediate arithmetic (e.g. scroll
/// offsets) cannot wrap; a layer whose position would leave its owner's
/// bounds is rejected at move time, not clamped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Translate by another position treated as an offset.
    pub const fn offset_by(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

// =============================================================================
// Size
// =============================================================================

/// A width/height extent in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// A 1x1 size.
    pub const ONE: Self = Self {
        width: 1,
        height: 1,
    };

    /// Total cell count.
    pub const fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check whether a position falls inside `(0, 0)..(width, height)`.
    #[inline]
    pub const fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

// =============================================================================
// Rect
// =============================================================================

/// A positioned rectangle: the bounding box of a layer or component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub position: Position,
    pub size: Size,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    /// This rect relocated to `position`, keeping its size.
    pub const fn with_position(self, position: Position) -> Self {
        Self {
            position,
            size: self.size,
        }
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(self) -> i32 {
        self.position.x + self.size.width as i32
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.position.y + self.size.height as i32
    }

    /// Check whether `other` lies entirely within this rect.
    ///
    /// Every move of a layer is validated against the owner's bounds with
    /// this check before it is accepted.
    pub const fn contains_rect(self, other: Rect) -> bool {
        other.position.x >= self.position.x
            && other.position.y >= self.position.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Integers for exact comparison - no floating point epsilon needed.
/// Special values use negative markers: r=-1 means "terminal default"
/// (let the terminal pick), r=-2 means "ANSI palette index in g".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let the terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create an ANSI palette color (0-255).
    ///
    /// - 0-7: Standard colors
    /// - 8-15: Bright colors
    /// - 16-231: 6x6x6 RGB cube
    /// - 232-255: Grayscale
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if this is an ANSI palette color.
    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get the ANSI palette index (only valid if `is_ansi()`).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Check if the color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

// =============================================================================
// Tests
// =============================================================================
