//! Tile surfaces - fixed-size grids of displayable cells.
//!
//! The layer stack and the widgets only ever talk to a surface through the
//! narrow [`TileSurface`] interface: a size, a cell read, a cell write.
//! [`BasicSurface`] is the in-memory implementation used by layers and by
//! the built-in widget renderers.
//!
//! Text drawing is grapheme-aware (`unicode-segmentation`) and
//! width-aware (`unicode-width`): a double-width glyph occupies two cells,
//! the second one left as a continuation blank.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::style::StyleSet;
use crate::types::{Position, Size};

// =============================================================================
// Tile
// =============================================================================

/// A single displayable cell: one glyph plus its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub glyph: char,
    pub style: StyleSet,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            glyph: ' ',
            style: StyleSet::default(),
        }
    }
}

impl Tile {
    /// Create a tile.
    pub const fn new(glyph: char, style: StyleSet) -> Self {
        Self { glyph, style }
    }

    /// An empty (space) tile with the given style.
    pub const fn empty(style: StyleSet) -> Self {
        Self { glyph: ' ', style }
    }
}

// =============================================================================
// TileSurface
// =============================================================================

/// The narrow contract a cell grid must offer the toolkit.
///
/// The core never assumes anything about cell storage beyond this: a
/// fixed size, positional reads, positional writes. Out-of-bounds reads
/// return `None`, out-of-bounds writes return `false`; neither panics.
pub trait TileSurface {
    /// The grid extent.
    fn size(&self) -> Size;

    /// Read the tile at `position`, if it is in bounds.
    fn tile_at(&self, position: Position) -> Option<Tile>;

    /// Write the tile at `position`. Returns whether the write landed.
    fn set_tile_at(&mut self, position: Position, tile: Tile) -> bool;

    /// Fill the whole surface with one tile.
    fn fill(&mut self, tile: Tile) {
        let size = self.size();
        for y in 0..size.height as i32 {
            for x in 0..size.width as i32 {
                self.set_tile_at(Position::new(x, y), tile);
            }
        }
    }
}

// =============================================================================
// BasicSurface
// =============================================================================

/// An in-memory tile grid in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicSurface {
    size: Size,
    tiles: Vec<Tile>,
}

impl BasicSurface {
    /// Create a surface of `size` filled with default (space) tiles.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            tiles: vec![Tile::default(); size.cell_count()],
        }
    }

    #[inline]
    fn index_of(&self, position: Position) -> Option<usize> {
        if self.size.contains(position) {
            Some(position.y as usize * self.size.width as usize + position.x as usize)
        } else {
            None
        }
    }

    /// Clear to empty tiles carrying `style`.
    pub fn clear(&mut self, style: StyleSet) {
        self.tiles.fill(Tile::empty(style));
    }

    /// Draw `text` starting at `position`, stamping `style` on every cell.
    ///
    /// Draws grapheme by grapheme; a double-width grapheme takes two
    /// cells. Stops at the right edge. Returns the number of cells
    /// covered; a start position outside the surface paints nothing and
    /// returns 0.
    pub fn draw_text(&mut self, text: &str, position: Position, style: StyleSet) -> u16 {
        if !self.size.contains(position) {
            return 0;
        }
        let mut x = position.x;
        for grapheme in text.graphemes(true) {
            let width = grapheme.width().max(1) as i32;
            if x + width > self.size.width as i32 {
                break;
            }
            // The first char of the cluster carries the cell; combining
            // marks beyond it are not representable in a single-char tile.
            let glyph = grapheme.chars().next().unwrap_or(' ');
            self.set_tile_at(Position::new(x, position.y), Tile::new(glyph, style));
            for continuation in 1..width {
                self.set_tile_at(
                    Position::new(x + continuation, position.y),
                    Tile::empty(style),
                );
            }
            x += width;
        }
        (x - position.x).max(0) as u16
    }
}

impl TileSurface for BasicSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn tile_at(&self, position: Position) -> Option<Tile> {
        self.index_of(position).map(|i| self.tiles[i])
    }

    fn set_tile_at(&mut self, position: Position, tile: Tile) -> bool {
        match self.index_of(position) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    fn style() -> StyleSet {
        StyleSet::new(Rgba::WHITE, Rgba::BLACK)
    }

    #[test]
    fn test_out_of_bounds_read_is_none() {
        let surface = BasicSurface::new(Size::new(3, 2));
        assert!(surface.tile_at(Position::new(3, 0)).is_none());
        assert!(surface.tile_at(Position::new(0, 2)).is_none());
        assert!(surface.tile_at(Position::new(-1, 0)).is_none());
    }

    #[test]
    fn test_out_of_bounds_write_is_rejected() {
        let mut surface = BasicSurface::new(Size::new(3, 2));
        assert!(!surface.set_tile_at(Position::new(5, 5), Tile::default()));
        assert!(surface.set_tile_at(Position::new(2, 1), Tile::new('x', style())));
        assert_eq!(
            surface.tile_at(Position::new(2, 1)),
            Some(Tile::new('x', style()))
        );
    }

    #[test]
    fn test_draw_text_places_each_char() {
        let mut surface = BasicSurface::new(Size::new(10, 1));
        let covered = surface.draw_text("abc", Position::ZERO, style());
        assert_eq!(covered, 3);
        for (i, expected) in ['a', 'b', 'c'].into_iter().enumerate() {
            assert_eq!(
                surface.tile_at(Position::new(i as i32, 0)),
                Some(Tile::new(expected, style()))
            );
        }
        // Untouched cell stays default.
        assert_eq!(surface.tile_at(Position::new(3, 0)), Some(Tile::default()));
    }

    #[test]
    fn test_draw_text_stops_at_right_edge() {
        let mut surface = BasicSurface::new(Size::new(4, 1));
        let covered = surface.draw_text("toolkit", Position::ZERO, style());
        assert_eq!(covered, 4);
        assert_eq!(
            surface.tile_at(Position::new(3, 0)),
            Some(Tile::new('l', style()))
        );
    }

    #[test]
    fn test_draw_text_wide_glyph_takes_two_cells() {
        let mut surface = BasicSurface::new(Size::new(4, 1));
        let covered = surface.draw_text("字x", Position::ZERO, style());
        assert_eq!(covered, 3);
        assert_eq!(
            surface.tile_at(Position::ZERO),
            Some(Tile::new('字', style()))
        );
        // Continuation cell is a styled blank.
        assert_eq!(
            surface.tile_at(Position::new(1, 0)),
            Some(Tile::empty(style()))
        );
        assert_eq!(
            surface.tile_at(Position::new(2, 0)),
            Some(Tile::new('x', style()))
        );
    }

    #[test]
    fn test_draw_text_outside_surface_covers_nothing() {
        let mut surface = BasicSurface::new(Size::new(4, 2));
        let untouched = surface.clone();

        assert_eq!(surface.draw_text("abc", Position::new(-1, 0), style()), 0);
        assert_eq!(surface.draw_text("abc", Position::new(0, 2), style()), 0);
        assert_eq!(surface.draw_text("abc", Position::new(4, 0), style()), 0);
        assert_eq!(surface, untouched);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut surface = BasicSurface::new(Size::new(2, 2));
        surface.fill(Tile::new('#', style()));
        assert_eq!(
            surface.tile_at(Position::new(1, 1)),
            Some(Tile::new('#', style()))
        );
        surface.clear(style());
        assert_eq!(
            surface.tile_at(Position::new(1, 1)),
            Some(Tile::empty(style()))
        );
    }
}
