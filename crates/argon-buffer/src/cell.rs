//! Terminal cell representation.
//!
//! A [`Cell`] represents a single character position in the frame buffer:
//! an 8-bit glyph code plus a packed color [`Attribute`].

use argon_core::Attribute;

/// A single cell in the frame buffer.
///
/// The glyph is an 8-bit code point (ASCII plus the CP437 upper half used
/// for box-drawing). Cells have no independent lifecycle; they live inside
/// a [`FrameBuffer`](crate::FrameBuffer).
///
/// # Examples
///
/// ```
/// use argon_buffer::Cell;
/// use argon_core::{Attribute, Color, Intensity};
///
/// let attr = Attribute::new(Color::Green, Intensity::Bright,
///                           Color::Black, Intensity::Normal);
/// let cell = Cell::new(b'A', attr);
/// assert_eq!(cell.glyph, b'A');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The 8-bit glyph code displayed in this cell. `0` renders as blank.
    pub glyph: u8,

    /// Packed foreground/background color and intensity.
    pub attr: Attribute,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: 0,
            attr: Attribute::DEFAULT,
        }
    }
}

impl Cell {
    /// Creates a cell with the given glyph and attribute.
    #[inline]
    pub const fn new(glyph: u8, attr: Attribute) -> Self {
        Self { glyph, attr }
    }

    /// Returns true if this cell has the default cleared state.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.glyph == 0 && self.attr == Attribute::DEFAULT
    }

    /// Resets this cell to the default cleared state.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
