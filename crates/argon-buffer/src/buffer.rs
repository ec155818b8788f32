//! Frame buffer for cell storage.
//!
//! The [`FrameBuffer`] owns a fixed-size 2D grid of [`Cell`]s and provides
//! checked cell writes, clearing, and raw row-major access for presenting.

use argon_core::{Error, Result};

use crate::Cell;

/// A fixed-size 2D grid of terminal cells.
///
/// Cells are stored in row-major order, indexed as `y * width + x`.
/// Dimensions are fixed at construction and do not change for the
/// buffer's lifetime.
///
/// # Coordinate System
///
/// - (0, 0) is the top-left corner
/// - X increases to the right (columns)
/// - Y increases downward (rows)
///
/// Out-of-bounds writes fail with [`Error::OutOfBounds`] and leave the
/// buffer unchanged; they are never a silent out-of-range access.
///
/// # Examples
///
/// ```
/// use argon_buffer::{Cell, FrameBuffer};
/// use argon_core::Attribute;
///
/// let mut buffer = FrameBuffer::new(80, 25).unwrap();
/// buffer.set_cell(10, 5, Cell::new(b'*', Attribute::DEFAULT)).unwrap();
/// assert_eq!(buffer.get(10, 5).unwrap().glyph, b'*');
/// ```
pub struct FrameBuffer {
    /// Cell storage in row-major order.
    cells: Vec<Cell>,

    /// Buffer width in cells/columns.
    width: u16,

    /// Buffer height in cells/rows.
    height: u16,
}

impl FrameBuffer {
    /// Creates a new buffer with the specified dimensions.
    ///
    /// All cells start in the default cleared state (glyph 0, default
    /// attribute). Fails with [`Error::Allocation`] if `width * height`
    /// overflows the addressable size.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::Allocation { width, height })?;

        Ok(Self {
            cells: vec![Cell::default(); size],
            width,
            height,
        })
    }

    /// Returns the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Returns the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Returns the buffer dimensions as (width, height).
    #[inline]
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Converts (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Gets a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Writes one cell at (x, y).
    ///
    /// Fails with [`Error::OutOfBounds`] if `x >= width` or `y >= height`;
    /// the buffer is unchanged on failure.
    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell) -> Result<()> {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Resets every cell to glyph 0 and the default attribute.
    ///
    /// O(width * height).
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }

    /// Resets cells in the rectangle `[x, x+w) x [y, y+h)`.
    ///
    /// Rectangles extending past the buffer are clamped silently to the
    /// valid region.
    pub fn clear_area(&mut self, x: u16, y: u16, w: u16, h: u16) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);

        for row in y.min(self.height)..y_end {
            let start = row as usize * self.width as usize;
            for col in x..x_end {
                self.cells[start + col as usize].reset();
            }
        }
    }

    /// Returns the full row-major cell array, for presenting.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns a slice of cells for a specific row.
    ///
    /// Returns `None` if the row is out of bounds.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y < self.height {
            let start = y as usize * self.width as usize;
            let end = start + self.width as usize;
            Some(&self.cells[start..end])
        } else {
            None
        }
    }
}
