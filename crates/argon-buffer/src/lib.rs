//! Character-cell frame buffer for the Argon terminal renderer.
//!
//! This crate provides the in-memory half of the renderer:
//!
//! - [`Cell`] - a single glyph + packed color attribute
//! - [`FrameBuffer`] - a fixed-size row-major grid of cells
//!
//! # Architecture
//!
//! The rendering pipeline works as follows:
//!
//! 1. Drawing primitives (in `argon-terminal`) write [`Cell`]s into the
//!    [`FrameBuffer`] using checked coordinates.
//! 2. A refresh takes the buffer's raw cell array via
//!    [`FrameBuffer::cells`] and blits the whole viewport to the device in
//!    one call. There is no diffing; every refresh re-sends the full grid.
//!
//! # Examples
//!
//! ```
//! use argon_buffer::{Cell, FrameBuffer};
//! use argon_core::{Attribute, Color, Intensity};
//!
//! let mut buffer = FrameBuffer::new(40, 12)?;
//!
//! let attr = Attribute::new(Color::Yellow, Intensity::Bright,
//!                           Color::Black, Intensity::Normal);
//! buffer.set_cell(3, 1, Cell::new(b'!', attr))?;
//!
//! // Snapshot for presenting, row-major.
//! let cells = buffer.cells();
//! assert_eq!(cells[40 + 3].glyph, b'!');
//! # Ok::<(), argon_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod buffer;
mod cell;

pub use buffer::FrameBuffer;
pub use cell::Cell;

// Re-export core types for convenience
pub use argon_core::{Attribute, Color, ColorState, Intensity};
