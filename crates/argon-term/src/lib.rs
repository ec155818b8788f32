//! Argon - a double-buffered character-cell terminal renderer.
//!
//! Argon keeps an in-memory grid of colored glyphs, mutates it with
//! drawing primitives, and flushes it to the physical screen in one
//! atomic blit. This crate re-exports the public API of the workspace:
//!
//! - `argon-core`: colors, intensities, packed attributes, errors
//! - `argon-buffer`: [`Cell`] and [`FrameBuffer`]
//! - `argon-input`: blocking key reads and the background [`KeyPoller`]
//! - `argon-terminal`: the [`Session`], drawing primitives, and presenters
//!
//! # Example
//!
//! ```no_run
//! use argon_term::{BoxStyle, Color, Intensity, Session, SessionConfig};
//!
//! fn main() -> argon_term::Result<()> {
//!     let config = SessionConfig::new()
//!         .with_title("Hello")
//!         .with_size(80, 25);
//!     let mut session = Session::new(config)?;
//!
//!     session.set_color(Color::White, Intensity::Bright,
//!                       Color::Black, Intensity::Normal);
//!     session.put_box(0, 0, 80, 25, BoxStyle::Single)?;
//!     session.put_str(2, 1, "Press any key to exit")?;
//!     session.refresh()?;
//!
//!     session.get_key()?;
//!     session.terminate()
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use argon_buffer::{Cell, FrameBuffer};
pub use argon_core::{Attribute, Color, ColorState, Error, Intensity, Result};
pub use argon_input::{read_key, KeyPoller};
pub use argon_terminal::{
    glyph_to_char, BoxGlyphs, BoxStyle, CapturePresenter, CrosstermPresenter, Presenter, Session,
    SessionConfig,
};
