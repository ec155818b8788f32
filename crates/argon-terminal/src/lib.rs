//! Session, drawing primitives, and presenter for the Argon terminal
//! renderer.
//!
//! This crate ties the workspace together:
//! - [`Session`] owns the frame buffer and color state and exposes the
//!   drawing primitives (`put_char`, `put_str`, `put_str_fmt`, `put_box`,
//!   `fill_area`, `clear`, `clear_area`) and the full-viewport
//!   [`refresh`](Session::refresh)
//! - [`Presenter`] is the OS-boundary trait, with [`CrosstermPresenter`]
//!   for real terminals and [`CapturePresenter`] for headless tests
//! - [`SessionConfig`] carries the once-at-init settings (title, size,
//!   cursor, input mode)
//!
//! # Example
//!
//! ```no_run
//! use argon_terminal::{Session, SessionConfig};
//!
//! fn main() -> argon_core::Result<()> {
//!     let mut session = Session::new(SessionConfig::default())?;
//!     session.put_str(0, 0, "Press any key")?;
//!     session.refresh()?;
//!     session.get_key()?;
//!     session.terminate()
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod glyph;
mod presenter;
mod session;

pub use config::SessionConfig;
pub use glyph::{glyph_to_char, BoxGlyphs, BoxStyle};
pub use presenter::{CapturePresenter, CrosstermPresenter, Presenter};
pub use session::Session;

/// Re-export core types for convenience.
pub use argon_core::{Attribute, Color, ColorState, Error, Intensity, Result};

/// Re-export buffer types for convenience.
pub use argon_buffer::{Cell, FrameBuffer};
