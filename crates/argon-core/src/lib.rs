//! Core types for the Argon terminal renderer.
//!
//! This crate provides the leaf building blocks shared by the rest of the
//! workspace:
//!
//! - [`color`]: the 8-entry console palette, intensity modes, packed cell
//!   attributes, and the session color state
//! - [`error`]: the error taxonomy for buffer, drawing, and present
//!   operations
//!
//! # Examples
//!
//! Packing and unpacking a cell attribute:
//!
//! ```
//! use argon_core::{Attribute, Color, Intensity};
//!
//! let attr = Attribute::new(Color::Red, Intensity::Normal,
//!                           Color::Black, Intensity::Normal);
//! assert_eq!(attr.fg(), Color::Red);
//! assert_eq!(attr.bits(), 0x04);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod error;

// Re-export commonly used types at the crate root for convenience
pub use color::{Attribute, Color, ColorState, Intensity};
pub use error::{Error, Result};
