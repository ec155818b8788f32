//! Key input for the Argon terminal renderer.
//!
//! This crate provides the two input modes of a session:
//!
//! - [`read_key`] - a blocking read returning the next keypress byte
//! - [`KeyPoller`] - a background thread sampling the latest keypress into
//!   an atomic one-byte slot, for non-blocking input
//!
//! # Example
//!
//! ```no_run
//! use argon_input::KeyPoller;
//!
//! let mut poller = KeyPoller::spawn();
//! loop {
//!     let key = poller.latest();
//!     if key == b'q' {
//!         break;
//!     }
//!     // render a frame...
//! }
//! poller.shutdown();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod poller;

pub use poller::{read_key, KeyPoller};
