//! Error types for Argon terminal operations.

use thiserror::Error;

/// Core error type for Argon terminal operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Frame buffer allocation failed. Fatal at session init.
    #[error("frame buffer allocation failed for {width}x{height} cells")]
    Allocation {
        /// Requested buffer width.
        width: u16,
        /// Requested buffer height.
        height: u16,
    },

    /// Coordinates outside the viewport. Recoverable; the buffer is
    /// left unchanged.
    #[error("coordinates out of bounds: ({x}, {y}) in {width}x{height} viewport")]
    OutOfBounds {
        /// The attempted column.
        x: u16,
        /// The attempted row.
        y: u16,
        /// Viewport width.
        width: u16,
        /// Viewport height.
        height: u16,
    },

    /// The device rejected a blit. Recoverable; the caller may retry
    /// or degrade to a no-op.
    #[error("present failed: {0}")]
    Present(#[source] std::io::Error),

    /// No usable terminal device. Fatal at session init.
    #[error("terminal device unavailable: {0}")]
    DeviceUnavailable(#[source] std::io::Error),

    /// An I/O error occurred outside the blit path (setup, teardown,
    /// key input).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::OutOfBounds {
            x: 120,
            y: 5,
            width: 120,
            height: 30,
        };
        assert_eq!(
            err.to_string(),
            "coordinates out of bounds: (120, 5) in 120x30 viewport"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
