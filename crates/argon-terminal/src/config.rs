//! Session configuration.

/// Configuration for a terminal [`Session`](crate::Session).
///
/// Applied once at session init; dimensions are fixed for the session's
/// lifetime.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Window/session title, applied once at init.
    pub title: String,
    /// Viewport width in columns.
    pub width: u16,
    /// Viewport height in rows.
    pub height: u16,
    /// Hide the text cursor at init.
    pub hide_cursor: bool,
    /// Read keys by blocking (`true`) or via the background poller
    /// (`false`).
    pub blocking_input: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: "Argon Terminal".to_string(),
            width: 120,
            height: 30,
            hide_cursor: true,
            blocking_input: true,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the viewport dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enables or disables cursor hiding.
    #[must_use]
    pub fn with_hidden_cursor(mut self, hide: bool) -> Self {
        self.hide_cursor = hide;
        self
    }

    /// Selects blocking or polled key input.
    #[must_use]
    pub fn with_blocking_input(mut self, blocking: bool) -> Self {
        self.blocking_input = blocking;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.width, 120);
        assert_eq!(config.height, 30);
        assert!(config.hide_cursor);
        assert!(config.blocking_input);
    }

    #[test]
    fn test_config_builder() {
        let config = SessionConfig::new()
            .with_title("Demo")
            .with_size(80, 25)
            .with_hidden_cursor(false)
            .with_blocking_input(false);

        assert_eq!(config.title, "Demo");
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 25);
        assert!(!config.hide_cursor);
        assert!(!config.blocking_input);
    }
}
