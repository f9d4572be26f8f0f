//! Configuration for rendering TypeScript references as text.

use protots_core::Colors;

/// Configuration for TypeScript rendering.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
