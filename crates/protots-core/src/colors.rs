//! ANSI color codes for terminal output.
//!
//! Roles used when printing resolved references and symbol dumps:
//! - Blue: module handles and type names
//! - Green: file paths
//! - Dim: punctuation (dots, arrows)
//! - Reset: return to default

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes so it reads on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in the blue role.
    pub fn name(&self, text: &str) -> String {
        format!("{}{}{}", self.blue, text, self.reset)
    }

    /// Wrap `text` in the green role.
    pub fn path(&self, text: &str) -> String {
        format!("{}{}{}", self.green, text, self.reset)
    }

    /// Wrap `text` in the dim role.
    pub fn punct(&self, text: &str) -> String {
        format!("{}{}{}", self.dim, text, self.reset)
    }
}
