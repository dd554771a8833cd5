//! ANSI color codes for terminal output of highlight results.
//!
//! - Blue: classification tags
//! - Green: token text
//! - Red: unterminated regions
//! - Dim: rule paths, trace metadata

/// ANSI palette; all fields are empty strings when colors are off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
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
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// A classification tag, or `-` for untagged text.
    pub fn tag(&self, scope: Option<&str>) -> String {
        match scope {
            Some(s) => format!("{}{}{}", self.blue, s, self.reset),
            None => format!("{}-{}", self.dim, self.reset),
        }
    }

    /// Token text, Debug-quoted so whitespace stays visible.
    pub fn text(&self, text: &str) -> String {
        format!("{}{:?}{}", self.green, text, self.reset)
    }

    pub fn dimmed(&self, text: &str) -> String {
        format!("{}{}{}", self.dim, text, self.reset)
    }

    pub fn alert(&self, text: &str) -> String {
        format!("{}{}{}", self.red, text, self.reset)
    }
}
