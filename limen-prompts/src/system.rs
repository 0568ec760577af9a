use std::fmt;

/// A system instruction sent ahead of the user message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInstruction {
    content: String,
}

impl SystemInstruction {
    /// Creates an instruction from its text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the textual content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for SystemInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for SystemInstruction {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
