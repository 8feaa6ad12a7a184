use serde::{Deserialize, Serialize};

use crate::error::DistillError;

/// A chat line reduced to who said it and what they said.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedEntry {
    pub sender: String,
    pub text: String,
}

impl ParsedEntry {
    /// Build an entry from raw parts, trimming both. The sender must not be blank.
    pub fn new(sender: impl AsRef<str>, text: impl AsRef<str>) -> Result<Self, DistillError> {
        let entry = Self {
            sender: sender.as_ref().trim().to_string(),
            text: text.as_ref().trim().to_string(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check the entry is usable for synthesis.
    pub fn validate(&self) -> Result<(), DistillError> {
        if self.sender.trim().is_empty() {
            return Err(DistillError::InvalidEntry(
                "entry must have a non-empty sender".into(),
            ));
        }
        Ok(())
    }
}
