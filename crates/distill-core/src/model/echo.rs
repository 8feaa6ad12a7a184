use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::DistillError;

/// Detail level of an echo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EchoType {
    /// Full body, for high-resonance messages.
    #[serde(rename = "⟨PRISM⟩")]
    Prism,
    /// Truncated body, for everything else.
    #[serde(rename = "⟨SEED⟩")]
    Seed,
}

impl EchoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EchoType::Prism => "⟨PRISM⟩",
            EchoType::Seed => "⟨SEED⟩",
        }
    }
}

impl std::fmt::Display for EchoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthesized echo. Serialized with keys in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EchoRecord {
    pub trace: String,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: EchoType,
    pub body: String,
    pub weight: u64,
    pub cycle: i64,
}

impl EchoRecord {
    /// Serialize as a single JSON object, no trailing newline.
    pub fn to_json_line(&self) -> Result<String, DistillError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Write records as JSONL (one JSON object per line).
pub fn write_jsonl<W: Write>(mut writer: W, records: &[EchoRecord]) -> Result<(), DistillError> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
