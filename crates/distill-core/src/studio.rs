use sha2::{Digest, Sha256};

use crate::clock::{synthesis_stamp, Clock, SystemClock};
use crate::error::DistillError;
use crate::model::{EchoRecord, EchoType, ParsedEntry};
use crate::parse::parse_chat_line;
use crate::resonance::{evaluate_resonance, SIGILS};

pub const DEFAULT_STUDIO_NAME: &str = "ArcDistiller Studio";

/// Minimum resonance for a full-detail echo.
pub const PRISM_THRESHOLD: u64 = 5;

/// Characters of text kept in a summary echo body.
pub const SEED_BODY_CHARS: usize = 60;

const TRACE_LEN: usize = 8;

/// One distillation session: parses, scores and synthesizes echoes, and keeps
/// the echoes it was asked to persist.
///
/// The retained log is owned by the studio and only grows. Sharing one studio
/// across threads requires external locking.
#[derive(Debug)]
pub struct SynthesisStudio<C: Clock = SystemClock> {
    name: String,
    clock: C,
    echo_log: Vec<EchoRecord>,
}

impl SynthesisStudio<SystemClock> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_clock(name, SystemClock)
    }
}

impl Default for SynthesisStudio<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_STUDIO_NAME)
    }
}

impl<C: Clock> SynthesisStudio<C> {
    /// Build a studio that stamps traces with the given clock.
    pub fn with_clock(name: impl Into<String>, clock: C) -> Self {
        Self {
            name: name.into(),
            clock,
            echo_log: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sigils(&self) -> &'static [(&'static str, u64)] {
        &SIGILS
    }

    /// Echoes persisted so far, in synthesis order.
    pub fn echo_log(&self) -> &[EchoRecord] {
        &self.echo_log
    }

    pub fn parse_chat_line(&self, line: &str) -> Option<ParsedEntry> {
        parse_chat_line(line)
    }

    pub fn evaluate_resonance(&self, text: &str) -> u64 {
        evaluate_resonance(text)
    }

    /// Turn a parsed entry into an echo, appending it to the log when `persist` is set.
    ///
    /// The trace hashes the text together with the synthesis time, so two calls on
    /// the same entry only agree when the clock does.
    pub fn synthesize_echo(
        &mut self,
        entry: &ParsedEntry,
        cycle: i64,
        persist: bool,
    ) -> Result<EchoRecord, DistillError> {
        entry.validate()?;

        let text = entry.text.as_str();
        let score = evaluate_resonance(text);
        let stamp = synthesis_stamp(self.clock.now());
        let digest = Sha256::digest(format!("{text}{stamp}").as_bytes());
        let mut trace = format!("{digest:x}");
        trace.truncate(TRACE_LEN);

        let (kind, body) = if score >= PRISM_THRESHOLD {
            (EchoType::Prism, text.to_string())
        } else {
            // The ellipsis is appended even when nothing was cut.
            let head: String = text.chars().take(SEED_BODY_CHARS).collect();
            (EchoType::Seed, format!("{head}..."))
        };

        let echo = EchoRecord {
            trace,
            role: entry.sender.to_lowercase(),
            kind,
            body,
            weight: score,
            cycle,
        };
        tracing::trace!("Synthesized {} echo {} (weight {score})", echo.kind, echo.trace);

        if persist {
            self.echo_log.push(echo.clone());
        }

        Ok(echo)
    }

    /// Run every line through parse and synthesis, skipping lines that are not messages.
    pub fn process_lines<I, S>(
        &mut self,
        lines: I,
        cycle: i64,
        persist: bool,
    ) -> Result<Vec<EchoRecord>, DistillError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut echoes = Vec::new();
        let mut seen = 0usize;

        for line in lines {
            seen += 1;
            let line = line.as_ref();
            let Some(entry) = parse_chat_line(line) else {
                tracing::debug!("Skipping unrecognized line {seen}");
                continue;
            };
            echoes.push(self.synthesize_echo(&entry, cycle, persist)?);
        }

        tracing::info!(
            "{}: {} echoes from {seen} lines (cycle {cycle}, {} retained)",
            self.name,
            echoes.len(),
            self.echo_log.len()
        );
        Ok(echoes)
    }
}
