//! Core pipeline for distilling exported chat logs into echo records.
//!
//! A raw line goes through three stages: [`parse::parse_chat_line`] pulls out
//! the sender and text, [`resonance::evaluate_resonance`] weighs the text by
//! its sigils, and [`studio::SynthesisStudio::synthesize_echo`] turns both into
//! an [`model::EchoRecord`].
//!
//! # Example
//! ```
//! use distill_core::SynthesisStudio;
//!
//! let mut studio = SynthesisStudio::new("docs");
//! let echoes = studio
//!     .process_lines(["[1/2/2024, 14:30] Bob: hi 💠", "-- system notice --"], 7, false)
//!     .unwrap();
//! assert_eq!(echoes.len(), 1);
//! assert_eq!(echoes[0].weight, 5);
//! ```

pub mod clock;
pub mod error;
pub mod model;
pub mod parse;
pub mod resonance;
pub mod studio;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DistillError;
pub use model::{write_jsonl, EchoRecord, EchoType, ParsedEntry};
pub use parse::parse_chat_line;
pub use resonance::evaluate_resonance;
pub use studio::{SynthesisStudio, DEFAULT_STUDIO_NAME, PRISM_THRESHOLD, SEED_BODY_CHARS};
