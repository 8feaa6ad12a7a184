pub mod echo;
pub mod entry;

pub use echo::{write_jsonl, EchoRecord, EchoType};
pub use entry::ParsedEntry;
