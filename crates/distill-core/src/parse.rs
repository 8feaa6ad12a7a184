use std::sync::LazyLock;

use regex::Regex;

use crate::model::ParsedEntry;

/// Chat line grammars, tried in order. First match wins.
static LINE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // [M/D/YYYY, H:MM(:SS)] Sender: text
        r"^\[?(?P<timestamp>\d{1,2}/\d{1,2}/\d{4},\s*\d{1,2}:\d{2}(?::\d{2})?)\]?\s+(?P<sender>[^:]+):\s*(?P<text>.*)$",
        // M/D/YYYY, H:MM(:SS) Sender: text
        r"^(?P<timestamp>\d{1,2}/\d{1,2}/\d{4},\s*\d{1,2}:\d{2}(?::\d{2})?)\s+(?P<sender>[^:]+):\s*(?P<text>.*)$",
        // Sender: text
        r"^(?P<sender>[^:]+):\s*(?P<text>.*)$",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("chat line pattern must compile"))
    .collect()
});

/// Extract sender and text from one exported chat line.
///
/// Returns `None` for blank lines and for anything that matches none of the
/// grammars (system notices, wrapped continuation lines without a colon, ...).
pub fn parse_chat_line(line: &str) -> Option<ParsedEntry> {
    let cleaned = line.trim();
    if cleaned.is_empty() {
        return None;
    }

    for pattern in LINE_PATTERNS.iter() {
        let Some(caps) = pattern.captures(cleaned) else {
            continue;
        };
        let sender = caps.name("sender").map_or("", |m| m.as_str()).trim();
        if sender.is_empty() {
            continue;
        }
        let text = caps.name("text").map_or("", |m| m.as_str()).trim();
        return Some(ParsedEntry {
            sender: sender.to_string(),
            text: text.to_string(),
        });
    }

    None
}
