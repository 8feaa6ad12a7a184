/// Sigils and their weights. Order is irrelevant to the sum.
pub const SIGILS: [(&str, u64); 3] = [("💠", 5), ("✨", 3), ("•", 1)];

/// Weighted count of every sigil occurring in `text`.
pub fn evaluate_resonance(text: &str) -> u64 {
    SIGILS
        .iter()
        .map(|(sigil, weight)| text.matches(sigil).count() as u64 * weight)
        .sum()
}
