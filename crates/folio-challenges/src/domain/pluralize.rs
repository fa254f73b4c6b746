//! Naive pluralization.

/// Appends `"s"` to every word, preserving order and length.
///
/// No English plural rules are applied: `"foot"` becomes `"foots"`.
#[must_use]
pub fn pluralize<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|word| format!("{}s", word.as_ref())).collect()
}

/// Splits comma-separated demo input into trimmed, non-empty words.
#[must_use]
pub fn split_word_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
