//! Case-insensitive word censoring.

use regex::{NoExpand, RegexBuilder};
use tracing::warn;

/// Replaces every case-insensitive occurrence of each bad word with
/// asterisks as long as the trimmed word.
///
/// Words are trimmed; blank entries are skipped. They are applied one after
/// another to the running result, so an earlier replacement can stop a later
/// word from matching: `["darn", "darnit"]` turns `"darnit"` into
/// `"****it"`, while `["darnit", "darn"]` gives `"******"`. Words match
/// literally, never as patterns.
#[must_use]
pub fn censor_text<S: AsRef<str>>(text: &str, bad_words: &[S]) -> String {
    let mut result = text.to_owned();
    for word in bad_words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            continue;
        }

        let pattern = match RegexBuilder::new(&regex::escape(word))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(error = %e, "skipping bad word that does not compile");
                continue;
            }
        };

        let mask = "*".repeat(word.chars().count());
        result = pattern.replace_all(&result, NoExpand(&mask)).into_owned();
    }
    result
}
