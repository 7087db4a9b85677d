//! Social handle extraction from free-form roster text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// ASCII word characters only; `\w` in the regex crate is Unicode-aware.
static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[A-Za-z0-9_.]{1,30}").expect("valid handle regex"));

/// Returns every `@handle` token in `text`, deduplicated in first-seen order.
///
/// Matches are not validated against any platform; an empty vec is a normal
/// result for text without handles.
#[must_use]
pub fn extract_handles(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    HANDLE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|h| seen.insert(*h))
        .map(str::to_owned)
        .collect()
}
