//! Builds the analysis prompt from roster text and enrichment signals.

use cintel_core::ExtractedSignal;

const MISSING: &str = "n/a";

/// Composes the prompt sent to the completion service.
///
/// With no handles the roster text is returned unchanged. Otherwise the text
/// is wrapped in a roster-context block and followed by one signal block per
/// successful lookup; failed lookups are left out.
#[must_use]
pub fn compose_prompt(text: &str, handle_count: usize, signals: &[ExtractedSignal]) -> String {
    if handle_count == 0 {
        return text.to_string();
    }

    let blocks: Vec<String> = signals
        .iter()
        .filter(|s| s.is_ok())
        .map(signal_block)
        .collect();

    format!(
        "[ROSTER_CONTEXT]\nTotal Creators: {handle_count}\n{text}\n\n[DETAILED_SIGNALS]\n{}\n[/DETAILED_SIGNALS]",
        blocks.join("\n")
    )
}

fn signal_block(signal: &ExtractedSignal) -> String {
    let or_missing = |v: Option<&str>| {
        v.filter(|s| !s.trim().is_empty())
            .unwrap_or(MISSING)
            .to_string()
    };
    let count = |v: Option<u64>| v.map_or_else(|| MISSING.to_string(), |n| n.to_string());
    let themes = if signal.recent_captions.is_empty() {
        MISSING.to_string()
    } else {
        signal
            .recent_captions
            .iter()
            .map(|c| c.replace('\n', " "))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    format!(
        "SIGNAL [{}]:\n- Name: {}\n- Bio: {}\n- Followers: {}\n- Posts: {}\n- Recent Themes: {}",
        signal.handle,
        or_missing(signal.name.as_deref()),
        or_missing(signal.biography.as_deref()).replace('\n', " "),
        count(signal.follower_count),
        count(signal.media_count),
        themes,
    )
}
