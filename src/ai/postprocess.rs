//! Response Post-Processing
//!
//! Downgrade-never-throw cleanup of raw model output. A partially-usable
//! artifact beats aborting a whole run over one unparsable section, so every
//! function here has a total fallback:
//!
//! - JSON sections fall back to a raw-text wrapper
//! - the stock-image list falls back to a single error-marker entry
//! - segment splitting falls back to the whole text as one segment
//! - fence stripping is a no-op on already-clean text

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

use crate::constants::pipeline::SEGMENT_SEPARATOR;

/// Parse a JSON section, falling back to `{"raw": <text>}` when the model
/// returned something unparsable.
pub fn json_or_raw(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

/// Re-serialize a JSON section pretty-printed, keeping the raw text when it
/// does not parse. Used for the poster prompt, both at initial generation
/// and after refinement.
pub fn pretty_json_or_raw(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

/// Parse the stock-image prompt list. A bare object is wrapped into a
/// one-element list; unparsable text becomes a single error-marker entry so
/// the caller always has something to show.
pub fn stock_list_or_marker(text: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items,
        Ok(other) => vec![other],
        Err(_) => vec![json!({
            "id": 1,
            "concept": "Parse Error",
            "timing": "N/A",
            "prompt": text,
            "usage": "Manual review needed"
        })],
    }
}

/// Split a multi-segment response on the literal separator token, trimming
/// parts and dropping empty ones. Never returns fewer than one element: if
/// nothing survives the split, the whole text is the single segment.
pub fn split_segments(text: &str) -> Vec<String> {
    let parts: Vec<String> = text
        .split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if parts.is_empty() {
        vec![text.to_string()]
    } else {
        parts
    }
}

static FENCE_OPEN_TAGGED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^```(?:markdown|json|text|plaintext)?\s*\n?").expect("valid fence regex")
});
static FENCE_CLOSE_PADDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)\n?```\s*$").expect("valid fence regex"));
static FENCE_OPEN_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^```\s*\n?").expect("valid fence regex"));
static FENCE_CLOSE_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)\n?```$").expect("valid fence regex"));

/// Remove markdown code-fence markers (with optional language tag) so
/// generated prompts are clean for display and copy-paste. Repeated until
/// stable, so stripping an already-stripped string returns it unchanged.
pub fn strip_code_fences(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let stripped = strip_once(&current);
        if stripped == current {
            return stripped;
        }
        current = stripped;
    }
}

fn strip_once(text: &str) -> String {
    let cleaned = FENCE_OPEN_TAGGED.replace_all(text, "");
    let cleaned = FENCE_CLOSE_PADDED.replace_all(&cleaned, "");
    let cleaned = FENCE_OPEN_BARE.replace_all(&cleaned, "");
    let cleaned = FENCE_CLOSE_BARE.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

// =============================================================================
// Tests
// =============================================================================
