//! Best-effort parsing of model responses into candidate records.
//!
//! The prompt instructs the model to return a bare JSON array, but
//! responses drift in predictable ways: surrounding prose, single
//! quotes, a missing comma between objects. The repairs here cover
//! exactly those observed failure modes and nothing more. This is a
//! bounded cleanup layer, not a lenient JSON dialect: apostrophes
//! inside text and meaningful whitespace runs do not survive it.

use serde_json::Value;

use crate::error::MalformedResponseError;

/// Maximum diagnostic snippet length, in bytes.
const SNIPPET_MAX: usize = 100;

/// Extract and parse the JSON array from raw model output.
///
/// Finds the first `[` and the last `]`, discards everything outside
/// that span, repairs the span, and parses it. Elements come back
/// untyped: shape problems inside an individual element are the
/// validator's to reject, so one bad record cannot sink the batch.
pub fn parse_response(raw: &str) -> Result<Vec<Value>, MalformedResponseError> {
    let trimmed = raw.trim();

    let span = match (trimmed.find('['), trimmed.rfind(']')) {
        (Some(start), Some(end)) if end > start => &trimmed[start..=end],
        _ => return Err(MalformedResponseError::NoArray),
    };

    let repaired = repair(span);

    let value: Value =
        serde_json::from_str(&repaired).map_err(|source| MalformedResponseError::Json {
            snippet: truncate_to_char_boundary(&repaired, SNIPPET_MAX).to_string(),
            source,
        })?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(MalformedResponseError::NotArray),
    }
}

/// Apply the repair heuristics, in order.
fn repair(span: &str) -> String {
    // Collapse whitespace runs to single spaces. The prompt forbids
    // whitespace outside string values, so runs are model noise.
    let collapsed = span.split_whitespace().collect::<Vec<_>>().join(" ");

    // Models occasionally emit Python-style single quotes.
    let quoted = collapsed.replace('\'', "\"");

    // Missing comma between adjacent objects (collapse above may have
    // left a single space between the braces).
    quoted.replace("}{", "},{").replace("} {", "},{")
}

/// Truncate to at most `max_bytes` bytes at a character boundary.
fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    &s[..end]
}
