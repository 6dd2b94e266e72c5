//! Title derivation for sidebar rows

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything outside ASCII word characters and ECMAScript whitespace.
///
/// ECMAScript `\s` differs from Unicode `White_Space`: it includes U+FEFF and
/// excludes U+0085, so the class is spelled out.
static NON_TITLE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[^A-Za-z0-9_\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("valid regex")
});

/// Derive a display title from a note body.
///
/// Only the first line counts (`\n` and `\r\n` both end a line). Punctuation
/// and symbols are stripped, everything else is kept in its original order.
/// No length truncation happens here; rows truncate visually with an ellipsis.
pub fn derive_title(body: &str) -> String {
    let first_line = body.lines().next().unwrap_or_default();
    NON_TITLE_CHARS.replace_all(first_line, "").into_owned()
}
