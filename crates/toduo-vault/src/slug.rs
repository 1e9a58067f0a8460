use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// `regex` counts combining marks, joiners and all connector punctuation as
// word characters, and leaves the \x1c-\x1f separators out of `\s`. Both
// classes are adjusted so only letters, digits and `_` survive, and the
// information separators split words like other whitespace.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s\x1c-\x1f-]|\p{M}|\p{Join_Control}|[\p{Pc}--_]").unwrap()
});
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s\x1c-\x1f]+").unwrap());

/// Derive a lowercase, hyphen-separated, filesystem-safe name from `text`.
///
/// The text is NFKD-normalized, everything except word characters,
/// whitespace and hyphens is dropped, runs of whitespace/hyphens become a
/// single hyphen, and leading/trailing hyphens and underscores are trimmed.
pub fn slugify(text: &str) -> String {
    let decomposed: String = text.nfkd().collect();
    let kept = DISALLOWED.replace_all(&decomposed, "").to_lowercase();
    SEPARATORS
        .replace_all(&kept, "-")
        .trim_matches(|c: char| c == '-' || c == '_')
        .to_string()
}
