// Text cleanup applied before anything is sent for classification.
//
// Rich-text editors leave behind zero-width-space entities and stacked blank
// lines. Neither carries meaning, and a lone ">" is how an intentionally
// empty quote-only comment renders.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Entity form of U+200B left behind by the rich-text editor.
const ZERO_WIDTH_SPACE_ENTITY: &str = "&#x200B;";
const ZERO_WIDTH_SPACE: char = '\u{200B}';

static REPEATED_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("newline pattern is valid"));

/// Normalize raw post/comment text.
///
/// Returns an empty string when there is nothing worth checking.
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let text = text
        .replace(ZERO_WIDTH_SPACE_ENTITY, "")
        .replace(ZERO_WIDTH_SPACE, "");
    let text = REPEATED_NEWLINES.replace_all(&text, "\n");
    let text = text.trim();

    if text == ">" {
        return String::new();
    }

    text.to_string()
}
