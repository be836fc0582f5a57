//! Caption extraction from raw model output.
//!
//! Models rarely answer with just the caption. They wrap it in quotes, or
//! `ollama` prints an `Added image '<name>'` progress line first. Extraction
//! tries each [`Matcher`] in order and falls back to the trimmed text.

use regex::Regex;
use std::sync::LazyLock;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(.*?)""#).expect("quoted-string pattern is valid"));

static ADDED_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Added image '.*?'\n (.*?)$").expect("progress-line pattern is valid")
});

/// A named extraction rule. Returns the captured caption, which may be empty.
#[derive(Clone, Copy)]
pub struct Matcher {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<String>,
}

/// Matchers in priority order. The first one that captures wins.
pub const MATCHERS: &[Matcher] = &[
    Matcher {
        name: "quoted",
        apply: quoted,
    },
    Matcher {
        name: "added_image",
        apply: added_image,
    },
];

/// Contents of the first double-quoted span on a single line.
pub fn quoted(raw: &str) -> Option<String> {
    first_capture(&QUOTED, raw)
}

/// Text after an `Added image '<name>'` line, up to the end of the output.
pub fn added_image(raw: &str) -> Option<String> {
    first_capture(&ADDED_IMAGE, raw)
}

fn first_capture(re: &Regex, raw: &str) -> Option<String> {
    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pull the most likely caption out of raw model output.
///
/// Never fails. An empty string means the model produced nothing usable.
pub fn extract_caption(raw: &str) -> String {
    for matcher in MATCHERS {
        if let Some(caption) = (matcher.apply)(raw) {
            tracing::trace!(matcher = matcher.name, "Caption matched");
            return caption;
        }
    }
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_caption() {
        let raw = " \"A tabby cat sleeps on a red mat.\"\n\n";
        assert_eq!(extract_caption(raw), "A tabby cat sleeps on a red mat.");
    }

    #[test]
    fn test_quoted_takes_first_span() {
        let raw = "Sure! \"A dog.\" or maybe \"A wolf.\"";
        assert_eq!(extract_caption(raw), "A dog.");
    }

    #[test]
    fn test_quoted_does_not_cross_lines() {
        let raw = "He said \"hello\nworld\" loudly";
        assert_eq!(extract_caption(raw), raw.trim());
    }

    #[test]
    fn test_empty_quotes_yield_empty_caption() {
        assert_eq!(extract_caption("The answer is \"\"."), "");
    }

    #[test]
    fn test_added_image_line() {
        let raw = "Added image '/photos/beach.jpg'\n A sandy beach at sunset.";
        assert_eq!(extract_caption(raw), "A sandy beach at sunset.");
    }

    #[test]
    fn test_added_image_requires_end_of_input_on_same_line() {
        // Trailing newline means `.*?$` cannot reach the end of the text.
        let raw = "Added image 'a.png'\n A kite.\n";
        assert_eq!(added_image(raw), None);
        assert_eq!(extract_caption(raw), "Added image 'a.png'\n A kite.");
    }

    #[test]
    fn test_quoted_beats_added_image() {
        let raw = "Added image 'x.png'\n \"A red bicycle.\"";
        assert_eq!(extract_caption(raw), "A red bicycle.");
    }

    #[test]
    fn test_fallback_trims_whitespace() {
        let raw = "\n\n  A bowl of ramen on a wooden table.  \n";
        assert_eq!(extract_caption(raw), "A bowl of ramen on a wooden table.");
    }

    #[test]
    fn test_blank_output_is_empty() {
        assert_eq!(extract_caption(" \n\t "), "");
        assert_eq!(extract_caption(""), "");
    }

    #[test]
    fn test_matcher_order() {
        let names: Vec<&str> = MATCHERS.iter().map(|m| m.name).collect();
        assert_eq!(names, ["quoted", "added_image"]);
    }
}
