//! MDX escaping for extracted metadata text.

use regex::Regex;
use std::sync::LazyLock;

// Characters with special meaning in MDX that must be rendered literally.
static RE_MDX_SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>@\[\]\\`*_{}&#]").unwrap());

/// Prefix every MDX special character with a backslash.
///
/// Not idempotent — the inserted backslash is itself in the escape set, so
/// callers apply this exactly once per extracted value and never to the
/// placeholder defaults.
pub fn escape_mdx(text: &str) -> String {
    RE_MDX_SPECIAL.replace_all(text, r"\$0").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_mdx("A <test> & example"), r"A \<test\> \& example");
    }

    #[test]
    fn escapes_every_special_character() {
        assert_eq!(
            escape_mdx(r"<>@[]\`*_{}&#"),
            r"\<\>\@\[\]\\\`\*\_\{\}\&\#"
        );
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_mdx("Foo Bar 123"), "Foo Bar 123");
        assert_eq!(escape_mdx(""), "");
    }

    #[test]
    fn not_idempotent() {
        let once = escape_mdx("<b>");
        let twice = escape_mdx(&once);
        assert_ne!(once, twice);
    }
}
