//! `{%NAME}` token scanning.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// `{%` followed by one or more characters other than `{`, `%`, `}`, closed by
/// the next `}`.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%([^{%}]+)\}").expect("token pattern is valid"));

/// One placeholder occurrence inside a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Name between `{%` and `}`.
    pub name: String,
    /// Byte range of the whole `{%NAME}` occurrence.
    pub span: Range<usize>,
}

impl Token {
    /// The token as it appears in the source string.
    pub fn literal(&self) -> String {
        placeholder_for(&self.name)
    }
}

/// Formats `name` as a placeholder, e.g. `KEY_FOO` -> `{%KEY_FOO}`.
pub fn placeholder_for(name: &str) -> String {
    format!("{{%{name}}}")
}

/// All non-overlapping tokens in `input`, left to right.
pub fn tokens(input: &str) -> Vec<Token> {
    TOKEN_REGEX
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(Token {
                name: name.as_str().to_string(),
                span: whole.range(),
            })
        })
        .collect()
}

/// Distinct token names in order of first appearance.
pub fn token_names(input: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for token in tokens(input) {
        if !names.contains(&token.name) {
            names.push(token.name);
        }
    }
    names
}

pub fn has_placeholders(input: &str) -> bool {
    TOKEN_REGEX.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_tokens_with_spans() {
        let input = "https://example.com/r/{%version}/d?key={%KEY_FOO}";
        let found = tokens(input);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "version");
        assert_eq!(&input[found[0].span.clone()], "{%version}");
        assert_eq!(found[1].name, "KEY_FOO");
        assert_eq!(&input[found[1].span.clone()], "{%KEY_FOO}");
        assert_eq!(found[1].literal(), "{%KEY_FOO}");
    }

    #[test]
    fn no_tokens_in_plain_url() {
        assert!(tokens("https://example.com/download").is_empty());
        assert!(!has_placeholders("https://example.com/download"));
    }

    #[test]
    fn names_are_deduplicated_in_first_seen_order() {
        let input = "{%B}-{%A}-{%B}-{%A}";
        assert_eq!(tokens(input).len(), 4);
        assert_eq!(token_names(input), vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn empty_name_is_not_a_token() {
        assert!(tokens("x{%}y").is_empty());
    }

    #[test]
    fn token_ends_at_next_closing_brace() {
        let found = tokens("{%A}B}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
    }

    #[test]
    fn nested_opening_restarts_match() {
        // `{%{%A}` contains exactly one token: the inner `{%A}`.
        let found = tokens("{%{%A}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
        assert_eq!(found[0].span, 2..6);
    }

    #[test]
    fn names_may_contain_arbitrary_characters() {
        let found = tokens("{%my key.with-dots}");
        assert_eq!(found[0].name, "my key.with-dots");
    }

    #[test]
    fn percent_inside_name_breaks_token() {
        assert!(tokens("{%A%B}").is_empty());
    }
}
