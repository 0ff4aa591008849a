//! Placeholder tokens (`{%NAME}`) and their substitution.
//!
//! Scanning is separate from lookup: [`tokens`] only finds occurrences, while
//! [`substitute`] replaces them given already-resolved values. The resolver in
//! [`crate::resolver`] ties both to an [`crate::env_view::EnvironmentView`].

mod token;

pub use token::{has_placeholders, placeholder_for, token_names, tokens, Token};

/// Reserved name consumed by version injection, never looked up in the environment.
pub const VERSION_TOKEN: &str = "version";

/// Replaces every occurrence of each `(name, value)` placeholder in `input`.
///
/// Plain replace-all per name: values containing `{%` or `}` are inserted
/// verbatim and never re-scanned for further placeholders.
pub fn substitute<'a, I>(input: &str, values: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let pending: Vec<(String, &str)> = values
        .into_iter()
        .map(|(name, value)| (placeholder_for(name), value))
        .collect();
    if pending.is_empty() {
        return input.to_string();
    }

    // Single left-to-right pass so a substituted value is never matched again.
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    loop {
        let next = pending
            .iter()
            .enumerate()
            .filter_map(|(i, (literal, _))| rest.find(literal.as_str()).map(|pos| (pos, i)))
            .min();
        match next {
            Some((pos, i)) => {
                let (literal, value) = &pending[i];
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + literal.len()..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out
}
