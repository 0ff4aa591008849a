//! Placeholder resolution against the environment view.
//!
//! The rewriter only depends on the [`Resolver`] trait and does not know
//! where values come from. [`PlaceholderResolver`] is the standard
//! implementation: process environment first, then `.env`.

use serde::Serialize;

use crate::env_view::{DotEnvLocation, EnvironmentView, Origin, ProcessEnv, VariableSource};
use crate::error::MissingVariableError;
use crate::placeholder::{self, VERSION_TOKEN};

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Input with every resolvable placeholder replaced.
    pub value: String,
    /// Distinct names that were substituted, in first-seen order.
    pub substituted: Vec<String>,
}

impl Resolution {
    /// True when the input held no resolvable placeholder at all.
    pub fn is_noop(&self) -> bool {
        self.substituted.is_empty()
    }
}

/// Trait implemented by anything that can fill `{%NAME}` placeholders.
pub trait Resolver {
    fn resolution(&self, input: &str) -> Result<Resolution, MissingVariableError>;

    /// Resolved string; inputs without placeholders come back unchanged.
    fn resolve(&self, input: &str) -> Result<String, MissingVariableError> {
        self.resolution(input).map(|r| r.value)
    }
}

/// Where one placeholder's value would come from; never carries the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport {
    pub name: String,
    /// Number of occurrences in the input.
    pub occurrences: usize,
    /// `None` when the variable is not set anywhere.
    pub origin: Option<Origin>,
}

/// Resolves placeholders from the process environment, then a `.env` file.
///
/// Stateless between calls: every resolution builds a fresh
/// [`EnvironmentView`], so the `.env` file is re-read each time.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderResolver<P = ProcessEnv> {
    process: P,
    dotenv: DotEnvLocation,
}

impl PlaceholderResolver<ProcessEnv> {
    /// Live process environment with `.env` in the working directory.
    pub fn from_env() -> Self {
        Self::default()
    }
}

impl<P: VariableSource> PlaceholderResolver<P> {
    pub fn new(process: P, dotenv: DotEnvLocation) -> Self {
        Self { process, dotenv }
    }

    pub fn dotenv_location(&self) -> &DotEnvLocation {
        &self.dotenv
    }

    fn view(&self) -> EnvironmentView<&P> {
        EnvironmentView::new(&self.process, &self.dotenv)
    }

    /// Reports the source of every distinct placeholder in `input`,
    /// including unresolvable ones. The reserved `version` name is skipped.
    pub fn explain(&self, input: &str) -> Vec<TokenReport> {
        let tokens = placeholder::tokens(input);
        let view = self.view();
        placeholder::token_names(input)
            .into_iter()
            .filter(|name| name != VERSION_TOKEN)
            .map(|name| {
                let occurrences = tokens.iter().filter(|t| t.name == name).count();
                let origin = view.lookup(&name).map(|(_, origin)| origin);
                TokenReport {
                    name,
                    occurrences,
                    origin,
                }
            })
            .collect()
    }
}

impl<P: VariableSource> Resolver for PlaceholderResolver<P> {
    fn resolution(&self, input: &str) -> Result<Resolution, MissingVariableError> {
        let names: Vec<String> = placeholder::token_names(input)
            .into_iter()
            .filter(|name| name != VERSION_TOKEN)
            .collect();
        if names.is_empty() {
            return Ok(Resolution {
                value: input.to_string(),
                substituted: Vec::new(),
            });
        }

        let view = self.view();
        let mut values = Vec::with_capacity(names.len());
        for name in &names {
            match view.lookup(name) {
                Some((value, origin)) => {
                    tracing::debug!("placeholder {} resolved from {:?}", name, origin);
                    values.push(value);
                }
                None => {
                    tracing::debug!("placeholder {} is not set", name);
                    return Err(MissingVariableError::new(name.as_str(), input));
                }
            }
        }

        let value = placeholder::substitute(
            input,
            names
                .iter()
                .map(String::as_str)
                .zip(values.iter().map(String::as_str)),
        );
        Ok(Resolution {
            value,
            substituted: names,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn resolver(pairs: &[(&str, &str)]) -> PlaceholderResolver<HashMap<String, String>> {
        let env = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlaceholderResolver::new(env, DotEnvLocation::Disabled)
    }

    #[test]
    fn string_without_placeholders_is_unchanged() {
        let r = resolver(&[("KEY_FOO", "TEST")]);
        let res = r.resolution("https://example.com/download").unwrap();
        assert_eq!(res.value, "https://example.com/download");
        assert!(res.is_noop());
    }

    #[test]
    fn resolves_single_placeholder() {
        let r = resolver(&[("KEY_FOO", "TEST")]);
        assert_eq!(
            r.resolve("https://example.com/r/1.2.3/d?key={%KEY_FOO}").unwrap(),
            "https://example.com/r/1.2.3/d?key=TEST"
        );
    }

    #[test]
    fn resolves_same_placeholder_multiple_times() {
        let r = resolver(&[("KEY_FOO", "TEST")]);
        let res = r
            .resolution("https://example.com/r/1.2.3/d?key={%KEY_FOO}&confirm={%KEY_FOO}")
            .unwrap();
        assert_eq!(res.value, "https://example.com/r/1.2.3/d?key=TEST&confirm=TEST");
        assert_eq!(res.substituted, vec!["KEY_FOO".to_string()]);
    }

    #[test]
    fn resolves_multiple_placeholders() {
        let r = resolver(&[("KEY_FOO", "Hello"), ("KEY_BAR", "World")]);
        assert_eq!(
            r.resolve("https://example.com/r/1.2.3/d?key={%KEY_FOO}&secret={%KEY_BAR}")
                .unwrap(),
            "https://example.com/r/1.2.3/d?key=Hello&secret=World"
        );
    }

    #[test]
    fn missing_variable_fails_with_name_and_input() {
        let r = resolver(&[("KEY_BAR", "World")]);
        let input = "https://example.com/r/1.2.3/d?key={%KEY_FOO}&secret={%KEY_BAR}";
        let err = r.resolve(input).unwrap_err();
        assert_eq!(err.name, "KEY_FOO");
        assert_eq!(err.input, input);
        assert_eq!(
            err.to_string(),
            "Can't resolve placeholder {%KEY_FOO}. Environment variable 'KEY_FOO' is not set."
        );
    }

    #[test]
    fn values_are_not_rescanned() {
        let r = resolver(&[("A", "{%B}"), ("B", "b")]);
        assert_eq!(r.resolve("{%A}").unwrap(), "{%B}");
    }

    #[test]
    fn version_token_is_never_resolved_from_environment() {
        let r = resolver(&[("version", "9.9.9"), ("KEY_FOO", "x")]);
        let res = r.resolution("https://example.com/r/{%version}/d").unwrap();
        assert!(res.is_noop());
        assert_eq!(res.value, "https://example.com/r/{%version}/d");
        assert_eq!(
            r.resolve("{%version}?k={%KEY_FOO}").unwrap(),
            "{%version}?k=x"
        );
    }

    #[test]
    fn dotenv_fallback_and_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "KEY_FOO=NAY\nKEY_BAR=World\n").unwrap();

        let env: HashMap<String, String> =
            [("KEY_FOO".to_string(), "YAY".to_string())].into_iter().collect();
        let r = PlaceholderResolver::new(env, DotEnvLocation::Path(path));
        assert_eq!(r.resolve("{%KEY_FOO}/{%KEY_BAR}").unwrap(), "YAY/World");
    }

    #[test]
    fn dotenv_is_reread_for_every_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let r = PlaceholderResolver::new(HashMap::new(), DotEnvLocation::Path(path.clone()));

        assert!(r.resolve("{%KEY_FOO}").is_err());
        fs::write(&path, "KEY_FOO=later\n").unwrap();
        assert_eq!(r.resolve("{%KEY_FOO}").unwrap(), "later");
    }

    #[test]
    fn explain_reports_origin_without_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "KEY_BAR=World\n").unwrap();
        let env: HashMap<String, String> =
            [("KEY_FOO".to_string(), "Hello".to_string())].into_iter().collect();
        let r = PlaceholderResolver::new(env, DotEnvLocation::Path(path));

        let report = r.explain("{%version}/{%KEY_FOO}/{%KEY_BAR}/{%KEY_BAZ}/{%KEY_FOO}");
        assert_eq!(
            report,
            vec![
                TokenReport {
                    name: "KEY_FOO".to_string(),
                    occurrences: 2,
                    origin: Some(Origin::Process),
                },
                TokenReport {
                    name: "KEY_BAR".to_string(),
                    occurrences: 1,
                    origin: Some(Origin::DotEnv),
                },
                TokenReport {
                    name: "KEY_BAZ".to_string(),
                    occurrences: 1,
                    origin: None,
                },
            ]
        );
    }
}
