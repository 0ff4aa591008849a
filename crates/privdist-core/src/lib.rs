//! Placeholder resolution and dist URL rewriting for private package repositories.
//!
//! Dist URLs may carry `{%NAME}` placeholders whose values live in the
//! process environment or a local `.env` file, so credentials never have to
//! be committed alongside the package metadata.

pub mod config;
pub mod env_view;
pub mod error;
pub mod logging;
pub mod operation;
pub mod placeholder;
pub mod resolver;
pub mod rewrite;

pub use error::{Error, MissingVariableError, Result};
pub use operation::{Package, PackageOperation};
pub use resolver::{PlaceholderResolver, Resolver};
pub use rewrite::{FetchConfig, RewriteResult, UrlRewriter};
