//! `.env` file parsing.
//!
//! Lines are `NAME=value`. Beyond that the parser is lenient:
//!
//! - blank lines and `# comments` are skipped
//! - an optional leading `export ` is accepted
//! - whitespace around the key and the value is trimmed (this also drops a
//!   trailing `\r` from CRLF files)
//! - matching surrounding `"` or `'` quotes are removed, nothing is unescaped
//! - lines without `=` are ignored
//! - a later definition of the same name wins
//!
//! Values are never exported into the process environment: the file is a
//! fallback source only, and the process environment must keep precedence.

use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Default file name looked up in the working directory.
pub const DEFAULT_DOTENV_FILENAME: &str = ".env";

/// Parses `.env` content into a name -> value map.
pub fn parse(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = parse_line(line) {
            vars.insert(key, value);
        }
    }
    vars
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Reads and parses `path`.
///
/// Returns `Ok(None)` when the file does not exist; any other I/O failure is
/// returned to the caller.
pub fn load(path: &Path) -> io::Result<Option<HashMap<String, String>>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(parse(&content))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
