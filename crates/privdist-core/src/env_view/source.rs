//! Variable sources consulted by the environment view.

use std::collections::{BTreeMap, HashMap};

/// Something that can look a variable up by exact name.
///
/// The resolver only depends on this trait; the live process environment is
/// one implementation, plain maps are another (handy for hosts that already
/// hold a snapshot of their environment, and for tests).
pub trait VariableSource {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Live process environment, read on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VariableSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values cannot be spliced into a URL string; treat as unset.
        std::env::var(name).ok()
    }
}

impl VariableSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl VariableSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: VariableSource + ?Sized> VariableSource for &S {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}
