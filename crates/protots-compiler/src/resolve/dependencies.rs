//! Per-file import table.

use std::fmt;

use indexmap::IndexMap;

/// Identifier under which an imported file's generated module is bound,
/// e.g. `depB` in `import * as depB from './b'`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModuleHandle(String);

impl ModuleHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// File path -> module handle, for the file currently being emitted.
///
/// Only files registered here produce qualified references; everything else
/// resolves to a bare identifier. Reset before emitting the next file.
#[derive(Clone, Debug, Default)]
pub struct DependencyTable {
    handles: IndexMap<String, ModuleHandle>,
}

impl DependencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the handle for `path`, returning the one it replaces.
    pub fn register(
        &mut self,
        path: impl Into<String>,
        handle: ModuleHandle,
    ) -> Option<ModuleHandle> {
        self.handles.insert(path.into(), handle)
    }

    pub fn get(&self, path: &str) -> Option<&ModuleHandle> {
        self.handles.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.handles.contains_key(path)
    }

    /// Forget every registration.
    pub fn reset(&mut self) {
        self.handles.clear();
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Iterate over (path, handle) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleHandle)> {
        self.handles.iter().map(|(k, v)| (k.as_str(), v))
    }
}
