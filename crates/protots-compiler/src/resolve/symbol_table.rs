//! Batch-wide tables keyed by qualified type name.
//!
//! Keys are stored without the leading dot (`pkg.Outer.Inner`). Lookups
//! accept the dot-prefixed descriptor form too, since that is how field and
//! method descriptors spell their type references.

use indexmap::IndexMap;
use protots_core::utils::strip_leading_dot;
use protots_core::{FieldDescriptor, MessageDescriptor};

/// Qualified type name -> path of the file that defines it.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    paths: IndexMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symbol definition.
    ///
    /// Returns the previously recorded path if the name was already defined
    /// (in which case the old value is replaced).
    pub fn insert(&mut self, name: &str, path: &str) -> Option<String> {
        self.paths.insert(strip_leading_dot(name).to_owned(), path.to_owned())
    }

    /// Path of the file defining `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.paths.get(strip_leading_dot(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.paths.contains_key(strip_leading_dot(name))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over (name, path) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Qualified type name -> synthetic map-entry message.
#[derive(Clone, Debug, Default)]
pub struct MapEntryRegistry {
    entries: IndexMap<String, MessageDescriptor>,
}

/// Key and value fields of a map entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapEntryFields<'a> {
    pub key: &'a FieldDescriptor,
    pub value: &'a FieldDescriptor,
}

impl MapEntryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, entry: MessageDescriptor) -> Option<MessageDescriptor> {
        self.entries.insert(strip_leading_dot(name).to_owned(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&MessageDescriptor> {
        self.entries.get(strip_leading_dot(name))
    }

    /// Key (field 1) and value (field 2) of a registered entry.
    pub fn fields(&self, name: &str) -> Option<MapEntryFields<'_>> {
        let entry = self.get(name)?;
        let by_number = |n: i32| entry.field.iter().find(|f| f.number == n);
        Some(MapEntryFields {
            key: by_number(1)?,
            value: by_number(2)?,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(strip_leading_dot(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageDescriptor)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
