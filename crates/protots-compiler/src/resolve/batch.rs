//! Batch-scoped resolution state.

use protots_core::{FileDescriptor, FileDescriptorSet, MessageDescriptor, parse_descriptor_set};

use super::{DependencyTable, MapEntryFields, MapEntryRegistry, Resolver, SymbolTable};
use crate::diagnostics::Diagnostics;
use crate::options::Options;
use crate::{Error, Result};

/// Everything one generation run knows about its input files.
///
/// Created once with the run's options, filled by preprocessing, then only
/// read while files are emitted. One batch per run; nothing is shared
/// between batches.
#[derive(Clone, Debug, Default)]
pub struct Batch {
    pub(super) options: Options,
    pub(super) symbols: SymbolTable,
    pub(super) map_entries: MapEntryRegistry,
    /// One entry per preprocessed file, in processing order.
    pub(super) packages: Vec<String>,
    pub(super) diagnostics: Diagnostics,
    /// Files handed over with `load`.
    files: Vec<FileDescriptor>,
}

impl Batch {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Take ownership of a descriptor set and preprocess all of its files.
    pub fn load(&mut self, set: FileDescriptorSet) {
        let mut files = set.file;
        self.preprocess(&mut files);
        self.files.extend(files);
    }

    /// Build a batch from the JSON form of a descriptor set.
    pub fn from_json(options: Options, json: &str) -> Result<Self> {
        let set = parse_descriptor_set(json)?;
        let mut batch = Self::new(options);
        batch.load(set);
        Ok(batch)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn map_entries(&self) -> &MapEntryRegistry {
        &self.map_entries
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Anomalies found while preprocessing.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Files owned by this batch (see `load`).
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn file(&self, path: &str) -> Result<&FileDescriptor> {
        self.files
            .iter()
            .find(|f| f.name == path)
            .ok_or_else(|| Error::UnknownFile(path.to_owned()))
    }

    /// The map-entry message registered under `type_name`.
    pub fn map_descriptor(&self, type_name: &str) -> Option<&MessageDescriptor> {
        self.map_entries.get(type_name)
    }

    pub fn map_entry_fields(&self, type_name: &str) -> Option<MapEntryFields<'_>> {
        self.map_entries.fields(type_name)
    }

    /// Resolver for one file-emission pass.
    pub fn resolver<'a>(&'a self, deps: &'a DependencyTable) -> Resolver<'a> {
        Resolver::new(self, deps)
    }
}
