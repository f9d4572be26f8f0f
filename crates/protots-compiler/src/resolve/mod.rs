//! Cross-file symbol resolution.
//!
//! Two phases per generation run:
//! 1. Preprocess the whole batch once (`Batch::preprocess`): collect every
//!    message and enum into the symbol table, move map-entry messages into
//!    their own registry, record one package per file.
//! 2. For each emitted file, fill a `DependencyTable` with the imports the
//!    emitter decided on, and resolve every type reference through a
//!    `Resolver`. Reset the table before the next file.

mod batch;
mod dependencies;
mod dump;
mod preprocess;
mod resolver;
mod symbol_table;

#[cfg(test)]
mod resolver_tests;

pub use batch::Batch;
pub use dependencies::{DependencyTable, ModuleHandle};
pub use resolver::{LocalReason, Resolution, Resolver};
pub use symbol_table::{MapEntryFields, MapEntryRegistry, SymbolTable};
