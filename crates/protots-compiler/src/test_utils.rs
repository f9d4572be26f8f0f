//! Shared fixtures for resolution tests.

use protots_core::{FileDescriptor, FileDescriptorSet, MessageDescriptor};

use crate::options::Options;
use crate::resolve::{Batch, DependencyTable, ModuleHandle};

/// `a.proto` (package `pkg.a`, message `Foo` with a map field) and
/// `b.proto` (package `pkg.b`, message `Bar` with nested `Baz`, enum `Kind`).
pub fn two_package_set() -> FileDescriptorSet {
    let a = FileDescriptor::new("a.proto", "pkg.a")
        .import("b.proto")
        .message(MessageDescriptor::new("Foo").nested(MessageDescriptor::map_entry(
            "TagsEntry",
            "TYPE_STRING",
            "TYPE_MESSAGE",
            Some(".pkg.b.Bar"),
        )));
    let b = FileDescriptor::new("b.proto", "pkg.b")
        .message(MessageDescriptor::new("Bar").nested(MessageDescriptor::new("Baz")))
        .enumeration("Kind");

    FileDescriptorSet { file: vec![a, b] }
}

/// Batch preprocessed from `two_package_set`.
pub fn two_package_batch(options: Options) -> Batch {
    let mut batch = Batch::new(options);
    batch.load(two_package_set());
    batch
}

/// Dependency table with each `(path, handle)` registered.
pub fn deps(entries: &[(&str, &str)]) -> DependencyTable {
    let mut table = DependencyTable::new();
    for (path, handle) in entries {
        table.register(*path, ModuleHandle::new(*handle));
    }
    table
}
