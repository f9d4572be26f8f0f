//! protots compiler: symbol resolution for protobuf-to-TypeScript generation.
//!
//! This crate provides the resolution layer of the generator:
//! - `options` - generator parameter parsing
//! - `resolve` - batch preprocessing, symbol tables, reference resolution
//! - `typegen` - TypeScript reference nodes built from resolutions
//! - `diagnostics` - warnings for everything the generator silently absorbs
//!
//! # Example
//!
//! ```
//! use protots_compiler::{Batch, DependencyTable, ModuleHandle, Options};
//! use protots_core::{FileDescriptor, MessageDescriptor};
//!
//! let mut files = vec![
//!     FileDescriptor::new("a.proto", "pkg.a").message(MessageDescriptor::new("Foo")),
//!     FileDescriptor::new("b.proto", "pkg.b").message(MessageDescriptor::new("Bar")),
//! ];
//!
//! let mut batch = Batch::new(Options::default());
//! batch.preprocess(&mut files);
//!
//! let mut deps = DependencyTable::new();
//! deps.register("b.proto", ModuleHandle::new("depB"));
//!
//! let resolver = batch.resolver(&deps);
//! assert_eq!(resolver.expression(&files[0], ".pkg.b.Bar").to_string(), "depB.Bar");
//! assert_eq!(resolver.expression(&files[0], ".pkg.a.Foo").to_string(), "Foo");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod options;
pub mod resolve;
pub mod typegen;

#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use options::{Options, Style};
pub use resolve::{Batch, DependencyTable, LocalReason, ModuleHandle, Resolution, Resolver};

/// Errors at the boundary of the generator (input loading, strict configuration).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The descriptor set JSON could not be decoded.
    #[error("invalid descriptor set: {0}")]
    DescriptorSet(#[from] serde_json::Error),

    /// A file path that no file in the batch carries.
    #[error("file `{0}` is not part of the batch")]
    UnknownFile(String),

    #[error("generator parameter rejected with {} errors", .0.error_count())]
    InvalidParameter(Diagnostics),
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
