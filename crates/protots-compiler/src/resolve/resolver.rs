//! Reference resolution: local identifier or module-qualified name.

use protots_core::FileDescriptor;
use protots_core::utils::{strip_leading_dot, strip_package};

use super::{Batch, DependencyTable, ModuleHandle};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::typegen::typescript::{self, Expr, TypeReference};

/// Why a reference stayed local.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalReason {
    /// No file in the batch defines the type.
    Unknown,
    /// The defining file is known but was not registered as an import
    /// (this includes the file being emitted).
    NotImported,
}

/// Outcome of resolving one type reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Bare identifier with the emitted file's package stripped. Types of
    /// other files are also flattened like a qualified tail.
    Local { name: String, reason: LocalReason },
    /// `handle.tail`, reaching into an imported module.
    Qualified { handle: &'a ModuleHandle, tail: String },
}

impl Resolution<'_> {
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(
            self,
            Self::Local {
                reason: LocalReason::Unknown,
                ..
            }
        )
    }
}

/// Resolves type references for one file-emission pass.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    batch: &'a Batch,
    deps: &'a DependencyTable,
}

impl<'a> Resolver<'a> {
    pub fn new(batch: &'a Batch, deps: &'a DependencyTable) -> Self {
        Self { batch, deps }
    }

    /// Decide how `type_name` (descriptor form, `.pkg.Foo`) is spelled from `root`.
    pub fn resolve(&self, root: &FileDescriptor, type_name: &str) -> Resolution<'a> {
        let Some(path) = self.batch.symbols.get(type_name) else {
            return Resolution::Local {
                name: root_relative(root, type_name).to_owned(),
                reason: LocalReason::Unknown,
            };
        };
        let Some(handle) = self.deps.get(path) else {
            // Another file's type that was not imported is still spelled
            // without its namespace; the root's own types are not.
            let name = root_relative(root, type_name);
            let name = if path == root.name {
                name.to_owned()
            } else {
                self.flatten(name)
            };
            return Resolution::Local {
                name,
                reason: LocalReason::NotImported,
            };
        };

        Resolution::Qualified {
            handle,
            tail: self.flatten(strip_leading_dot(type_name)),
        }
    }

    /// Resolve and report references no file in the batch defines.
    pub fn check(
        &self,
        root: &FileDescriptor,
        type_name: &str,
        diag: &mut Diagnostics,
    ) -> Resolution<'a> {
        let resolution = self.resolve(root, type_name);
        if resolution.is_unknown() {
            diag.report(DiagnosticKind::UnknownType)
                .message(type_name)
                .emit();
        }
        resolution
    }

    /// Reference in value position: identifier or property-access chain.
    pub fn expression(&self, root: &FileDescriptor, type_name: &str) -> Expr {
        typescript::expression(&self.resolve(root, type_name))
    }

    /// Reference in type position: type reference to an identifier or qualified name.
    pub fn type_annotation(&self, root: &FileDescriptor, type_name: &str) -> TypeReference {
        typescript::type_reference(&self.resolve(root, type_name))
    }

    /// Strip the first registered package that prefixes `name`, when
    /// namespace flattening is on.
    ///
    /// The first match in registration order wins, not the longest one, and
    /// the match is a plain string prefix: `pkg` matches `pkgx.Foo`. An empty
    /// package prefixes every name; when it is the first match nothing is
    /// stripped.
    fn flatten(&self, name: &str) -> String {
        if !self.batch.options.no_namespace {
            return name.to_owned();
        }

        let Some(package) = self
            .batch
            .packages
            .iter()
            .find(|p| name.starts_with(p.as_str()))
        else {
            return name.to_owned();
        };
        if package.is_empty() {
            return name.to_owned();
        }

        let prefix = format!("{package}.");
        match name.strip_prefix(&prefix) {
            Some(rest) => rest.to_owned(),
            // Prefix matched without a dot boundary: drop the first
            // `package.` occurrence wherever it is.
            None => name.replacen(&prefix, "", 1),
        }
    }
}

/// `type_name` as spelled inside `root`: no leading dot, no root package.
fn root_relative<'n>(root: &FileDescriptor, type_name: &'n str) -> &'n str {
    strip_package(strip_leading_dot(type_name), &root.package)
}
