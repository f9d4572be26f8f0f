//! Preprocessing: collect type names, split out map entries.

use protots_core::utils::qualify;
use protots_core::{FileDescriptor, MessageDescriptor, TypeScope};

use super::Batch;
use crate::diagnostics::DiagnosticKind;

impl Batch {
    /// Preprocess every file, using each file's path and package.
    ///
    /// Must run over the full file set before any reference is resolved.
    pub fn preprocess(&mut self, files: &mut [FileDescriptor]) {
        for file in files {
            let path = file.name.clone();
            let package = file.package.clone();
            self.preprocess_scope(file, &path, &package);
        }
    }

    /// Register every type declared in `scope` (recursively) as defined in
    /// `path`, with qualified names under `prefix`.
    ///
    /// Map-entry messages are moved out of the scope's message list into the
    /// map-entry registry and are not descended into. The remaining messages
    /// keep their relative order.
    pub fn preprocess_scope<S: TypeScope + ?Sized>(
        &mut self,
        scope: &mut S,
        path: &str,
        prefix: &str,
    ) {
        if let Some(package) = scope.package() {
            self.packages.push(package.to_owned());
        }

        for enum_type in scope.enums() {
            let name = qualify(prefix, &enum_type.name);
            self.define(&name, path);
        }

        let (entries, mut kept): (Vec<MessageDescriptor>, Vec<MessageDescriptor>) =
            std::mem::take(scope.messages_mut())
                .into_iter()
                .partition(MessageDescriptor::is_map_entry);

        for entry in entries {
            let name = qualify(prefix, &entry.name);
            self.map_entries.insert(&name, entry);
        }

        for message in &mut kept {
            let name = qualify(prefix, &message.name);
            self.define(&name, path);
            self.preprocess_scope(message, path, &name);
        }

        *scope.messages_mut() = kept;
    }

    fn define(&mut self, name: &str, path: &str) {
        let Some(previous) = self.symbols.insert(name, path) else {
            return;
        };
        self.diagnostics
            .report(DiagnosticKind::DuplicateSymbol)
            .message(name)
            .hint(format!("first defined in `{previous}`, now in `{path}`"))
            .emit();
    }
}
