//! Human-readable dump of a preprocessed batch.

use std::fmt::Write;

use protots_core::Colors;

use super::Batch;

impl Batch {
    /// Symbols, map entries and packages, one per line, in insertion order.
    pub fn dump(&self, colors: Colors) -> String {
        let mut out = String::new();
        let arrow = colors.punct("->");

        out.push_str("symbols:\n");
        for (name, path) in self.symbols.iter() {
            let _ = writeln!(out, "  {} {} {}", colors.name(name), arrow, colors.path(path));
        }

        out.push_str("map entries:\n");
        for (name, _) in self.map_entries.iter() {
            let Some(fields) = self.map_entries.fields(name) else {
                let _ = writeln!(out, "  {} (malformed)", colors.name(name));
                continue;
            };
            let key = fields.key.kind.as_deref().unwrap_or("?");
            let value = fields
                .value
                .type_name
                .as_deref()
                .or(fields.value.kind.as_deref())
                .unwrap_or("?");
            let _ = writeln!(
                out,
                "  {} (key: {key}, value: {value})",
                colors.name(name)
            );
        }

        out.push_str("packages:\n");
        for package in &self.packages {
            let _ = writeln!(out, "  {package:?}");
        }

        out
    }
}
