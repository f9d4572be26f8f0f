use std::path::PathBuf;

use protots_compiler::{Batch, Diagnostics, Options};
use protots_core::Colors;
use serde::Serialize;

use super::batch_loader::load_or_exit;

pub struct SymbolsArgs {
    pub batch_path: PathBuf,
    pub json: bool,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: SymbolsArgs) {
    let batch = load_or_exit(&args.batch_path, Options::default());

    if args.json {
        let report = SymbolsReport::from_batch(&batch);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", batch.dump(Colors::new(args.color)));
    }

    let mut diagnostics = Diagnostics::new().strict(args.strict);
    diagnostics.extend(batch.diagnostics().clone());
    if !diagnostics.is_empty() {
        eprintln!("{}", diagnostics.printer().colored(args.color).render());
    }
    if diagnostics.has_errors() {
        std::process::exit(1);
    }
}

/// JSON form of a preprocessed batch, in insertion order.
#[derive(Debug, Serialize)]
pub struct SymbolsReport<'a> {
    pub symbols: Vec<SymbolEntry<'a>>,
    pub map_entries: Vec<MapEntry<'a>>,
    pub packages: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct SymbolEntry<'a> {
    pub name: &'a str,
    pub path: &'a str,
}

#[derive(Debug, Serialize)]
pub struct MapEntry<'a> {
    pub name: &'a str,
    pub key: Option<&'a str>,
    /// Type name for message and enum values, type tag otherwise.
    pub value: Option<&'a str>,
}

impl<'a> SymbolsReport<'a> {
    pub fn from_batch(batch: &'a Batch) -> Self {
        let symbols = batch
            .symbols()
            .iter()
            .map(|(name, path)| SymbolEntry { name, path })
            .collect();

        let map_entries = batch
            .map_entries()
            .iter()
            .map(|(name, _)| {
                let fields = batch.map_entry_fields(name);
                MapEntry {
                    name,
                    key: fields.and_then(|f| f.key.kind.as_deref()),
                    value: fields.and_then(|f| {
                        f.value.type_name.as_deref().or(f.value.kind.as_deref())
                    }),
                }
            })
            .collect();

        Self {
            symbols,
            map_entries,
            packages: batch.packages(),
        }
    }
}
