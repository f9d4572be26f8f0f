//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Descriptor set JSON file, or `-` for stdin (positional).
pub fn batch_path_arg() -> Arg {
    Arg::new("batch_path")
        .value_name("BATCH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("FileDescriptorSet as JSON (`-` reads stdin)")
}

/// File being emitted (--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .long("file")
        .value_name("PATH")
        .required(true)
        .help("Path of the file being emitted, as named in the batch")
}

/// Imported file and its module handle (--dep, repeatable).
pub fn dep_arg() -> Arg {
    Arg::new("dep")
        .long("dep")
        .value_name("PATH=HANDLE")
        .action(ArgAction::Append)
        .value_parser(parse_dep)
        .help("Register an import: file path and the handle it is bound to")
}

/// Generator parameter string (--parameter).
pub fn parameter_arg() -> Arg {
    Arg::new("parameter")
        .long("parameter")
        .value_name("TEXT")
        .help("Plugin parameter, e.g. `no_namespace=false,style=grpc-js`")
}

/// Reference placement (--position).
pub fn position_arg() -> Arg {
    Arg::new("position")
        .long("position")
        .value_name("POSITION")
        .default_value("expr")
        .value_parser(["expr", "type"])
        .help("Render references in value (expr) or type position")
}

/// Type references to resolve (positional, one or more).
pub fn type_names_arg() -> Arg {
    Arg::new("type_names")
        .value_name("TYPE")
        .required(true)
        .num_args(1..)
        .help("Fully qualified type names, e.g. `.pkg.Foo`")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

fn parse_dep(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((path, handle)) if !path.is_empty() && !handle.is_empty() => {
            Ok((path.to_owned(), handle.to_owned()))
        }
        _ => Err(format!("expected PATH=HANDLE, got `{raw}`")),
    }
}
