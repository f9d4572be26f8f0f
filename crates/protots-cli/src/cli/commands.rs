//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("protots")
        .about("Cross-file type resolution for protobuf-to-TypeScript generation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(symbols_command())
        .subcommand(resolve_command())
}

/// Show the tables built by preprocessing a batch.
pub fn symbols_command() -> Command {
    Command::new("symbols")
        .about("Show symbols, map entries and packages of a batch")
        .override_usage("  protots symbols <BATCH> [--json]")
        .after_help(
            r#"EXAMPLES:
  protots symbols batch.json          # symbol table dump
  protots symbols batch.json --json   # as JSON
  protots symbols - < batch.json      # from stdin"#,
        )
        .arg(batch_path_arg())
        .arg(json_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Resolve type references as seen from one emitted file.
pub fn resolve_command() -> Command {
    Command::new("resolve")
        .about("Resolve type references from one file of a batch")
        .override_usage(
            "\
  protots resolve <BATCH> --file <PATH> [--dep <PATH=HANDLE>]... <TYPE>...",
        )
        .after_help(
            r#"EXAMPLES:
  protots resolve batch.json --file a.proto --dep b.proto=depB .pkg.b.Bar
  protots resolve batch.json --file a.proto --position type .pkg.a.Foo
  protots resolve batch.json --file a.proto --parameter no_namespace=false .pkg.b.Bar"#,
        )
        .arg(batch_path_arg())
        .arg(file_arg())
        .arg(dep_arg())
        .arg(parameter_arg())
        .arg(position_arg())
        .arg(type_names_arg())
        .arg(strict_arg())
        .arg(color_arg())
}
