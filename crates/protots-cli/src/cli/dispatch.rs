//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, Position};
use crate::commands::resolve::ResolveArgs;
use crate::commands::symbols::SymbolsArgs;

pub struct SymbolsParams {
    pub batch_path: PathBuf,
    pub json: bool,
    pub strict: bool,
    pub color: ColorChoice,
}

impl SymbolsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            batch_path: batch_path(m),
            json: m.get_flag("json"),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<SymbolsParams> for SymbolsArgs {
    fn from(p: SymbolsParams) -> Self {
        Self {
            batch_path: p.batch_path,
            json: p.json,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ResolveParams {
    pub batch_path: PathBuf,
    pub file: String,
    pub deps: Vec<(String, String)>,
    pub parameter: Option<String>,
    pub position: Position,
    pub type_names: Vec<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl ResolveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            batch_path: batch_path(m),
            file: m.get_one::<String>("file").cloned().unwrap_or_default(),
            deps: m
                .get_many::<(String, String)>("dep")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            parameter: m.get_one::<String>("parameter").cloned(),
            position: parse_position(m),
            type_names: m
                .get_many::<String>("type_names")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<ResolveParams> for ResolveArgs {
    fn from(p: ResolveParams) -> Self {
        Self {
            batch_path: p.batch_path,
            file: p.file,
            deps: p.deps,
            parameter: p.parameter,
            position: p.position,
            type_names: p.type_names,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn batch_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("batch_path").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_position(m: &ArgMatches) -> Position {
    match m.get_one::<String>("position").map(|s| s.as_str()) {
        Some("type") => Position::Type,
        _ => Position::Expr,
    }
}
