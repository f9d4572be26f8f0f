use std::path::PathBuf;

use protots_compiler::typegen::typescript::{
    self, Config, render_expression, render_type_reference,
};
use protots_compiler::{DependencyTable, Diagnostics, ModuleHandle, Options};

use super::batch_loader::load_or_exit;
use crate::cli::Position;

pub struct ResolveArgs {
    pub batch_path: PathBuf,
    pub file: String,
    pub deps: Vec<(String, String)>,
    pub parameter: Option<String>,
    pub position: Position,
    pub type_names: Vec<String>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: ResolveArgs) {
    let options = parse_options(args.parameter.as_deref(), args.strict, args.color);
    let batch = load_or_exit(&args.batch_path, options);

    let root = batch.file(&args.file).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let mut deps = DependencyTable::new();
    for (path, handle) in args.deps {
        deps.register(path, ModuleHandle::new(handle));
    }

    let config = Config::new().colored(args.color);
    let resolver = batch.resolver(&deps);
    let mut diagnostics = Diagnostics::new().strict(args.strict);
    diagnostics.extend(batch.diagnostics().clone());

    for type_name in &args.type_names {
        let resolution = resolver.check(root, type_name, &mut diagnostics);
        let rendered = match args.position {
            Position::Expr => render_expression(&typescript::expression(&resolution), &config),
            Position::Type => {
                render_type_reference(&typescript::type_reference(&resolution), &config)
            }
        };
        println!("{}", rendered);
    }

    if !diagnostics.is_empty() {
        eprintln!("{}", diagnostics.printer().colored(args.color).render());
    }
    if diagnostics.has_errors() {
        std::process::exit(1);
    }
}

/// Parse the plugin parameter, printing what was skipped. Under `--strict`
/// anything skipped aborts the run.
fn parse_options(parameter: Option<&str>, strict: bool, color: bool) -> Options {
    if strict {
        return Options::parse_strict(parameter).unwrap_or_else(|e| {
            if let protots_compiler::Error::InvalidParameter(diag) = &e {
                eprintln!("{}", diag.render_with_source(parameter.unwrap_or_default(), color));
            }
            eprintln!("error: {}", e);
            std::process::exit(1);
        });
    }

    let (options, diag) = Options::parse(parameter);
    if !diag.is_empty() {
        eprintln!("{}", diag.render_with_source(parameter.unwrap_or_default(), color));
    }
    options
}
