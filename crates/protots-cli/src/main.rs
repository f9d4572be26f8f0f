mod cli;
mod commands;

use cli::{ResolveParams, SymbolsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("symbols", m)) => {
            let params = SymbolsParams::from_matches(m);
            commands::symbols::run(params.into());
        }
        Some(("resolve", m)) => {
            let params = ResolveParams::from_matches(m);
            commands::resolve::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
