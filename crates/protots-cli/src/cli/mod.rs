mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{ResolveParams, SymbolsParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Both streams: `protots resolve ... | xargs` pipes stdout while
            // diagnostics still go to a terminal.
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}

/// Where a resolved reference is placed in the generated code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// Value position: property-access chain.
    #[default]
    Expr,
    /// Type position: qualified type name.
    Type,
}
