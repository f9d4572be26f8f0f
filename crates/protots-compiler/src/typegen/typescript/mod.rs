//! TypeScript reference nodes.
//!
//! TypeScript spells a cross-module reference differently in value and type
//! position (`dep.Foo` as a property access vs. `dep.Foo` as a qualified
//! name), so each resolution has two adapters over the same decision.

mod ast;
mod builder;
mod config;
mod render;


pub use ast::{EntityName, Expr, TypeReference};
pub use builder::{expression, type_reference};
pub use config::Config;
pub use render::{render_expression, render_type_reference};
