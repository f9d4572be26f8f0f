//! Output rendering for reference nodes.

use std::fmt;

use protots_core::Colors;

use super::Config;
use super::ast::{EntityName, Expr, TypeReference};

/// Render a value-position reference as TypeScript source.
pub fn render_expression(expr: &Expr, config: &Config) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, config.colors);
    out
}

/// Render a type-position reference as TypeScript source.
pub fn render_type_reference(reference: &TypeReference, config: &Config) -> String {
    let mut out = String::new();
    write_entity_name(&mut out, &reference.name, config.colors);
    out
}

fn write_expr(out: &mut String, expr: &Expr, c: Colors) {
    match expr {
        Expr::Identifier(name) => out.push_str(&c.name(name)),
        Expr::PropertyAccess { object, name } => {
            write_expr(out, object, c);
            out.push_str(&c.punct("."));
            out.push_str(name);
        }
    }
}

fn write_entity_name(out: &mut String, name: &EntityName, c: Colors) {
    match name {
        EntityName::Identifier(name) => out.push_str(&c.name(name)),
        EntityName::Qualified { left, right } => {
            write_entity_name(out, left, c);
            out.push_str(&c.punct("."));
            out.push_str(right);
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_expression(self, &Config::default()))
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_entity_name(&mut out, self, Colors::OFF);
        f.write_str(&out)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}
