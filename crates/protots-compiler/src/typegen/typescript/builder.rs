//! Adapters from a resolution to TypeScript nodes.
//!
//! A local name stays a single identifier even when it contains dots (a
//! nested type of the emitted file, `Outer.Inner`); the emitter declares it
//! under that spelling. A qualified tail becomes one member per segment.

use super::ast::{EntityName, Expr, TypeReference};
use crate::resolve::Resolution;

pub fn expression(resolution: &Resolution<'_>) -> Expr {
    match resolution {
        Resolution::Local { name, .. } => Expr::identifier(name.as_str()),
        Resolution::Qualified { handle, tail } => tail
            .split('.')
            .fold(Expr::identifier(handle.as_str()), |expr, segment| {
                expr.property(segment)
            }),
    }
}

pub fn type_reference(resolution: &Resolution<'_>) -> TypeReference {
    let name = match resolution {
        Resolution::Local { name, .. } => EntityName::identifier(name.as_str()),
        Resolution::Qualified { handle, tail } => tail
            .split('.')
            .fold(EntityName::identifier(handle.as_str()), |left, segment| {
                left.qualify(segment)
            }),
    };
    TypeReference::new(name)
}
