//! Target-language reference synthesis.
//!
//! Turns a [`Resolution`](crate::resolve::Resolution) into the syntax node the
//! emitter splices into generated code. Currently supports TypeScript.

pub mod typescript;
