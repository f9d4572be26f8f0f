//! Generator options, parsed from the protoc plugin parameter string.
//!
//! The parameter is a comma-separated list of `key=value` pairs, e.g.
//! `no_namespace=false,style=grpc-js`. Unknown keys are ignored. Boolean
//! options are `true` unless the value is exactly `false`; string options
//! keep their raw text up to the next `=`.

use std::fmt;
use std::ops::Range;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::{Error, Result};

pub const DEFAULT_GRPC_PACKAGE: &str = "@fyn-software/grpc";

/// Flavor of the generated service code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// Callback-based clients compatible with `@grpc/grpc-js`.
    GrpcJs,
    /// Promise/async-iterator clients.
    #[default]
    Async,
}

impl Style {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "grpc-js" => Some(Self::GrpcJs),
            "async" => Some(Self::Async),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrpcJs => "grpc-js",
            Self::Async => "async",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for one generation run. Fixed once the batch is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Unary RPCs return a promise instead of taking a callback.
    pub unary_rpc_promise: bool,
    /// Module that provides the gRPC runtime imports.
    pub grpc_package: String,
    /// Strip package prefixes from cross-file references.
    pub no_namespace: bool,
    pub style: Style,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unary_rpc_promise: false,
            grpc_package: DEFAULT_GRPC_PACKAGE.to_owned(),
            no_namespace: true,
            style: Style::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unary_rpc_promise(mut self, value: bool) -> Self {
        self.unary_rpc_promise = value;
        self
    }

    pub fn grpc_package(mut self, value: impl Into<String>) -> Self {
        self.grpc_package = value.into();
        self
    }

    pub fn no_namespace(mut self, value: bool) -> Self {
        self.no_namespace = value;
        self
    }

    pub fn style(mut self, value: Style) -> Self {
        self.style = value;
        self
    }

    /// Parse a parameter string. Absent or empty input yields the defaults.
    ///
    /// Never fails: anything that cannot be applied is skipped and reported.
    /// Diagnostic ranges are byte offsets into `raw`.
    pub fn parse(raw: Option<&str>) -> (Self, Diagnostics) {
        Self::parse_with(raw, Diagnostics::new())
    }

    /// Parse a parameter string, rejecting it if anything had to be skipped.
    pub fn parse_strict(raw: Option<&str>) -> Result<Self> {
        let (options, diag) = Self::parse_with(raw, Diagnostics::new().strict(true));
        if diag.is_empty() {
            Ok(options)
        } else {
            Err(Error::InvalidParameter(diag))
        }
    }

    fn parse_with(raw: Option<&str>, mut diag: Diagnostics) -> (Self, Diagnostics) {
        let mut options = Self::default();

        let raw = raw.unwrap_or_default();
        let mut offset = 0;
        for entry in raw.split(',') {
            let span = offset..offset + entry.len();
            offset += entry.len() + 1;

            if entry.is_empty() {
                continue;
            }

            // At most two parts: text after a second `=` is dropped.
            let mut parts = entry.split('=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next();
            let key_span = span.start..span.start + key.len();
            options.apply(key, value, key_span, span, &mut diag);
        }

        (options, diag)
    }

    fn apply(
        &mut self,
        key: &str,
        value: Option<&str>,
        key_span: Range<usize>,
        span: Range<usize>,
        diag: &mut Diagnostics,
    ) {
        match key {
            "unary_rpc_promise" => self.unary_rpc_promise = parse_flag(value),
            "no_namespace" => self.no_namespace = parse_flag(value),
            "grpc_package" => match value {
                Some(v) => self.grpc_package = v.to_owned(),
                None => diag
                    .report(DiagnosticKind::MalformedOption)
                    .message(key)
                    .range(span)
                    .emit(),
            },
            "style" => match value.map(|v| (v, Style::from_name(v))) {
                Some((_, Some(style))) => self.style = style,
                Some((v, None)) => diag
                    .report(DiagnosticKind::InvalidOptionValue)
                    .message(format!("style={v}"))
                    .range(span)
                    .emit(),
                None => diag
                    .report(DiagnosticKind::MalformedOption)
                    .message(key)
                    .range(span)
                    .emit(),
            },
            _ => diag
                .report(DiagnosticKind::UnknownOption)
                .message(key)
                .range(key_span)
                .emit(),
        }
    }
}

/// A flag is on unless spelled exactly `false`; a bare key turns it on.
fn parse_flag(value: Option<&str>) -> bool {
    value != Some("false")
}
