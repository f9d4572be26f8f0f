use std::ops::Range;

/// Diagnostic kinds produced while configuring and preprocessing a batch.
///
/// None of these stop generation: the generator always falls back to a
/// best-effort result, and the diagnostic records what was assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Generator parameter string
    UnknownOption,
    MalformedOption,
    InvalidOptionValue,

    // Preprocessing
    DuplicateSymbol,

    // Reference resolution
    UnknownType,
}

impl DiagnosticKind {
    /// Default severity for this kind. Can be overridden by policy.
    pub fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Stable short name, shown in plain rendering.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownOption => "unknown-option",
            Self::MalformedOption => "malformed-option",
            Self::InvalidOptionValue => "invalid-option-value",
            Self::DuplicateSymbol => "duplicate-symbol",
            Self::UnknownType => "unknown-type",
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownOption => {
                Some("known options: unary_rpc_promise, grpc_package, no_namespace, style")
            }
            Self::MalformedOption => Some("use `key=value`"),
            Self::InvalidOptionValue => Some("`style` accepts `grpc-js` or `async`"),
            Self::UnknownType => Some("the reference is emitted as a bare identifier"),
            Self::DuplicateSymbol => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnknownOption => "unknown option ignored",
            Self::MalformedOption => "option has no value",
            Self::InvalidOptionValue => "invalid option value",
            Self::DuplicateSymbol => "type is defined more than once",
            Self::UnknownType => "type is not defined in this batch",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnknownOption => "unknown option `{}` ignored".to_string(),
            Self::MalformedOption => "option `{}` has no value".to_string(),
            Self::DuplicateSymbol => "`{}` is defined more than once".to_string(),
            Self::UnknownType => "`{}` is not defined in this batch".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) severity: Severity,
    /// Byte range into the rendered source, when there is one.
    pub(crate) range: Option<Range<usize>>,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, severity: Severity) -> Self {
        Self {
            kind,
            severity,
            range: None,
            message: kind.fallback_message().to_string(),
            hints: kind.default_hint().map(str::to_owned).into_iter().collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.severity, self.kind.code())?;
        if let Some(range) = &self.range {
            write!(f, " at {}..{}", range.start, range.end)?;
        }
        write!(f, ": {}", self.message)?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
