use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::DuplicateSymbol).emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_warnings());
    assert!(!diagnostics.has_errors());
    insta::assert_snapshot!(diagnostics.render(), @"warning[duplicate-symbol]: type is defined more than once");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnknownType)
        .message("pkg.Missing")
        .emit();

    insta::assert_snapshot!(diagnostics.render(), @"warning[unknown-type]: `pkg.Missing` is not defined in this batch (hint: the reference is emitted as a bare identifier)");
}

#[test]
fn template_fallback_for_value_errors() {
    let kind = DiagnosticKind::InvalidOptionValue;
    assert_eq!(kind.message(None), "invalid option value");
    assert_eq!(kind.message(Some("style=sync")), "invalid option value: style=sync");
}

#[test]
fn range_shows_in_plain_rendering() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnknownOption)
        .message("foo")
        .range(0..3)
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.range(), Some(0..3));
    assert!(
        diagnostics
            .render()
            .starts_with("warning[unknown-option] at 0..3: unknown option `foo` ignored")
    );
}

#[test]
fn strict_policy_escalates() {
    let mut diagnostics = Diagnostics::new().strict(true);
    diagnostics.report(DiagnosticKind::MalformedOption).emit();

    assert!(diagnostics.is_strict());
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 0);
}

#[test]
fn extend_keeps_order() {
    let mut first = Diagnostics::new();
    first.report(DiagnosticKind::UnknownOption).emit();
    let mut second = Diagnostics::new();
    second.report(DiagnosticKind::UnknownType).emit();

    first.extend(second);

    let kinds: Vec<_> = first.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::UnknownOption, DiagnosticKind::UnknownType]
    );
}

#[test]
fn source_rendering_includes_snippet() {
    let source = "no_namespace=false,foo=bar";
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnknownOption)
        .message("foo")
        .range(19..22)
        .emit();

    let out = diagnostics.render_with_source(source, false);
    assert!(out.contains("unknown option `foo` ignored"));
    assert!(out.contains(source));
}

#[test]
fn source_rendering_falls_back_without_range() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DuplicateSymbol)
        .message("pkg.Foo")
        .emit();

    let out = diagnostics.render_with_source("unused", false);
    assert_eq!(out, "warning[duplicate-symbol]: `pkg.Foo` is defined more than once");
}

#[test]
fn strict_extend_escalates_taken_over_messages() {
    let mut lenient = Diagnostics::new();
    lenient.report(DiagnosticKind::DuplicateSymbol).message("pkg.Foo").emit();
    let mut strict = Diagnostics::new().strict(true);

    strict.extend(lenient);

    assert_eq!(strict.error_count(), 1);
    assert!(!strict.has_warnings());
    insta::assert_snapshot!(strict.render(), @"error[duplicate-symbol]: `pkg.Foo` is defined more than once");
}
