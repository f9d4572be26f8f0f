use protots_core::{FileDescriptor, MessageDescriptor};

use super::{Batch, DependencyTable, LocalReason, ModuleHandle, Resolution};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::options::Options;
use crate::test_utils::{deps, two_package_batch};

fn file_a(batch: &Batch) -> &FileDescriptor {
    batch.file("a.proto").unwrap()
}

#[test]
fn imported_reference_is_qualified_and_flattened() {
    let batch = two_package_batch(Options::default());
    let deps = deps(&[("b.proto", "depB")]);
    let resolver = batch.resolver(&deps);

    let resolution = resolver.resolve(file_a(&batch), ".pkg.b.Bar");

    assert_eq!(
        resolution,
        Resolution::Qualified {
            handle: &ModuleHandle::new("depB"),
            tail: "Bar".to_owned(),
        }
    );
    assert_eq!(resolver.expression(file_a(&batch), ".pkg.b.Bar").to_string(), "depB.Bar");
}

#[test]
fn nested_imported_reference() {
    let batch = two_package_batch(Options::default());
    let deps = deps(&[("b.proto", "depB")]);
    let resolver = batch.resolver(&deps);

    insta::assert_snapshot!(resolver.expression(file_a(&batch), ".pkg.b.Bar.Baz").to_string(), @"depB.Bar.Baz");
    insta::assert_snapshot!(resolver.type_annotation(file_a(&batch), ".pkg.b.Bar.Baz").to_string(), @"depB.Bar.Baz");
}

#[test]
fn own_file_reference_is_local() {
    let batch = two_package_batch(Options::default());
    let deps = deps(&[("b.proto", "depB")]);
    let resolver = batch.resolver(&deps);

    let resolution = resolver.resolve(file_a(&batch), ".pkg.a.Foo");

    assert_eq!(
        resolution,
        Resolution::Local {
            name: "Foo".to_owned(),
            reason: LocalReason::NotImported,
        }
    );
}

#[test]
fn unregistered_file_falls_back_to_local() {
    let batch = two_package_batch(Options::default());
    let deps = DependencyTable::new();
    let resolver = batch.resolver(&deps);

    let resolution = resolver.resolve(file_a(&batch), ".pkg.b.Bar");

    assert!(resolution.is_local());
    assert!(!resolution.is_unknown());
    assert_eq!(resolver.expression(file_a(&batch), ".pkg.b.Bar").to_string(), "Bar");
}

#[test]
fn unregistered_file_keeps_namespace_when_flattening_disabled() {
    let batch = two_package_batch(Options::default().no_namespace(false));
    let deps = DependencyTable::new();
    let resolver = batch.resolver(&deps);

    // Only the root's own package is stripped.
    assert_eq!(resolver.expression(file_a(&batch), ".pkg.b.Bar").to_string(), "pkg.b.Bar");
    assert_eq!(resolver.expression(file_a(&batch), ".pkg.a.Foo").to_string(), "Foo");
}

#[test]
fn root_package_is_stripped_from_local_names() {
    let batch = two_package_batch(Options::default());
    let deps = DependencyTable::new();
    let resolver = batch.resolver(&deps);
    let b = batch.file("b.proto").unwrap();

    assert_eq!(resolver.expression(b, ".pkg.b.Bar").to_string(), "Bar");
    assert_eq!(resolver.expression(b, ".pkg.b.Bar.Baz").to_string(), "Bar.Baz");
}

#[test]
fn unknown_reference_is_local() {
    let batch = two_package_batch(Options::default());
    let deps = deps(&[("b.proto", "depB")]);
    let resolver = batch.resolver(&deps);

    let resolution = resolver.resolve(file_a(&batch), ".pkg.a.Missing");

    assert!(resolution.is_unknown());
    assert_eq!(
        resolution,
        Resolution::Local {
            name: "Missing".to_owned(),
            reason: LocalReason::Unknown,
        }
    );
}

#[test]
fn check_reports_unknown_types_only() {
    let batch = two_package_batch(Options::default());
    let deps = deps(&[("b.proto", "depB")]);
    let resolver = batch.resolver(&deps);
    let mut diag = Diagnostics::new();

    resolver.check(file_a(&batch), ".pkg.b.Bar", &mut diag);
    resolver.check(file_a(&batch), ".pkg.a.Foo", &mut diag);
    resolver.check(file_a(&batch), ".pkg.Missing", &mut diag);

    assert_eq!(diag.len(), 1);
    let message = diag.iter().next().unwrap();
    assert_eq!(message.kind(), DiagnosticKind::UnknownType);
    insta::assert_snapshot!(message.to_string(), @"warning[unknown-type]: `.pkg.Missing` is not defined in this batch (hint: the reference is emitted as a bare identifier)");
}

#[test]
fn namespace_kept_when_flattening_disabled() {
    let batch = two_package_batch(Options::default().no_namespace(false));
    let deps = deps(&[("b.proto", "depB")]);
    let resolver = batch.resolver(&deps);

    insta::assert_snapshot!(resolver.expression(file_a(&batch), ".pkg.b.Bar").to_string(), @"depB.pkg.b.Bar");
}

#[test]
fn reset_returns_to_local_resolution() {
    let batch = two_package_batch(Options::default());
    let mut deps = deps(&[("b.proto", "depB")]);

    assert!(!batch.resolver(&deps).resolve(file_a(&batch), ".pkg.b.Bar").is_local());

    deps.reset();

    assert!(batch.resolver(&deps).resolve(file_a(&batch), ".pkg.b.Bar").is_local());
}

#[test]
fn first_registered_package_wins() {
    let mut files = vec![
        FileDescriptor::new("p.proto", "pkg"),
        FileDescriptor::new("q.proto", "pkg.b").message(MessageDescriptor::new("Bar")),
        FileDescriptor::new("r.proto", "r"),
    ];
    let mut batch = Batch::new(Options::default());
    batch.preprocess(&mut files);
    let deps = deps(&[("q.proto", "depQ")]);

    // `pkg` is registered first, so only it is stripped.
    let expr = batch.resolver(&deps).expression(&files[2], ".pkg.b.Bar");

    assert_eq!(expr.to_string(), "depQ.b.Bar");
}

#[test]
fn prefix_match_without_dot_boundary() {
    let mut files = vec![
        FileDescriptor::new("p.proto", "pkg"),
        FileDescriptor::new("q.proto", "pkgx").message(MessageDescriptor::new("Foo")),
    ];
    let mut batch = Batch::new(Options::default());
    batch.preprocess(&mut files);
    let deps = deps(&[("q.proto", "depQ")]);

    // `pkgx.Foo` starts with `pkg` but contains no `pkg.`; nothing is removed.
    let expr = batch.resolver(&deps).expression(&files[0], ".pkgx.Foo");

    assert_eq!(expr.to_string(), "depQ.pkgx.Foo");
}

#[test]
fn empty_package_registered_first_blocks_flattening() {
    let mut files = vec![
        FileDescriptor::new("e.proto", "").message(MessageDescriptor::new("Top")),
        FileDescriptor::new("b.proto", "pkg.b").message(MessageDescriptor::new("Bar")),
        FileDescriptor::new("a.proto", "pkg.a"),
    ];
    let mut batch = Batch::new(Options::default());
    batch.preprocess(&mut files);
    let deps = deps(&[("b.proto", "depB"), ("e.proto", "depE")]);
    let resolver = batch.resolver(&deps);

    // `""` prefixes every name and is registered first, so nothing is stripped.
    assert_eq!(resolver.expression(&files[2], ".pkg.b.Bar").to_string(), "depB.pkg.b.Bar");
    assert_eq!(resolver.expression(&files[2], "Top").to_string(), "depE.Top");
}

#[test]
fn empty_package_registered_last_still_flattens() {
    let mut files = vec![
        FileDescriptor::new("b.proto", "pkg.b").message(MessageDescriptor::new("Bar")),
        FileDescriptor::new("e.proto", ""),
    ];
    let mut batch = Batch::new(Options::default());
    batch.preprocess(&mut files);
    let deps = deps(&[("b.proto", "depB")]);

    let expr = batch.resolver(&deps).expression(&files[1], ".pkg.b.Bar");

    assert_eq!(expr.to_string(), "depB.Bar");
}

#[test]
fn own_nested_type_is_not_flattened() {
    let mut files = vec![
        FileDescriptor::new("o.proto", "Outer"),
        FileDescriptor::new("m.proto", "")
            .message(MessageDescriptor::new("Outer").nested(MessageDescriptor::new("Inner"))),
    ];
    let mut batch = Batch::new(Options::default());
    batch.preprocess(&mut files);
    let deps = DependencyTable::new();
    let resolver = batch.resolver(&deps);

    // `Outer` is another file's package, but only the root package is stripped
    // from the root's own types.
    assert_eq!(resolver.expression(&files[1], ".Outer.Inner").to_string(), "Outer.Inner");
    assert_eq!(resolver.type_annotation(&files[1], ".Outer.Inner").to_string(), "Outer.Inner");
}

#[test]
fn unknown_type_is_not_flattened() {
    let batch = two_package_batch(Options::default());
    let deps = DependencyTable::new();
    let resolver = batch.resolver(&deps);

    assert_eq!(resolver.expression(file_a(&batch), ".pkg.b.Missing").to_string(), "pkg.b.Missing");
}

#[test]
fn type_position_mirrors_value_position() {
    let batch = two_package_batch(Options::default());
    let deps = deps(&[("b.proto", "depB")]);
    let resolver = batch.resolver(&deps);

    for name in [".pkg.b.Bar", ".pkg.a.Foo", ".pkg.b.Kind", ".nope.Nope"] {
        assert_eq!(
            resolver.expression(file_a(&batch), name).to_string(),
            resolver.type_annotation(file_a(&batch), name).to_string(),
        );
    }
}
