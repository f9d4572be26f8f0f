use crate::utils::{collapse_double_dots, qualify, strip_leading_dot, strip_package};

#[test]
fn leading_dot_removed_once() {
    assert_eq!(strip_leading_dot(".a.B"), "a.B");
    assert_eq!(strip_leading_dot("..B"), ".B");
    assert_eq!(strip_leading_dot(""), "");
}

#[test]
fn double_dots_collapse_without_overlap() {
    assert_eq!(collapse_double_dots("..M"), ".M");
    assert_eq!(collapse_double_dots("a...b"), "a..b");
    assert_eq!(collapse_double_dots("a.b"), "a.b");
}

#[test]
fn qualify_with_package() {
    assert_eq!(qualify("p", "M"), "p.M");
    assert_eq!(qualify("p.M", "N"), "p.M.N");
}

#[test]
fn qualify_with_empty_prefix() {
    assert_eq!(qualify("", "M"), "M");
    assert_eq!(qualify(".", "M"), "M");
}

#[test]
fn strip_package_only_at_segment_boundary() {
    assert_eq!(strip_package("pkg.a.Foo", "pkg.a"), "Foo");
    assert_eq!(strip_package("pkg.a.Foo.Bar", "pkg.a"), "Foo.Bar");
    assert_eq!(strip_package("pkg.abc.Foo", "pkg.a"), "pkg.abc.Foo");
    assert_eq!(strip_package("other.pkg.a.Foo", "pkg.a"), "other.pkg.a.Foo");
    assert_eq!(strip_package("pkg.a", "pkg.a"), "pkg.a");
}
