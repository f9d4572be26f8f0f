//! String helpers for dot-separated protobuf type names.
//!
//! These rewrite names that end up verbatim in generated code, so each one
//! does exactly one textual operation and nothing more.

/// Remove a single leading `.` (descriptor form -> plain form).
///
/// # Examples
/// ```
/// use protots_core::utils::strip_leading_dot;
/// assert_eq!(strip_leading_dot(".pkg.Foo"), "pkg.Foo");
/// assert_eq!(strip_leading_dot("pkg.Foo"), "pkg.Foo");
/// ```
pub fn strip_leading_dot(name: &str) -> &str {
    name.strip_prefix('.').unwrap_or(name)
}

/// Replace every `..` with `.`, scanning left to right without overlap.
///
/// # Examples
/// ```
/// use protots_core::utils::collapse_double_dots;
/// assert_eq!(collapse_double_dots("..Foo"), ".Foo");
/// assert_eq!(collapse_double_dots("a..b"), "a.b");
/// ```
pub fn collapse_double_dots(name: &str) -> String {
    name.replace("..", ".")
}

/// Join a scope prefix and a local name into a canonical qualified name.
///
/// The result never carries a leading dot, so an empty prefix yields the
/// local name itself.
///
/// # Examples
/// ```
/// use protots_core::utils::qualify;
/// assert_eq!(qualify("pkg", "Foo"), "pkg.Foo");
/// assert_eq!(qualify("", "Foo"), "Foo");
/// assert_eq!(qualify(".pkg.Outer", "Inner"), "pkg.Outer.Inner");
/// ```
pub fn qualify(prefix: &str, name: &str) -> String {
    let joined = collapse_double_dots(&format!("{prefix}.{name}"));
    strip_leading_dot(&joined).to_owned()
}

/// Remove `package.` from the front of `name`, if present.
///
/// An empty package strips nothing.
///
/// # Examples
/// ```
/// use protots_core::utils::strip_package;
/// assert_eq!(strip_package("pkg.a.Foo", "pkg.a"), "Foo");
/// assert_eq!(strip_package("pkg.ab.Foo", "pkg.a"), "pkg.ab.Foo");
/// assert_eq!(strip_package("Foo", ""), "Foo");
/// ```
pub fn strip_package<'a>(name: &'a str, package: &str) -> &'a str {
    if package.is_empty() {
        return name;
    }
    name.strip_prefix(package)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(name)
}
