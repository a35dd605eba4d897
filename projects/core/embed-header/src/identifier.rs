//! C++ identifier helpers.
//!
//! Identifiers passed to [`crate::render_header`] are written verbatim. These helpers let
//! callers check them up front, or derive them from asset paths the way build scripts
//! usually name embedded files (`shaders/blit.wgsl` becomes `shaders_blit_wgsl`).

/// Returns `true` if `name` is a plain C++ identifier: an ASCII letter or `_`, followed by
/// ASCII letters, digits or `_`.
///
/// Keywords are not rejected.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => false,
    }
}

/// Returns `true` if `name` is a namespace name, optionally nested with `::`
/// (`assets::fonts`). Every segment must satisfy [`is_valid_identifier`].
pub fn is_valid_namespace(name: &str) -> bool {
    name.split("::").all(is_valid_identifier)
}

/// Derives an identifier from a path.
///
/// Normal path components are joined with `_` and every character outside `[A-Za-z0-9_]`
/// is replaced by `_`. Roots, prefixes, `.` and `..` are skipped. A leading digit gets an
/// extra `_` prefix, and a path with no usable components becomes `_`.
///
/// ```
/// use embed_header::identifier::identifier_from_path;
/// use std::path::Path;
///
/// assert_eq!(
///     identifier_from_path(Path::new("shaders/pass001_init_kmeans.wgsl")),
///     "shaders_pass001_init_kmeans_wgsl"
/// );
/// ```
#[cfg(feature = "std")]
pub fn identifier_from_path(path: &std::path::Path) -> alloc::string::String {
    use alloc::string::String;
    use std::path::Component;

    let mut result = String::new();
    for component in path.components() {
        let Component::Normal(part) = component else {
            continue;
        };

        if !result.is_empty() {
            result.push('_');
        }
        result.extend(part.to_string_lossy().chars().map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        }));
    }

    match result.chars().next() {
        None => result.push('_'),
        Some(first) if first.is_ascii_digit() => result.insert(0, '_'),
        Some(_) => {}
    }
    result
}
