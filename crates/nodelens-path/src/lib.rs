//! Structural path addresses into JSON trees.
//!
//! A [`Path`] is an ordered sequence of [`PathStep`]s - each either an object
//! property name or an array index - locating one value inside a JSON
//! document. The empty path addresses the document root. Paths compare
//! value-wise: two paths are equal iff they have the same length and every
//! corresponding step matches in both tag and value.
//!
//! Paths also format to and parse from JSON Pointer-style strings
//! (RFC 6901 `~0`/`~1` escaping) for display and error messages.
//!
//! # Example
//!
//! ```
//! use nodelens_path::{format_path, parse_path, PathStep};
//!
//! let path = vec![PathStep::key("users"), PathStep::index(0)];
//! assert_eq!(format_path(&path), "/users/0");
//! assert_eq!(parse_path("/users/0").unwrap(), path);
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep};

/// Unescapes a pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use nodelens_path::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("no-escapes"), "no-escapes");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a pointer path component.
///
/// Per RFC 6901, `/` is replaced with `~1` and `~` is replaced with `~0`.
///
/// # Example
///
/// ```
/// use nodelens_path::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Check if a string component is a valid array index: ASCII digits only,
/// no leading zero unless the component is exactly `"0"`.
fn is_index_component(component: &str) -> bool {
    if component.is_empty() {
        return false;
    }
    let bytes = component.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

/// Format a path into a pointer-style string.
///
/// Returns an empty string for the root path. `Key` steps are escaped;
/// `Index` steps render as their decimal form.
///
/// # Example
///
/// ```
/// use nodelens_path::{format_path, PathStep};
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&[PathStep::key("a~b"), PathStep::index(2)]), "/a~0b/2");
/// ```
pub fn format_path(path: &[PathStep]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for step in path {
        out.push('/');
        match step {
            PathStep::Key(k) => out.push_str(&escape_component(k)),
            PathStep::Index(i) => out.push_str(&i.to_string()),
        }
    }
    out
}

/// Parse a pointer-style string into a path.
///
/// The empty string parses as the root path. A component consisting only of
/// ASCII digits (without a superfluous leading zero) parses as an `Index`
/// step; every other component parses as a `Key` step after unescaping.
/// Numeric-looking property names therefore do not survive a format/parse
/// round trip as keys; callers that need such keys must build paths directly.
///
/// # Errors
///
/// Returns [`PathError::InvalidPointer`] when a non-empty string lacks a
/// leading `/`.
///
/// # Example
///
/// ```
/// use nodelens_path::{parse_path, PathStep};
///
/// assert_eq!(parse_path("").unwrap(), vec![]);
/// assert_eq!(
///     parse_path("/foo/0").unwrap(),
///     vec![PathStep::key("foo"), PathStep::index(0)],
/// );
/// assert_eq!(parse_path("/01").unwrap(), vec![PathStep::key("01")]);
/// assert!(parse_path("foo").is_err());
/// ```
pub fn parse_path(pointer: &str) -> Result<Path, PathError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(PathError::InvalidPointer);
    }
    Ok(pointer[1..]
        .split('/')
        .map(|component| {
            if is_index_component(component) {
                // Digits never contain ~ escapes; overflow falls back to a key
                match component.parse::<usize>() {
                    Ok(i) => PathStep::Index(i),
                    Err(_) => PathStep::Key(component.to_string()),
                }
            } else {
                PathStep::Key(unescape_component(component))
            }
        })
        .collect())
}

/// Check if a path addresses the root value.
///
/// # Example
///
/// ```
/// use nodelens_path::{is_root, PathStep};
///
/// assert!(is_root(&[]));
/// assert!(!is_root(&[PathStep::key("foo")]));
/// ```
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Check if two paths are equal: same length, each step equal in both tag
/// and value. Order matters.
pub fn is_path_equal(p1: &[PathStep], p2: &[PathStep]) -> bool {
    if p1.len() != p2.len() {
        return false;
    }
    p1.iter().zip(p2).all(|(a, b)| a == b)
}

/// Check if `parent` path strictly contains the `child` path.
///
/// # Example
///
/// ```
/// use nodelens_path::{is_child, PathStep};
///
/// let parent = vec![PathStep::key("foo")];
/// let child = vec![PathStep::key("foo"), PathStep::index(1)];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// ```
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    if parent.len() >= child.len() {
        return false;
    }
    parent.iter().zip(child).all(|(a, b)| a == b)
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PathError::NoParent`] for the root path.
pub fn parent(path: &[PathStep]) -> Result<Path, PathError> {
    if path.is_empty() {
        return Err(PathError::NoParent);
    }
    Ok(path[..path.len() - 1].to_vec())
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("NO_PARENT")]
    NoParent,
    #[error("POINTER_INVALID")]
    InvalidPointer,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(steps: &[PathStep]) -> Path {
        steps.to_vec()
    }

    #[test]
    fn test_format_path() {
        // Root
        assert_eq!(format_path(&[]), "");

        // Keys and indexes
        assert_eq!(format_path(&[PathStep::key("foo")]), "/foo");
        assert_eq!(
            format_path(&[PathStep::key("foo"), PathStep::index(3)]),
            "/foo/3"
        );

        // With escapes
        assert_eq!(
            format_path(&[PathStep::key("a~b"), PathStep::key("c/d")]),
            "/a~0b/c~1d"
        );

        // Empty string key
        assert_eq!(format_path(&[PathStep::key("")]), "/");
    }

    #[test]
    fn test_parse_path() {
        // Root
        assert_eq!(parse_path("").unwrap(), Vec::<PathStep>::new());

        // Single empty key
        assert_eq!(parse_path("/").unwrap(), vec![PathStep::key("")]);

        // Digits classify as indexes, leading zero stays a key
        assert_eq!(
            parse_path("/foo/0/01").unwrap(),
            vec![PathStep::key("foo"), PathStep::index(0), PathStep::key("01")]
        );

        // With escapes
        assert_eq!(
            parse_path("/a~0b/c~1d").unwrap(),
            vec![PathStep::key("a~b"), PathStep::key("c/d")]
        );

        // Missing leading slash
        assert_eq!(parse_path("foo"), Err(PathError::InvalidPointer));
    }

    #[test]
    fn test_roundtrip() {
        let pointers = vec!["", "/", "/foo", "/foo/0", "/a~0b/c~1d/1", "/x/01"];
        for pointer in pointers {
            let path = parse_path(pointer).unwrap();
            assert_eq!(format_path(&path), pointer, "roundtrip for {pointer:?}");
        }
    }

    #[test]
    fn test_is_root() {
        assert!(is_root(&[]));
        assert!(!is_root(&[PathStep::index(0)]));
    }

    #[test]
    fn test_is_path_equal_reflexive_and_symmetric() {
        let a = p(&[PathStep::key("a"), PathStep::index(0)]);
        let b = p(&[PathStep::key("a"), PathStep::index(0)]);
        assert!(is_path_equal(&a, &a));
        assert!(is_path_equal(&a, &b));
        assert!(is_path_equal(&b, &a));
    }

    #[test]
    fn test_is_path_equal_length_and_order_sensitive() {
        let full = p(&[PathStep::key("a"), PathStep::index(0)]);
        let prefix = p(&[PathStep::key("a")]);
        let swapped = p(&[PathStep::index(0), PathStep::key("a")]);
        assert!(!is_path_equal(&full, &prefix));
        assert!(!is_path_equal(&full, &swapped));
    }

    #[test]
    fn test_is_path_equal_tag_sensitive() {
        // Key "0" and index 0 format identically but are different steps
        let keyed = p(&[PathStep::key("0")]);
        let indexed = p(&[PathStep::index(0)]);
        assert!(!is_path_equal(&keyed, &indexed));
    }

    #[test]
    fn test_is_child() {
        let parent_path = p(&[PathStep::key("foo")]);
        let child = p(&[PathStep::key("foo"), PathStep::key("bar")]);
        let sibling = p(&[PathStep::key("baz")]);

        assert!(is_child(&parent_path, &child));
        assert!(!is_child(&child, &parent_path));
        assert!(!is_child(&parent_path, &sibling));
        assert!(!is_child(&parent_path, &parent_path));
    }

    #[test]
    fn test_parent() {
        let path = p(&[PathStep::key("foo"), PathStep::index(2)]);
        assert_eq!(parent(&path).unwrap(), vec![PathStep::key("foo")]);

        let single = p(&[PathStep::key("foo")]);
        assert_eq!(parent(&single).unwrap(), Vec::<PathStep>::new());

        assert_eq!(parent(&[]), Err(PathError::NoParent));
    }
}
