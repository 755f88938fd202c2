//! # Structural Paths
//!
//! A structural path locates a value inside a JSON document: an ordered
//! sequence of object keys and array indices. The empty path means the
//! document root.
//!
//! The validation engine reports violation locations as JSON Pointers
//! (RFC 6901). Those are parsed into typed segments here so that report
//! ordering is deterministic: indices compare numerically (`2` before
//! `10`), keys compare lexicographically, and the root path sorts before
//! everything else.

use std::fmt;

/// One step into a JSON document: an array index or an object key.
///
/// Indices order before keys at the same depth, which keeps the derived
/// ordering total without comparing numbers to strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// Zero-based position in an array.
    Index(u64),
    /// Key in an object.
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => write!(f, "{k}"),
        }
    }
}

/// Ordered sequence of segments locating a value inside a document.
///
/// Displays dot-joined (`watched.0.id`); the empty path displays as
/// `<root>`. The derived `Ord` is the report order: root first, then
/// ascending by segment sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StructuralPath(Vec<PathSegment>);

impl StructuralPath {
    /// The empty path, i.e. the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from pre-parsed segments.
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// Parse a JSON Pointer (RFC 6901) into a structural path.
    ///
    /// `""` is the root; `"/watched/0/id"` is three segments. Escapes
    /// `~1` and `~0` are decoded. A segment consisting solely of ASCII
    /// digits is treated as an array index; the pointer syntax does not
    /// distinguish the object key `"0"` from the array index `0`, and
    /// for reporting purposes the distinction is immaterial.
    pub fn from_json_pointer(pointer: &str) -> Self {
        if pointer.is_empty() {
            return Self::root();
        }
        let segments = pointer
            .split('/')
            .skip(1)
            .map(|raw| {
                let decoded = raw.replace("~1", "/").replace("~0", "~");
                match decoded.parse::<u64>() {
                    Ok(index) if decoded.bytes().all(|b| b.is_ascii_digit()) => {
                        PathSegment::Index(index)
                    }
                    _ => PathSegment::Key(decoded),
                }
            })
            .collect();
        Self(segments)
    }

    /// True for the document root (empty path).
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for StructuralPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_pointer_parses_to_empty_path() {
        let path = StructuralPath::from_json_pointer("");
        assert!(path.is_root());
        assert_eq!(path.to_string(), "<root>");
    }

    #[test]
    fn pointer_parses_keys_and_indices() {
        let path = StructuralPath::from_json_pointer("/watched/0/id");
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("watched".to_string()),
                PathSegment::Index(0),
                PathSegment::Key("id".to_string()),
            ]
        );
        assert_eq!(path.to_string(), "watched.0.id");
    }

    #[test]
    fn pointer_escapes_are_decoded() {
        let path = StructuralPath::from_json_pointer("/a~1b/c~0d");
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("a/b".to_string()),
                PathSegment::Key("c~d".to_string()),
            ]
        );
    }

    #[test]
    fn indices_order_numerically() {
        let two = StructuralPath::from_json_pointer("/items/2");
        let ten = StructuralPath::from_json_pointer("/items/10");
        assert!(two < ten, "2 must order before 10");
    }

    #[test]
    fn keys_order_lexicographically() {
        let a = StructuralPath::from_json_pointer("/alpha");
        let b = StructuralPath::from_json_pointer("/beta");
        assert!(a < b);
    }

    #[test]
    fn root_orders_before_everything() {
        let root = StructuralPath::root();
        let nested = StructuralPath::from_json_pointer("/a");
        assert!(root < nested);
    }

    #[test]
    fn prefix_orders_before_extension() {
        let parent = StructuralPath::from_json_pointer("/a");
        let child = StructuralPath::from_json_pointer("/a/b");
        assert!(parent < child);
    }

    #[test]
    fn non_numeric_digit_mix_stays_a_key() {
        let path = StructuralPath::from_json_pointer("/v1");
        assert_eq!(path.segments(), &[PathSegment::Key("v1".to_string())]);
    }
}
