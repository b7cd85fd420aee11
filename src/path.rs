use serde::{Deserialize, Serialize};
use std::fmt;

/// A single step from a container to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Position inside an array.
    Index(usize),
    /// Key inside an object.
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{}", i),
            PathSegment::Key(k) => write!(f, "{}", k),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        PathSegment::Index(i)
    }
}

impl From<u32> for PathSegment {
    fn from(i: u32) -> Self {
        PathSegment::Index(i as usize)
    }
}

/// Lets bare integer literals (which default to `i32`) work in [`path!`].
///
/// # Panics
///
/// Panics on a negative index.
impl From<i32> for PathSegment {
    fn from(i: i32) -> Self {
        match usize::try_from(i) {
            Ok(i) => PathSegment::Index(i),
            Err(_) => panic!("negative array index {} in path", i),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(k: &str) -> Self {
        PathSegment::Key(k.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(k: String) -> Self {
        PathSegment::Key(k)
    }
}

/// Route from the root of a value tree to one of its nodes.
///
/// The root itself has the empty path. Serializes as a plain JSON array,
/// e.g. `["a", 2, "b"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path one segment deeper. `self` is left untouched.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the segments joined by `separator`; the root renders as "".
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join("."))
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Build a [`Path`] from a mix of indices and keys: `path!["a", 2, "b"]`.
#[macro_export]
macro_rules! path {
    () => { $crate::path::Path::root() };
    ($($seg:expr),+ $(,)?) => {
        $crate::path::Path::from(vec![$($crate::path::PathSegment::from($seg)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_leaves_parent_untouched() {
        let parent = Path::root().child("a");
        let kid = parent.child(3usize);
        assert_eq!(parent.len(), 1);
        assert_eq!(kid.segments(), &[PathSegment::Key("a".into()), PathSegment::Index(3)]);
    }

    #[test]
    fn join_and_display() {
        let p = crate::path!["a", 2usize, "b"];
        assert_eq!(p.to_string(), "a.2.b");
        assert_eq!(p.join("/"), "a/2/b");
        assert_eq!(Path::root().to_string(), "");
    }

    #[test]
    fn bare_integer_literals_are_indices() {
        let p = crate::path!["a", 2, "b", 0u32];
        assert_eq!(p, crate::path!["a", 2usize, "b", 0usize]);
        assert_eq!(p.segments()[1], PathSegment::Index(2));
    }

    #[test]
    #[should_panic(expected = "negative array index")]
    fn negative_literal_index_panics() {
        let _ = crate::path!["a", -1];
    }

    #[test]
    fn serializes_as_plain_array() {
        let p = crate::path!["items", 0usize];
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"["items",0]"#);
        let back: Path = serde_json::from_str(r#"["items",0]"#).unwrap();
        assert_eq!(back, p);
    }
}
