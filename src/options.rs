//! Decoder settings.

use std::error;
use std::fmt;
use std::str;

/// How node tags found in the file are mapped to slots of the point array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NodeIndexing {
    /// Slots are handed out in file order and a tag-to-slot table resolves
    /// element connectivity.  Tags may be sparse or unordered.
    #[default]
    Lookup,

    /// The slot of a node is its tag minus one.
    ///
    /// The point array is as long as the largest tag.  Tags that are not a
    /// permutation of `1..=N` leave untouched slots at the origin or
    /// overwrite each other; both cases are reported as warnings.  Elements
    /// cannot reference untouched slots.
    Offset,
}

#[derive(Debug)]
pub struct ParseNodeIndexingError(String);

impl fmt::Display for ParseNodeIndexingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown node indexing {:?}, expected \"lookup\" or \"offset\"",
            self.0,
        )
    }
}

impl error::Error for ParseNodeIndexingError {}

impl str::FromStr for NodeIndexing {
    type Err = ParseNodeIndexingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "lookup" => Self::Lookup,
            "offset" => Self::Offset,
            _ => return Err(ParseNodeIndexingError(s.to_owned())),
        })
    }
}

impl fmt::Display for NodeIndexing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup => write!(f, "lookup"),
            Self::Offset => write!(f, "offset"),
        }
    }
}

/// Settings for [`decode_with`](crate::decode_with).
///
/// ```
/// use msh_io::{DecodeOptions, NodeIndexing};
///
/// let options = DecodeOptions {
///     node_indexing: NodeIndexing::Offset,
///     ..DecodeOptions::default()
/// };
/// # let _ = options;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub node_indexing: NodeIndexing,

    /// Fail the decode when the minimum and maximum tags declared by a
    /// section header differ from the tags actually found.  When unset, the
    /// mismatch is only recorded as a [`Warning`](crate::Warning).
    pub strict_tag_ranges: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_indexing_from_str() {
        assert_eq!("lookup".parse::<NodeIndexing>().unwrap(), NodeIndexing::Lookup);
        assert_eq!("offset".parse::<NodeIndexing>().unwrap(), NodeIndexing::Offset);
        let err = "dense".parse::<NodeIndexing>().unwrap_err();
        assert!(err.to_string().contains("\"dense\""));
    }

    #[test]
    fn test_node_indexing_display() {
        for indexing in [NodeIndexing::Lookup, NodeIndexing::Offset] {
            assert_eq!(indexing.to_string().parse::<NodeIndexing>().unwrap(), indexing);
        }
    }
}
