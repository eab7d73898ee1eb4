use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Nodes,
    Elements,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Nodes => write!(f, "$Nodes"),
            Section::Elements => write!(f, "$Elements"),
        }
    }
}

/// Inclusive range of tags.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TagRange {
    pub min: usize,
    pub max: usize,
}

impl TagRange {
    /// Widens `range` so that it contains `other`.
    pub(crate) fn merge(range: Option<TagRange>, other: TagRange) -> TagRange {
        match range {
            Some(range) => TagRange {
                min: usize::min(range.min, other.min),
                max: usize::max(range.max, other.max),
            },
            None => other,
        }
    }
}

impl fmt::Display for TagRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.min, self.max)
    }
}

/// The minimum and maximum tags written in a section header do not match
/// the tags of the section's entities.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TagRangeMismatch {
    pub section: Section,
    pub declared: TagRange,
    /// `None` when the section holds no entity.
    pub observed: Option<TagRange>,
}

impl TagRangeMismatch {
    /// Compares the header of a section against the tags it contains.
    pub(crate) fn check(
        section: Section,
        declared_count: usize,
        declared: TagRange,
        observed: Option<TagRange>,
    ) -> Option<TagRangeMismatch> {
        let consistent = match observed {
            Some(observed) => observed == declared,
            None => declared_count == 0,
        };
        if consistent {
            return None;
        }
        Some(TagRangeMismatch {
            section,
            declared,
            observed,
        })
    }
}

impl fmt::Display for TagRangeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min/max tags reported in {} header are wrong: ({}) != ",
            self.section, self.declared,
        )?;
        match self.observed {
            Some(observed) => write!(f, "({})", observed),
            None => write!(f, "(none)"),
        }
    }
}

/// Inconsistency found in the input that did not prevent decoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    TagRangeMismatch(TagRangeMismatch),
    /// Two nodes were written to the same slot; the last one was kept.
    NodeTagCollision { tag: usize },
    /// Slots of the point array no node was written to.
    UnassignedNodeSlots { count: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::TagRangeMismatch(mismatch) => write!(f, "{}", mismatch),
            Warning::NodeTagCollision { tag } => {
                write!(f, "node {} is defined more than once, keeping the last", tag)
            }
            Warning::UnassignedNodeSlots { count } => {
                write!(f, "{} node slots were left unassigned", count)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        let declared = TagRange { min: 1, max: 4 };
        assert_eq!(
            TagRangeMismatch::check(Section::Nodes, 4, declared, Some(declared)),
            None,
        );

        let observed = TagRange { min: 1, max: 5 };
        let mismatch = TagRangeMismatch::check(Section::Nodes, 4, declared, Some(observed));
        assert_eq!(
            mismatch,
            Some(TagRangeMismatch {
                section: Section::Nodes,
                declared,
                observed: Some(observed),
            }),
        );
        assert_eq!(
            mismatch.unwrap().to_string(),
            "min/max tags reported in $Nodes header are wrong: (1/4) != (1/5)",
        );
    }

    #[test]
    fn test_check_empty_section() {
        let declared = TagRange { min: 0, max: 0 };
        assert_eq!(
            TagRangeMismatch::check(Section::Elements, 0, declared, None),
            None,
        );
        assert!(TagRangeMismatch::check(Section::Elements, 3, declared, None).is_some());
    }

    #[test]
    fn test_merge() {
        let range = TagRange::merge(None, TagRange { min: 4, max: 9 });
        let range = TagRange::merge(Some(range), TagRange { min: 2, max: 5 });
        assert_eq!(range, TagRange { min: 2, max: 9 });
    }
}
