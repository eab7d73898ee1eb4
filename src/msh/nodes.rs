use super::lexer::Lexer;
use super::Error;
use super::ErrorKind;
use super::Section;
use super::TagRange;
use super::Warning;
use super::CAPACITY_HINT_LIMIT;
use crate::DecodeOptions;
use crate::NodeIndexing;
use itertools::Itertools as _;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io;

const BEGIN: &str = "$Nodes";

/// With offset indexing, the point array may be this many times longer than
/// the declared node count.
const OFFSET_SLOT_FACTOR: usize = 4;

/// Resolves node tags to slots of the point array.
#[derive(Debug)]
pub(crate) enum NodeIndex {
    Lookup(HashMap<usize, usize>),
    Offset,
}

impl NodeIndex {
    /// Returns the slot of the node with the given tag, or `None` if no such
    /// node was read.  `tags` is the tag of each slot.
    pub fn slot(&self, tag: usize, tags: &[usize]) -> Option<usize> {
        let slot = match self {
            NodeIndex::Lookup(slots) => *slots.get(&tag)?,
            NodeIndex::Offset => tag.checked_sub(1)?,
        };
        if *tags.get(slot)? != tag {
            return None;
        }
        Some(slot)
    }
}

/// The decoded `$Nodes` section.
#[derive(Debug)]
pub(crate) struct NodeSection {
    pub points: Vec<[f64; 3]>,
    /// Tag of each slot, 0 for slots that were never written to.
    pub tags: Vec<usize>,
    pub index: NodeIndex,
    pub warnings: Vec<Warning>,
    /// Upper bound on slots, offset indexing only.
    slot_limit: usize,
}

impl NodeSection {
    fn new(indexing: NodeIndexing, capacity: usize, slot_limit: usize) -> Self {
        let index = match indexing {
            NodeIndexing::Lookup => NodeIndex::Lookup(HashMap::with_capacity(capacity)),
            NodeIndexing::Offset => NodeIndex::Offset,
        };
        NodeSection {
            points: Vec::with_capacity(capacity),
            tags: Vec::with_capacity(capacity),
            index,
            warnings: Vec::new(),
            slot_limit,
        }
    }

    fn insert(&mut self, tag: usize, point: [f64; 3]) -> Result<(), ErrorKind> {
        if tag == 0 {
            return Err(ErrorKind::InvalidNodeTag(tag));
        }
        match &mut self.index {
            NodeIndex::Lookup(slots) => {
                match slots.entry(tag) {
                    Entry::Occupied(_) => return Err(ErrorKind::DuplicateNodeTag(tag)),
                    Entry::Vacant(entry) => entry.insert(self.points.len()),
                };
                self.points.push(point);
                self.tags.push(tag);
            }
            NodeIndex::Offset => {
                let slot = tag - 1;
                if self.slot_limit <= slot {
                    return Err(ErrorKind::InvalidNodeTag(tag));
                }
                if self.points.len() <= slot {
                    let additional = slot + 1 - self.points.len();
                    self.points
                        .try_reserve_exact(additional)
                        .map_err(|_| ErrorKind::InvalidNodeTag(tag))?;
                    self.tags
                        .try_reserve_exact(additional)
                        .map_err(|_| ErrorKind::InvalidNodeTag(tag))?;
                    self.points.resize(slot + 1, [0.0; 3]);
                    self.tags.resize(slot + 1, 0);
                }
                if self.tags[slot] != 0 {
                    let warning = Warning::NodeTagCollision { tag };
                    tracing::warn!("{}", warning);
                    self.warnings.push(warning);
                }
                self.points[slot] = point;
                self.tags[slot] = tag;
            }
        }
        Ok(())
    }
}

/// Skips to the `$Nodes` section and reads it.
///
/// Each entity block lists the tags of its nodes first, then their
/// coordinates in the same order.  Parametric coordinates are read and
/// dropped.
pub(crate) fn parse<R: io::BufRead>(
    lexer: &mut Lexer<R>,
    options: &DecodeOptions,
) -> Result<NodeSection, Error> {
    if !lexer.skip_to(BEGIN)? {
        return Err(lexer.error(ErrorKind::MissingSection(BEGIN)));
    }

    let block_count = lexer.int::<usize>()?;
    let node_count = lexer.int::<usize>()?;
    let declared = TagRange {
        min: lexer.int()?,
        max: lexer.int()?,
    };

    let capacity = usize::min(node_count, CAPACITY_HINT_LIMIT);
    let slot_limit = usize::max(
        node_count.saturating_mul(OFFSET_SLOT_FACTOR),
        CAPACITY_HINT_LIMIT,
    );
    let mut section = NodeSection::new(options.node_indexing, capacity, slot_limit);
    let mut observed = None;
    let mut block_tags = Vec::new();

    for _ in 0..block_count {
        let dimension = lexer.int::<usize>()?;
        let entity_tag = lexer.int::<i32>()?;
        let parametric = lexer.int::<i32>()? != 0;
        let block_size = lexer.int::<usize>()?;
        if 3 < dimension {
            return Err(lexer.error(ErrorKind::InvalidEntityDimension(dimension)));
        }
        let value_count = if parametric { 3 + dimension } else { 3 };

        block_tags.clear();
        block_tags.reserve(usize::min(block_size, CAPACITY_HINT_LIMIT));
        for _ in 0..block_size {
            block_tags.push(lexer.int::<usize>()?);
        }
        if let Some((min, max)) = block_tags.iter().copied().minmax().into_option() {
            observed = Some(TagRange::merge(observed, TagRange { min, max }));
        }

        for &tag in &block_tags {
            let mut point = [0.0; 3];
            for coordinate in &mut point {
                *coordinate = lexer.float()?;
            }
            for _ in 3..value_count {
                let _parametric_coordinate = lexer.float()?;
            }
            section
                .insert(tag, point)
                .map_err(|kind| lexer.error(kind))?;
        }

        tracing::trace!(dimension, entity_tag, parametric, block_size, "node block");
    }

    let unassigned = section.tags.iter().filter(|tag| **tag == 0).count();
    if unassigned != 0 {
        let warning = Warning::UnassignedNodeSlots { count: unassigned };
        tracing::warn!("{}", warning);
        section.warnings.push(warning);
    }

    super::check_tag_range(
        lexer,
        options,
        &mut section.warnings,
        Section::Nodes,
        node_count,
        declared,
        observed,
    )?;

    tracing::debug!(
        block_count,
        node_count = section.points.len(),
        "read $Nodes section"
    );

    Ok(section)
}
