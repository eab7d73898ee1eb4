use super::lexer::Lexer;
use super::nodes::NodeSection;
use super::CellBlock;
use super::ElementType;
use super::Error;
use super::ErrorKind;
use super::Section;
use super::TagRange;
use super::Warning;
use super::CAPACITY_HINT_LIMIT;
use crate::DecodeOptions;
use itertools::Itertools as _;
use std::io;

const BEGIN: &str = "$Elements";

/// The decoded `$Elements` section.
#[derive(Debug)]
pub(crate) struct ElementSection {
    pub blocks: Vec<CellBlock>,
    pub warnings: Vec<Warning>,
}

/// Returns how many element tags and node slots to reserve for a block.
///
/// Both are capped to `CAPACITY_HINT_LIMIT`.
fn block_capacity(
    block_size: usize,
    remaining_capacity: usize,
    nodes_per_element: usize,
) -> (usize, usize) {
    let capacity = usize::min(block_size, remaining_capacity);
    let node_capacity = usize::min(
        capacity.saturating_mul(nodes_per_element),
        CAPACITY_HINT_LIMIT,
    );
    (capacity, node_capacity)
}

/// Skips to the `$Elements` section and reads it.
///
/// Node tags are resolved against `nodes`, which must hold the whole
/// `$Nodes` section.
pub(crate) fn parse<R: io::BufRead>(
    lexer: &mut Lexer<R>,
    nodes: &NodeSection,
    options: &DecodeOptions,
) -> Result<ElementSection, Error> {
    if !lexer.skip_to(BEGIN)? {
        return Err(lexer.error(ErrorKind::MissingSection(BEGIN)));
    }

    let block_count = lexer.int::<usize>()?;
    let element_count = lexer.int::<usize>()?;
    let declared = TagRange {
        min: lexer.int()?,
        max: lexer.int()?,
    };

    let mut remaining_capacity = usize::min(element_count, CAPACITY_HINT_LIMIT);
    let mut blocks = Vec::with_capacity(usize::min(block_count, CAPACITY_HINT_LIMIT));
    let mut warnings = Vec::new();
    let mut observed = None;

    for _ in 0..block_count {
        let entity_dimension = lexer.int::<usize>()?;
        let entity_tag = lexer.int::<i32>()?;
        let code = lexer.int::<u32>()?;
        let block_size = lexer.int::<usize>()?;
        let element_type = ElementType::from_code(code)
            .ok_or_else(|| lexer.error(ErrorKind::UnknownElementType(code)))?;
        let nodes_per_element = element_type.node_count();

        let (capacity, node_capacity) =
            block_capacity(block_size, remaining_capacity, nodes_per_element);
        remaining_capacity -= capacity;
        let mut block = CellBlock {
            entity_dimension,
            entity_tag,
            element_type,
            nodes: Vec::with_capacity(node_capacity),
            tags: Vec::with_capacity(capacity),
        };

        for _ in 0..block_size {
            let element = lexer.int::<usize>()?;
            for _ in 0..nodes_per_element {
                let node = lexer.int::<usize>()?;
                let slot = nodes.index.slot(node, &nodes.tags).ok_or_else(|| {
                    lexer.error(ErrorKind::DanglingNodeReference { element, node })
                })?;
                block.nodes.push(slot);
            }
            block.tags.push(element);
        }

        if let Some((min, max)) = block.tags.iter().copied().minmax().into_option() {
            observed = Some(TagRange::merge(observed, TagRange { min, max }));
        }

        tracing::trace!(
            entity_dimension,
            entity_tag,
            code,
            block_size,
            "element block"
        );
        blocks.push(block);
    }

    super::check_tag_range(
        lexer,
        options,
        &mut warnings,
        Section::Elements,
        element_count,
        declared,
        observed,
    )?;

    tracing::debug!(block_count, element_count, "read $Elements section");

    Ok(ElementSection { blocks, warnings })
}
