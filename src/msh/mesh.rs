use super::elements::ElementSection;
use super::nodes::NodeSection;
use super::CellKind;
use super::ElementType;
use super::Error;
use super::MeshFormat;
use super::Warning;
use std::fs;
use std::io;
use std::path::Path;
use std::str;

/// Elements of a single entity block of the `$Elements` section.
///
/// All elements of a block share the same type.
#[derive(Clone, Debug, PartialEq)]
pub struct CellBlock {
    pub(crate) entity_dimension: usize,
    pub(crate) entity_tag: i32,
    pub(crate) element_type: ElementType,
    /// Node slots, `element_type.node_count()` per element.
    pub(crate) nodes: Vec<usize>,
    pub(crate) tags: Vec<usize>,
}

impl CellBlock {
    pub fn entity_dimension(&self) -> usize {
        self.entity_dimension
    }

    pub fn entity_tag(&self) -> i32 {
        self.entity_tag
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Returns the connectivity of the block, `element_type().node_count()`
    /// slots per element.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Returns the element tags of the block.
    pub fn tags(&self) -> &[usize] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn cell(&self, idx: usize) -> Option<Cell<'_>> {
        let tag = *self.tags.get(idx)?;
        let node_count = self.element_type.node_count();
        Some(Cell {
            kind: self.element_type.kind(),
            element_type: self.element_type,
            tag,
            nodes: &self.nodes[idx * node_count..(idx + 1) * node_count],
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        let element_type = self.element_type;
        self.nodes
            .chunks_exact(element_type.node_count())
            .zip(&self.tags)
            .map(move |(nodes, tag)| Cell {
                kind: element_type.kind(),
                element_type,
                tag: *tag,
                nodes,
            })
    }
}

/// A mesh element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell<'a> {
    pub kind: CellKind,
    pub element_type: ElementType,
    /// Element tag, as found in the file.
    pub tag: usize,
    /// Slots of the element's nodes in the point array, in file order.
    pub nodes: &'a [usize],
}

/// Gmsh mesh data structure.
///
/// It stores the node coordinates, indexed by slot, and the connectivity of
/// the elements, in the order they appear in the file.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    format: MeshFormat,
    points: Vec<[f64; 3]>,
    node_tags: Vec<usize>,
    blocks: Vec<CellBlock>,
    warnings: Vec<Warning>,
}

impl Mesh {
    pub(crate) fn assemble(
        format: MeshFormat,
        nodes: NodeSection,
        elements: ElementSection,
    ) -> Mesh {
        let mut warnings = nodes.warnings;
        warnings.extend(elements.warnings);
        Mesh {
            format,
            points: nodes.points,
            node_tags: nodes.tags,
            blocks: elements.blocks,
            warnings,
        }
    }

    /// Reads a mesh from a buffered reader, with default options.
    pub fn from_reader<R: io::BufRead>(r: R) -> Result<Mesh, Error> {
        super::decode(r)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Mesh, Error> {
        let file = fs::File::open(path)?;
        Mesh::from_reader(io::BufReader::new(file))
    }

    /// Returns the contents of the `$MeshFormat` section.
    pub fn format(&self) -> MeshFormat {
        self.format
    }

    /// Returns the number of nodes (points) of the mesh.
    pub fn node_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    pub fn point(&self, idx: usize) -> [f64; 3] {
        self.points[idx]
    }

    /// Returns the tag of each point.
    ///
    /// Slots no node was written to have tag 0, which can only happen with
    /// [`NodeIndexing::Offset`](crate::NodeIndexing::Offset).
    pub fn node_tags(&self) -> &[usize] {
        &self.node_tags
    }

    pub fn element_count(&self) -> usize {
        self.blocks.iter().map(CellBlock::len).sum()
    }

    pub fn blocks(&self) -> &[CellBlock] {
        &self.blocks
    }

    /// Iterates over the elements of the mesh in file order.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        self.blocks.iter().flat_map(CellBlock::cells)
    }

    pub fn cell(&self, mut idx: usize) -> Option<Cell<'_>> {
        for block in &self.blocks {
            if idx < block.len() {
                return block.cell(idx);
            }
            idx -= block.len();
        }
        None
    }

    /// Returns the inconsistencies found while decoding.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

impl str::FromStr for Mesh {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mesh::from_reader(s.as_bytes())
    }
}
