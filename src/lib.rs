//! Decoder for [Gmsh](https://gmsh.info) MSH files, version 4 and up, ASCII
//! encoding.
//!
//! The decoder reads the `$MeshFormat`, `$Nodes` and `$Elements` sections of
//! a file and builds an indexed [`Mesh`]: a point array and a list of cells
//! whose connectivity references slots of that array.
//!
//! ```
//! let input = "$MeshFormat
//! 4.1 0 8
//! $EndMeshFormat
//! $Nodes
//! 1 3 1 3
//! 2 1 0 3
//! 1
//! 2
//! 3
//! 0 0 0
//! 1 0 0
//! 0 1 0
//! $EndNodes
//! $Elements
//! 1 1 1 1
//! 2 1 2 1
//! 1 1 2 3
//! $EndElements
//! ";
//! let mesh: msh_io::Mesh = input.parse()?;
//! assert_eq!(mesh.node_count(), 3);
//! assert_eq!(mesh.element_count(), 1);
//! # Ok::<(), msh_io::Error>(())
//! ```

pub mod msh;
pub mod options;
#[cfg(feature = "vtk")]
pub mod vtk;

pub use msh::can_decode;
pub use msh::decode;
pub use msh::decode_with;
pub use msh::read_header;
pub use msh::test_format;
pub use msh::Cell;
pub use msh::CellBlock;
pub use msh::CellKind;
pub use msh::ElementType;
pub use msh::Error;
pub use msh::ErrorKind;
pub use msh::Mesh;
pub use msh::MeshFormat;
pub use msh::Section;
pub use msh::TagRange;
pub use msh::TagRangeMismatch;
pub use msh::Warning;
pub use options::DecodeOptions;
pub use options::NodeIndexing;
