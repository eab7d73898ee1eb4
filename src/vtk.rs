//! Conversion of decoded meshes to the VTK data model.

use crate::ElementType;
use crate::Mesh;
use std::iter;
use vtkio::model::Attributes;
use vtkio::model::ByteOrder;
use vtkio::model::CellType;
use vtkio::model::Cells;
use vtkio::model::DataSet;
use vtkio::model::Piece;
use vtkio::model::UnstructuredGridPiece;
use vtkio::model::Version;
use vtkio::model::VertexNumbers;
use vtkio::IOBuffer;
use vtkio::Vtk;

impl ElementType {
    /// The VTK cell type elements of this type are written as.
    ///
    /// Some high-order Gmsh elements have no VTK counterpart and fall back to
    /// the linear cell of the same shape.
    pub fn cell_type(self) -> CellType {
        match self.code() {
            1 => CellType::Line,
            2 => CellType::Triangle,
            3 => CellType::Quad,
            4 => CellType::Tetra,
            5 => CellType::Hexahedron,
            6 => CellType::Wedge,
            7 | 14 => CellType::Pyramid,
            8 => CellType::QuadraticEdge,
            9 => CellType::QuadraticTriangle,
            10 => CellType::BiquadraticQuad,
            11 => CellType::QuadraticTetra,
            12 => CellType::TriquadraticHexahedron,
            13 => CellType::BiquadraticQuadraticWedge,
            15 => CellType::Vertex,
            16 => CellType::QuadraticQuad,
            17 => CellType::QuadraticHexahedron,
            18 => CellType::QuadraticWedge,
            19 => CellType::QuadraticPyramid,
            20..=25 => CellType::Triangle,
            26..=28 => CellType::PolyLine,
            29..=31 => CellType::Tetra,
            92 | 93 => CellType::Hexahedron,
            code => unreachable!("element type with unknown code {code}"),
        }
    }
}

impl Mesh {
    /// Builds a VTK unstructured grid out of the mesh geometry.
    ///
    /// Returns `None` when the mesh is too large to be described with 32-bit
    /// vertex numbers.
    pub fn to_vtk(&self) -> Option<Vtk> {
        let vertex_count: usize = self
            .blocks()
            .iter()
            .map(|block| block.len() + block.nodes().len())
            .sum();
        if u32::try_from(self.node_count()).is_err()
            || u32::try_from(self.element_count()).is_err()
            || u32::try_from(vertex_count).is_err()
        {
            return None;
        }

        let points = self.points().iter().flatten().copied().collect();
        let cell_verts = VertexNumbers::Legacy {
            num_cells: self.element_count() as u32,
            vertices: self
                .cells()
                .flat_map(|cell| {
                    iter::once(cell.nodes.len() as u32)
                        .chain(cell.nodes.iter().map(|node| *node as u32))
                })
                .collect(),
        };
        let types = self
            .cells()
            .map(|cell| cell.element_type.cell_type())
            .collect();

        let piece = UnstructuredGridPiece {
            points: IOBuffer::F64(points),
            cells: Cells { cell_verts, types },
            data: Attributes {
                point: Vec::new(),
                cell: Vec::new(),
            },
        };
        Some(Vtk {
            version: Version::new((2, 0)),
            title: String::new(),
            byte_order: ByteOrder::BigEndian,
            data: DataSet::UnstructuredGrid {
                meta: None,
                pieces: vec![Piece::Inline(Box::new(piece))],
            },
            file_path: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "$MeshFormat
4.1 0 8
$EndMeshFormat
$Nodes
1 6 1 6
3 1 0 6
1
2
3
4
5
6
0 0 0
1 0 0
0 1 0
0 0 1
0.5 0 0
0.5 0.5 0
$EndNodes
$Elements
3 3 1 3
3 1 4 1
1 1 2 3 4
1 1 8 1
2 1 2 5
0 1 15 1
3 6
$EndElements
";

    #[test]
    fn test_cell_types() {
        for element_type in ElementType::all() {
            let _ = element_type.cell_type();
        }
        let cell_type = |code| ElementType::from_code(code).unwrap().cell_type();
        assert_eq!(cell_type(4), CellType::Tetra);
        assert_eq!(cell_type(8), CellType::QuadraticEdge);
        assert_eq!(cell_type(10), CellType::BiquadraticQuad);
        assert_eq!(cell_type(14), CellType::Pyramid);
        assert_eq!(cell_type(15), CellType::Vertex);
        assert_eq!(cell_type(22), CellType::Triangle);
        assert_eq!(cell_type(27), CellType::PolyLine);
        assert_eq!(cell_type(93), CellType::Hexahedron);
    }

    #[test]
    fn test_to_vtk() {
        let mesh: Mesh = INPUT.parse().unwrap();
        let vtk = mesh.to_vtk().unwrap();
        let piece = match vtk.data {
            DataSet::UnstructuredGrid { mut pieces, .. } => match pieces.pop() {
                Some(Piece::Inline(piece)) => *piece,
                piece => panic!("unexpected piece {:?}", piece),
            },
            data => panic!("unexpected data set {:?}", data),
        };
        assert_eq!(piece.num_points(), 6);
        assert_eq!(
            piece.cells.types,
            [CellType::Tetra, CellType::QuadraticEdge, CellType::Vertex],
        );
        match piece.cells.cell_verts {
            VertexNumbers::Legacy {
                num_cells,
                vertices,
            } => {
                assert_eq!(num_cells, 3);
                assert_eq!(vertices, [4, 0, 1, 2, 3, 3, 0, 1, 4, 1, 5]);
            }
            cell_verts => panic!("unexpected vertex numbers {:?}", cell_verts),
        }
    }
}
