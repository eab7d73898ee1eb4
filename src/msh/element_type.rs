//! Gmsh element types.
//!
//! Element type codes carry both the shape and the polynomial order of an
//! element.  They are collapsed here onto a handful of canonical shapes, each
//! code keeping its own node count.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKind {
    Vertex,
    Line,
    Polyline,
    Triangle,
    Quadrangle,
    Tetrahedron,
    Hexahedron,
    Wedge,
    Pyramid,
}

impl CellKind {
    pub fn dimension(self) -> usize {
        match self {
            CellKind::Vertex => 0,
            CellKind::Line | CellKind::Polyline => 1,
            CellKind::Triangle | CellKind::Quadrangle => 2,
            CellKind::Tetrahedron | CellKind::Hexahedron | CellKind::Wedge | CellKind::Pyramid => 3,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Vertex => write!(f, "vertex"),
            CellKind::Line => write!(f, "line"),
            CellKind::Polyline => write!(f, "polyline"),
            CellKind::Triangle => write!(f, "triangle"),
            CellKind::Quadrangle => write!(f, "quadrangle"),
            CellKind::Tetrahedron => write!(f, "tetrahedron"),
            CellKind::Hexahedron => write!(f, "hexahedron"),
            CellKind::Wedge => write!(f, "wedge"),
            CellKind::Pyramid => write!(f, "pyramid"),
        }
    }
}

/// Codes of all supported element types, in increasing order.
const CODES: [u32; 33] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 92, 93,
];

/// Returns the shape and the node count of the given Gmsh element type, or
/// `None` if the type is not supported.
pub fn lookup(code: u32) -> Option<(CellKind, usize)> {
    use CellKind::*;

    Some(match code {
        1 => (Line, 2),
        2 => (Triangle, 3),
        3 => (Quadrangle, 4),
        4 => (Tetrahedron, 4),
        5 => (Hexahedron, 8),
        6 => (Wedge, 6),
        7 => (Pyramid, 5),
        8 => (Line, 3),
        9 => (Triangle, 6),
        10 => (Quadrangle, 9),
        11 => (Tetrahedron, 10),
        12 => (Hexahedron, 27),
        13 => (Wedge, 18),
        14 => (Pyramid, 14),
        15 => (Vertex, 1),
        16 => (Quadrangle, 8),
        17 => (Hexahedron, 20),
        18 => (Wedge, 15),
        19 => (Pyramid, 13),
        20 => (Triangle, 9),
        21 => (Triangle, 10),
        22 => (Triangle, 12),
        23 => (Triangle, 15),
        24 => (Triangle, 15),
        25 => (Triangle, 21),
        26 => (Polyline, 4),
        27 => (Polyline, 5),
        28 => (Polyline, 6),
        29 => (Tetrahedron, 20),
        30 => (Tetrahedron, 35),
        31 => (Tetrahedron, 56),
        92 => (Hexahedron, 64),
        93 => (Hexahedron, 125),
        _ => return None,
    })
}

/// A Gmsh element type code known to [`lookup`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementType {
    code: u32,
    kind: CellKind,
    node_count: usize,
}

impl ElementType {
    pub fn from_code(code: u32) -> Option<Self> {
        let (kind, node_count) = lookup(code)?;
        Some(Self {
            code,
            kind,
            node_count,
        })
    }

    /// Iterates over all supported element types.
    pub fn all() -> impl Iterator<Item = ElementType> {
        CODES.iter().filter_map(|code| ElementType::from_code(*code))
    }

    pub fn code(self) -> u32 {
        self.code
    }

    pub fn kind(self) -> CellKind {
        self.kind
    }

    pub fn node_count(self) -> usize {
        self.node_count
    }

    pub fn dimension(self) -> usize {
        self.kind.dimension()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-node {} ({})", self.node_count, self.kind, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(1), Some((CellKind::Line, 2)));
        assert_eq!(lookup(4), Some((CellKind::Tetrahedron, 4)));
        assert_eq!(lookup(7), Some((CellKind::Pyramid, 5)));
        assert_eq!(lookup(14), Some((CellKind::Pyramid, 14)));
        assert_eq!(lookup(15), Some((CellKind::Vertex, 1)));
        assert_eq!(lookup(16), Some((CellKind::Quadrangle, 8)));
        assert_eq!(lookup(17), Some((CellKind::Hexahedron, 20)));
        assert_eq!(lookup(26), Some((CellKind::Polyline, 4)));
        assert_eq!(lookup(29), Some((CellKind::Tetrahedron, 20)));
        assert_eq!(lookup(92), Some((CellKind::Hexahedron, 64)));
        assert_eq!(lookup(93), Some((CellKind::Hexahedron, 125)));
    }

    #[test]
    fn test_high_order_triangles() {
        let counts: Vec<_> = (20..=25)
            .map(|code| {
                let (kind, count) = lookup(code).unwrap();
                assert_eq!(kind, CellKind::Triangle);
                count
            })
            .collect();
        assert_eq!(counts, [9, 10, 12, 15, 15, 21]);
    }

    #[test]
    fn test_unknown() {
        for code in [0, 32, 33, 91, 94, u32::MAX] {
            assert_eq!(lookup(code), None);
            assert_eq!(ElementType::from_code(code), None);
        }
    }

    #[test]
    fn test_all() {
        let all: Vec<_> = ElementType::all().collect();
        assert_eq!(all.len(), CODES.len());
        assert!(all.windows(2).all(|w| w[0].code() < w[1].code()));
        let supported = (0..100).filter(|code| lookup(*code).is_some()).count();
        assert_eq!(supported, all.len());
    }

    #[test]
    fn test_dimension() {
        let tet = ElementType::from_code(4).unwrap();
        assert_eq!(tet.dimension(), 3);
        assert_eq!(tet.to_string(), "4-node tetrahedron (4)");
        assert_eq!(ElementType::from_code(15).unwrap().dimension(), 0);
        assert_eq!(ElementType::from_code(27).unwrap().dimension(), 1);
    }
}
