//! Geometry for the five regular solids
use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;

/// Errors raised while building solid geometry.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// The solid identifier matched none of the known names or aliases.
    #[error(
        "unknown solid kind `{0}` (expected 4/tetra/tetrahedron/simplex, \
         6/hexa/hexahedron/cube, 8/octa/octahedron, 12/dodeca/dodecahedron \
         or 20/icosa/icosahedron)"
    )]
    UnknownSolid(String),
}

/// One of the five regular (Platonic) polyhedra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidKind {
    Tetrahedron,
    Hexahedron,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl SolidKind {
    /// Number of faces bounding the solid.
    pub fn face_count(self) -> usize {
        match self {
            Self::Tetrahedron => 4,
            Self::Hexahedron => 6,
            Self::Octahedron => 8,
            Self::Dodecahedron => 12,
            Self::Icosahedron => 20,
        }
    }

    /// Number of distinct vertices.
    pub fn vertex_count(self) -> usize {
        match self {
            Self::Tetrahedron => 4,
            Self::Hexahedron => 8,
            Self::Octahedron => 6,
            Self::Dodecahedron => 20,
            Self::Icosahedron => 12,
        }
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Hexahedron => "hexahedron",
            Self::Octahedron => "octahedron",
            Self::Dodecahedron => "dodecahedron",
            Self::Icosahedron => "icosahedron",
        };
        f.write_str(name)
    }
}

impl FromStr for SolidKind {
    type Err = GeometryError;

    /// Parses a solid identifier. Accepts face counts and name prefixes,
    /// case-insensitively: `4`/`tetra`/`tetrahedron`/`simplex`,
    /// `6`/`hexa`/`hexahedron`/`cube`, `8`/`octa`/`octahedron`,
    /// `12`/`dodeca`/`dodecahedron`, `20`/`icosa`/`icosahedron`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ident = s.trim();
        match ident.to_ascii_lowercase().as_str() {
            "4" | "tetra" | "tetrahedron" | "simplex" => Ok(Self::Tetrahedron),
            "6" | "hexa" | "hexahedron" | "cube" => Ok(Self::Hexahedron),
            "8" | "octa" | "octahedron" => Ok(Self::Octahedron),
            "12" | "dodeca" | "dodecahedron" => Ok(Self::Dodecahedron),
            "20" | "icosa" | "icosahedron" => Ok(Self::Icosahedron),
            _ => Err(GeometryError::UnknownSolid(ident.to_string())),
        }
    }
}

/// A planar polygon bounding a solid, defined by an ordered vertex ring.
///
/// Insertion order is the polygon winding used for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub vertices: Vec<Point3<f64>>,
}

impl Face {
    pub fn new(vertices: Vec<Point3<f64>>) -> Self {
        Self { vertices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Sum of the vertex z coordinates, the raw input to depth keying.
    pub fn z_sum(&self) -> f64 {
        self.vertices.iter().map(|v| v.z).sum()
    }
}

/// A fixed, named set of faces. Immutable after construction.
///
/// Base coordinates lie on the unit sphere; the display scale is applied
/// exactly once, here, so every later rotation works from the same
/// untouched coordinates.
#[derive(Debug, Clone)]
pub struct Solid {
    kind: SolidKind,
    faces: Vec<Face>,
}

impl Solid {
    /// Builds the solid from its closed-form unit coordinates, scaled
    /// uniformly by `scale`.
    pub fn build(kind: SolidKind, scale: f64) -> Self {
        let (vertices, rings) = unit_geometry(kind);
        let faces = rings
            .iter()
            .map(|ring| Face::new(ring.iter().map(|&i| vertices[i] * scale).collect()))
            .collect();
        Self { kind, faces }
    }

    pub fn kind(&self) -> SolidKind {
        self.kind
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Unit-circumradius vertices plus face index rings for one solid.
fn unit_geometry(kind: SolidKind) -> (Vec<Point3<f64>>, &'static [&'static [usize]]) {
    match kind {
        SolidKind::Tetrahedron => (tetrahedron_vertices(), TETRAHEDRON_FACES),
        SolidKind::Hexahedron => (hexahedron_vertices(), HEXAHEDRON_FACES),
        SolidKind::Octahedron => (octahedron_vertices(), OCTAHEDRON_FACES),
        SolidKind::Dodecahedron => (dodecahedron_vertices(), DODECAHEDRON_FACES),
        SolidKind::Icosahedron => (icosahedron_vertices(), ICOSAHEDRON_FACES),
    }
}

const TETRAHEDRON_FACES: &[&[usize]] = &[&[0, 1, 2], &[0, 1, 3], &[0, 2, 3], &[1, 2, 3]];

fn tetrahedron_vertices() -> Vec<Point3<f64>> {
    let r2 = 2.0_f64.sqrt();
    let r6 = 6.0_f64.sqrt();

    vec![
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.0, r2 * (-2.0 / 3.0), -1.0 / 3.0),
        Point3::new(r6 / 3.0, r2 / 3.0, -1.0 / 3.0),
        Point3::new(-r6 / 3.0, r2 / 3.0, -1.0 / 3.0),
    ]
}

const HEXAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2, 3],
    &[0, 1, 5, 4],
    &[1, 2, 6, 5],
    &[2, 3, 7, 6],
    &[0, 3, 7, 4],
    &[4, 5, 6, 7],
];

fn hexahedron_vertices() -> Vec<Point3<f64>> {
    // Corner coordinate for a cube inscribed in the unit sphere.
    let l = 3.0_f64.sqrt() / 3.0;

    vec![
        Point3::new(l, l, l),
        Point3::new(l, -l, l),
        Point3::new(-l, -l, l),
        Point3::new(-l, l, l),
        Point3::new(l, l, -l),
        Point3::new(l, -l, -l),
        Point3::new(-l, -l, -l),
        Point3::new(-l, l, -l),
    ]
}

const OCTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2],
    &[0, 2, 3],
    &[0, 3, 4],
    &[0, 4, 1],
    &[5, 1, 2],
    &[5, 2, 3],
    &[5, 3, 4],
    &[5, 4, 1],
];

fn octahedron_vertices() -> Vec<Point3<f64>> {
    vec![
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, -1.0),
    ]
}

// Vertex order: top cap pair, bottom cap pair, upper ring, lower ring,
// equator. Rings listed so that each pentagon reads as a closed walk.
const DODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 6, 5, 4],
    &[0, 1, 7, 8, 9],
    &[1, 6, 17, 18, 7],
    &[0, 4, 16, 19, 9],
    &[2, 3, 12, 11, 10],
    &[2, 3, 13, 14, 15],
    &[2, 10, 16, 19, 15],
    &[3, 12, 17, 18, 13],
    &[5, 6, 17, 12, 11],
    &[4, 5, 11, 10, 16],
    &[7, 18, 13, 14, 8],
    &[9, 8, 14, 15, 19],
];

fn dodecahedron_vertices() -> Vec<Point3<f64>> {
    let r5 = 5.0_f64.sqrt();
    let ratio = (0.5 + r5 / 6.0).sqrt() / (2.0 + r5);
    let alpha = ((1.0 + r5) / 2.0) * ratio;
    let beta = (2.0 + r5) * ratio;
    let gamma = ((3.0 + r5) / 2.0) * ratio;

    vec![
        Point3::new(alpha, 0.0, beta),
        Point3::new(-alpha, 0.0, beta),
        Point3::new(alpha, 0.0, -beta),
        Point3::new(-alpha, 0.0, -beta),
        Point3::new(gamma, gamma, gamma),
        Point3::new(0.0, beta, alpha),
        Point3::new(-gamma, gamma, gamma),
        Point3::new(-gamma, -gamma, gamma),
        Point3::new(0.0, -beta, alpha),
        Point3::new(gamma, -gamma, gamma),
        Point3::new(gamma, gamma, -gamma),
        Point3::new(0.0, beta, -alpha),
        Point3::new(-gamma, gamma, -gamma),
        Point3::new(-gamma, -gamma, -gamma),
        Point3::new(0.0, -beta, -alpha),
        Point3::new(gamma, -gamma, -gamma),
        Point3::new(beta, alpha, 0.0),
        Point3::new(-beta, alpha, 0.0),
        Point3::new(-beta, -alpha, 0.0),
        Point3::new(beta, -alpha, 0.0),
    ]
}

// Vertex order: upper ring, lower ring, girdle.
const ICOSAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2],
    &[0, 2, 3],
    &[2, 3, 11],
    &[2, 1, 10],
    &[0, 1, 9],
    &[0, 8, 3],
    &[0, 9, 8],
    &[2, 10, 11],
    &[8, 3, 7],
    &[3, 11, 7],
    &[1, 10, 5],
    &[1, 5, 9],
    &[6, 10, 11],
    &[8, 9, 4],
    &[5, 6, 10],
    &[6, 7, 11],
    &[4, 7, 8],
    &[4, 5, 9],
    &[4, 5, 6],
    &[4, 6, 7],
];

fn icosahedron_vertices() -> Vec<Point3<f64>> {
    let r5 = 5.0_f64.sqrt();
    let ratio = (2.0 / (5.0 + r5)).sqrt();
    let unit = ratio;
    let gold = ((1.0 + r5) / 2.0) * ratio;

    vec![
        Point3::new(0.0, unit, gold),
        Point3::new(-gold, 0.0, unit),
        Point3::new(0.0, -unit, gold),
        Point3::new(gold, 0.0, unit),
        Point3::new(0.0, unit, -gold),
        Point3::new(-gold, 0.0, -unit),
        Point3::new(0.0, -unit, -gold),
        Point3::new(gold, 0.0, -unit),
        Point3::new(unit, gold, 0.0),
        Point3::new(-unit, gold, 0.0),
        Point3::new(-unit, -gold, 0.0),
        Point3::new(unit, -gold, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const ALL_KINDS: [SolidKind; 5] = [
        SolidKind::Tetrahedron,
        SolidKind::Hexahedron,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
    ];

    #[test]
    fn test_face_and_vertex_counts() {
        for kind in ALL_KINDS {
            let solid = Solid::build(kind, 1.0);
            assert_eq!(solid.face_count(), kind.face_count(), "{kind}");

            let (vertices, rings) = unit_geometry(kind);
            assert_eq!(vertices.len(), kind.vertex_count(), "{kind}");
            for ring in rings {
                assert!(ring.len() >= 3, "{kind}");
            }
        }
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        for kind in ALL_KINDS {
            let solid = Solid::build(kind, 128.0);
            for face in solid.faces() {
                for v in &face.vertices {
                    let radius = v.coords.norm();
                    assert!(
                        (radius - 128.0).abs() < 1e-9,
                        "{kind}: vertex {v} at radius {radius}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_faces_are_planar() {
        for kind in ALL_KINDS {
            let solid = Solid::build(kind, 1.0);
            for (i, face) in solid.faces().iter().enumerate() {
                let normal = face_normal(face);
                let origin = face.vertices[0];
                for v in &face.vertices[3..] {
                    let offset: Vector3<f64> = *v - origin;
                    assert!(
                        normal.dot(&offset).abs() < 1e-9,
                        "{kind} face {i} is not planar"
                    );
                }
            }
        }
    }

    #[test]
    fn test_display_scale_applied_once() {
        let unit = Solid::build(SolidKind::Octahedron, 1.0);
        let scaled = Solid::build(SolidKind::Octahedron, 128.0);
        for (a, b) in unit.faces().iter().zip(scaled.faces()) {
            for (va, vb) in a.vertices.iter().zip(&b.vertices) {
                assert!((va.coords * 128.0 - vb.coords).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn test_alias_invariance() {
        let alias_sets: [(&[&str], SolidKind); 5] = [
            (
                &["4", "tetra", "tetrahedron", "simplex", "TETRA", " Simplex "],
                SolidKind::Tetrahedron,
            ),
            (
                &["6", "hexa", "hexahedron", "cube", "Cube"],
                SolidKind::Hexahedron,
            ),
            (
                &["8", "octa", "octahedron", "OCTAHEDRON"],
                SolidKind::Octahedron,
            ),
            (
                &["12", "dodeca", "dodecahedron", "Dodeca"],
                SolidKind::Dodecahedron,
            ),
            (
                &["20", "icosa", "icosahedron", "iCoSa"],
                SolidKind::Icosahedron,
            ),
        ];

        for (aliases, expected) in alias_sets {
            let reference = Solid::build(expected, 128.0);
            for alias in aliases {
                let kind: SolidKind = alias.parse().unwrap();
                assert_eq!(kind, expected, "alias {alias}");
                let solid = Solid::build(kind, 128.0);
                assert_eq!(solid.faces(), reference.faces(), "alias {alias}");
            }
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        for bad in ["5", "icosahedrons", "sphere", ""] {
            let err = SolidKind::from_str(bad).unwrap_err();
            assert!(matches!(err, GeometryError::UnknownSolid(_)), "{bad}");
        }
    }

    fn face_normal(face: &Face) -> Vector3<f64> {
        let a = face.vertices[0];
        let b = face.vertices[1];
        let c = face.vertices[2];
        (b - a).cross(&(c - a)).normalize()
    }
}
