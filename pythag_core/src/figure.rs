//! # Figure Geometry
//!
//! Derived geometry for the classic "squares on the sides" picture of the
//! theorem. This module only computes coordinates and labels; drawing them
//! is left to whatever renderer consumes the (serializable) [`TriangleFigure`].
//!
//! ## Layout
//!
//! ```text
//!   c-square           (a, b)
//!        \            /|
//!         \        c / | b   b-square →
//!          \        /  |
//!           (0, 0) /___| (a, 0)
//!                    a
//!               a-square ↓
//! ```
//!
//! The right angle sits at `(a, 0)`. The square on `a` hangs below the x-axis,
//! the square on `b` extends to the right, and the square on `c` lies on the
//! far side of the hypotenuse from the triangle.
//!
//! [`FigureBuilder::build_proof`] splits the same squares over two panels,
//! the legs' squares on one and the hypotenuse square on the other, so the
//! areas can be compared side by side.
//!
//! ## Example
//!
//! ```rust
//! use pythag_core::figure::FigureBuilder;
//! use pythag_core::solver::TriangleSolver;
//!
//! let solver = TriangleSolver::default();
//! let figure = FigureBuilder::new(&solver).build(3.0, 4.0).unwrap();
//! assert_eq!(figure.triangle.c, 5.0);
//! assert_eq!(figure.squares.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::solver::TriangleSolver;
use crate::triangle::Triangle;

/// Right-angle marker size as a fraction of the shorter leg
pub const RIGHT_ANGLE_MARKER_RATIO: f64 = 0.1;

/// Decimals shown in figure labels
pub const LABEL_PRECISION: usize = 2;

/// A point in figure coordinates (same units as the sides).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Which side of the triangle a square or label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
    C,
}

/// Square erected on one side; corners in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideSquare {
    pub side: Side,
    pub corners: [Point; 4],
    /// Area of the square (the side length squared)
    pub area: f64,
}

impl SideSquare {
    pub fn center(&self) -> Point {
        self.corners[0].midpoint(&self.corners[2])
    }
}

/// Text anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
}

/// Axis-aligned box containing every point of the figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

/// Everything a renderer needs to draw the figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleFigure {
    pub triangle: Triangle,
    /// (0, 0), (a, 0), (a, b)
    pub vertices: [Point; 3],
    /// Small square in the right-angle corner
    pub right_angle_marker: [Point; 4],
    /// Empty when squares are turned off
    pub squares: Vec<SideSquare>,
    pub labels: Vec<Label>,
    pub bounds: Bounds,
}

/// One half of a [`ProofFigure`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofPanel {
    pub title: String,
    pub vertices: [Point; 3],
    pub squares: Vec<SideSquare>,
    pub labels: Vec<Label>,
    pub bounds: Bounds,
}

/// Side-by-side proof: a² and b² on the left, c² on the right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofFigure {
    pub triangle: Triangle,
    /// Both forms of the equation with the numbers filled in
    pub title: String,
    pub legs: ProofPanel,
    pub hypotenuse: ProofPanel,
}

/// Builds figures by delegating the numeric work to a solver.
#[derive(Debug, Clone, Copy)]
pub struct FigureBuilder<'a> {
    solver: &'a TriangleSolver,
    show_squares: bool,
}

impl<'a> FigureBuilder<'a> {
    pub fn new(solver: &'a TriangleSolver) -> Self {
        FigureBuilder {
            solver,
            show_squares: true,
        }
    }

    /// Toggle the three side squares
    pub fn show_squares(mut self, show: bool) -> Self {
        self.show_squares = show;
        self
    }

    /// Compute the figure for a right triangle with legs `a` and `b`.
    pub fn build(&self, a: f64, b: f64) -> CalcResult<TriangleFigure> {
        let triangle = self.solver.triangle_from_legs(a, b)?;
        let c = triangle.c;
        let precision = LABEL_PRECISION;

        let origin = Point::new(0.0, 0.0);
        let corner = Point::new(a, 0.0);
        let apex = Point::new(a, b);
        let vertices = [origin, corner, apex];

        let s = a.min(b) * RIGHT_ANGLE_MARKER_RATIO;
        let right_angle_marker = [
            Point::new(a - s, 0.0),
            Point::new(a, 0.0),
            Point::new(a, s),
            Point::new(a - s, s),
        ];

        let mut labels = vec![
            Label { text: format!("a = {}", a), anchor: origin.midpoint(&corner) },
            Label { text: format!("b = {}", b), anchor: corner.midpoint(&apex) },
            Label { text: format!("c = {:.*}", precision, c), anchor: origin.midpoint(&apex) },
        ];

        let squares = if self.show_squares {
            let squares = side_squares(&triangle);
            labels.extend(area_labels(&squares));
            squares
        } else {
            Vec::new()
        };

        let bounds = bounds_of(
            vertices
                .iter()
                .chain(squares.iter().flat_map(|sq| sq.corners.iter())),
        );

        tracing::debug!(a, b, c, squares = squares.len(), "built triangle figure");
        Ok(TriangleFigure {
            triangle,
            vertices,
            right_angle_marker,
            squares,
            labels,
            bounds,
        })
    }

    /// Compute the two-panel proof figure for legs `a` and `b`.
    pub fn build_proof(&self, a: f64, b: f64) -> CalcResult<ProofFigure> {
        let triangle = self.solver.triangle_from_legs(a, b)?;
        let c = triangle.c;
        let p = LABEL_PRECISION;
        let vertices = [Point::new(0.0, 0.0), Point::new(a, 0.0), Point::new(a, b)];

        let (legs, hypotenuse): (Vec<_>, Vec<_>) =
            side_squares(&triangle).into_iter().partition(|sq| sq.side != Side::C);
        let panel = |title: &str, squares: Vec<SideSquare>| ProofPanel {
            title: title.to_string(),
            vertices,
            labels: area_labels(&squares),
            bounds: bounds_of(vertices.iter().chain(squares.iter().flat_map(|sq| sq.corners.iter()))),
            squares,
        };

        let title = format!(
            "Pythagorean Theorem Proof: {}² + {}² = {:.*}²  →  {:.*} + {:.*} = {:.*}",
            a, b, p, c, p, a * a, p, b * b, p, c * c
        );
        tracing::debug!(a, b, c, "built proof figure");
        Ok(ProofFigure {
            triangle,
            title,
            legs: panel("Individual Squares", legs),
            hypotenuse: panel("Hypotenuse Square", hypotenuse),
        })
    }
}

fn area_labels(squares: &[SideSquare]) -> Vec<Label> {
    squares
        .iter()
        .map(|square| {
            let name = match square.side {
                Side::A => "a²",
                Side::B => "b²",
                Side::C => "c²",
            };
            Label {
                text: format!("{} = {:.*}", name, LABEL_PRECISION, square.area),
                anchor: square.center(),
            }
        })
        .collect()
}

fn side_squares(triangle: &Triangle) -> Vec<SideSquare> {
    let Triangle { a, b, c } = *triangle;
    vec![
        SideSquare {
            side: Side::A,
            corners: [
                Point::new(0.0, 0.0),
                Point::new(a, 0.0),
                Point::new(a, -a),
                Point::new(0.0, -a),
            ],
            area: a * a,
        },
        SideSquare {
            side: Side::B,
            corners: [
                Point::new(a, 0.0),
                Point::new(a + b, 0.0),
                Point::new(a + b, b),
                Point::new(a, b),
            ],
            area: b * b,
        },
        // Hypotenuse runs (0,0)→(a,b); its outward normal of length c is (-b, a)
        SideSquare {
            side: Side::C,
            corners: [
                Point::new(a, b),
                Point::new(0.0, 0.0),
                Point::new(-b, a),
                Point::new(a - b, a + b),
            ],
            area: c * c,
        },
    ]
}

fn bounds_of<'p>(points: impl Iterator<Item = &'p Point>) -> Bounds {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Bounds { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(p: &Point, q: &Point) -> f64 {
        ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
    }

    #[test]
    fn test_vertices() {
        let solver = TriangleSolver::default();
        let fig = FigureBuilder::new(&solver).build(3.0, 4.0).unwrap();
        assert_eq!(fig.vertices, [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)]);
        assert_eq!(distance(&fig.vertices[0], &fig.vertices[2]), 5.0);
    }

    #[test]
    fn test_right_angle_marker() {
        let solver = TriangleSolver::default();
        let fig = FigureBuilder::new(&solver).build(3.0, 4.0).unwrap();
        let m = fig.right_angle_marker;
        assert!((m[0].x - 2.7).abs() < 1e-12);
        assert!((m[2].y - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_hypotenuse_square_is_square() {
        let solver = TriangleSolver::default();
        let fig = FigureBuilder::new(&solver).build(3.0, 4.0).unwrap();
        let sq = fig.squares.iter().find(|s| s.side == Side::C).unwrap();
        for i in 0..4 {
            let edge = distance(&sq.corners[i], &sq.corners[(i + 1) % 4]);
            assert!((edge - 5.0).abs() < 1e-12, "edge {} = {}", i, edge);
        }
        assert_eq!(sq.area, 25.0);
        // Outward: the right-angle corner (3, 0) is on the opposite side
        assert!(sq.center().x < 1.5);
    }

    #[test]
    fn test_square_areas_satisfy_theorem() {
        let solver = TriangleSolver::default();
        let fig = FigureBuilder::new(&solver).build(5.0, 12.0).unwrap();
        let areas: Vec<f64> = fig.squares.iter().map(|s| s.area).collect();
        assert_eq!(areas[0] + areas[1], areas[2]);
    }

    #[test]
    fn test_labels_and_bounds() {
        let solver = TriangleSolver::default();
        let fig = FigureBuilder::new(&solver).build(3.0, 4.0).unwrap();
        assert_eq!(fig.labels.len(), 6);
        assert_eq!(fig.labels[2].text, "c = 5.00");
        assert!(fig.labels.iter().any(|l| l.text == "a² = 9.00"));
        assert_eq!(fig.bounds.min, Point::new(-4.0, -3.0));
        assert_eq!(fig.bounds.max, Point::new(7.0, 7.0));
    }

    #[test]
    fn test_without_squares() {
        let solver = TriangleSolver::default();
        let fig = FigureBuilder::new(&solver).show_squares(false).build(3.0, 4.0).unwrap();
        assert!(fig.squares.is_empty());
        assert_eq!(fig.labels.len(), 3);
        assert_eq!(fig.bounds.max, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_invalid_legs() {
        let solver = TriangleSolver::default();
        assert!(FigureBuilder::new(&solver).build(0.0, 4.0).is_err());
    }

    #[test]
    fn test_proof_panels() {
        let solver = TriangleSolver::default();
        let proof = FigureBuilder::new(&solver).build_proof(3.0, 4.0).unwrap();
        assert_eq!(proof.title, "Pythagorean Theorem Proof: 3² + 4² = 5.00²  →  9.00 + 16.00 = 25.00");

        assert_eq!(proof.legs.title, "Individual Squares");
        let sides: Vec<Side> = proof.legs.squares.iter().map(|sq| sq.side).collect();
        assert_eq!(sides, vec![Side::A, Side::B]);
        assert_eq!(proof.legs.labels[1].text, "b² = 16.00");
        assert_eq!(proof.legs.bounds.min, Point::new(0.0, -3.0));
        assert_eq!(proof.legs.bounds.max, Point::new(7.0, 4.0));

        assert_eq!(proof.hypotenuse.title, "Hypotenuse Square");
        assert_eq!(proof.hypotenuse.squares.len(), 1);
        assert_eq!(proof.hypotenuse.labels[0].text, "c² = 25.00");
        assert_eq!(proof.hypotenuse.bounds.min, Point::new(-4.0, 0.0));
        assert_eq!(proof.hypotenuse.bounds.max, Point::new(3.0, 7.0));
    }

    #[test]
    fn test_proof_areas_match() {
        let solver = TriangleSolver::default();
        let proof = FigureBuilder::new(&solver).build_proof(5.0, 12.0).unwrap();
        let legs: f64 = proof.legs.squares.iter().map(|sq| sq.area).sum();
        assert_eq!(legs, proof.hypotenuse.squares[0].area);
        assert_eq!(proof.legs.vertices, proof.hypotenuse.vertices);
        assert!(FigureBuilder::new(&solver).build_proof(-1.0, 2.0).is_err());
    }
}
