//! Homogeneous 2D transforms applied to a wireframe edge list.
//!
//! Points are lifted to `(x, y, 1)`, multiplied by a 3×3 [`Matrix3`] and
//! divided by the resulting `w` component. Rotation, scale and translation
//! always leave `w = 1`, but the divide is still performed so arbitrary
//! projective matrices behave correctly. A zero `w` is reported as
//! [`Error::DivisionByZero`].

use log::debug;

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::PixelGrid;
use crate::geometry::{Edge, Point};
use crate::render::Drawable;

/// A 3×3 homogeneous transform matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3(
    /// Matrix entries, `m[row][column]`.
    pub [[f64; 3]; 3],
);

impl Matrix3 {
    /// The identity transform.
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Counter-clockwise rotation by `degrees` about the origin.
    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Uniform scale by `factor` about the origin.
    #[must_use]
    pub const fn scale(factor: f64) -> Self {
        Self([[factor, 0.0, 0.0], [0.0, factor, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Translation by `(dx, dy)`.
    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
    }

    /// Compose: the result applies `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let a = &next.0;
        let b = &self.0;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        Self(out)
    }

    /// Transform a point, including the homogeneous divide.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if the homogeneous component is 0.
    pub fn apply(&self, point: Point) -> Result<Point> {
        let m = &self.0;
        let v = [point.x, point.y, 1.0];
        let dot = |row: &[f64; 3]| row[0] * v[0] + row[1] * v[1] + row[2] * v[2];

        let w = dot(&m[2]);
        if w == 0.0 {
            return Err(Error::DivisionByZero {
                x: point.x,
                y: point.y,
            });
        }

        Ok(Point::new(dot(&m[0]) / w, dot(&m[1]) / w))
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An ordered wireframe model.
///
/// Edges keep insertion order through every transform. Points added with
/// [`EdgeList::add_point`] are stored but never transformed or drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    points: Vec<Point>,
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Create an empty edge list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a standalone point.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Append an edge.
    pub fn add_edge(&mut self, start: Point, end: Point) {
        self.edges.push(Edge::new(start, end));
    }

    /// Recorded points, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Edges, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether there are no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Apply `matrix` to both endpoints of every edge.
    ///
    /// The whole list is replaced positionally. If any endpoint hits a zero
    /// homogeneous component the list is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for a degenerate projective matrix.
    pub fn transform(&mut self, matrix: &Matrix3) -> Result<()> {
        let transformed = self
            .edges
            .iter()
            .map(|edge| -> Result<Edge> {
                Ok(Edge::new(matrix.apply(edge.start)?, matrix.apply(edge.end)?))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("transformed {} edges by {:?}", transformed.len(), matrix.0);
        self.edges = transformed;
        Ok(())
    }

    /// Rotate every edge by `degrees` about the origin.
    ///
    /// # Errors
    ///
    /// Never fails in practice; see [`EdgeList::transform`].
    pub fn rotate(&mut self, degrees: f64) -> Result<()> {
        self.transform(&Matrix3::rotation(degrees))
    }

    /// Scale every edge uniformly about the origin.
    ///
    /// # Errors
    ///
    /// Never fails in practice; see [`EdgeList::transform`].
    pub fn dilation(&mut self, factor: f64) -> Result<()> {
        self.transform(&Matrix3::scale(factor))
    }

    /// Translate every edge by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Never fails in practice; see [`EdgeList::transform`].
    pub fn translation(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.transform(&Matrix3::translation(dx, dy))
    }

    /// Rasterize every edge with the line routine.
    pub fn draw(&self, grid: &mut PixelGrid, color: Rgb) {
        for edge in &self.edges {
            edge.draw(grid, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    fn square() -> EdgeList {
        let mut list = EdgeList::new();
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        for i in 0..4 {
            list.add_edge(corners[i], corners[(i + 1) % 4]);
        }
        list
    }

    fn assert_edges_close(a: &EdgeList, b: &EdgeList) {
        assert_eq!(a.len(), b.len());
        for (ea, eb) in a.edges().iter().zip(b.edges()) {
            assert_abs_diff_eq!(ea.start.x, eb.start.x, epsilon = EPS);
            assert_abs_diff_eq!(ea.start.y, eb.start.y, epsilon = EPS);
            assert_abs_diff_eq!(ea.end.x, eb.end.x, epsilon = EPS);
            assert_abs_diff_eq!(ea.end.y, eb.end.y, epsilon = EPS);
        }
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let p = Matrix3::rotation(90.0).apply(Point::new(1.0, 0.0)).unwrap();
        assert_abs_diff_eq!(p.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = EPS);
    }

    #[test]
    fn test_scale_and_translation() {
        let p = Matrix3::scale(3.0).apply(Point::new(2.0, -1.0)).unwrap();
        assert_eq!(p, Point::new(6.0, -3.0));

        let p = Matrix3::translation(5.0, -2.0).apply(Point::new(1.0, 1.0)).unwrap();
        assert_eq!(p, Point::new(6.0, -1.0));
    }

    #[test]
    fn test_homogeneous_divide() {
        let m = Matrix3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
        let p = m.apply(Point::new(4.0, 6.0)).unwrap();
        assert_eq!(p, Point::new(2.0, 3.0));
    }

    #[test]
    fn test_zero_homogeneous_component_is_error() {
        let m = Matrix3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]);
        let err = m.apply(Point::new(1.0, 2.0)).unwrap_err();
        assert!(matches!(err, Error::DivisionByZero { .. }));
    }

    #[test]
    fn test_failed_transform_leaves_list_unchanged() {
        let mut list = square();
        let before = list.clone();
        // w = x, so only the corners with x = 0 divide by zero.
        let m = Matrix3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);

        assert!(list.transform(&m).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn test_compose_order() {
        let m = Matrix3::translation(1.0, 0.0).then(&Matrix3::scale(2.0));
        let p = m.apply(Point::new(1.0, 1.0)).unwrap();
        assert_eq!(p, Point::new(4.0, 2.0));
    }

    #[test]
    fn test_identity_is_default() {
        assert_eq!(Matrix3::default(), Matrix3::IDENTITY);
        let p = Matrix3::IDENTITY.apply(Point::new(3.5, -7.25)).unwrap();
        assert_eq!(p, Point::new(3.5, -7.25));
    }

    #[test]
    fn test_translation_inverse_restores_list() {
        let original = square();
        let mut list = original.clone();
        list.translation(12.5, -3.0).unwrap();
        list.translation(-12.5, 3.0).unwrap();
        assert_edges_close(&list, &original);
    }

    #[test]
    fn test_full_rotation_restores_list() {
        let original = square();
        let mut list = original.clone();
        list.rotate(360.0).unwrap();
        assert_edges_close(&list, &original);
    }

    #[test]
    fn test_dilation_preserves_order() {
        let mut list = square();
        list.dilation(2.0).unwrap();
        assert_eq!(list.edges()[1], Edge::from_coords(20.0, 0.0, 20.0, 20.0));
        assert_eq!(list.edges()[3], Edge::from_coords(0.0, 20.0, 0.0, 0.0));
    }

    #[test]
    fn test_points_are_not_transformed() {
        let mut list = square();
        list.add_point(Point::new(1.0, 1.0));
        list.translation(5.0, 5.0).unwrap();
        assert_eq!(list.points(), &[Point::new(1.0, 1.0)]);
    }

    #[test]
    fn test_draw_edges() {
        let mut grid = PixelGrid::new(12, 12).unwrap();
        square().draw(&mut grid, Rgb::RED);

        assert_eq!(grid.get(0, 0), Some(Rgb::RED));
        assert_eq!(grid.get(10, 10), Some(Rgb::RED));
        assert_eq!(grid.get(5, 10), Some(Rgb::RED));
        assert!(!grid.is_written(5, 5));
        assert_eq!(grid.written_pixels().count(), 40);
    }

    #[test]
    fn test_empty_list_transform() {
        let mut list = EdgeList::new();
        assert!(list.is_empty());
        list.rotate(45.0).unwrap();
        assert!(list.is_empty());
    }
}
