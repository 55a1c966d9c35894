//! Convex polygonal regions of interest.

use anyhow::{bail, Result};
use nalgebra::Vector2;

/// A convex polygonal region constraining a correspondence or detection
/// search. Input-only: the front-end never mutates or stores a roi beyond
/// the call it was passed to.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexRoi {
    vertices: Vec<Vector2<f64>>,
}

impl ConvexRoi {
    /// Axis-aligned rectangular region with top-left corner `(x, y)`.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            vertices: vec![
                Vector2::new(x, y),
                Vector2::new(x + width, y),
                Vector2::new(x + width, y + height),
                Vector2::new(x, y + height),
            ],
        }
    }

    /// Build a region from a polygon boundary.
    ///
    /// The vertices must describe a convex polygon (either winding order);
    /// collinear runs are accepted. Fails on fewer than three vertices or a
    /// reflex corner.
    pub fn from_vertices(vertices: Vec<Vector2<f64>>) -> Result<Self> {
        if vertices.len() < 3 {
            bail!("convex roi needs at least 3 vertices, got {}", vertices.len());
        }
        if !is_convex(&vertices) {
            bail!("roi polygon is not convex");
        }
        Ok(Self { vertices })
    }

    /// Polygon boundary, in construction order.
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    /// Point-in-region test. Boundary points count as inside.
    pub fn contains(&self, p: &Vector2<f64>) -> bool {
        let mut has_pos = false;
        let mut has_neg = false;
        let n = self.vertices.len();
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            let c = cross(&(b - a), &(p - a));
            if c > 0.0 {
                has_pos = true;
            } else if c < 0.0 {
                has_neg = true;
            }
            if has_pos && has_neg {
                return false;
            }
        }
        true
    }

    /// Axis-aligned bounding box as (min corner, max corner).
    pub fn bounding_box(&self) -> (Vector2<f64>, Vector2<f64>) {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        (min, max)
    }
}

fn cross(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// All turns along the boundary must share a sign (zero = collinear run).
fn is_convex(vertices: &[Vector2<f64>]) -> bool {
    let n = vertices.len();
    let mut has_pos = false;
    let mut has_neg = false;
    for i in 0..n {
        let a = &vertices[i];
        let b = &vertices[(i + 1) % n];
        let c = &vertices[(i + 2) % n];
        let turn = cross(&(b - a), &(c - b));
        if turn > 0.0 {
            has_pos = true;
        } else if turn < 0.0 {
            has_neg = true;
        }
        if has_pos && has_neg {
            return false;
        }
    }
    true
}
