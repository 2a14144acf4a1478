//! A single semi-transparent triangle.

use rand::Rng;

/// Number of scalar genes per triangle: six coordinates and four channels.
pub const GENE_COUNT: usize = 10;

/// Three vertices in the unit square and an RGBA colour.
///
/// Coordinates are drawn in `[0, 1)` and mutation keeps every gene inside
/// `[0, 1]`. Nothing constrains the vertices relative to each other:
/// collinear or coincident vertices are legal and simply cover no pixels.
///
/// Gene order is `x1, y1, x2, y2, x3, y3, r, g, b, a`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub vertices: [[f32; 2]; 3],
    pub color: [f32; 4],
}

impl Triangle {
    /// Draws every gene independently and uniformly from `[0, 1)`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut t = Self::default();
        for i in 0..GENE_COUNT {
            *t.gene_mut(i) = rng.random::<f32>();
        }
        t
    }

    /// Returns all genes in canonical order.
    pub fn genes(&self) -> [f32; GENE_COUNT] {
        let [[x1, y1], [x2, y2], [x3, y3]] = self.vertices;
        let [r, g, b, a] = self.color;
        [x1, y1, x2, y2, x3, y3, r, g, b, a]
    }

    /// Returns gene `index`.
    ///
    /// # Panics
    /// Panics if `index >= GENE_COUNT`.
    pub fn gene(&self, index: usize) -> f32 {
        self.genes()[index]
    }

    /// Mutable access to gene `index`.
    ///
    /// # Panics
    /// Panics if `index >= GENE_COUNT`.
    pub fn gene_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0..=5 => &mut self.vertices[index / 2][index % 2],
            6..=9 => &mut self.color[index - 6],
            _ => panic!("gene index {index} out of range 0..{GENE_COUNT}"),
        }
    }
}
