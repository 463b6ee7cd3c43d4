//! Spatial module: hierarchical spatial indices.

mod quadtree;

pub use quadtree::{Quadtree, QuadtreeConfig, Quadrant, Boundable, QuadtreePoint};
