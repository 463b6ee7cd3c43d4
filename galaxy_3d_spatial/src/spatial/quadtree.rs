/// Quadtree: dynamic 2D spatial index over rectangular bounds.
///
/// Each object is stored in exactly one node: the deepest node whose
/// quadrant fully contains the object's bounds at insertion time. An
/// object straddling a quadrant boundary stays in the parent as a
/// *residual* object.
///
/// A node holds at most `max_objects_per_node` objects of its own. When a
/// full leaf receives another object it splits once into four equal
/// quadrants and pushes down every object that fits a quadrant. If the
/// node is still full after that and the new object fits no quadrant, the
/// insert is rejected and the object is handed back to the caller. A leaf
/// too small to split (see `Quadrant::can_split`) rejects once full. Nodes
/// never merge back.
///
/// Nodes live in a flat array; a split node records the index of its
/// first child, and the four children are stored contiguously in
/// `Quadrant` order.

use crate::bounds::Rectangle;
use crate::error::{Error, Result};

/// Index of the root node in the flat node array.
const ROOT: usize = 0;

/// Anything with 2D bounds that can be stored in a `Quadtree`.
pub trait Boundable {
    /// Bounds of this object. Must not change while the object is stored.
    fn bounds(&self) -> Rectangle<f32>;
}

impl Boundable for Rectangle<f32> {
    fn bounds(&self) -> Rectangle<f32> {
        *self
    }
}

/// Zero-extent point carrying user data.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadtreePoint<U> {
    pub x: f32,
    pub y: f32,
    pub user_data: U,
}

impl<U> QuadtreePoint<U> {
    pub fn new(x: f32, y: f32, user_data: U) -> Self {
        Self { x, y, user_data }
    }
}

impl<U> Boundable for QuadtreePoint<U> {
    fn bounds(&self) -> Rectangle<f32> {
        Rectangle::from_coords(self.x, self.y, self.x, self.y)
    }
}

/// One of the four children of a split node.
///
/// The discriminant is the child's offset from the node's first child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// +x, -y
    PxNy = 0,
    /// -x, -y
    NxNy = 1,
    /// -x, +y
    NxPy = 2,
    /// +x, +y
    PxPy = 3,
}

impl Quadrant {
    /// All quadrants in child storage order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::PxNy,
        Quadrant::NxNy,
        Quadrant::NxPy,
        Quadrant::PxPy,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    fn is_pos_x(self) -> bool {
        matches!(self, Quadrant::PxNy | Quadrant::PxPy)
    }

    fn is_pos_y(self) -> bool {
        matches!(self, Quadrant::NxPy | Quadrant::PxPy)
    }

    /// Bounds of this quadrant of `parent`, split at the midpoint.
    pub fn bounds_in(self, parent: &Rectangle<f32>) -> Rectangle<f32> {
        let [xm, ym] = parent.center();
        let (min_x, max_x) = if self.is_pos_x() { (xm, parent.max[0]) } else { (parent.min[0], xm) };
        let (min_y, max_y) = if self.is_pos_y() { (ym, parent.max[1]) } else { (parent.min[1], ym) };
        Rectangle::from_coords(min_x, min_y, max_x, max_y)
    }

    /// Whether the midpoint of `parent` lies strictly inside it on both
    /// axes, so that every quadrant is smaller than `parent`.
    ///
    /// Fails once a node has shrunk to a few ulps and the midpoint rounds
    /// onto one of its edges.
    pub fn can_split(parent: &Rectangle<f32>) -> bool {
        let [xm, ym] = parent.center();
        xm > parent.min[0] && xm < parent.max[0] && ym > parent.min[1] && ym < parent.max[1]
    }

    /// The quadrant of `parent` that fully contains `r`, if any.
    ///
    /// A quadrant includes its min edges and excludes its max edges, so an
    /// object touching the parent's max edge fits no quadrant.
    pub fn containing(parent: &Rectangle<f32>, r: &Rectangle<f32>) -> Option<Quadrant> {
        let [xm, ym] = parent.center();
        let pos_x = if r.min[0] >= xm && r.max[0] < parent.max[0] {
            true
        } else if r.min[0] >= parent.min[0] && r.max[0] < xm {
            false
        } else {
            return None;
        };
        let pos_y = if r.min[1] >= ym && r.max[1] < parent.max[1] {
            true
        } else if r.min[1] >= parent.min[1] && r.max[1] < ym {
            false
        } else {
            return None;
        };
        Some(match (pos_x, pos_y) {
            (true, false) => Quadrant::PxNy,
            (false, false) => Quadrant::NxNy,
            (false, true) => Quadrant::NxPy,
            (true, true) => Quadrant::PxPy,
        })
    }
}

/// Quadtree tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadtreeConfig {
    /// Maximum number of objects a node holds before splitting (> 0)
    pub max_objects_per_node: usize,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_objects_per_node: 10,
        }
    }
}

/// A single node in the quadtree.
#[derive(Debug)]
struct QuadtreeNode<T> {
    /// Bounds of this node
    bounds: Rectangle<f32>,
    /// Index of the first child in the flat array (0 = no children / leaf)
    first_child: usize,
    /// Root = 0
    depth: usize,
    /// Objects stored in this node (objects that don't fit in any child)
    objects: Vec<T>,
}

impl<T> QuadtreeNode<T> {
    fn new(bounds: Rectangle<f32>, depth: usize) -> Self {
        Self {
            bounds,
            first_child: 0,
            depth,
            objects: Vec::new(),
        }
    }

    fn is_split(&self) -> bool {
        self.first_child != 0
    }

    fn child(&self, quadrant: Quadrant) -> usize {
        self.first_child + quadrant.index()
    }
}

/// Dynamic quadtree spatial index.
///
/// Not synchronized: concurrent reads are fine, any mutation needs
/// exclusive access (enforced by `&mut self`).
#[derive(Debug)]
pub struct Quadtree<T: Boundable> {
    /// Flat array of all nodes, root first
    nodes: Vec<QuadtreeNode<T>>,
    max_objects_per_node: usize,
    /// Number of stored objects
    len: usize,
}

impl<T: Boundable> Quadtree<T> {
    /// Create an empty quadtree over fixed root bounds.
    ///
    /// # Errors
    ///
    /// - `InvalidCapacity` if `max_objects_per_node` is 0
    /// - `InvalidBounds` if `bounds` is not `is_valid()` (empty, inverted or NaN)
    pub fn new(bounds: Rectangle<f32>, max_objects_per_node: usize) -> Result<Self> {
        Self::with_config(bounds, QuadtreeConfig { max_objects_per_node })
    }

    /// Create an empty quadtree from a config.
    pub fn with_config(bounds: Rectangle<f32>, config: QuadtreeConfig) -> Result<Self> {
        if config.max_objects_per_node == 0 {
            return Err(Error::InvalidCapacity(config.max_objects_per_node).logged());
        }
        if !bounds.is_valid() {
            return Err(Error::InvalidBounds(format!(
                "quadtree root {} must have min < max on both axes",
                bounds
            ))
            .logged());
        }

        crate::spatial_debug!(
            "galaxy3d::Quadtree",
            "Created quadtree over {} (max {} objects per node)",
            bounds,
            config.max_objects_per_node
        );

        Ok(Self {
            nodes: vec![QuadtreeNode::new(bounds, 0)],
            max_objects_per_node: config.max_objects_per_node,
            len: 0,
        })
    }

    /// Root bounds.
    pub fn bounds(&self) -> &Rectangle<f32> {
        &self.nodes[ROOT].bounds
    }

    pub fn max_objects_per_node(&self) -> usize {
        self.max_objects_per_node
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes (1 + 4 per split).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of levels (1 for an unsplit tree).
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth + 1).max().unwrap_or(0)
    }

    /// All stored objects, in node order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.iter().flat_map(|node| node.objects.iter())
    }

    /// Insert an object.
    ///
    /// Returns the object back as `Err` when it cannot be placed: it fits
    /// no child quadrant and the node that would hold it is full. This is
    /// an expected outcome, not an error.
    pub fn insert(&mut self, object: T) -> std::result::Result<(), T> {
        match self.insert_at(ROOT, object) {
            Ok(()) => {
                self.len += 1;
                Ok(())
            }
            Err(object) => {
                crate::spatial_debug!(
                    "galaxy3d::Quadtree",
                    "Insert rejected for {}: no child fits and node is full",
                    object.bounds()
                );
                Err(object)
            }
        }
    }

    /// Count (and optionally collect) the objects whose bounds overlap `rect`.
    ///
    /// Overlap is inclusive: touching counts. The returned count always
    /// equals the number of references pushed into `results`.
    pub fn query<'a>(&'a self, rect: &Rectangle<f32>, mut results: Option<&mut Vec<&'a T>>) -> usize {
        self.query_node(ROOT, rect, &mut results)
    }

    // ===== INSERT =====

    fn insert_at(&mut self, node_idx: usize, object: T) -> std::result::Result<(), T> {
        let object = if self.nodes[node_idx].is_split() {
            match self.insert_into_child(node_idx, object) {
                Ok(()) => return Ok(()),
                Err(object) => object,
            }
        } else {
            object
        };

        if self.nodes[node_idx].objects.len() < self.max_objects_per_node {
            self.nodes[node_idx].objects.push(object);
            return Ok(());
        }

        // Node is full: split once and push existing objects down
        if !self.nodes[node_idx].is_split() {
            if !Quadrant::can_split(&self.nodes[node_idx].bounds) {
                return Err(object);
            }
            self.split(node_idx);
            let objects = std::mem::take(&mut self.nodes[node_idx].objects);
            let mut residual = Vec::new();
            for existing in objects {
                if let Err(existing) = self.insert_into_child(node_idx, existing) {
                    residual.push(existing);
                }
            }
            self.nodes[node_idx].objects = residual;
        }

        match self.insert_into_child(node_idx, object) {
            Ok(()) => Ok(()),
            Err(object) => {
                let node = &mut self.nodes[node_idx];
                if node.objects.len() >= self.max_objects_per_node {
                    return Err(object);
                }
                node.objects.push(object);
                Ok(())
            }
        }
    }

    /// Insert into the child quadrant fully containing the object, if any.
    fn insert_into_child(&mut self, node_idx: usize, object: T) -> std::result::Result<(), T> {
        let node = &self.nodes[node_idx];
        match Quadrant::containing(&node.bounds, &object.bounds()) {
            Some(quadrant) => {
                let child = node.child(quadrant);
                self.insert_at(child, object)
            }
            None => Err(object),
        }
    }

    fn split(&mut self, node_idx: usize) {
        let bounds = self.nodes[node_idx].bounds;
        let depth = self.nodes[node_idx].depth;
        let first_child = self.nodes.len();

        for quadrant in Quadrant::ALL {
            self.nodes.push(QuadtreeNode::new(quadrant.bounds_in(&bounds), depth + 1));
        }
        self.nodes[node_idx].first_child = first_child;

        crate::spatial_trace!(
            "galaxy3d::Quadtree",
            "Split node {} {} at depth {} into nodes {}..{}",
            node_idx,
            bounds,
            depth,
            first_child,
            first_child + 4
        );
    }

    // ===== QUERY =====

    fn query_node<'a>(
        &'a self,
        node_idx: usize,
        rect: &Rectangle<f32>,
        results: &mut Option<&mut Vec<&'a T>>,
    ) -> usize {
        let node = &self.nodes[node_idx];
        let mut count = 0;

        if node.is_split() {
            let b = &node.bounds;
            let [xm, ym] = b.center();
            let intersects_nx = rect.min[0] <= xm && rect.max[0] >= b.min[0];
            let intersects_px = rect.min[0] <= b.max[0] && rect.max[0] >= xm;
            let intersects_ny = rect.min[1] <= ym && rect.max[1] >= b.min[1];
            let intersects_py = rect.min[1] <= b.max[1] && rect.max[1] >= ym;

            if intersects_ny {
                if intersects_px {
                    count += self.query_node(node.child(Quadrant::PxNy), rect, results);
                }
                if intersects_nx {
                    count += self.query_node(node.child(Quadrant::NxNy), rect, results);
                }
            }
            if intersects_py {
                if intersects_px {
                    count += self.query_node(node.child(Quadrant::PxPy), rect, results);
                }
                if intersects_nx {
                    count += self.query_node(node.child(Quadrant::NxPy), rect, results);
                }
            }
        }

        if rect.contains_rectangle(&node.bounds) {
            // Node lies completely within the query: take everything
            count += node.objects.len();
            if let Some(list) = results.as_mut() {
                list.extend(node.objects.iter());
            }
        } else {
            for object in &node.objects {
                if rect.intersects_rectangle(&object.bounds()) {
                    count += 1;
                    if let Some(list) = results.as_mut() {
                        list.push(object);
                    }
                }
            }
        }

        count
    }
}

#[cfg(test)]
#[path = "quadtree_tests.rs"]
mod tests;
