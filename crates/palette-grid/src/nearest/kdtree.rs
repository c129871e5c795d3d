//! Three-dimensional k-d tree.

/// A point in a 3-D color space.
pub type Point = [f32; 3];

/// Result of a nearest-neighbor query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the matched point in the slice the tree was built from
    pub index: usize,
    /// Squared Euclidean distance to the query
    pub distance_squared: f32,
}

#[derive(Debug, Clone)]
struct Node {
    point: Point,
    index: usize,
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// A k-d tree over 3-D points, built once and queried many times.
///
/// Construction is O(P log² P) and each query is O(log P) on average for
/// P points. Queries return the first point found at the minimum distance;
/// the order among equidistant points is stable for a given tree but
/// otherwise unspecified.
///
/// # Example
///
/// ```
/// use palette_grid::nearest::KdTree;
///
/// let tree = KdTree::build(&[[0.0, 0.0, 0.0], [255.0, 255.0, 255.0]]).unwrap();
/// let hit = tree.nearest([200.0, 190.0, 210.0]);
/// assert_eq!(hit.index, 1);
/// ```
#[derive(Debug, Clone)]
pub struct KdTree {
    nodes: Vec<Node>,
    root: usize,
}

impl KdTree {
    /// Build a tree over `points`. Returns `None` if `points` is empty.
    pub fn build(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut items: Vec<(Point, usize)> =
            points.iter().copied().enumerate().map(|(i, p)| (p, i)).collect();
        let mut nodes = Vec::with_capacity(points.len());
        let root = Self::build_recursive(&mut items, 0, &mut nodes)?;
        Some(Self { nodes, root })
    }

    fn build_recursive(
        items: &mut [(Point, usize)],
        depth: usize,
        nodes: &mut Vec<Node>,
    ) -> Option<usize> {
        if items.is_empty() {
            return None;
        }
        let axis = depth % 3;
        // Ties on the split coordinate keep their original order, so the
        // tree shape is deterministic for a given input.
        items.sort_by(|a, b| a.0[axis].total_cmp(&b.0[axis]).then(a.1.cmp(&b.1)));
        let median = items.len() / 2;

        let slot = nodes.len();
        nodes.push(Node {
            point: items[median].0,
            index: items[median].1,
            axis,
            left: None,
            right: None,
        });

        let (lower, rest) = items.split_at_mut(median);
        let upper = &mut rest[1..];
        let left = Self::build_recursive(lower, depth + 1, nodes);
        let right = Self::build_recursive(upper, depth + 1, nodes);
        nodes[slot].left = left;
        nodes[slot].right = right;
        Some(slot)
    }

    /// Number of points in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; empty trees cannot be built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find the point closest to `query` by Euclidean distance.
    pub fn nearest(&self, query: Point) -> Neighbor {
        let mut best = Neighbor {
            index: self.nodes[self.root].index,
            distance_squared: f32::INFINITY,
        };
        self.search(self.root, &query, &mut best);
        best
    }

    fn search(&self, slot: usize, query: &Point, best: &mut Neighbor) {
        let node = &self.nodes[slot];

        let d = distance_squared(&node.point, query);
        if d < best.distance_squared {
            best.distance_squared = d;
            best.index = node.index;
        }

        let delta = query[node.axis] - node.point[node.axis];
        let (near, far) = if delta < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.search(near, query, best);
        }
        // The far side can only hold a closer point if the splitting plane
        // is closer than the current best.
        if let Some(far) = far {
            if delta * delta < best.distance_squared {
                self.search(far, query, best);
            }
        }
    }
}

#[inline]
fn distance_squared(a: &Point, b: &Point) -> f32 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    d0 * d0 + d1 * d1 + d2 * d2
}
