use crate::bounds::Rectanglef;
use super::*;

fn root() -> Rectanglef {
    Rectanglef::from_coords(0.0, 0.0, 100.0, 100.0)
}

fn point(x: f32, y: f32, id: u32) -> QuadtreePoint<u32> {
    QuadtreePoint::new(x, y, id)
}

fn ids(found: &[&QuadtreePoint<u32>]) -> Vec<u32> {
    let mut ids: Vec<u32> = found.iter().map(|p| p.user_data).collect();
    ids.sort_unstable();
    ids
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_empty_tree() {
    let tree = Quadtree::<QuadtreePoint<u32>>::new(root(), 4).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.depth(), 1);
    assert_eq!(*tree.bounds(), root());
    assert_eq!(tree.max_objects_per_node(), 4);
}

#[test]
fn test_zero_capacity_is_rejected() {
    let result = Quadtree::<QuadtreePoint<u32>>::new(root(), 0);
    assert_eq!(result.err(), Some(Error::InvalidCapacity(0)));
}

#[test]
fn test_invalid_bounds_are_rejected() {
    let empty = Quadtree::<Rectanglef>::new(Rectanglef::new(), 4);
    assert!(matches!(empty, Err(Error::InvalidBounds(_))));

    let inverted = Quadtree::<Rectanglef>::new(Rectanglef::from_coords(10.0, 0.0, 0.0, 10.0), 4);
    assert!(matches!(inverted, Err(Error::InvalidBounds(_))));

    let nan = Quadtree::<Rectanglef>::new(Rectanglef::invalid(), 4);
    assert!(matches!(nan, Err(Error::InvalidBounds(_))));
}

#[test]
fn test_default_config() {
    assert_eq!(QuadtreeConfig::default().max_objects_per_node, 10);
    let tree = Quadtree::<Rectanglef>::with_config(root(), QuadtreeConfig::default()).unwrap();
    assert_eq!(tree.max_objects_per_node(), 10);
}

// ============================================================================
// Quadrant geometry
// ============================================================================

#[test]
fn test_quadrant_bounds() {
    let r = root();
    assert_eq!(Quadrant::NxNy.bounds_in(&r), Rectanglef::from_coords(0.0, 0.0, 50.0, 50.0));
    assert_eq!(Quadrant::PxNy.bounds_in(&r), Rectanglef::from_coords(50.0, 0.0, 100.0, 50.0));
    assert_eq!(Quadrant::NxPy.bounds_in(&r), Rectanglef::from_coords(0.0, 50.0, 50.0, 100.0));
    assert_eq!(Quadrant::PxPy.bounds_in(&r), Rectanglef::from_coords(50.0, 50.0, 100.0, 100.0));
}

#[test]
fn test_quadrant_containing() {
    let r = root();
    let at = |x0, y0, x1, y1| Quadrant::containing(&r, &Rectanglef::from_coords(x0, y0, x1, y1));

    assert_eq!(at(10.0, 10.0, 20.0, 20.0), Some(Quadrant::NxNy));
    assert_eq!(at(60.0, 10.0, 70.0, 20.0), Some(Quadrant::PxNy));
    assert_eq!(at(10.0, 60.0, 20.0, 70.0), Some(Quadrant::NxPy));
    assert_eq!(at(60.0, 60.0, 70.0, 70.0), Some(Quadrant::PxPy));

    // straddles the vertical midline
    assert_eq!(at(40.0, 10.0, 60.0, 20.0), None);
    // min edge of a quadrant is included, max edge is not
    assert_eq!(at(50.0, 50.0, 50.0, 50.0), Some(Quadrant::PxPy));
    assert_eq!(at(10.0, 10.0, 50.0, 20.0), None);
    assert_eq!(at(100.0, 100.0, 100.0, 100.0), None);
}

#[test]
fn test_can_split_needs_room_for_a_midpoint() {
    assert!(Quadrant::can_split(&root()));

    let one_ulp = f32::from_bits(10.0f32.to_bits() + 1);
    let two_ulp = f32::from_bits(10.0f32.to_bits() + 2);
    assert!(!Quadrant::can_split(&Rectanglef::from_coords(10.0, 0.0, one_ulp, 1.0)));
    assert!(!Quadrant::can_split(&Rectanglef::from_coords(0.0, 10.0, 1.0, one_ulp)));
    assert!(Quadrant::can_split(&Rectanglef::from_coords(10.0, 10.0, two_ulp, two_ulp)));
}

#[test]
fn test_quadrant_indices() {
    for (i, quadrant) in Quadrant::ALL.iter().enumerate() {
        assert_eq!(quadrant.index(), i);
    }
}

// ============================================================================
// Insert / split
// ============================================================================

#[test]
fn test_insert_below_capacity_does_not_split() {
    let mut tree = Quadtree::new(root(), 4).unwrap();
    for i in 0..4 {
        tree.insert(point(10.0 + i as f32, 10.0, i)).unwrap();
    }
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn test_overflow_in_one_quadrant_keeps_every_object() {
    let max = 4;
    let mut tree = Quadtree::new(root(), max).unwrap();
    let points = [
        point(10.0, 10.0, 0),
        point(20.0, 20.0, 1),
        point(30.0, 30.0, 2),
        point(12.0, 40.0, 3),
        point(40.0, 12.0, 4),
    ];
    for p in points.iter().cloned() {
        tree.insert(p).unwrap();
    }

    // The root split once and the NxNy child, receiving all five points,
    // overflowed and split as well.
    assert_eq!(tree.node_count(), 1 + 4 + 4);
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.len(), max + 1);

    let mut found = Vec::new();
    let count = tree.query(&root(), Some(&mut found));
    assert_eq!(count, max + 1);
    assert_eq!(ids(&found), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_split_pushes_down_fitting_objects_only() {
    let mut tree = Quadtree::new(root(), 2).unwrap();
    // straddles both midlines: stays at the root
    tree.insert(Rectanglef::from_coords(40.0, 40.0, 60.0, 60.0)).unwrap();
    tree.insert(Rectanglef::from_coords(10.0, 10.0, 20.0, 20.0)).unwrap();
    tree.insert(Rectanglef::from_coords(70.0, 70.0, 80.0, 80.0)).unwrap();

    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.iter().count(), 3);
    // root residual comes first in node order
    assert_eq!(
        tree.iter().next(),
        Some(&Rectanglef::from_coords(40.0, 40.0, 60.0, 60.0))
    );
}

#[test]
fn test_full_node_rejects_straddling_object() {
    let mut tree = Quadtree::new(root(), 1).unwrap();
    let a = Rectanglef::from_coords(40.0, 40.0, 60.0, 60.0);
    let b = Rectanglef::from_coords(45.0, 45.0, 55.0, 55.0);

    assert_eq!(tree.insert(a), Ok(()));
    assert_eq!(tree.insert(b), Err(b));

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.query(&root(), None), 1);

    // an object fitting a quadrant is still accepted
    assert_eq!(tree.insert(Rectanglef::from_coords(1.0, 1.0, 2.0, 2.0)), Ok(()));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_coincident_points_stop_splitting_at_smallest_node() {
    let mut tree = Quadtree::new(root(), 4).unwrap();

    // Splitting never separates identical points: the tree subdivides until
    // a leaf is too small to split, and the overflow lands in the residual
    // list of the node above it.
    for i in 0..12 {
        assert_eq!(tree.insert(point(10.0, 10.0, i)), Ok(()));
    }

    assert_eq!(tree.len(), 12);
    assert!(tree.depth() > 2);
    assert!(tree.depth() < 64);

    let mut found = Vec::new();
    assert_eq!(tree.query(&root(), Some(&mut found)), 12);
    assert_eq!(ids(&found), (0..12).collect::<Vec<u32>>());

    let at_point = Rectanglef::from_coords(10.0, 10.0, 10.0, 10.0);
    assert_eq!(tree.query(&at_point, None), 12);

    // points elsewhere are still accepted
    assert_eq!(tree.insert(point(80.0, 80.0, 12)), Ok(()));
    assert_eq!(tree.len(), 13);
}

#[test]
fn test_out_of_bounds_object_stays_at_root() {
    let mut tree = Quadtree::new(root(), 2).unwrap();
    tree.insert(point(200.0, 200.0, 7)).unwrap();
    assert_eq!(tree.node_count(), 1);

    let far = Rectanglef::from_coords(150.0, 150.0, 250.0, 250.0);
    let mut found = Vec::new();
    assert_eq!(tree.query(&far, Some(&mut found)), 1);
    assert_eq!(found[0].user_data, 7);
}

// ============================================================================
// Query
// ============================================================================

fn grid_tree() -> Quadtree<QuadtreePoint<u32>> {
    let mut tree = Quadtree::new(root(), 3).unwrap();
    let mut id = 0;
    for y in 0..10 {
        for x in 0..10 {
            tree.insert(point(x as f32 * 10.0 + 5.0, y as f32 * 10.0 + 5.0, id)).unwrap();
            id += 1;
        }
    }
    tree
}

#[test]
fn test_grid_insert_all_accepted() {
    let tree = grid_tree();
    assert_eq!(tree.len(), 100);
    assert!(tree.node_count() > 1);
    assert_eq!(tree.query(&root(), None), 100);
}

#[test]
fn test_query_region() {
    let tree = grid_tree();
    // x in {5, 15}, y in {5, 15}
    let rect = Rectanglef::from_coords(0.0, 0.0, 20.0, 20.0);
    let mut found = Vec::new();
    assert_eq!(tree.query(&rect, Some(&mut found)), 4);
    assert_eq!(ids(&found), vec![0, 1, 10, 11]);
}

#[test]
fn test_query_edges_are_inclusive() {
    let tree = grid_tree();
    // exactly touches the points at x = 45 and x = 55 on the row y = 55
    let rect = Rectanglef::from_coords(45.0, 55.0, 55.0, 55.0);
    let mut found = Vec::new();
    assert_eq!(tree.query(&rect, Some(&mut found)), 2);
    assert_eq!(ids(&found), vec![54, 55]);
}

#[test]
fn test_query_count_matches_list() {
    let tree = grid_tree();
    let queries = [
        Rectanglef::from_coords(0.0, 0.0, 100.0, 100.0),
        Rectanglef::from_coords(33.0, 12.0, 71.0, 88.0),
        Rectanglef::from_coords(49.0, 49.0, 51.0, 51.0),
        Rectanglef::from_coords(-50.0, -50.0, -10.0, -10.0),
        Rectanglef::from_coords(95.0, 0.0, 200.0, 5.0),
    ];
    for rect in &queries {
        let mut found = Vec::new();
        let with_list = tree.query(rect, Some(&mut found));
        let without_list = tree.query(rect, None);
        assert_eq!(with_list, found.len(), "query {}", rect);
        assert_eq!(with_list, without_list, "query {}", rect);
    }
}

#[test]
fn test_query_no_duplicates() {
    let tree = grid_tree();
    let mut found = Vec::new();
    tree.query(&Rectanglef::from_coords(-10.0, -10.0, 110.0, 110.0), Some(&mut found));
    let mut all = ids(&found);
    all.dedup();
    assert_eq!(all.len(), 100);
}

#[test]
fn test_query_engulfing_node_skips_per_object_test() {
    let mut tree = Quadtree::new(root(), 2).unwrap();
    // outside the root bounds, stored in the root residual list
    tree.insert(point(150.0, 150.0, 1)).unwrap();

    // the query covers the whole root node, so every object stored at the
    // root is reported without testing its own bounds
    assert_eq!(tree.query(&root(), None), 1);
    // a query that does not engulf the root tests the object itself
    assert_eq!(tree.query(&Rectanglef::from_coords(0.0, 0.0, 99.0, 99.0), None), 0);
}

#[test]
fn test_query_empty_tree() {
    let tree = Quadtree::<Rectanglef>::new(root(), 4).unwrap();
    assert_eq!(tree.query(&root(), None), 0);
}
