use lifegrid_space::{topology_for, Bounded, EdgeBehavior, Toroidal, Topology, MOORE_OFFSETS};

#[test]
fn boxed_topologies_match_concrete_backends() {
    let wrap = topology_for(true);
    let absorb = topology_for(false);
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(wrap.neighbours(x, y, 5, 4), Toroidal.neighbours(x, y, 5, 4));
            assert_eq!(absorb.neighbours(x, y, 5, 4), Bounded.neighbours(x, y, 5, 4));
        }
    }
}

#[test]
fn interior_cells_agree_across_topologies() {
    for y in 1..7 {
        for x in 1..7 {
            assert_eq!(
                Bounded.neighbours(x, y, 8, 8),
                Toroidal.neighbours(x, y, 8, 8),
                "interior cell ({x}, {y}) should not see any edge"
            );
        }
    }
}

#[test]
fn interior_neighbours_follow_offset_table() {
    let n = Toroidal.neighbours(3, 3, 8, 8);
    let expected: Vec<(i32, i32)> = MOORE_OFFSETS.iter().map(|&(dx, dy)| (3 + dx, 3 + dy)).collect();
    assert_eq!(n.to_vec(), expected);
}

#[test]
fn corner_counts_3_and_8() {
    let corners = [(0, 0), (9, 0), (0, 5), (9, 5)];
    for (x, y) in corners {
        assert_eq!(Bounded.neighbours(x, y, 10, 6).len(), 3);
        assert_eq!(Toroidal.neighbours(x, y, 10, 6).len(), 8);
    }
    assert_eq!(Bounded.edge_behavior(), EdgeBehavior::Absorb);
}
