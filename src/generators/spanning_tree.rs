use rand::Rng;

use crate::field::{DIM, Field, clusters::Clusters};

/// An internal wall, identified by the higher-indexed of the two rooms it
/// separates and the dimension it crosses.
#[derive(Clone, Copy)]
struct Wall {
    room: u32,
    dim: u8,
}

/// Carves a uniform random spanning tree into a fully-walled field.
///
/// This is randomized Kruskal's over the grid graph, sampling without
/// replacement from a shrinking candidate pool instead of pre-shuffling every
/// edge: draw a random pool slot, discard it when both endpoints already
/// share a cluster, otherwise open the wall and merge. Discards swap the last
/// candidate into the vacated slot, so a rejected draw retries in place.
///
/// # Panics
///
/// Panics if the pool runs dry before every room is connected. The base grid
/// graph is connected, so that can only mean a construction bug, and a
/// partial maze must never escape.
pub(crate) fn build(rng: &mut impl Rng, field: &mut Field) {
    let rooms = field.room_count();
    let mut clusters = Clusters::new(rooms);
    if clusters.all_merged() {
        // A single room has no internal walls.
        return;
    }

    let mut pool = collect_walls(field);
    tracing::debug!("[builder] {} candidate walls for {} rooms", pool.len(), rooms);

    let mut opened = 0usize;
    while !clusters.all_merged() {
        let mut slot = draw(rng, &pool);
        loop {
            let wall = pool[slot];
            let near = wall.room as usize;
            let far = near - field.strides()[wall.dim as usize];
            let near_cluster = clusters.find(near as u32);
            let far_cluster = clusters.find(far as u32);
            if near_cluster != far_cluster {
                field.set_wall(near, wall.dim as usize, true);
                clusters.union(near_cluster, far_cluster);
                opened += 1;
                break;
            }
            pool.swap_remove(slot);
            if slot == pool.len() {
                slot = draw(rng, &pool);
            }
        }
    }

    tracing::debug!("[builder] spanning tree complete, {} walls opened", opened);
}

/// Every internal wall exactly once: a wall exists between a room and its
/// lower neighbor along `dim` whenever the room's coordinate there is
/// nonzero.
fn collect_walls(field: &Field) -> Vec<Wall> {
    let mut pool = Vec::new();
    for room in 0..field.room_count() {
        let position = field.position_of(room);
        for dim in 0..DIM {
            if position[dim] > 0 {
                pool.push(Wall {
                    room: room as u32,
                    dim: dim as u8,
                });
            }
        }
    }
    pool
}

fn draw(rng: &mut impl Rng, pool: &[Wall]) -> usize {
    assert!(
        !pool.is_empty(),
        "candidate pool exhausted before all rooms were connected"
    );
    rng.random_range(0..pool.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_single_room_terminates_immediately() {
        let mut field = Field::blank([1, 1, 1, 1]);
        assert!(collect_walls(&field).is_empty());
        build(&mut get_rng(Some(42)), &mut field);
        assert_eq!(field.open_wall_count(), 0);
    }

    #[test]
    fn test_spanning_tree_edge_count() {
        // A tree over n rooms has exactly n - 1 edges.
        let mut field = Field::blank([4, 4, 1, 1]);
        build(&mut get_rng(Some(0)), &mut field);
        assert_eq!(field.open_wall_count(), 15);

        let mut field = Field::blank([3, 4, 2, 2]);
        build(&mut get_rng(Some(7)), &mut field);
        assert_eq!(field.open_wall_count(), 47);
    }

    #[test]
    fn test_spanning_tree_connects_everything() {
        let mut field = Field::blank([5, 3, 2, 1]);
        build(&mut get_rng(Some(3)), &mut field);
        let costs = crate::solvers::bfs::flood(&field, 0).0;
        assert!(costs.iter().all(|&c| c != crate::solvers::bfs::UNREACHED));
    }

    #[test]
    fn test_candidate_wall_enumeration() {
        let field = Field::blank([3, 2, 1, 1]);
        // (3 - 1) * 2 walls along dim 0 plus 3 * (2 - 1) along dim 1.
        assert_eq!(collect_walls(&field).len(), 7);
    }
}
