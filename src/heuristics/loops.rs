use crate::field::{DIM, Field};
use crate::solvers::bfs;

/// Acceptance thresholds for reopening walls. These are tuned values, not
/// derived ones; the defaults admit roughly three candidates in seven.
pub(crate) struct LoopParams {
    /// A dead end and its opposite must sit within `total_distance /
    /// spread_divisor` positions of each other along the main path.
    pub spread_divisor: u32,
    /// Candidates are throttled by `total_distance % density_modulus`.
    pub density_modulus: u32,
    pub density_limit: u32,
}

impl Default for LoopParams {
    fn default() -> Self {
        LoopParams {
            spread_divisor: 4,
            density_modulus: 7,
            density_limit: 2,
        }
    }
}

/// Reopens a bounded number of walls to introduce cycles, once, after
/// dead-end reduction and the cost flood have both run.
///
/// Each dead end is paired with its "opposite": the grid neighbor straight
/// across from its single open wall. The wall between them is opened when
/// both rooms hug the same stretch of the start-to-end path, with the
/// density term keeping most candidates closed.
pub(crate) fn create(field: &mut Field, params: &LoopParams) {
    let path = field.shortest_path_indices();
    let rooms = field.room_count();

    // Distance to the nearest path room, and that room's ordinal along the
    // path, via one flood per path room folded into a running minimum.
    let mut to_path = vec![u32::MAX; rooms];
    let mut path_pos = vec![0u32; rooms];
    for (ordinal, &path_room) in path.iter().enumerate() {
        let distances = bfs::distances(field, path_room);
        for room in 0..rooms {
            if distances[room] < to_path[room] {
                to_path[room] = distances[room];
                path_pos[room] = ordinal as u32;
            }
        }
    }

    let dead_ends: Vec<usize> = (0..rooms).filter(|&r| field.is_dead_end(r)).collect();
    let candidates = dead_ends.len();
    let mut opened = 0usize;
    for dead_end in dead_ends {
        // Earlier openings may have already absorbed this dead end.
        let Some((opposite, dim)) = opposite(field, dead_end) else {
            continue;
        };
        let spread = path_pos[dead_end].abs_diff(path_pos[opposite]);
        let total = to_path[dead_end] + to_path[opposite];
        if spread <= total / params.spread_divisor && total % params.density_modulus <= params.density_limit
        {
            field.set_wall(dead_end.max(opposite), dim, true);
            opened += 1;
        }
    }
    tracing::debug!("[loops] opened {} walls from {} dead ends", opened, candidates);
}

/// The grid neighbor straight across a dead end from its single open wall,
/// along the same dimension. None when the room is not a dead end or the
/// opposite side runs into the grid boundary.
fn opposite(field: &Field, room: usize) -> Option<(usize, usize)> {
    let mut connection = None;
    for dim in 0..DIM {
        for toward_higher in [false, true] {
            let Some(neighbor) = field.neighbor(room, dim, toward_higher) else {
                continue;
            };
            if field.wall_open_between(room, neighbor, dim) {
                if connection.is_some() {
                    return None;
                }
                connection = Some((dim, toward_higher));
            }
        }
    }
    let (dim, toward_higher) = connection?;
    field
        .neighbor(room, dim, !toward_higher)
        .map(|opposite| (opposite, dim))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x1 corridor 0 - 1 - 2 - 3 with the 2-3 wall still closed.
    fn broken_corridor() -> Field {
        let mut field = Field::blank([4, 1, 1, 1]);
        field.set_wall(1, 0, true);
        field.set_wall(2, 0, true);
        field
    }

    #[test]
    fn test_opposite_of_a_corridor_tip() {
        let field = broken_corridor();
        // Room 2's only open wall faces room 1; straight across is room 3.
        assert_eq!(opposite(&field, 2), Some((3, 0)));
        // Room 0 sits on the boundary opposite its open wall.
        assert_eq!(opposite(&field, 0), None);
        // Room 1 has two open walls, so no single direction to mirror.
        assert_eq!(opposite(&field, 1), None);
    }

    #[test]
    fn test_never_removes_walls() {
        let mut field = Field::create(&mut crate::generators::get_rng(Some(11)), [6, 6, 1, 1]);
        let before = field.open_wall_count();
        create(&mut field, &LoopParams::default());
        assert!(field.open_wall_count() >= before);
    }
}
