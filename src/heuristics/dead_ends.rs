use rand::Rng;

use crate::field::{DIM, Field};

/// One elimination pass over every small dead end.
///
/// A dead end is a room with exactly one open-wall neighbor; it is "small"
/// when that neighbor is a junction with more than two open-wall neighbors.
/// For each small dead end, every grid-adjacent room behind a closed wall
/// that is itself a dead end forms a candidate pair. One member of the pair
/// is eliminated: all its walls are closed and it is reattached directly to
/// the survivor, which relocates the branch tip outward and leaves the
/// open-wall count unchanged. When exactly one member is small the non-small
/// one is eliminated, otherwise a fair coin decides.
///
/// The caller re-runs passes until the dead-end count stops dropping; a
/// single pass is not a fixed point because eliminations reshape the
/// dead-end set.
pub(crate) fn reduce_pass(rng: &mut impl Rng, field: &mut Field) -> usize {
    let mut eliminated = 0usize;
    for room in 0..field.room_count() {
        'directions: for dim in 0..DIM {
            for toward_higher in [false, true] {
                if !is_small_dead_end(field, room) {
                    break 'directions;
                }
                let Some(other) = field.neighbor(room, dim, toward_higher) else {
                    continue;
                };
                // Only rooms behind a currently-closed wall qualify; an open
                // wall here would be the dead end's own corridor.
                if field.wall_open_between(room, other, dim) {
                    continue;
                }
                if !field.is_dead_end(other) {
                    continue;
                }
                let victim = if !is_small_dead_end(field, other) {
                    other
                } else if rng.random_bool(0.5) {
                    room
                } else {
                    other
                };
                let survivor = if victim == room { other } else { room };
                eliminate(field, victim, survivor, dim);
                eliminated += 1;
            }
        }
    }
    eliminated
}

/// A dead end whose sole neighbor can spare the connection: losing it leaves
/// the neighbor with at least two open walls.
fn is_small_dead_end(field: &Field, room: usize) -> bool {
    match field.sole_open_neighbor(room) {
        Some(neighbor) => field.open_neighbor_count(neighbor) > 2,
        None => false,
    }
}

/// Closes every wall of `victim`, then reattaches it directly to `survivor`,
/// which makes the victim the new tip of the survivor's branch.
fn eliminate(field: &mut Field, victim: usize, survivor: usize, dim: usize) {
    field.close_all_walls(victim);
    field.set_wall(victim.max(survivor), dim, true);
}
