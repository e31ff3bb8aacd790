pub(crate) mod clusters;
mod coords;
mod room;

use rand::Rng;

use crate::generators::spanning_tree;
use crate::heuristics::{dead_ends, loops};
use crate::solvers::bfs;
use room::Room;

/// Every maze lives in a grid of exactly this many dimensions; flat mazes
/// simply set the unused sizes to 1.
pub const DIM: usize = 4;

/// A room coordinate, one component per dimension.
pub type Position = [usize; DIM];

/// A generated maze over a hyper-rectangular grid of up to four dimensions.
///
/// Construction runs a fixed pipeline: carve a random spanning tree, iterate
/// dead-end reduction to a fixed point, flood costs and parents from the
/// start room, then reopen a few walls to introduce loops. The result is
/// immutable; collaborators only query it.
pub struct Field {
    rooms: Box<[Room]>,
    sizes: [usize; DIM],
    strides: [usize; DIM],
    /// Hop counts from the start room, captured before loop creation.
    costs: Box<[u32]>,
    /// BFS tree parents matching `costs`; `bfs::NO_PARENT` at the start.
    parents: Box<[u32]>,
    start: usize,
    end: usize,
}

impl Field {
    /// Generates a maze of the given sizes, drawing all randomness from
    /// `rng`. Every size must be at least 1; a fixed generator yields a
    /// bit-identical maze every time.
    pub fn create(rng: &mut impl Rng, sizes: [usize; DIM]) -> Self {
        let mut field = Field::blank(sizes);
        tracing::info!(
            "[field] generating a {}x{}x{}x{} maze ({} rooms)",
            sizes[0],
            sizes[1],
            sizes[2],
            sizes[3],
            field.room_count()
        );

        spanning_tree::build(rng, &mut field);

        loop {
            let before = field.dead_end_count();
            dead_ends::reduce_pass(rng, &mut field);
            let after = field.dead_end_count();
            tracing::debug!("[field] dead-end pass: {} -> {}", before, after);
            if after >= before {
                break;
            }
        }

        let (costs, parents) = bfs::flood(&field, field.start);
        field.costs = costs;
        field.parents = parents;

        loops::create(&mut field, &loops::LoopParams::default());
        field
    }

    /// Seeded convenience wrapper around [`Field::create`].
    pub fn from_seed(seed: Option<u64>, sizes: [usize; DIM]) -> Self {
        Field::create(&mut crate::generators::get_rng(seed), sizes)
    }

    /// An all-walls-closed field; the starting point of the pipeline.
    pub(crate) fn blank(sizes: [usize; DIM]) -> Self {
        let rooms: usize = sizes.iter().product();
        Field {
            rooms: vec![Room::default(); rooms].into_boxed_slice(),
            sizes,
            strides: coords::strides(&sizes),
            costs: vec![bfs::UNREACHED; rooms].into_boxed_slice(),
            parents: vec![bfs::NO_PARENT; rooms].into_boxed_slice(),
            start: 0,
            end: rooms - 1,
        }
    }

    pub fn sizes(&self) -> &[usize; DIM] {
        &self.sizes
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the walls around the room at `position` are open along
    /// `dim`, toward the lower and the higher neighbor respectively. The
    /// higher value is false by definition on the grid's upper boundary.
    pub fn is_wall_open(&self, position: &Position, dim: usize) -> (bool, bool) {
        let index = coords::index(&self.sizes, position);
        let toward_lower = self.rooms[index].is_open(dim);
        let toward_higher = position[dim] + 1 < self.sizes[dim]
            && self.rooms[index + self.strides[dim]].is_open(dim);
        (toward_lower, toward_higher)
    }

    /// The maze entrance, at the origin corner.
    pub fn start_position(&self) -> Position {
        self.position_of(self.start)
    }

    /// The maze exit, at the coordinate-wise maximum corner.
    pub fn end_position(&self) -> Position {
        self.position_of(self.end)
    }

    /// Hop count from the start room to `position` over the pre-loop tree.
    ///
    /// Like [`Field::shortest_path`], this is a snapshot taken before loop
    /// creation and is not refreshed when loops open shortcuts.
    pub fn cost_from_start(&self, position: &Position) -> u32 {
        self.costs[coords::index(&self.sizes, position)]
    }

    /// The room sequence from the end back to the start, following the
    /// parent pointers of the cost flood.
    ///
    /// The flood ran before loop creation, so this is the unique path of the
    /// pre-loop tree; walls opened by loop creation may admit shorter routes
    /// that this deliberately does not reflect.
    pub fn shortest_path(&self) -> Vec<Position> {
        self.shortest_path_indices()
            .into_iter()
            .map(|index| self.position_of(index))
            .collect()
    }

    /// Total number of open walls; every open wall is counted once, on the
    /// higher-indexed room storing it.
    pub fn open_wall_count(&self) -> usize {
        self.rooms
            .iter()
            .map(|room| (0..DIM).filter(|&dim| room.is_open(dim)).count())
            .sum()
    }

    /// Number of rooms with exactly one open-wall neighbor.
    pub fn dead_end_count(&self) -> usize {
        (0..self.room_count())
            .filter(|&room| self.is_dead_end(room))
            .count()
    }

    pub(crate) fn shortest_path_indices(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut room = self.end;
        loop {
            path.push(room);
            if room == self.start {
                return path;
            }
            debug_assert_ne!(self.parents[room], bfs::NO_PARENT);
            room = self.parents[room] as usize;
        }
    }

    pub(crate) fn position_of(&self, index: usize) -> Position {
        coords::position(&self.sizes, index)
    }

    pub(crate) fn strides(&self) -> &[usize; DIM] {
        &self.strides
    }

    /// The grid neighbor one unit step away, or None across the boundary.
    pub(crate) fn neighbor(&self, index: usize, dim: usize, toward_higher: bool) -> Option<usize> {
        let position = self.position_of(index);
        if toward_higher {
            (position[dim] + 1 < self.sizes[dim]).then(|| index + self.strides[dim])
        } else {
            (position[dim] > 0).then(|| index - self.strides[dim])
        }
    }

    /// Open state of the wall between two grid-adjacent rooms along `dim`.
    /// The flag lives on the higher-indexed room.
    pub(crate) fn wall_open_between(&self, a: usize, b: usize, dim: usize) -> bool {
        self.rooms[a.max(b)].is_open(dim)
    }

    /// Sets the wall stored on `higher` (toward its lower neighbor along
    /// `dim`); `higher` must not sit on the lower boundary of `dim`.
    pub(crate) fn set_wall(&mut self, higher: usize, dim: usize, open: bool) {
        debug_assert!(self.position_of(higher)[dim] > 0);
        self.rooms[higher].set_open(dim, open);
    }

    /// Closes every wall around a room, on whichever side each is stored.
    pub(crate) fn close_all_walls(&mut self, index: usize) {
        let position = self.position_of(index);
        for dim in 0..DIM {
            if position[dim] > 0 {
                self.rooms[index].set_open(dim, false);
            }
            if position[dim] + 1 < self.sizes[dim] {
                self.rooms[index + self.strides[dim]].set_open(dim, false);
            }
        }
    }

    /// All rooms reachable from `index` through one open wall.
    pub(crate) fn open_neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let position = self.position_of(index);
        (0..DIM)
            .flat_map(move |dim| {
                let lower = (position[dim] > 0 && self.rooms[index].is_open(dim))
                    .then(|| index - self.strides[dim]);
                let higher = (position[dim] + 1 < self.sizes[dim]
                    && self.rooms[index + self.strides[dim]].is_open(dim))
                .then(|| index + self.strides[dim]);
                [lower, higher]
            })
            .flatten()
    }

    pub(crate) fn open_neighbor_count(&self, index: usize) -> usize {
        self.open_neighbors(index).count()
    }

    /// The unique open-wall neighbor of a dead end, None for any other room.
    pub(crate) fn sole_open_neighbor(&self, index: usize) -> Option<usize> {
        let mut neighbors = self.open_neighbors(index);
        let first = neighbors.next()?;
        neighbors.next().is_none().then_some(first)
    }

    pub(crate) fn is_dead_end(&self, index: usize) -> bool {
        self.sole_open_neighbor(index).is_some()
    }

    #[cfg(test)]
    /// Raw wall flags of every room, for bit-exact comparisons in tests.
    pub(crate) fn wall_snapshot(&self) -> Vec<[bool; DIM]> {
        self.rooms.iter().map(|room| room.open_walls()).collect()
    }
}
