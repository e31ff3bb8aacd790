use super::{DIM, Position};

/// Index deltas for a unit step along each dimension:
/// `strides[d]` is the product of all sizes below `d`.
pub(crate) fn strides(sizes: &[usize; DIM]) -> [usize; DIM] {
    let mut strides = [1; DIM];
    for dim in 1..DIM {
        strides[dim] = strides[dim - 1] * sizes[dim - 1];
    }
    strides
}

/// Converts a linear room index into a coordinate vector.
///
/// The index must be in `[0, sizes.iter().product())`; out-of-range values
/// are a caller bug, not a checked error, as this sits on the hot path.
pub(crate) fn position(sizes: &[usize; DIM], index: usize) -> Position {
    let mut position = [0; DIM];
    let mut rest = index;
    for dim in 0..DIM {
        position[dim] = rest % sizes[dim];
        rest /= sizes[dim];
    }
    position
}

/// Converts a coordinate vector into a linear room index.
///
/// Folds the coordinates high-to-low with the size vector as radix, so it is
/// the exact inverse of [`position`] for in-range coordinates.
pub(crate) fn index(sizes: &[usize; DIM], position: &Position) -> usize {
    let mut index = 0;
    for dim in (0..DIM).rev() {
        index = index * sizes[dim] + position[dim];
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides() {
        assert_eq!(strides(&[4, 3, 2, 5]), [1, 4, 12, 24]);
        assert_eq!(strides(&[7, 1, 1, 1]), [1, 7, 7, 7]);
    }

    #[test]
    fn test_round_trip_all_indices() {
        let sizes = [3, 4, 2, 5];
        let rooms: usize = sizes.iter().product();
        for i in 0..rooms {
            let pos = position(&sizes, i);
            for dim in 0..DIM {
                assert!(pos[dim] < sizes[dim]);
            }
            assert_eq!(index(&sizes, &pos), i);
        }
    }

    #[test]
    fn test_round_trip_all_positions() {
        let sizes = [2, 3, 4, 2];
        for x in 0..sizes[0] {
            for y in 0..sizes[1] {
                for z in 0..sizes[2] {
                    for w in 0..sizes[3] {
                        let pos = [x, y, z, w];
                        assert_eq!(position(&sizes, index(&sizes, &pos)), pos);
                    }
                }
            }
        }
    }

    #[test]
    fn test_flat_dimensions() {
        let sizes = [5, 4, 1, 1];
        assert_eq!(position(&sizes, 0), [0, 0, 0, 0]);
        assert_eq!(position(&sizes, 19), [4, 3, 0, 0]);
        assert_eq!(index(&sizes, &[4, 3, 0, 0]), 19);
    }
}
