// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell visitation order.
//!
//! Cells are visited by anti-diagonal: increasing `x + y`, and within one
//! anti-diagonal by increasing `x`. When `(x, y)` is visited every cell to its
//! left and every cell above it is already filled, so both the row prefix and
//! the column prefix ending at the cell are known. Cell `(x - 1, y + 1)` lies
//! on the same anti-diagonal with a smaller `x`, so it is filled too.

use super::Position;

/// All cells of an `n`×`n` square in search order.
pub fn diagonal_order(n: usize) -> Vec<Position> {
    let mut order = Vec::with_capacity(n * n);
    for s in 0..(2 * n).saturating_sub(1) {
        let first = s.saturating_sub(n - 1);
        let last = s.min(n - 1);
        for x in first..=last {
            order.push((x, s - x));
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_order_3() {
        assert_eq!(
            diagonal_order(3),
            vec![
                (0, 0),
                (0, 1),
                (1, 0),
                (0, 2),
                (1, 1),
                (2, 0),
                (1, 2),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(diagonal_order(0).is_empty());
        assert_eq!(diagonal_order(1), vec![(0, 0)]);
    }

    proptest! {
        #[test]
        fn prop_order_is_permutation(n in 1usize..12) {
            let order = diagonal_order(n);
            prop_assert_eq!(order.len(), n * n);
            let mut seen = vec![false; n * n];
            for &(x, y) in &order {
                prop_assert!(x < n && y < n);
                prop_assert!(!seen[x * n + y]);
                seen[x * n + y] = true;
            }
        }

        #[test]
        fn prop_prefixes_visited_first(n in 1usize..12) {
            let order = diagonal_order(n);
            let mut rank = vec![0usize; n * n];
            for (i, &(x, y)) in order.iter().enumerate() {
                rank[x * n + y] = i;
            }
            for &(x, y) in &order {
                let here = rank[x * n + y];
                for yy in 0..y {
                    prop_assert!(rank[x * n + yy] < here);
                }
                for xx in 0..x {
                    prop_assert!(rank[xx * n + y] < here);
                }
                if x > 0 && y + 1 < n {
                    prop_assert!(rank[(x - 1) * n + y + 1] < here);
                }
            }
        }
    }
}
