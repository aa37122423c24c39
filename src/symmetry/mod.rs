// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transpose symmetry breaking.
//!
//! Mirroring a doubleword square across its main diagonal swaps its rows and
//! columns and gives another doubleword square over the same words. The search
//! keeps only one of each pair: the one whose first column does not sort
//! before its first row. The check runs on the partial first column each time
//! a letter is placed in it, against the first row's letters of the same
//! length, which the visitation order has already filled.

use std::cmp::Ordering;

/// Result of comparing a square (or partial square) with its transpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// The first column sorts after the first row: keep.
    Canonical,
    /// The compared letters are equal; the transpose cannot be ruled out yet.
    Equivocal,
    /// The first column sorts before the first row: the transpose is kept instead.
    NonCanonical,
}

/// Compare a first-column prefix with the first-row prefix of the same length.
pub fn check_transpose_prefix(first_column: &[char], first_row: &[char]) -> SymmetryType {
    debug_assert_eq!(first_column.len(), first_row.len());
    match first_column.cmp(first_row) {
        Ordering::Greater => SymmetryType::Canonical,
        Ordering::Equal => SymmetryType::Equivocal,
        Ordering::Less => SymmetryType::NonCanonical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_prefix_comparison() {
        assert_eq!(check_transpose_prefix(&chars("ab"), &chars("aa")), SymmetryType::Canonical);
        assert_eq!(check_transpose_prefix(&chars("ab"), &chars("ab")), SymmetryType::Equivocal);
        assert_eq!(check_transpose_prefix(&chars("ab"), &chars("ac")), SymmetryType::NonCanonical);
    }
}
