// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finished squares as handed to callers.

use crate::grid::Grid;
use crate::ledger::{ConstraintLedger, Slot};
use crate::lexicon::Lexicon;
use std::collections::HashSet;
use std::fmt;

/// A completed doubleword square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub size: usize,
    /// The rows of the square, top to bottom.
    pub rows: Vec<String>,
    /// Words bound in the ledger when the square was completed, rows first.
    pub words: Vec<(Slot, String)>,
}

impl Solution {
    /// Copy a full grid and the ledger's bindings.
    pub fn capture(grid: &Grid, ledger: &ConstraintLedger, lexicon: &Lexicon) -> Self {
        debug_assert!(grid.is_full(), "capturing an unfinished square");
        Self {
            size: grid.size(),
            rows: (0..grid.size()).map(|x| grid.row_string(x)).collect(),
            words: ledger
                .bindings()
                .map(|(slot, word)| (slot, lexicon.word_string(word)))
                .collect(),
        }
    }

    /// The columns of the square, left to right.
    pub fn columns(&self) -> Vec<String> {
        let rows: Vec<Vec<char>> = self.rows.iter().map(|r| r.chars().collect()).collect();
        (0..self.size)
            .map(|y| rows.iter().map(|row| row[y]).collect())
            .collect()
    }

    /// Every row and column is a lexicon word, and (for squares larger than
    /// one cell) no word is used twice.
    pub fn verify(&self, lexicon: &Lexicon) -> bool {
        let columns = self.columns();
        let all_words = self.rows.iter().chain(columns.iter());
        let mut seen = HashSet::new();
        for word in all_words {
            let letters: Vec<char> = word.chars().collect();
            if lexicon.find(&letters).is_none() {
                return false;
            }
            if self.size > 1 && !seen.insert(word.as_str()) {
                return false;
            }
        }
        true
    }

    /// Is `other` this square mirrored across the main diagonal?
    pub fn is_transpose_of(&self, other: &Solution) -> bool {
        self.size == other.size && self.rows == other.columns()
    }
}

/// Prints the square next to its transpose, then the bound words.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.columns();
        for (row, column) in self.rows.iter().zip(&columns) {
            writeln!(f, "{}   {}", row, column)?;
        }
        let words: Vec<&str> = self.words.iter().map(|(_, w)| w.as_str()).collect();
        writeln!(f, "Taken is: {} [{}]", words.len(), words.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LetterOrder;

    fn lexicon() -> Lexicon {
        Lexicon::new(2, ["ab", "ac", "bd", "cd"], LetterOrder::Rarest)
    }

    fn square() -> Solution {
        Solution {
            size: 2,
            rows: vec!["ab".to_string(), "cd".to_string()],
            words: vec![
                (Slot::Row(0), "ab".to_string()),
                (Slot::Row(1), "cd".to_string()),
                (Slot::Column(0), "ac".to_string()),
                (Slot::Column(1), "bd".to_string()),
            ],
        }
    }

    #[test]
    fn test_capture() {
        let lexicon = lexicon();
        let mut grid = Grid::new(2);
        grid.set(0, 0, 'a');
        grid.set(0, 1, 'b');
        grid.set(1, 0, 'c');
        grid.set(1, 1, 'd');
        let mut ledger = ConstraintLedger::new(2, lexicon.len());
        ledger.try_commit(3, Slot::Row(1)).unwrap();
        ledger.try_commit(0, Slot::Row(0)).unwrap();
        ledger.try_commit(2, Slot::Column(1)).unwrap();
        ledger.try_commit(1, Slot::Column(0)).unwrap();

        assert_eq!(Solution::capture(&grid, &ledger, &lexicon), square());
    }

    #[test]
    fn test_verify() {
        let lexicon = lexicon();
        let solution = square();
        assert_eq!(solution.columns(), vec!["ac", "bd"]);
        assert!(solution.verify(&lexicon));

        let repeated = Lexicon::new(2, ["aa"], LetterOrder::Rarest);
        let all_a = Solution {
            size: 2,
            rows: vec!["aa".to_string(), "aa".to_string()],
            words: vec![],
        };
        assert!(!all_a.verify(&repeated));
        assert!(!all_a.verify(&lexicon));
    }

    #[test]
    fn test_transpose() {
        let solution = square();
        let mirrored = Solution {
            size: 2,
            rows: solution.columns(),
            words: vec![],
        };
        assert!(solution.is_transpose_of(&mirrored));
        assert!(mirrored.is_transpose_of(&solution));
        assert!(!solution.is_transpose_of(&solution));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            square().to_string(),
            "ab   ac\ncd   bd\nTaken is: 4 [ab, cd, ac, bd]\n"
        );
    }
}
