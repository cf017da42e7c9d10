//! The collector for complete placements and their console rendering.

use crate::queens::board::BoardSize;
use crate::queens::placement::Placement;
use itertools::Itertools;
use std::fmt::Display;

/// Complete placements in the order they were found.
///
/// The collection only grows; placements are never edited once pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solutions {
    size: usize,
    placements: Vec<Placement>,
}

impl Solutions {
    /// An empty collector for boards of side `size`.
    #[must_use]
    pub const fn new(size: BoardSize) -> Self {
        Self {
            size: size.get(),
            placements: Vec::new(),
        }
    }

    /// Records a complete placement.
    ///
    /// # Panics
    ///
    /// If the placement does not fill every row of the board.
    pub fn push(&mut self, placement: Placement) {
        assert_eq!(
            placement.len(),
            self.size,
            "solution {placement} does not fill a {0}x{0} board",
            self.size
        );
        self.placements.push(placement);
    }

    /// Side length of the boards collected.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of solutions collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no solution has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterates over the solutions in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    /// The placements sorted, for comparisons that ignore discovery order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Placement> {
        self.placements.iter().cloned().sorted().collect()
    }

    /// Checks that every solution fills the board and has no attacking pair.
    #[must_use]
    pub fn verify(&self) -> bool {
        self.placements
            .iter()
            .all(|p| p.len() == self.size && p.is_safe())
    }
}

impl IntoIterator for Solutions {
    type Item = Placement;
    type IntoIter = std::vec::IntoIter<Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Renders every solution as an `N x N` grid of zeros and ones, one line per row
/// in list form, with a blank line after each board.
impl Display for Solutions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for placement in &self.placements {
            for row in placement.to_grid(self.size) {
                writeln!(f, "[{}]", row.iter().join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> BoardSize {
        BoardSize::try_from(4_usize).unwrap()
    }

    #[test]
    fn test_push_and_len() {
        let mut solutions = Solutions::new(four());
        assert!(solutions.is_empty());

        solutions.push(Placement::from(vec![2, 0, 3, 1]));
        solutions.push(Placement::from(vec![1, 3, 0, 2]));

        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions.size(), 4);
        assert_eq!(
            solutions.sorted(),
            vec![
                Placement::from(vec![1, 3, 0, 2]),
                Placement::from(vec![2, 0, 3, 1])
            ]
        );
    }

    #[test]
    fn test_new_takes_validated_size() {
        let solutions = Solutions::new(four());
        assert_eq!(solutions.size(), crate::queens::board::MIN_SIZE);
        assert!(solutions.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not fill a 4x4 board")]
    fn test_push_rejects_partial_placement() {
        let mut solutions = Solutions::new(four());
        solutions.push(Placement::from(vec![1, 3]));
    }

    #[test]
    fn test_verify() {
        let mut solutions = Solutions::new(four());
        solutions.push(Placement::from(vec![1, 3, 0, 2]));
        assert!(solutions.verify());

        solutions.push(Placement::from(vec![0, 1, 2, 3]));
        assert!(!solutions.verify());
    }

    #[test]
    fn test_display() {
        let mut solutions = Solutions::new(four());
        solutions.push(Placement::from(vec![1, 3, 0, 2]));

        let expected = "[0, 1, 0, 0]\n[0, 0, 0, 1]\n[1, 0, 0, 0]\n[0, 0, 1, 0]\n\n";
        assert_eq!(solutions.to_string(), expected);
    }
}
