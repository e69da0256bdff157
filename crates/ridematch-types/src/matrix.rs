//! The eligibility matrix: which driver/rider pairs are compatible for one
//! matching round.
//!
//! Indexed by **position** in the filtered driver/rider lists of the round,
//! not by stable user IDs — the lists must therefore be ordered identically
//! on every replica before the matrix is built or consumed. Row-major
//! storage keeps the row/column-clearing operations of the auction cheap.

use serde::{Deserialize, Serialize};

/// Boolean compatibility table between the round's drivers (rows) and
/// riders (columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityMatrix {
    drivers: usize,
    riders: usize,
    cells: Vec<bool>,
}

impl EligibilityMatrix {
    /// An all-false matrix for `drivers` x `riders`.
    #[must_use]
    pub fn new(drivers: usize, riders: usize) -> Self {
        Self {
            drivers,
            riders,
            cells: vec![false; drivers * riders],
        }
    }

    #[must_use]
    pub fn driver_count(&self) -> usize {
        self.drivers
    }

    #[must_use]
    pub fn rider_count(&self) -> usize {
        self.riders
    }

    /// True when either dimension is zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.drivers == 0 || self.riders == 0
    }

    #[must_use]
    pub fn get(&self, driver: usize, rider: usize) -> bool {
        self.cells[driver * self.riders + rider]
    }

    pub fn set(&mut self, driver: usize, rider: usize, eligible: bool) {
        self.cells[driver * self.riders + rider] = eligible;
    }

    /// Clear a driver's entire row (capacity exhausted).
    pub fn clear_row(&mut self, driver: usize) {
        let start = driver * self.riders;
        for cell in &mut self.cells[start..start + self.riders] {
            *cell = false;
        }
    }

    /// Clear a rider's entire column (rider satisfied).
    pub fn clear_column(&mut self, rider: usize) {
        for driver in 0..self.drivers {
            self.cells[driver * self.riders + rider] = false;
        }
    }

    /// Per-rider count of currently eligible drivers (column sums).
    #[must_use]
    pub fn offers(&self) -> Vec<u32> {
        let mut offers = vec![0u32; self.riders];
        for driver in 0..self.drivers {
            for (rider, offer) in offers.iter_mut().enumerate() {
                if self.cells[driver * self.riders + rider] {
                    *offer += 1;
                }
            }
        }
        offers
    }

    /// Row indices of the drivers eligible for `rider`, ascending.
    #[must_use]
    pub fn eligible_drivers(&self, rider: usize) -> Vec<usize> {
        (0..self.drivers).filter(|&d| self.get(d, rider)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EligibilityMatrix {
        // 2 drivers x 3 riders:
        //   d0: r0 r2
        //   d1: r0 r1
        let mut m = EligibilityMatrix::new(2, 3);
        m.set(0, 0, true);
        m.set(0, 2, true);
        m.set(1, 0, true);
        m.set(1, 1, true);
        m
    }

    #[test]
    fn new_matrix_is_all_false() {
        let m = EligibilityMatrix::new(3, 4);
        assert_eq!(m.driver_count(), 3);
        assert_eq!(m.rider_count(), 4);
        assert_eq!(m.offers(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn offers_are_column_sums() {
        assert_eq!(sample().offers(), vec![2, 1, 1]);
    }

    #[test]
    fn eligible_drivers_are_ascending_rows() {
        let m = sample();
        assert_eq!(m.eligible_drivers(0), vec![0, 1]);
        assert_eq!(m.eligible_drivers(1), vec![1]);
        assert_eq!(m.eligible_drivers(2), vec![0]);
    }

    #[test]
    fn clear_row_empties_driver() {
        let mut m = sample();
        m.clear_row(0);
        assert_eq!(m.offers(), vec![1, 1, 0]);
        assert!(!m.get(0, 0) && !m.get(0, 2));
        assert!(m.get(1, 0));
    }

    #[test]
    fn clear_column_empties_rider() {
        let mut m = sample();
        m.clear_column(0);
        assert_eq!(m.offers(), vec![0, 1, 1]);
    }

    #[test]
    fn degenerate_dimensions() {
        assert!(EligibilityMatrix::new(0, 5).is_degenerate());
        assert!(EligibilityMatrix::new(5, 0).is_degenerate());
        assert!(!EligibilityMatrix::new(1, 1).is_degenerate());
        assert!(EligibilityMatrix::new(5, 0).offers().is_empty());
    }

    #[test]
    fn serde_roundtrip_is_exact() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        let back: EligibilityMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
