/*!
Incremental tracking of the rows a formula explains.

For each row *r* the tracker keeps a coverage count, the number of clauses of the formula satisfied on *r*.
A formula is true on *r* exactly when the count of *r* is positive, and so a row is *matched* (the formula agrees with the label of the row) when:
- The count is positive and the label is true, or
- The count is zero and the label is false.

Aggregates of matched rows are updated only on transitions of a count between zero and one, and so adding or subtracting the vector of a clause costs time proportional to the rows the clause is satisfied on, while reading the aggregates is constant time.

```rust
# use dnf_fit::generic::bits::Bits;
# use dnf_fit::structures::formula::Tracker;
let labels = [false, true, true, false];
let mut tracker = Tracker::new(&labels);

// With no coverage, the formula is false everywhere and matches the negative rows.
assert_eq!(tracker.matches(), 2);

let clause = Bits::from_fn(4, |row| row == 1);
tracker.add_coverage(&clause, &labels);
assert_eq!(tracker.matches(), 3);
assert_eq!(tracker.positive_matches(), 1);

tracker.subtract_coverage(&clause, &labels);
assert_eq!(tracker.matches(), 2);
```

The tracker knows nothing of clauses, and it is up to the formula to subtract the vector of a clause *before* any edit to the clause, and to add the vector of the clause after.
*/

use crate::{
    generic::bits::Bits,
    misc::log::targets::{self},
};

/// The count type for coverage of a row.
pub type Coverage = u32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tracker {
    /// For each row, the number of clauses satisfied on the row.
    count: Vec<Coverage>,

    /// The number of rows on which the formula agrees with the label.
    matches: usize,

    /// The number of rows with a true label on which the formula is true.
    positive_matches: usize,
}

impl Tracker {
    /// A tracker with no coverage, for the given labels.
    pub fn new(labels: &[bool]) -> Self {
        let mut tracker = Tracker {
            count: Vec::default(),
            matches: 0,
            positive_matches: 0,
        };
        tracker.reset(labels);
        tracker
    }

    /// Clears all coverage.
    ///
    /// With no coverage the formula is false on every row, and so matches each row with a false label.
    pub fn reset(&mut self, labels: &[bool]) {
        self.count.clear();
        self.count.resize(labels.len(), 0);
        self.matches = labels.iter().filter(|&&label| !label).count();
        self.positive_matches = 0;
    }

    /// Adds one to the coverage of each row set in `bits`.
    pub fn add_coverage(&mut self, bits: &Bits, labels: &[bool]) {
        debug_assert_eq!(bits.len(), labels.len());
        for row in bits.iter_ones() {
            self.count[row] += 1;
            if self.count[row] == 1 {
                match labels[row] {
                    true => {
                        self.matches += 1;
                        self.positive_matches += 1;
                    }
                    false => self.matches -= 1,
                }
            }
        }
        log::trace!(target: targets::TRACKER, "+ {bits} -> {}", self.matches);
    }

    /// Subtracts one from the coverage of each row set in `bits`.
    ///
    /// # Panics
    /// If the coverage of some row set in `bits` is zero, as then `bits` was never added.
    pub fn subtract_coverage(&mut self, bits: &Bits, labels: &[bool]) {
        debug_assert_eq!(bits.len(), labels.len());
        for row in bits.iter_ones() {
            assert!(self.count[row] > 0, "coverage underflow on row {row}");
            self.count[row] -= 1;
            if self.count[row] == 0 {
                match labels[row] {
                    true => {
                        self.matches -= 1;
                        self.positive_matches -= 1;
                    }
                    false => self.matches += 1,
                }
            }
        }
        log::trace!(target: targets::TRACKER, "- {bits} -> {}", self.matches);
    }

    /// The number of rows on which the formula agrees with the label.
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// The number of rows with a true label on which the formula is true.
    pub fn positive_matches(&self) -> usize {
        self.positive_matches
    }

    /// The number of rows with a false label on which the formula is false.
    pub fn negative_matches(&self) -> usize {
        self.matches - self.positive_matches
    }

    /// The number of clauses satisfied on `row`.
    pub fn coverage(&self, row: usize) -> Coverage {
        self.count[row]
    }

    /// The coverage of each row.
    pub fn counts(&self) -> &[Coverage] {
        &self.count
    }

    /// Whether the tracker agrees with `satisfies`, the rows on which the formula is true.
    pub fn agrees_with(&self, satisfies: &Bits, labels: &[bool]) -> bool {
        if self.count.len() != satisfies.len() {
            return false;
        }

        let mut matches = 0;
        let mut positive_matches = 0;
        for (row, &label) in labels.iter().enumerate() {
            let covered = self.count[row] > 0;
            if covered != satisfies.get(row) {
                return false;
            }
            if covered == label {
                matches += 1;
                if label {
                    positive_matches += 1;
                }
            }
        }

        matches == self.matches && positive_matches == self.positive_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [bool; 5] = [true, false, true, false, false];

    #[test]
    fn overlapping_clauses() {
        let mut tracker = Tracker::new(&LABELS);
        assert_eq!(tracker.matches(), 3);

        let a = Bits::from_fn(5, |row| row < 3);
        let b = Bits::from_fn(5, |row| row == 0 || row == 4);

        tracker.add_coverage(&a, &LABELS);
        tracker.add_coverage(&b, &LABELS);
        assert_eq!(tracker.counts(), &[2, 1, 1, 0, 1]);
        // Rows 0, 2 (true, covered) and 3 (false, uncovered), though not 1 or 4.
        assert_eq!(tracker.matches(), 3);
        assert_eq!(tracker.positive_matches(), 2);
        assert_eq!(tracker.negative_matches(), 1);

        tracker.subtract_coverage(&a, &LABELS);
        assert_eq!(tracker.counts(), &[1, 0, 0, 0, 1]);
        assert_eq!(tracker.matches(), 3);
        assert_eq!(tracker.positive_matches(), 1);

        let mut satisfies = Bits::zeros(5);
        satisfies.set(0, true);
        satisfies.set(4, true);
        assert!(tracker.agrees_with(&satisfies, &LABELS));
        assert!(!tracker.agrees_with(&Bits::zeros(5), &LABELS));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut tracker = Tracker::new(&LABELS);
        tracker.add_coverage(&Bits::ones(5), &LABELS);
        assert_eq!(tracker.matches(), 2);

        tracker.reset(&LABELS);
        let once = tracker.clone();
        tracker.reset(&LABELS);
        assert_eq!(tracker, once);
        assert_eq!(tracker, Tracker::new(&LABELS));
    }

    #[test]
    #[should_panic]
    fn underflow() {
        let mut tracker = Tracker::new(&LABELS);
        tracker.subtract_coverage(&Bits::ones(5), &LABELS);
    }
}
