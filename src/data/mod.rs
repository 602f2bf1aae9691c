/*!
Datasets, aka. a table of small integer feature values with a binary label for each row.

A dataset is built once and never mutated.
Literals, catalogs, and formulas refer to a dataset through an [Arc], and a fresh dataset (e.g. a held-out test set) is swapped in by [refreshing](crate::catalog::LiteralCatalog::refresh) a catalog rather than by editing the dataset in place.

```rust
# use dnf_fit::data::Dataset;
let dataset = Dataset::new(
    vec!["a".to_string(), "b".to_string()],
    vec![vec![0, 3], vec![2, 1], vec![1, 1]],
    vec![true, false, true],
)
.unwrap();

assert_eq!(dataset.rows(), 3);
assert_eq!(dataset.feature(0).range(), (0, 2));
assert_eq!(dataset.feature(1).range(), (1, 3));
assert_eq!(dataset.positive_count(), 2);
```

Each dataset is given a unique [DatasetId] on construction, used to detect use of literals evaluated against some other dataset.
*/

pub mod read;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// A feature value.
pub type Value = u8;

/// The identity of a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetId(u64);

impl DatasetId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        DatasetId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dataset#{}", self.0)
    }
}

/// A (named) feature, and the range of values it takes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    pub min: Value,
    pub max: Value,
}

impl Feature {
    pub fn range(&self) -> (Value, Value) {
        (self.min, self.max)
    }

    /// An iterator over each value in the range of the feature.
    pub fn values(&self) -> impl Iterator<Item = Value> {
        self.min..=self.max
    }
}

#[derive(Debug)]
pub struct Dataset {
    id: DatasetId,

    features: Vec<Feature>,

    /// Values, row-major.
    values: Vec<Value>,

    labels: Vec<bool>,
}

impl Dataset {
    /// A dataset from rows of values and a label for each row, with the range of each feature taken from the values.
    ///
    /// With no rows, the range of each feature is (0, 0).
    pub fn new(
        names: Vec<String>,
        rows: Vec<Vec<Value>>,
        labels: Vec<bool>,
    ) -> Result<Self, err::ErrorKind> {
        let width = names.len();
        Self::check_shape(width, &rows, &labels)?;

        let ranges = (0..width)
            .map(|feature| {
                let mut column = rows.iter().map(|row| row[feature]);
                match column.next() {
                    None => (0, 0),
                    Some(first) => column.fold((first, first), |(min, max), value| {
                        (min.min(value), max.max(value))
                    }),
                }
            })
            .collect::<Vec<_>>();

        Ok(Self::assemble(names, ranges, rows, labels))
    }

    /// A dataset with an explicit range for each feature.
    ///
    /// Useful when the values of some held-out dataset do not span the range of the dataset a catalog was defined on.
    pub fn with_ranges(
        names: Vec<String>,
        ranges: Vec<(Value, Value)>,
        rows: Vec<Vec<Value>>,
        labels: Vec<bool>,
    ) -> Result<Self, err::ErrorKind> {
        let width = names.len();
        if ranges.len() != width {
            return Err(err::DatasetError::RangeCount {
                features: width,
                ranges: ranges.len(),
            }
            .into());
        }
        Self::check_shape(width, &rows, &labels)?;

        for (row_index, row) in rows.iter().enumerate() {
            for (feature, (&value, &(min, max))) in row.iter().zip(&ranges).enumerate() {
                if value < min || max < value {
                    return Err(err::DatasetError::OutOfRange {
                        row: row_index,
                        feature,
                    }
                    .into());
                }
            }
        }

        Ok(Self::assemble(names, ranges, rows, labels))
    }

    fn check_shape(
        width: usize,
        rows: &[Vec<Value>],
        labels: &[bool],
    ) -> Result<(), err::DatasetError> {
        if rows.len() != labels.len() {
            return Err(err::DatasetError::LabelCount {
                rows: rows.len(),
                labels: labels.len(),
            });
        }

        match rows.iter().position(|row| row.len() != width) {
            Some(row) => Err(err::DatasetError::RowWidth {
                row,
                expected: width,
                found: rows[row].len(),
            }),
            None => Ok(()),
        }
    }

    fn assemble(
        names: Vec<String>,
        ranges: Vec<(Value, Value)>,
        rows: Vec<Vec<Value>>,
        labels: Vec<bool>,
    ) -> Self {
        let features = names
            .into_iter()
            .zip(ranges)
            .map(|(name, (min, max))| Feature { name, min, max })
            .collect::<Vec<_>>();

        let values = rows.into_iter().flatten().collect::<Vec<_>>();

        let dataset = Dataset {
            id: DatasetId::fresh(),
            features,
            values,
            labels,
        };

        log::debug!(
            target: targets::DATASET,
            "{}: {} rows, {} features, {} positive",
            dataset.id,
            dataset.rows(),
            dataset.feature_count(),
            dataset.positive_count()
        );

        dataset
    }
}

impl Dataset {
    pub fn id(&self) -> DatasetId {
        self.id
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.labels.len()
    }

    /// The number of features.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// # Panics
    /// If there is no feature at `index`.
    pub fn feature(&self, index: usize) -> &Feature {
        &self.features[index]
    }

    /// The index of the feature with the given name, if some such feature exists.
    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|feature| feature.name == name)
    }

    /// The values of a row, indexed by feature.
    ///
    /// # Panics
    /// If there is no row at `index`.
    pub fn row(&self, index: usize) -> &[Value] {
        let width = self.feature_count();
        &self.values[index * width..(index + 1) * width]
    }

    /// An iterator over all rows, in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Value]> {
        (0..self.rows()).map(|index| self.row(index))
    }

    pub fn value(&self, row: usize, feature: usize) -> Value {
        assert!(feature < self.feature_count(), "no feature {feature}");
        self.values[row * self.feature_count() + feature]
    }

    pub fn label(&self, row: usize) -> bool {
        self.labels[row]
    }

    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    /// The number of rows with a positive label.
    pub fn positive_count(&self) -> usize {
        self.labels.iter().filter(|&&label| label).count()
    }

    /// The number of rows with a negative label.
    pub fn negative_count(&self) -> usize {
        self.rows() - self.positive_count()
    }
}
