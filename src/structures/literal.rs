/*!
Literals, aka. an atomic comparison of some feature against a constant.

Each literal belongs to a [catalog](crate::catalog), and is created by the catalog together with a cached [vector](Bits) of the rows of a dataset on which the literal is satisfied.
The vector is computed once, and recomputed only on [refresh](Literal::refresh) against another dataset.

Literals are immutable once built, and are shared through an [Arc](std::sync::Arc) between the catalog and any clauses which contain the literal.

# Equality

Two literals are equal when they compare the same feature against the same constant, *regardless of relation*.
So, `x0 = 5` and `x0 != 5` are equal literals.
This is the equality used when comparing clauses and formulas.

For a comparison which takes account of the relation, see [same_definition](Literal::same_definition), and for membership of a catalog see [check](crate::catalog::LiteralCatalog::check), which uses the index of a literal in its catalog.
*/

use crate::{
    catalog::CatalogId,
    data::{Dataset, DatasetId, Value},
    generic::bits::Bits,
    structures::relation::Relation,
    types::err::{self},
};

/// The index of a literal in its catalog.
pub type LiteralIndex = u32;

#[derive(Clone, Debug)]
pub struct Literal {
    feature: usize,
    relation: Relation,
    constant: Value,

    index: LiteralIndex,
    catalog: CatalogId,

    /// The dataset the satisfaction vector was computed against.
    dataset: DatasetId,
    satisfies: Bits,
}

impl Literal {
    /// A literal, evaluated against every row of `dataset`.
    ///
    /// # Panics
    /// If `feature` is not a feature of `dataset`.
    pub(crate) fn new(
        feature: usize,
        relation: Relation,
        constant: Value,
        index: LiteralIndex,
        catalog: CatalogId,
        dataset: &Dataset,
    ) -> Self {
        assert!(
            feature < dataset.feature_count(),
            "feature {feature} of {}",
            dataset.feature_count()
        );

        Literal {
            feature,
            relation,
            constant,
            index,
            catalog,
            dataset: dataset.id(),
            satisfies: Self::evaluate(feature, relation, constant, dataset),
        }
    }

    fn evaluate(feature: usize, relation: Relation, constant: Value, dataset: &Dataset) -> Bits {
        Bits::from_fn(dataset.rows(), |row| {
            relation.test(dataset.value(row, feature), constant)
        })
    }

    /// Recomputes the satisfaction vector against `dataset`.
    pub fn refresh(&mut self, dataset: &Dataset) -> Result<(), err::ErrorKind> {
        if self.feature >= dataset.feature_count() {
            return Err(err::CatalogError::FeatureMismatch {
                expected: self.feature + 1,
                found: dataset.feature_count(),
            }
            .into());
        }

        self.satisfies = Self::evaluate(self.feature, self.relation, self.constant, dataset);
        self.dataset = dataset.id();
        Ok(())
    }
}

impl Literal {
    /// Whether the row satisfies the literal.
    pub fn test(&self, row: &[Value]) -> bool {
        self.relation.test(row[self.feature], self.constant)
    }

    /// The rows of the dataset the literal was evaluated against on which the literal is satisfied.
    pub fn satisfies(&self) -> &Bits {
        &self.satisfies
    }

    pub fn feature(&self) -> usize {
        self.feature
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn constant(&self) -> Value {
        self.constant
    }

    /// The index of the literal in its catalog.
    pub fn index(&self) -> LiteralIndex {
        self.index
    }

    pub fn catalog(&self) -> CatalogId {
        self.catalog
    }

    pub fn dataset(&self) -> DatasetId {
        self.dataset
    }

    /// Whether the literals compare the same feature to the same constant by the same relation.
    pub fn same_definition(&self, other: &Literal) -> bool {
        self.feature == other.feature
            && self.constant == other.constant
            && self.relation == other.relation
    }

    /// The literal, with the feature named by `name`.
    pub fn as_string_with(&self, name: &str) -> String {
        format!("{name} {} {}", self.relation, self.constant)
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.feature == other.feature && self.constant == other.constant
    }
}

impl Eq for Literal {}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{} {} {}", self.feature, self.relation, self.constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(
            vec!["a".to_string()],
            vec![vec![1], vec![2], vec![3], vec![4]],
            vec![false, true, true, false],
        )
        .unwrap()
    }

    #[test]
    fn satisfaction_vector() {
        let dataset = dataset();
        let literal = Literal::new(0, Relation::EQ, 2, 0, CatalogId::fresh(), &dataset);
        assert_eq!(literal.satisfies().to_string(), "0100");

        let literal = Literal::new(0, Relation::GE, 3, 1, CatalogId::fresh(), &dataset);
        assert_eq!(literal.satisfies().to_string(), "0011");
        assert!(literal.test(&[7]));
    }

    #[test]
    fn equality_ignores_relation() {
        let dataset = dataset();
        let catalog = CatalogId::fresh();
        let equal = Literal::new(0, Relation::EQ, 2, 0, catalog, &dataset);
        let not_equal = Literal::new(0, Relation::NE, 2, 1, catalog, &dataset);
        let other = Literal::new(0, Relation::EQ, 3, 2, catalog, &dataset);

        assert_eq!(equal, not_equal);
        assert!(!equal.same_definition(&not_equal));
        assert_ne!(equal, other);
    }

    #[test]
    fn refresh() {
        let dataset = dataset();
        let mut literal = Literal::new(0, Relation::LT, 3, 0, CatalogId::fresh(), &dataset);
        assert_eq!(literal.satisfies().to_string(), "1100");

        let fresh = Dataset::new(vec!["a".to_string()], vec![vec![5], vec![0]], vec![true, true]).unwrap();
        assert!(literal.refresh(&fresh).is_ok());
        assert_eq!(literal.satisfies().to_string(), "01");
        assert_eq!(literal.dataset(), fresh.id());

        let narrow = Dataset::new(vec![], vec![vec![]], vec![true]).unwrap();
        assert!(literal.refresh(&narrow).is_err());
    }

    #[test]
    #[should_panic]
    fn unknown_feature() {
        Literal::new(1, Relation::EQ, 0, 0, CatalogId::fresh(), &dataset());
    }
}
