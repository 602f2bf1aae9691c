/*!
The catalog of literals derived from a dataset.

A catalog enumerates every admissible literal for a dataset under some [mode](CatalogMode), in a fixed order, and evaluates each literal against every row of the dataset once, on construction.

```rust
# use std::sync::Arc;
# use dnf_fit::catalog::LiteralCatalog;
# use dnf_fit::config::CatalogMode;
# use dnf_fit::data::Dataset;
# use dnf_fit::structures::relation::Relation;
let dataset = Dataset::new(
    vec!["a".to_string()],
    vec![vec![1], vec![2], vec![3], vec![4]],
    vec![false, true, true, false],
)
.unwrap();

let catalog = LiteralCatalog::build(Arc::new(dataset), CatalogMode::Equality);
assert_eq!(catalog.len(), 4);

let two = catalog.find(0, Relation::EQ, 2).unwrap();
assert_eq!(two.satisfies().to_string(), "0100");
```

# Definitions and datasets

The literals of a catalog are a function of the *definition* of the catalog --- the features and ranges of the dataset it was built from, and the mode --- and so a catalog may be [refreshed](LiteralCatalog::refresh) against some other dataset with the same features.
A refreshed catalog has the same [CatalogId], the same literals in the same order, and vectors computed against the new dataset.

Catalogs are read-only once built, and are shared by any number of formulas through an [Arc].
*/

mod generate;

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use rand::{seq::SliceRandom, Rng};

use crate::{
    config::CatalogMode,
    data::{Dataset, Value},
    misc::log::targets::{self},
    structures::{
        literal::{Literal, LiteralIndex},
        relation::Relation,
    },
    types::err::{self},
};

/// The identity of the definition of a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogId(u64);

impl CatalogId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        CatalogId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub struct LiteralCatalog {
    id: CatalogId,
    mode: CatalogMode,
    dataset: Arc<Dataset>,
    literals: Vec<Arc<Literal>>,
}

impl LiteralCatalog {
    /// Builds the catalog of `dataset` under `mode`.
    pub fn build(dataset: Arc<Dataset>, mode: CatalogMode) -> Self {
        let id = CatalogId::fresh();

        let literals = generate::definitions(mode, dataset.features())
            .into_iter()
            .enumerate()
            .map(|(index, (feature, relation, constant))| {
                Arc::new(Literal::new(
                    feature,
                    relation,
                    constant,
                    index as LiteralIndex,
                    id,
                    &dataset,
                ))
            })
            .collect::<Vec<_>>();

        log::debug!(
            target: targets::CATALOG,
            "Built {} literals over {} rows from {} ({mode})",
            literals.len(),
            dataset.rows(),
            dataset.id()
        );

        LiteralCatalog {
            id,
            mode,
            dataset,
            literals,
        }
    }

    /// The catalog, with each literal evaluated against `dataset` in place of the dataset of the catalog.
    ///
    /// The definition of the catalog is kept, and so `dataset` must have the same number of features.
    pub fn refresh(&self, dataset: Arc<Dataset>) -> Result<Self, err::ErrorKind> {
        if dataset.feature_count() != self.dataset.feature_count() {
            return Err(err::CatalogError::FeatureMismatch {
                expected: self.dataset.feature_count(),
                found: dataset.feature_count(),
            }
            .into());
        }

        let mut literals = Vec::with_capacity(self.literals.len());
        for literal in &self.literals {
            let mut fresh = Literal::clone(literal);
            fresh.refresh(&dataset)?;
            literals.push(Arc::new(fresh));
        }

        log::debug!(
            target: targets::CATALOG,
            "Refreshed {} literals from {} to {}",
            literals.len(),
            self.dataset.id(),
            dataset.id()
        );

        Ok(LiteralCatalog {
            id: self.id,
            mode: self.mode,
            dataset,
            literals,
        })
    }
}

impl LiteralCatalog {
    pub fn id(&self) -> CatalogId {
        self.id
    }

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    /// The dataset the literals of the catalog are evaluated against.
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn get(&self, index: LiteralIndex) -> Option<&Arc<Literal>> {
        self.literals.get(index as usize)
    }

    /// An iterator over the literals of the catalog, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Literal>> {
        self.literals.iter()
    }

    /// The literal comparing `feature` to `constant` by `relation`, if the catalog contains such a literal.
    pub fn find(&self, feature: usize, relation: Relation, constant: Value) -> Option<&Arc<Literal>> {
        self.literals.iter().find(|literal| {
            literal.feature() == feature
                && literal.relation() == relation
                && literal.constant() == constant
        })
    }

    /// A literal chosen uniformly from the catalog, or `None` if the catalog is empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Arc<Literal>> {
        self.literals.choose(rng)
    }

    /// Checks `literal` is a member of the catalog, evaluated against the dataset of the catalog.
    ///
    /// Membership is by index, together with the identity and definition of the catalog, and the relation of a literal is part of its definition.
    pub fn check(&self, literal: &Literal) -> Result<(), err::FormulaError> {
        let member = match self.get(literal.index()) {
            Some(member) if literal.catalog() == self.id => member,
            _ => return Err(err::FormulaError::InvalidLiteral),
        };

        if !member.same_definition(literal) {
            return Err(err::FormulaError::InvalidLiteral);
        }

        match literal.dataset() == self.dataset.id() {
            true => Ok(()),
            false => Err(err::FormulaError::DatasetMismatch),
        }
    }

    /// The literal, with the name of the feature from the dataset of the catalog.
    pub fn literal_string(&self, literal: &Literal) -> String {
        match self.dataset.features().get(literal.feature()) {
            Some(feature) => literal.as_string_with(&feature.name),
            None => literal.to_string(),
        }
    }
}
