/*!
Formulas, aka. a collection of clauses, interpreted as the disjunction of those clauses --- a formula in disjunctive normal form.

A formula is the genotype of a search for a formula which fits a labelled dataset.
The search edits the structure of a formula, by insertion and removal of clauses or of literals within some clause, and after each edit reads how many rows of the dataset the formula explains (that is, on how many rows the formula agrees with the label of the row).

Rather than evaluating the formula against the dataset after each edit, a formula embeds a [Tracker] of the coverage of each row, which is updated on each edit in time proportional to the rows the edited clause is satisfied on.
And so [evaluate](Formula::evaluate), [evaluate_positive](Formula::evaluate_positive), and [evaluate_negative](Formula::evaluate_negative) are constant time.

# Example

```rust
# use std::sync::Arc;
# use dnf_fit::catalog::LiteralCatalog;
# use dnf_fit::config::Config;
# use dnf_fit::data::Dataset;
# use dnf_fit::structures::clause::Clause;
# use dnf_fit::structures::formula::{ClauseOk, Formula};
# use dnf_fit::structures::relation::Relation;
let dataset = Dataset::new(
    vec!["a".to_string()],
    vec![vec![1], vec![2], vec![3], vec![4]],
    vec![false, true, true, false],
)
.unwrap();

let config = Config::default();
let catalog = Arc::new(LiteralCatalog::build(Arc::new(dataset), config.catalog_mode.value));
let mut formula = Formula::new(catalog.clone(), &config);

// The empty formula is false on every row, and so explains each negative row.
assert_eq!(formula.evaluate(), 2);

let a_is_two = catalog.find(0, Relation::EQ, 2).unwrap().clone();
let clause = Clause::from_literals(&catalog, [a_is_two], &config).unwrap();

let Ok(ClauseOk::Added(key)) = formula.insert_clause(clause) else {
    panic!("Failed to add the clause");
};
assert_eq!(formula.evaluate(), 3);

let a_is_three = catalog.find(0, Relation::EQ, 3).unwrap().clone();
assert!(formula.insert_clause(Clause::from_literals(&catalog, [a_is_three], &config).unwrap()).is_ok());
assert_eq!(formula.evaluate(), 4);
assert_eq!(formula.to_string(), "a = 2 | a = 3");

assert!(formula.remove_clause(key).is_ok());
assert_eq!(formula.evaluate(), 3);
```

# Edits

Each edit is validated before any count is touched, and so a rejected edit leaves a formula unchanged.

An edit to the literals of a clause [subtracts](Tracker::subtract_coverage) the vector of the clause, edits the clause, and then [adds](Tracker::add_coverage) the vector of the edited clause.
The order matters, as the counts of each row include the contribution of the clause *before* the edit.

Removal of the last clause of a formula when configured to [forbid](crate::config::Config::forbid_empty_formula) an empty formula is skipped, likewise for insertion of an empty clause or removal of the last literal of a clause when configured to [forbid](crate::config::Config::forbid_empty_clauses) empty clauses.
Skipped edits are not errors.

# Datasets

The counts of a formula are relative to the labels of the dataset of the catalog of the formula.
To evaluate a formula against another dataset, [refresh](crate::catalog::LiteralCatalog::refresh) the catalog and then [refresh](Formula::refresh) the formula with the refreshed catalog.
*/

mod parse;
mod tracker;
pub use tracker::{Coverage, Tracker};

use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};
use slotmap::SlotMap;

use crate::{
    catalog::LiteralCatalog,
    config::Config,
    data::{Dataset, Value},
    generic::bits::Bits,
    misc::log::targets::{self},
    structures::{
        clause::{Clause, LiteralOk},
        literal::Literal,
        node::Node,
    },
    types::err::{self},
};

slotmap::new_key_type! {
    /// A key to access a clause of a formula.
    ///
    /// Keys remain valid across edits to other clauses, and are shared by a clone of the formula.
    pub struct ClauseKey;
}

/// The result of a successful edit of the clauses of a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added, with the given key.
    Added(ClauseKey),

    /// The clause was removed, and is returned.
    Removed(Clause),

    /// The edit was ignored, due to a forbidden empty clause or formula.
    Skipped,
}

#[derive(Clone, Debug)]
pub struct Formula {
    catalog: Arc<LiteralCatalog>,

    clauses: SlotMap<ClauseKey, Clause>,

    /// Keys of the clauses, in structural order.
    order: Vec<ClauseKey>,

    tracker: Tracker,

    forbid_empty_clauses: bool,
    forbid_empty_formula: bool,
}

impl Formula {
    /// An empty formula over the literals of `catalog`.
    pub fn new(catalog: Arc<LiteralCatalog>, config: &Config) -> Self {
        let tracker = Tracker::new(catalog.dataset().labels());
        Formula {
            catalog,
            clauses: SlotMap::with_key(),
            order: Vec::default(),
            tracker,
            forbid_empty_clauses: config.forbid_empty_clauses.value,
            forbid_empty_formula: config.forbid_empty_formula.value,
        }
    }

    /// A formula of the given clauses, inserted in order.
    pub fn from_clauses(
        catalog: Arc<LiteralCatalog>,
        clauses: impl IntoIterator<Item = Clause>,
        config: &Config,
    ) -> Result<Self, err::ErrorKind> {
        let mut formula = Self::new(catalog, config);
        for clause in clauses {
            formula.insert_clause(clause)?;
        }
        Ok(formula)
    }

    fn labels(&self) -> &[bool] {
        self.catalog.dataset().labels()
    }
}

// Edits
impl Formula {
    /// Appends `clause` to the formula.
    pub fn insert_clause(&mut self, mut clause: Clause) -> Result<ClauseOk, err::ErrorKind> {
        if self.forbid_empty_clauses && clause.is_empty() {
            log::debug!(target: targets::FORMULA, "Skipped insertion of an empty clause");
            return Ok(ClauseOk::Skipped);
        }

        clause.check(&self.catalog)?;
        clause.set_forbid_empty(self.forbid_empty_clauses);

        let bits = clause.satisfies(self.rows());
        self.tracker.add_coverage(&bits, self.catalog.dataset().labels());

        log::trace!(target: targets::FORMULA, "+ clause {clause}");
        let key = self.clauses.insert(clause);
        self.order.push(key);

        Ok(ClauseOk::Added(key))
    }

    /// Removes the clause at `key` from the formula.
    pub fn remove_clause(&mut self, key: ClauseKey) -> Result<ClauseOk, err::ErrorKind> {
        let Some(clause) = self.clauses.get(key) else {
            return Err(err::FormulaError::NotAChild.into());
        };

        if self.forbid_empty_formula && self.clauses.len() == 1 {
            log::debug!(target: targets::FORMULA, "Skipped removal of the last clause");
            return Ok(ClauseOk::Skipped);
        }

        let bits = clause.satisfies(self.rows());
        self.tracker.subtract_coverage(&bits, self.catalog.dataset().labels());

        self.order.retain(|&ordered| ordered != key);
        match self.clauses.remove(key) {
            Some(clause) => {
                log::trace!(target: targets::FORMULA, "- clause {clause}");
                Ok(ClauseOk::Removed(clause))
            }
            None => Err(err::FormulaError::NotAChild.into()),
        }
    }

    /// Appends `literal` to the clause at `key`.
    pub fn insert_literal(
        &mut self,
        key: ClauseKey,
        literal: Arc<Literal>,
    ) -> Result<LiteralOk, err::ErrorKind> {
        self.catalog.check(&literal)?;
        let rows = self.rows();
        let labels = self.catalog.dataset().labels();

        let Some(clause) = self.clauses.get_mut(key) else {
            return Err(err::FormulaError::NotAChild.into());
        };

        self.tracker.subtract_coverage(&clause.satisfies(rows), labels);
        log::trace!(target: targets::FORMULA, "+ literal {literal} to {clause}");
        clause.push_unchecked(literal);
        self.tracker.add_coverage(&clause.satisfies(rows), labels);

        Ok(LiteralOk::Added)
    }

    /// Removes the first literal with the same catalog index as `literal` from the clause at `key`.
    pub fn remove_literal(
        &mut self,
        key: ClauseKey,
        literal: &Literal,
    ) -> Result<LiteralOk, err::ErrorKind> {
        let rows = self.rows();
        let labels = self.catalog.dataset().labels();

        let Some(clause) = self.clauses.get_mut(key) else {
            return Err(err::FormulaError::NotAChild.into());
        };

        let Some(position) = clause.position_of(literal) else {
            return Err(err::FormulaError::NotAChild.into());
        };

        if clause.forbids_empty() && clause.size() == 1 {
            log::debug!(target: targets::FORMULA, "Skipped removal of the last literal of {clause}");
            return Ok(LiteralOk::Skipped);
        }

        self.tracker.subtract_coverage(&clause.satisfies(rows), labels);
        let removed = clause.remove_at(position);
        log::trace!(target: targets::FORMULA, "- literal {removed} from {clause}");
        self.tracker.add_coverage(&clause.satisfies(rows), labels);

        Ok(LiteralOk::Removed)
    }
}

// Evaluation
impl Formula {
    /// The number of rows on which the formula agrees with the label of the row.
    pub fn evaluate(&self) -> usize {
        self.tracker.matches()
    }

    /// The number of rows with a true label on which the formula is true.
    pub fn evaluate_positive(&self) -> usize {
        self.tracker.positive_matches()
    }

    /// The number of rows with a false label on which the formula is false.
    pub fn evaluate_negative(&self) -> usize {
        self.tracker.negative_matches()
    }

    /// The number of clauses of the formula satisfied on `row`.
    pub fn coverage(&self, row: usize) -> Coverage {
        self.tracker.coverage(row)
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Recomputes all counts from the clauses of the formula.
    pub fn rebuild(&mut self) {
        let labels = self.catalog.dataset().labels();
        self.tracker.reset(labels);

        let rows = self.catalog.dataset().rows();
        for key in &self.order {
            if let Some(clause) = self.clauses.get(*key) {
                self.tracker.add_coverage(&clause.satisfies(rows), labels);
            }
        }

        log::debug!(
            target: targets::FORMULA,
            "Rebuilt {} clauses against {}: {} matches",
            self.order.len(),
            self.catalog.dataset().id(),
            self.tracker.matches()
        );
    }

    /// Moves the formula to `catalog`, a refresh of the catalog of the formula, and rebuilds all counts.
    pub fn refresh(&mut self, catalog: Arc<LiteralCatalog>) -> Result<(), err::ErrorKind> {
        if catalog.id() != self.catalog.id() {
            return Err(err::CatalogError::DefinitionMismatch.into());
        }

        let mut clauses = self.clauses.clone();
        for clause in clauses.values_mut() {
            clause.rebind(&catalog)?;
        }

        self.clauses = clauses;
        self.catalog = catalog;
        self.rebuild();
        Ok(())
    }

    /// The rows on which the formula is true, evaluated clause by clause.
    pub fn satisfies(&self) -> Bits {
        Node::Formula(self).satisfies(self.rows())
    }

    /// Whether the formula is true on the row.
    pub fn test(&self, row: &[Value]) -> bool {
        Node::Formula(self).test(row)
    }

    /// Whether the counts of the formula agree with an evaluation of the formula clause by clause.
    pub fn is_consistent(&self) -> bool {
        self.tracker.agrees_with(&self.satisfies(), self.labels())
    }
}

// Structure
impl Formula {
    pub fn catalog(&self) -> &Arc<LiteralCatalog> {
        &self.catalog
    }

    /// The dataset the counts of the formula are relative to.
    pub fn dataset(&self) -> &Arc<Dataset> {
        self.catalog.dataset()
    }

    /// The number of rows of the dataset the counts of the formula are relative to.
    pub fn rows(&self) -> usize {
        self.catalog.dataset().rows()
    }

    pub fn clause_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clause(&self, key: ClauseKey) -> Option<&Clause> {
        self.clauses.get(key)
    }

    /// Keys to the clauses of the formula, in order.
    pub fn keys(&self) -> &[ClauseKey] {
        &self.order
    }

    /// The clauses of the formula, in order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.order.iter().filter_map(|key| self.clauses.get(*key))
    }

    /// The number of literals in the clause at `key`, if the clause exists.
    pub fn literal_count_of(&self, key: ClauseKey) -> Option<usize> {
        self.clauses.get(key).map(|clause| clause.size())
    }

    /// The number of literals in the largest clause, or zero if the formula has no clauses.
    pub fn max_clause_size(&self) -> usize {
        self.clauses().map(|clause| clause.size()).max().unwrap_or(0)
    }

    /// The number of literals across all clauses.
    pub fn literal_count(&self) -> usize {
        self.clauses().map(|clause| clause.size()).sum()
    }
}

// Random access
impl Formula {
    /// The key to a clause chosen uniformly from the formula, or `None` if the formula is empty.
    pub fn pick_random_clause<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ClauseKey> {
        self.order.choose(rng).copied()
    }

    /// A literal chosen uniformly from the clause at `key`, or `None` if the clause is empty or does not exist.
    pub fn pick_random_literal_of<R: Rng + ?Sized>(
        &self,
        key: ClauseKey,
        rng: &mut R,
    ) -> Option<Arc<Literal>> {
        self.clauses.get(key)?.literals().choose(rng).cloned()
    }

    /// A literal chosen uniformly from the catalog of the formula, or `None` if the catalog is empty.
    pub fn pick_random_catalog_literal<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Arc<Literal>> {
        self.catalog.pick_random(rng).cloned()
    }
}

/// Formulas are equal when of the same size and equal clauses are at each position.
impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.clause_count() == other.clause_count()
            && self.clauses().zip(other.clauses()).all(|(a, b)| a == b)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "false");
        }

        let multiple = self.clause_count() > 1;
        let strings = self
            .clauses()
            .map(|clause| {
                let string = clause.as_string_with(&self.catalog);
                match multiple && clause.size() > 1 {
                    true => format!("({string})"),
                    false => string,
                }
            })
            .collect::<Vec<_>>();
        write!(f, "{}", strings.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        config::CatalogMode,
        structures::relation::Relation,
    };

    use super::*;

    fn scenario() -> (Arc<LiteralCatalog>, Config) {
        let dataset = Dataset::new(
            vec!["a".to_string()],
            vec![vec![1], vec![2], vec![3], vec![4]],
            vec![false, true, true, false],
        )
        .unwrap();
        let config = Config::default();
        let catalog = LiteralCatalog::build(Arc::new(dataset), CatalogMode::Standard);
        (Arc::new(catalog), config)
    }

    fn unit(catalog: &LiteralCatalog, relation: Relation, constant: Value, config: &Config) -> Clause {
        let literal = catalog.find(0, relation, constant).unwrap().clone();
        Clause::from_literals(catalog, [literal], config).unwrap()
    }

    #[test]
    fn single_clause_scenario() {
        let (catalog, config) = scenario();
        let mut formula = Formula::new(catalog.clone(), &config);

        let Ok(ClauseOk::Added(_)) = formula.insert_clause(unit(&catalog, Relation::EQ, 2, &config)) else {
            panic!("Failed to insert the clause");
        };

        assert_eq!(formula.tracker().counts(), &[0, 1, 0, 0]);
        // Rows 0 and 3 (false, uncovered) and row 1 (true, covered).
        assert_eq!(formula.evaluate(), 3);
        assert_eq!(formula.evaluate_positive(), 1);
        assert_eq!(formula.evaluate_negative(), 2);
        assert!(formula.is_consistent());
    }

    #[test]
    fn literal_edits_subtract_then_add() {
        let (catalog, config) = scenario();
        let mut formula = Formula::new(catalog.clone(), &config);

        let Ok(ClauseOk::Added(key)) = formula.insert_clause(unit(&catalog, Relation::NE, 1, &config)) else {
            panic!("Failed to insert the clause");
        };
        // a != 1 covers rows 1, 2, 3.
        assert_eq!(formula.evaluate(), 3);

        let not_four = catalog.find(0, Relation::NE, 4).unwrap().clone();
        assert_eq!(formula.insert_literal(key, not_four.clone()), Ok(LiteralOk::Added));
        assert_eq!(formula.tracker().counts(), &[0, 1, 1, 0]);
        assert_eq!(formula.evaluate(), 4);
        assert!(formula.is_consistent());

        assert_eq!(formula.remove_literal(key, &not_four), Ok(LiteralOk::Removed));
        assert_eq!(formula.tracker().counts(), &[0, 1, 1, 1]);
        assert_eq!(formula.evaluate(), 3);
        assert!(formula.is_consistent());
    }

    #[test]
    fn skipped_edits() {
        let (catalog, mut config) = scenario();
        config.forbid_empty_formula.value = true;
        let mut formula = Formula::new(catalog.clone(), &config);

        assert_eq!(formula.insert_clause(Clause::new(false)), Ok(ClauseOk::Skipped));
        assert!(formula.is_empty());

        let Ok(ClauseOk::Added(key)) = formula.insert_clause(unit(&catalog, Relation::EQ, 3, &config)) else {
            panic!("Failed to insert the clause");
        };
        let before = formula.tracker().clone();

        assert_eq!(formula.remove_clause(key), Ok(ClauseOk::Skipped));
        let literal = formula.clause(key).unwrap().literals()[0].clone();
        assert_eq!(formula.remove_literal(key, &literal), Ok(LiteralOk::Skipped));

        assert_eq!(formula.tracker(), &before);
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn rejected_edits_leave_counts() {
        let (catalog, config) = scenario();
        let mut formula = Formula::new(catalog.clone(), &config);
        let Ok(ClauseOk::Added(key)) = formula.insert_clause(unit(&catalog, Relation::EQ, 2, &config)) else {
            panic!("Failed to insert the clause");
        };
        let before = formula.tracker().clone();

        let stranger = LiteralCatalog::build(catalog.dataset().clone(), CatalogMode::Standard);
        let foreign = stranger.find(0, Relation::EQ, 3).unwrap().clone();
        assert_eq!(
            formula.insert_literal(key, foreign),
            Err(err::ErrorKind::Formula(err::FormulaError::InvalidLiteral))
        );

        let absent = catalog.find(0, Relation::EQ, 4).unwrap().clone();
        assert_eq!(
            formula.remove_literal(key, &absent),
            Err(err::ErrorKind::Formula(err::FormulaError::NotAChild))
        );

        let Ok(ClauseOk::Removed(_)) = formula.remove_clause(key) else {
            panic!("Failed to remove the clause");
        };
        assert_eq!(
            formula.remove_clause(key),
            Err(err::ErrorKind::Formula(err::FormulaError::NotAChild))
        );
        assert_eq!(
            formula.insert_literal(key, absent),
            Err(err::ErrorKind::Formula(err::FormulaError::NotAChild))
        );

        assert!(formula.insert_clause(unit(&catalog, Relation::EQ, 2, &config)).is_ok());
        assert_eq!(formula.tracker(), &before);
    }

    #[test]
    fn clone_is_independent() {
        let (catalog, config) = scenario();
        let mut formula = Formula::new(catalog.clone(), &config);
        assert!(formula.insert_clause(unit(&catalog, Relation::EQ, 2, &config)).is_ok());

        let mut clone = formula.clone();
        assert_eq!(clone, formula);
        assert_eq!(clone.evaluate(), formula.evaluate());

        assert!(clone.insert_clause(unit(&catalog, Relation::EQ, 3, &config)).is_ok());
        assert_eq!(clone.evaluate(), 4);
        assert_eq!(formula.evaluate(), 3);
        assert_ne!(clone, formula);
    }

    #[test]
    fn introspection() {
        let (catalog, config) = scenario();
        let mut formula = Formula::new(catalog.clone(), &config);
        assert_eq!(formula.max_clause_size(), 0);

        let Ok(ClauseOk::Added(key)) = formula.insert_clause(unit(&catalog, Relation::NE, 1, &config)) else {
            panic!("Failed to insert the clause");
        };
        let literal = catalog.find(0, Relation::LE, 2).unwrap().clone();
        assert!(formula.insert_literal(key, literal).is_ok());
        assert!(formula.insert_clause(unit(&catalog, Relation::EQ, 4, &config)).is_ok());

        assert_eq!(formula.clause_count(), 2);
        assert_eq!(formula.literal_count_of(key), Some(2));
        assert_eq!(formula.max_clause_size(), 2);
        assert_eq!(formula.literal_count(), 3);
        assert_eq!(formula.to_string(), "(a != 1 & a <= 2) | a = 4");
    }

    #[test]
    fn random_access() {
        let (catalog, config) = scenario();
        let mut formula = Formula::new(catalog.clone(), &config);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(formula.pick_random_clause(&mut rng).is_none());

        let Ok(ClauseOk::Added(key)) = formula.insert_clause(unit(&catalog, Relation::EQ, 1, &config)) else {
            panic!("Failed to insert the clause");
        };
        assert_eq!(formula.pick_random_clause(&mut rng), Some(key));
        assert_eq!(
            formula.pick_random_literal_of(key, &mut rng).map(|literal| literal.index()),
            catalog.find(0, Relation::EQ, 1).map(|literal| literal.index())
        );

        let literal = formula.pick_random_catalog_literal(&mut rng).unwrap();
        assert_eq!(catalog.check(&literal), Ok(()));
    }
}
