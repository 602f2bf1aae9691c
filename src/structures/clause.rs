/*!
Clauses, aka. a collection of literals, interpreted as the conjunction of those literals (a 'monomial').

A clause is an ordered sequence of [literals](Literal) from a [catalog](crate::catalog).
Literals are added only if they are a member of the catalog given, though the same literal may be added more than once.

```rust
# use std::sync::Arc;
# use dnf_fit::catalog::LiteralCatalog;
# use dnf_fit::config::CatalogMode;
# use dnf_fit::data::Dataset;
# use dnf_fit::structures::clause::{Clause, LiteralOk};
# use dnf_fit::structures::relation::Relation;
let dataset = Dataset::new(
    vec!["a".to_string(), "b".to_string()],
    vec![vec![0, 1], vec![1, 1], vec![1, 0]],
    vec![false, true, false],
)
.unwrap();
let catalog = LiteralCatalog::build(Arc::new(dataset), CatalogMode::Inequality);

let a = catalog.find(0, Relation::EQ, 1).unwrap().clone();
let b = catalog.find(1, Relation::EQ, 1).unwrap().clone();

let mut clause = Clause::new(true);
assert_eq!(clause.add_literal(&catalog, a.clone()), Ok(LiteralOk::Added));
assert_eq!(clause.add_literal(&catalog, b), Ok(LiteralOk::Added));
assert_eq!(clause.satisfies(3).to_string(), "010");

assert_eq!(clause.remove_literal(&a), Ok(LiteralOk::Removed));
assert_eq!(clause.satisfies(3).to_string(), "110");
```

- The empty clause is satisfied on every row.
- The satisfaction vector of a clause is not cached, and is recomputed from the vectors of its literals on each call to [satisfies](Clause::satisfies).
  Clauses are typically small, and the [formula](crate::structures::formula) avoids needing the vector of each clause other than on an edit of the clause.
*/

use std::sync::Arc;

use crate::{
    catalog::LiteralCatalog,
    config::Config,
    data::Value,
    generic::bits::Bits,
    structures::literal::Literal,
    types::err::{self},
};

/// The result of a successful edit of the literals of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralOk {
    /// The literal was added.
    Added,

    /// The literal was removed.
    Removed,

    /// The edit was ignored, as the last literal of a clause may not be removed.
    Skipped,
}

#[derive(Clone, Debug)]
pub struct Clause {
    literals: Vec<Arc<Literal>>,

    /// Whether removal of the last literal is ignored.
    forbid_empty: bool,
}

impl Clause {
    /// An empty clause.
    pub fn new(forbid_empty: bool) -> Self {
        Clause {
            literals: Vec::default(),
            forbid_empty,
        }
    }

    /// An empty clause, configured by `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.forbid_empty_clauses.value)
    }

    /// A clause of the given literals, each of which must be a member of `catalog`.
    pub fn from_literals(
        catalog: &LiteralCatalog,
        literals: impl IntoIterator<Item = Arc<Literal>>,
        config: &Config,
    ) -> Result<Self, err::ErrorKind> {
        let mut clause = Self::from_config(config);
        for literal in literals {
            clause.add_literal(catalog, literal)?;
        }
        Ok(clause)
    }

    /// Appends `literal` to the clause.
    pub fn add_literal(
        &mut self,
        catalog: &LiteralCatalog,
        literal: Arc<Literal>,
    ) -> Result<LiteralOk, err::ErrorKind> {
        catalog.check(&literal)?;
        self.literals.push(literal);
        Ok(LiteralOk::Added)
    }

    /// Removes the first literal with the same catalog index as `literal`.
    ///
    /// If the clause may not be empty and `literal` is the last literal of the clause, the clause is unchanged.
    pub fn remove_literal(&mut self, literal: &Literal) -> Result<LiteralOk, err::ErrorKind> {
        let position = self
            .position_of(literal)
            .ok_or(err::FormulaError::NotAChild)?;

        if self.forbid_empty && self.literals.len() == 1 {
            return Ok(LiteralOk::Skipped);
        }

        self.literals.remove(position);
        Ok(LiteralOk::Removed)
    }

    /// The position of the first literal with the same catalog index as `literal`, if one exists.
    pub fn position_of(&self, literal: &Literal) -> Option<usize> {
        self.literals
            .iter()
            .position(|member| member.index() == literal.index() && member.catalog() == literal.catalog())
    }

    /// Checks each literal of the clause is a member of `catalog`.
    pub fn check(&self, catalog: &LiteralCatalog) -> Result<(), err::FormulaError> {
        self.literals.iter().try_for_each(|literal| catalog.check(literal))
    }

    /// Appends `literal` without a check on membership of a catalog.
    pub(crate) fn push_unchecked(&mut self, literal: Arc<Literal>) {
        self.literals.push(literal);
    }

    /// Removes the literal at `position`, ignoring whether the clause may be empty.
    pub(crate) fn remove_at(&mut self, position: usize) -> Arc<Literal> {
        self.literals.remove(position)
    }

    pub(crate) fn set_forbid_empty(&mut self, forbid_empty: bool) {
        self.forbid_empty = forbid_empty;
    }

    /// Replaces each literal with the literal at the same index of `catalog`.
    pub(crate) fn rebind(&mut self, catalog: &LiteralCatalog) -> Result<(), err::FormulaError> {
        for literal in self.literals.iter_mut() {
            match catalog.get(literal.index()) {
                Some(fresh) if fresh.same_definition(literal) => *literal = fresh.clone(),
                _ => return Err(err::FormulaError::InvalidLiteral),
            }
        }
        Ok(())
    }
}

impl Clause {
    /// The rows on which every literal of the clause is satisfied, out of `rows` rows.
    pub fn satisfies(&self, rows: usize) -> Bits {
        let mut bits = Bits::ones(rows);
        for literal in &self.literals {
            bits.and_assign(literal.satisfies());
        }
        bits
    }

    /// Whether the row satisfies every literal of the clause.
    pub fn test(&self, row: &[Value]) -> bool {
        self.literals.iter().all(|literal| literal.test(row))
    }

    /// The literals of the clause, in order.
    pub fn literals(&self) -> &[Arc<Literal>] {
        &self.literals
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn forbids_empty(&self) -> bool {
        self.forbid_empty
    }

    /// The clause, with features named from the dataset of `catalog`.
    pub fn as_string_with(&self, catalog: &LiteralCatalog) -> String {
        match self.literals.is_empty() {
            true => "true".to_string(),
            false => self
                .literals
                .iter()
                .map(|literal| catalog.literal_string(literal))
                .collect::<Vec<_>>()
                .join(" & "),
        }
    }
}

/// Clauses are equal when of the same size and equal literals are at each position.
impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.literals.len() == other.literals.len()
            && self.literals.iter().zip(&other.literals).all(|(a, b)| a == b)
    }
}

impl Eq for Clause {}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.literals.is_empty() {
            true => write!(f, "true"),
            false => {
                let strings = self.literals.iter().map(|literal| literal.to_string()).collect::<Vec<_>>();
                write!(f, "{}", strings.join(" & "))
            }
        }
    }
}
