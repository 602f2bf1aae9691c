//! Key structures, from literals up to formulas.
//!
//! - A [relation] is a comparison between a value and a constant.
//! - A [literal] is a feature, relation, and constant, together with the rows of a dataset on which the literal holds.
//! - A [clause] is a conjunction of literals.
//! - A [formula] is a disjunction of clauses, and keeps a count of the rows the formula explains.
//!
//! A [node] is a view of any of a literal, clause, or formula.

pub mod clause;
pub mod formula;
pub mod literal;
pub mod node;
pub mod relation;
