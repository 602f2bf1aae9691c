//! A library for formulas in disjunctive normal form, used as genotypes when searching for a formula which fits a labelled dataset.
//!
//! A dataset is a table of small discrete feature values, with a boolean label for each row.
//! A search for a formula which fits the dataset proceeds by small edits to some formula, and after each edit reads how many rows the formula *explains* --- that is, on how many rows the formula agrees with the label.
//!
//! The library is built around a handful of structures:
//! - A [dataset](crate::data::Dataset), built once and shared read-only.
//! - A [catalog](crate::catalog::LiteralCatalog) of every admissible literal of a dataset, each evaluated against every row once.
//! - [Clauses](crate::structures::clause::Clause), conjunctions of literals from a catalog.
//! - [Formulas](crate::structures::formula::Formula), disjunctions of clauses, which keep a count of the clauses satisfied on each row.
//!
//! The counts kept by a formula are updated on each edit, and so the number of rows explained by a formula is available in constant time.
//!
//! # Examples
//!
//! + A simple hill climb over edits to a formula.
//!
//! ```rust
//! # use std::sync::Arc;
//! # use rand::{rngs::StdRng, SeedableRng};
//! # use dnf_fit::catalog::LiteralCatalog;
//! # use dnf_fit::config::Config;
//! # use dnf_fit::data::Dataset;
//! # use dnf_fit::structures::clause::Clause;
//! # use dnf_fit::structures::formula::{ClauseOk, Formula};
//! let dataset = Dataset::new(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]],
//!     vec![false, true, true, false],
//! )
//! .unwrap();
//!
//! let config = Config::default();
//! let catalog = Arc::new(LiteralCatalog::build(Arc::new(dataset), config.catalog_mode.value));
//! let mut rng = StdRng::seed_from_u64(config.seed.value);
//!
//! let mut formula = Formula::new(catalog.clone(), &config);
//!
//! let initial = formula.evaluate();
//!
//! for _ in 0..100 {
//!     let mut candidate = formula.clone();
//!     let literal = candidate.pick_random_catalog_literal(&mut rng).unwrap();
//!
//!     match candidate.pick_random_clause(&mut rng) {
//!         Some(key) if candidate.literal_count_of(key) == Some(1) => {
//!             assert!(candidate.insert_literal(key, literal).is_ok());
//!         }
//!
//!         _ => {
//!             let clause = Clause::from_literals(&catalog, [literal], &config).unwrap();
//!             assert!(matches!(candidate.insert_clause(clause), Ok(ClauseOk::Added(_))));
//!         }
//!     }
//!
//!     if candidate.evaluate() >= formula.evaluate() {
//!         formula = candidate;
//!     }
//! }
//!
//! assert!(formula.evaluate() >= initial);
//! assert!(formula.is_consistent());
//! ```
//!
//! # Logging
//!
//! Logs are made through the [log](https://docs.rs/log/latest/log/) crate, with targets listed in [misc::log::targets].
//! Edits to a formula are logged at the trace level, and edits which are skipped at the debug level.

pub mod catalog;
pub mod config;
pub mod data;
pub mod generic;
pub mod misc;
pub mod structures;
pub mod types;
