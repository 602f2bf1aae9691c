use std::sync::Arc;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use dnf_fit::{
    catalog::LiteralCatalog,
    config::{CatalogMode, Config},
    data::Dataset,
    structures::{
        clause::Clause,
        formula::{ClauseOk, Formula},
    },
};

fn random_dataset(rng: &mut StdRng, rows: usize, features: usize) -> Dataset {
    let names = (0..features).map(|feature| format!("f{feature}")).collect();
    let rows = (0..rows)
        .map(|_| (0..features).map(|_| rng.gen_range(0..5)).collect())
        .collect::<Vec<Vec<_>>>();
    let labels = (0..rows.len()).map(|_| rng.gen_bool(0.4)).collect();
    Dataset::new(names, rows, labels).unwrap()
}

/// Counts from a direct evaluation of each clause on each row.
fn brute_force(formula: &Formula) -> (Vec<u32>, usize, usize) {
    let dataset = formula.dataset();
    let mut counts = Vec::default();
    let mut matches = 0;
    let mut positive_matches = 0;

    for (index, row) in dataset.iter_rows().enumerate() {
        let count = formula
            .clauses()
            .filter(|clause| {
                clause
                    .literals()
                    .iter()
                    .all(|literal| literal.relation().test(row[literal.feature()], literal.constant()))
            })
            .count() as u32;
        counts.push(count);

        if (count > 0) == dataset.label(index) {
            matches += 1;
            if dataset.label(index) {
                positive_matches += 1;
            }
        }
    }

    (counts, matches, positive_matches)
}

fn assert_counts(formula: &Formula) {
    let (counts, matches, positive_matches) = brute_force(formula);
    assert_eq!(formula.tracker().counts(), counts.as_slice());
    assert_eq!(formula.evaluate(), matches);
    assert_eq!(formula.evaluate_positive(), positive_matches);
    assert_eq!(formula.evaluate_negative(), matches - positive_matches);
    assert!(formula.is_consistent());
}

fn random_edits(seed: u64, mode: CatalogMode, config: &Config, edits: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let dataset = random_dataset(&mut rng, 48, 3);
    let catalog = Arc::new(LiteralCatalog::build(Arc::new(dataset), mode));
    let mut formula = Formula::new(catalog.clone(), config);

    assert_counts(&formula);

    for _ in 0..edits {
        match rng.gen_range(0..4) {
            0 => {
                let size = rng.gen_range(0..4);
                let literals = (0..size).filter_map(|_| formula.pick_random_catalog_literal(&mut rng));
                let clause = Clause::from_literals(&catalog, literals.collect::<Vec<_>>(), config).unwrap();
                assert!(formula.insert_clause(clause).is_ok());
            }

            1 => {
                if let Some(key) = formula.pick_random_clause(&mut rng) {
                    assert!(formula.remove_clause(key).is_ok());
                }
            }

            2 => {
                if let Some(key) = formula.pick_random_clause(&mut rng) {
                    let literal = formula.pick_random_catalog_literal(&mut rng).unwrap();
                    assert!(formula.insert_literal(key, literal).is_ok());
                }
            }

            _ => {
                if let Some(key) = formula.pick_random_clause(&mut rng) {
                    if let Some(literal) = formula.pick_random_literal_of(key, &mut rng) {
                        assert!(formula.remove_literal(key, &literal).is_ok());
                    }
                }
            }
        }

        assert_counts(&formula);

        if config.forbid_empty_clauses.value {
            assert!(formula.clauses().all(|clause| !clause.is_empty()));
        }
    }
}

#[test]
fn random_edits_standard() {
    random_edits(0, CatalogMode::Standard, &Config::default(), 600);
}

#[test]
fn random_edits_exhaustive_with_empty_clauses() {
    let mut config = Config::default();
    config.forbid_empty_clauses.value = false;
    random_edits(1, CatalogMode::Exhaustive, &config, 600);
}

#[test]
fn random_edits_nonempty_formula() {
    let mut config = Config::default();
    config.forbid_empty_formula.value = true;
    for seed in 2..6 {
        random_edits(seed, CatalogMode::Inequality, &config, 200);
    }
}

#[test]
fn insertion_and_removal_are_inverse() {
    let mut rng = StdRng::seed_from_u64(7);
    let dataset = random_dataset(&mut rng, 32, 4);
    let config = Config::default();
    let catalog = Arc::new(LiteralCatalog::build(Arc::new(dataset), CatalogMode::Standard));
    let mut formula = Formula::new(catalog.clone(), &config);

    for _ in 0..5 {
        let literal = formula.pick_random_catalog_literal(&mut rng).unwrap();
        let clause = Clause::from_literals(&catalog, [literal], &config).unwrap();
        assert!(formula.insert_clause(clause).is_ok());
    }

    for _ in 0..50 {
        let before = formula.tracker().clone();

        let literals = catalog.iter().cloned().collect::<Vec<_>>();
        let chosen = literals.choose_multiple(&mut rng, 2).cloned();
        let clause = Clause::from_literals(&catalog, chosen, &config).unwrap();

        let Ok(ClauseOk::Added(key)) = formula.insert_clause(clause.clone()) else {
            panic!("Failed to insert the clause");
        };
        let Ok(ClauseOk::Removed(removed)) = formula.remove_clause(key) else {
            panic!("Failed to remove the clause");
        };

        assert_eq!(removed, clause);
        assert_eq!(formula.tracker(), &before);

        let key = formula.pick_random_clause(&mut rng).unwrap();
        let literal = formula.pick_random_catalog_literal(&mut rng).unwrap();
        assert!(formula.insert_literal(key, literal.clone()).is_ok());
        assert!(formula.remove_literal(key, &literal).is_ok());
        assert_eq!(formula.tracker(), &before);
    }
}

#[test]
fn rebuild_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);
    let dataset = random_dataset(&mut rng, 40, 3);
    let config = Config::default();
    let catalog = Arc::new(LiteralCatalog::build(Arc::new(dataset), CatalogMode::Exhaustive));
    let mut formula = Formula::new(catalog.clone(), &config);

    for _ in 0..8 {
        let literals = (0..2).filter_map(|_| formula.pick_random_catalog_literal(&mut rng)).collect::<Vec<_>>();
        let clause = Clause::from_literals(&catalog, literals, &config).unwrap();
        assert!(formula.insert_clause(clause).is_ok());
    }

    let incremental = formula.tracker().clone();
    formula.rebuild();
    assert_eq!(formula.tracker(), &incremental);
    formula.rebuild();
    assert_eq!(formula.tracker(), &incremental);
}

#[test]
fn clones_evolve_independently() {
    let mut rng = StdRng::seed_from_u64(13);
    let dataset = random_dataset(&mut rng, 24, 2);
    let config = Config::default();
    let catalog = Arc::new(LiteralCatalog::build(Arc::new(dataset), CatalogMode::Standard));

    let mut formula = Formula::new(catalog.clone(), &config);
    for _ in 0..3 {
        let literal = formula.pick_random_catalog_literal(&mut rng).unwrap();
        let clause = Clause::from_literals(&catalog, [literal], &config).unwrap();
        assert!(formula.insert_clause(clause).is_ok());
    }

    let original = formula.tracker().clone();
    let mut clone = formula.clone();
    assert_eq!(clone, formula);

    while let Some(key) = clone.pick_random_clause(&mut rng) {
        assert!(clone.remove_clause(key).is_ok());
    }

    assert!(clone.is_empty());
    assert_eq!(clone.evaluate(), catalog.dataset().negative_count());
    assert_eq!(formula.tracker(), &original);
    assert_eq!(formula.clause_count(), 3);
    assert_counts(&formula);
}
