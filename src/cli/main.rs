#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};

use dnf_fit::{
    catalog::LiteralCatalog,
    config::Config,
    structures::{clause::Clause, formula::Formula},
    types::err::{self},
};

mod config_io;
mod parse;
mod read;

use config_io::ConfigIO;
use read::load_dataset;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let config = parse::config_from_args(&matches);
    let config_io = parse::config_io_from_args(&matches);

    let dataset = match load_dataset(&config_io.dataset, &config_io.read) {
        Ok(dataset) => dataset,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let catalog = Arc::new(LiteralCatalog::build(dataset, config.catalog_mode.value));
    println!("c Catalog ({}): {} literals", catalog.mode(), catalog.len());

    let mut formula = match build_formula(catalog.clone(), &config, &config_io) {
        Ok(formula) => formula,
        Err(e) => {
            println!("c Formula error: {e}");
            std::process::exit(1);
        }
    };

    println!("s {formula}");
    report(&formula);

    if let Some(path) = &config_io.test {
        let test = match load_dataset(path, &config_io.read) {
            Ok(dataset) => dataset,
            Err(e) => {
                println!("c {e}");
                std::process::exit(1);
            }
        };

        let refreshed = catalog.refresh(test).and_then(|test_catalog| formula.refresh(Arc::new(test_catalog)));
        if let Err(e) = refreshed {
            println!("c Refresh error: {e}");
            std::process::exit(1);
        }

        report(&formula);
    }
}

/// The formula read from the arguments, or a formula of random single-literal clauses.
fn build_formula(
    catalog: Arc<LiteralCatalog>,
    config: &Config,
    config_io: &ConfigIO,
) -> Result<Formula, err::ErrorKind> {
    if let Some(text) = &config_io.formula {
        return Formula::parse(text, catalog, config);
    }

    let mut rng = StdRng::seed_from_u64(config.seed.value);
    let mut formula = Formula::new(catalog.clone(), config);
    for _ in 0..config_io.random {
        if let Some(literal) = formula.pick_random_catalog_literal(&mut rng) {
            formula.insert_clause(Clause::from_literals(&catalog, [literal], config)?)?;
        }
    }
    Ok(formula)
}

fn report(formula: &Formula) {
    let dataset = formula.dataset();
    println!("c Evaluated against {}", dataset.id());
    println!("v Explained: {} of {}", formula.evaluate(), dataset.rows());
    println!("v Positive:  {} of {}", formula.evaluate_positive(), dataset.positive_count());
    println!("v Negative:  {} of {}", formula.evaluate_negative(), dataset.negative_count());
}
