use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use dnf_fit::config::{defaults, CatalogMode, Config};

use crate::config_io::ConfigIO;

pub fn cli() -> Command {
    Command::new("dnf_fit")
        .about("Builds a formula in disjunctive normal form over a labelled dataset and reports the rows the formula explains")

        .arg(Arg::new("dataset")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The dataset to read, as a header of feature names followed by rows of values and a label."))

        .arg(Arg::new("test")
            .long("test")
            .short('t')
            .value_name("DATASET")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("A held-out dataset with the same features, against which the formula is also evaluated."))

        .arg(Arg::new("mode")
            .long("mode")
            .short('m')
            .value_parser(["standard", "exhaustive", "inequality", "equality"])
            .required(false)
            .num_args(1)
            .help(format!("Which literals to generate for the catalog.
Default: {}

standard:   = and != for each value, and <= or >= where not redundant at the boundaries of a range.
exhaustive: Each of <, =, >, !=, <=, >= for each value.
inequality: = and != for each value.
equality:   = for each value.", defaults::CATALOG_MODE)))

        .arg(Arg::new("label")
            .long("label")
            .short('l')
            .value_name("COLUMN")
            .required(false)
            .num_args(1)
            .help("The name of the label column.
Default: The last column."))

        .arg(Arg::new("formula")
            .long("formula")
            .short('f')
            .value_name("TEXT")
            .required(false)
            .num_args(1)
            .conflicts_with("random")
            .help("A formula to evaluate, e.g. '(age <= 3 & x2 = 1) | x0 != 0'."))

        .arg(Arg::new("random")
            .long("random")
            .short('r')
            .value_name("N")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Evaluate a formula of N clauses, each of a single literal chosen at random from the catalog."))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The seed for random choices.
Default: {}", defaults::RNG_SEED)))

        .arg(Arg::new("allow_empty_clauses")
            .long("allow-empty-clauses")
            .action(ArgAction::SetTrue)
            .help("Allow clauses to become empty, in which case the clause is true on every row."))

        .arg(Arg::new("forbid_empty_formula")
            .long("forbid-empty-formula")
            .action(ArgAction::SetTrue)
            .help("Forbid removal of the last clause of a formula."))
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(mode)) = args.try_get_one::<String>("mode") {
        if let Ok(mode) = mode.parse::<CatalogMode>() {
            the_config.catalog_mode.set(mode);
        }
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.seed.value = *seed
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("allow_empty_clauses") {
        the_config.forbid_empty_clauses.value = false
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("forbid_empty_formula") {
        the_config.forbid_empty_formula.value = true
    };

    the_config
}

pub fn config_io_from_args(args: &ArgMatches) -> ConfigIO {
    let mut config_io = ConfigIO::default();

    if let Ok(Some(path)) = args.try_get_one::<PathBuf>("dataset") {
        config_io.dataset = path.clone()
    };

    if let Ok(Some(path)) = args.try_get_one::<PathBuf>("test") {
        config_io.test = Some(path.clone())
    };

    if let Ok(Some(column)) = args.try_get_one::<String>("label") {
        config_io.read.label_column = Some(column.clone())
    };

    if let Ok(Some(text)) = args.try_get_one::<String>("formula") {
        config_io.formula = Some(text.clone())
    };

    if let Ok(Some(count)) = args.try_get_one::<usize>("random") {
        config_io.random = *count
    };

    config_io
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_to_config() {
        let matches = cli()
            .try_get_matches_from(["dnf_fit", "data.txt", "--mode", "equality", "--seed", "7", "--allow-empty-clauses"])
            .unwrap();

        let config = config_from_args(&matches);
        assert_eq!(config.catalog_mode.value, CatalogMode::Equality);
        assert_eq!(config.seed.value, 7);
        assert!(!config.forbid_empty_clauses.value);
        assert!(!config.forbid_empty_formula.value);

        let config_io = config_io_from_args(&matches);
        assert_eq!(config_io.dataset, PathBuf::from("data.txt"));
        assert!(config_io.test.is_none());
        assert_eq!(config_io.random, 0);
    }

    #[test]
    fn formula_or_random() {
        assert!(cli()
            .try_get_matches_from(["dnf_fit", "data.txt", "--formula", "a = 1", "--random", "3"])
            .is_err());
    }
}
