/*!
Configuration of formulas and catalogs.

All configuration is contained within [Config].
Some structures copy parts of the configuration, e.g. each [clause](crate::structures::clause::Clause) copies whether it may become empty, as a clause may be edited outside of any formula.

Reading a dataset is configured separately, through [ReadConfig].
*/

mod config_option;
pub use config_option::ConfigOption;

mod catalog_mode;
pub use catalog_mode::CatalogMode;

pub mod defaults;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which literals to generate when building a catalog.
    pub catalog_mode: ConfigOption<CatalogMode>,

    /// Ignore insertion of an empty clause, and removal of the last literal of a clause.
    pub forbid_empty_clauses: ConfigOption<bool>,

    /// Ignore removal of the last clause of a formula.
    pub forbid_empty_formula: ConfigOption<bool>,

    /// The seed for any source of randomness created from the configuration.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_mode: ConfigOption {
                name: "catalog_mode",
                min: CatalogMode::MIN,
                max: CatalogMode::MAX,
                value: defaults::CATALOG_MODE,
            },

            forbid_empty_clauses: ConfigOption {
                name: "forbid_empty_clauses",
                min: false,
                max: true,
                value: defaults::FORBID_EMPTY_CLAUSES,
            },

            forbid_empty_formula: ConfigOption {
                name: "forbid_empty_formula",
                min: false,
                max: true,
                value: defaults::FORBID_EMPTY_FORMULA,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: defaults::RNG_SEED,
            },
        }
    }
}

/// Configuration for reading a dataset.
#[derive(Clone, Debug, Default)]
pub struct ReadConfig {
    /// The name of the label column, or the last column if `None`.
    pub label_column: Option<String>,
}
