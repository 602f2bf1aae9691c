use std::path::PathBuf;

use dnf_fit::config::ReadConfig;

/// Configuration of the binary, as distinct from the configuration of the library.
#[derive(Clone, Debug, Default)]
pub struct ConfigIO {
    pub dataset: PathBuf,
    pub test: Option<PathBuf>,
    pub read: ReadConfig,

    /// Text of a formula to evaluate.
    pub formula: Option<String>,

    /// A count of random single-literal clauses, used if no formula is given.
    pub random: usize,
}
