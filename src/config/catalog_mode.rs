use std::str::FromStr;

/// Variant strategies for generating the literals of a [catalog](crate::catalog).
///
/// Modes differ in whether `<=` and `>=` comparisons are generated at all, and whether comparisons which are redundant on the range of a feature are excluded.
/// The cached satisfaction vector of each literal is the same in every mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CatalogMode {
    /// `=` and `!=` for each value, and `<=`, `>=` for those values where the comparison is not equivalent to some equality, inequality, or tautology.
    Standard = 0,

    /// Each of `<`, `=`, `>`, `!=`, `<=`, `>=` for each value, without exclusion.
    Exhaustive,

    /// `=` and `!=` for each value.
    Inequality,

    /// `=` for each value.
    Equality,
}

impl std::fmt::Display for CatalogMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Exhaustive => write!(f, "exhaustive"),
            Self::Inequality => write!(f, "inequality"),
            Self::Equality => write!(f, "equality"),
        }
    }
}

impl CatalogMode {
    /// The minimum CatalogMode.
    pub const MIN: CatalogMode = CatalogMode::Standard;

    /// The maximum CatalogMode.
    pub const MAX: CatalogMode = CatalogMode::Equality;
}

impl FromStr for CatalogMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),

            "exhaustive" => Ok(Self::Exhaustive),

            "inequality" => Ok(Self::Inequality),

            "equality" => Ok(Self::Equality),

            _unkown_string => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_from_str() {
        for mode in [
            CatalogMode::Standard,
            CatalogMode::Exhaustive,
            CatalogMode::Inequality,
            CatalogMode::Equality,
        ] {
            assert_eq!(mode.to_string().parse::<CatalogMode>(), Ok(mode));
        }
        assert_eq!("EQUALITY".parse::<CatalogMode>(), Ok(CatalogMode::Equality));
        assert!("binary".parse::<CatalogMode>().is_err());
    }
}
