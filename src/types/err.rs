//! Error types used in the library.
//!
//! - Structural edits of a formula are rejected *before* any coverage count is touched, so an error never leaves a formula in a partial state.
//! - Removing the last literal of a clause (or the last clause of a formula) when forbidden is *not* an error.
//!   Such edits are skipped, and this is reported through the `Skipped` variants of [LiteralOk](crate::structures::clause::LiteralOk) and [ClauseOk](crate::structures::formula::ClauseOk).
//! - Parse errors from reading a dataset are returned to the caller, never logged and passed over.
//!
//! Names of the error enums overlap with the areas of the library they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The error type returned by the library, wrapping the error of some particular area.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Catalog(CatalogError),
    Dataset(DatasetError),
    Formula(FormulaError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "catalog error: {e}"),
            Self::Dataset(e) => write!(f, "dataset error: {e}"),
            Self::Formula(e) => write!(f, "formula error: {e}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors from structural edits of a formula or clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// The literal is not a member of the active catalog.
    InvalidLiteral,

    /// The clause or literal to remove is not a child of the formula or clause.
    NotAChild,

    /// The literal (or some literal of a clause) was evaluated against a different dataset than the formula's counts.
    DatasetMismatch,
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLiteral => write!(f, "the literal is not a member of the active catalog"),
            Self::NotAChild => write!(f, "not a child of the structure"),
            Self::DatasetMismatch => write!(f, "evaluated against a different dataset"),
        }
    }
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Errors in building or refreshing a literal catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogError {
    /// A dataset with a different number of features than the catalog definition.
    FeatureMismatch { expected: usize, found: usize },

    /// An attempt to swap in a catalog built from a different definition.
    DefinitionMismatch,

    /// No literal of the catalog matches some description, e.g. when parsing a formula.
    NoSuchLiteral(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FeatureMismatch { expected, found } => {
                write!(f, "expected {expected} features, found {found}")
            }
            Self::DefinitionMismatch => write!(f, "the catalogs have different definitions"),
            Self::NoSuchLiteral(literal) => write!(f, "no literal '{literal}' in the catalog"),
        }
    }
}

impl From<CatalogError> for ErrorKind {
    fn from(e: CatalogError) -> Self {
        ErrorKind::Catalog(e)
    }
}

/// Violations of the shape of a dataset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DatasetError {
    /// A row without exactly one value per feature.
    RowWidth { row: usize, expected: usize, found: usize },

    /// A count of labels which differs from the count of rows.
    LabelCount { rows: usize, labels: usize },

    /// A value outside of the range declared for the feature.
    OutOfRange { row: usize, feature: usize },

    /// A count of ranges which differs from the count of features.
    RangeCount { features: usize, ranges: usize },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowWidth { row, expected, found } => {
                write!(f, "row {row} has {found} values, expected {expected}")
            }
            Self::LabelCount { rows, labels } => write!(f, "{labels} labels for {rows} rows"),
            Self::OutOfRange { row, feature } => {
                write!(f, "the value of feature {feature} in row {row} is out of range")
            }
            Self::RangeCount { features, ranges } => {
                write!(f, "{ranges} ranges for {features} features")
            }
        }
    }
}

impl From<DatasetError> for ErrorKind {
    fn from(e: DatasetError) -> Self {
        ErrorKind::Dataset(e)
    }
}

/// Errors during parsing, of a dataset or a formula.
///
/// Lines are counted from one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some failure to read the given line.
    Io { line: usize },

    /// No header was found.
    NoHeader,

    /// The header has no columns aside from the label.
    NoFeatures,

    /// The requested label column is not in the header.
    NoLabelColumn(String),

    /// A row with a different number of fields than the header.
    FieldCount { line: usize, expected: usize, found: usize },

    /// A feature value which is not a (small) integer.
    Value { line: usize, column: usize },

    /// A label which is not boolean-like and not an integer.
    Label { line: usize },

    /// A literal in a formula string which could not be read.
    Literal(String),

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { line } => write!(f, "failed to read line {line}"),
            Self::NoHeader => write!(f, "no header"),
            Self::NoFeatures => write!(f, "no feature columns"),
            Self::NoLabelColumn(name) => write!(f, "no label column '{name}'"),
            Self::FieldCount { line, expected, found } => {
                write!(f, "line {line} has {found} fields, expected {expected}")
            }
            Self::Value { line, column } => write!(f, "invalid value at line {line}, column {column}"),
            Self::Label { line } => write!(f, "invalid label at line {line}"),
            Self::Literal(literal) => write!(f, "invalid literal '{literal}'"),
            Self::Empty => write!(f, "empty input"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
