//! Reading a formula from text.
//!
//! The text of a formula is the text of its clauses separated by `|`, and the text of a clause is the text of its literals separated by `&`, optionally within parentheses.
//! A literal is a feature, a relation, and a constant, e.g. `age <= 3` or `x0 != 1`, where `x<i>` names the feature at index *i*.
//! The words `false` and `true` stand for the empty formula and the empty clause, respectively.
//!
//! And so the [display](std::fmt::Display) of a formula reads as the same formula.

use std::sync::Arc;

use crate::{
    catalog::LiteralCatalog,
    config::Config,
    data::{Dataset, Value},
    structures::{clause::Clause, literal::Literal, relation::Relation},
    types::err::{self},
};

use super::Formula;

const OPERATOR_CHARS: [char; 7] = ['<', '>', '=', '!', '≠', '≤', '≥'];

impl Formula {
    /// Reads a formula from `text`, over the literals of `catalog`.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use dnf_fit::catalog::LiteralCatalog;
    /// # use dnf_fit::config::{CatalogMode, Config};
    /// # use dnf_fit::data::Dataset;
    /// # use dnf_fit::structures::formula::Formula;
    /// let dataset = Dataset::new(
    ///     vec!["a".to_string(), "b".to_string()],
    ///     vec![vec![0, 1], vec![1, 1], vec![2, 0]],
    ///     vec![false, true, true],
    /// )
    /// .unwrap();
    /// let catalog = Arc::new(LiteralCatalog::build(Arc::new(dataset), CatalogMode::Exhaustive));
    ///
    /// let formula = Formula::parse("(a >= 1 & b = 1) | x0 = 2", catalog, &Config::default()).unwrap();
    /// assert_eq!(formula.evaluate(), 3);
    /// assert_eq!(formula.to_string(), "(a >= 1 & b = 1) | a = 2");
    /// ```
    pub fn parse(text: &str, catalog: Arc<LiteralCatalog>, config: &Config) -> Result<Self, err::ErrorKind> {
        let text = text.trim();
        if text.is_empty() {
            return Err(err::ParseError::Empty.into());
        }

        let mut formula = Formula::new(catalog.clone(), config);
        if text == "false" {
            return Ok(formula);
        }

        for clause_text in text.split('|') {
            let clause = parse_clause(clause_text, &catalog, config)?;
            formula.insert_clause(clause)?;
        }

        Ok(formula)
    }
}

fn parse_clause(text: &str, catalog: &LiteralCatalog, config: &Config) -> Result<Clause, err::ErrorKind> {
    let mut text = text.trim();
    if let Some(inner) = text.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        text = inner.trim();
    }

    if text == "true" {
        return Ok(Clause::from_config(config));
    }

    let mut literals = Vec::default();
    for literal_text in text.split('&') {
        literals.push(parse_literal(literal_text, catalog)?);
    }

    Clause::from_literals(catalog, literals, config)
}

fn parse_literal(text: &str, catalog: &LiteralCatalog) -> Result<Arc<Literal>, err::ErrorKind> {
    let text = text.trim();
    let invalid = || err::ErrorKind::from(err::ParseError::Literal(text.to_string()));

    let Some(start) = text.find(OPERATOR_CHARS) else {
        return Err(invalid());
    };
    let after = &text[start..];
    let end = after
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(after.len());

    let feature = feature_index(text[..start].trim(), catalog.dataset()).ok_or_else(invalid)?;
    let relation = after[..end].parse::<Relation>().map_err(|_| invalid())?;
    let constant = after[end..].trim().parse::<Value>().map_err(|_| invalid())?;

    match catalog.find(feature, relation, constant) {
        Some(literal) => Ok(literal.clone()),
        None => Err(err::CatalogError::NoSuchLiteral(text.to_string()).into()),
    }
}

/// The index of the feature named `name`, either by the name of the feature in `dataset` or as `x<index>`.
fn feature_index(name: &str, dataset: &Dataset) -> Option<usize> {
    if let Some(index) = dataset.feature_index(name) {
        return Some(index);
    }

    let index = name.strip_prefix('x')?.parse::<usize>().ok()?;
    match index < dataset.feature_count() {
        true => Some(index),
        false => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CatalogMode;

    use super::*;

    fn catalog() -> Arc<LiteralCatalog> {
        let dataset = Dataset::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![0, 1], vec![1, 1], vec![2, 0], vec![3, 0]],
            vec![false, true, true, false],
        )
        .unwrap();
        Arc::new(LiteralCatalog::build(Arc::new(dataset), CatalogMode::Standard))
    }

    #[test]
    fn names_and_indices() {
        let catalog = catalog();
        let config = Config::default();

        let by_name = Formula::parse("a = 1 | a = 2", catalog.clone(), &config).unwrap();
        let by_index = Formula::parse("x0=1|x0 = 2", catalog.clone(), &config).unwrap();
        assert_eq!(by_name, by_index);
        assert_eq!(by_name.evaluate(), 4);
    }

    #[test]
    fn display_reads_back() {
        let catalog = catalog();
        let config = Config::default();

        let formula = Formula::parse("(a != 0 & b = 1) | a = 3", catalog.clone(), &config).unwrap();
        let again = Formula::parse(&formula.to_string(), catalog, &config).unwrap();
        assert_eq!(formula, again);
        assert_eq!(formula.tracker(), again.tracker());
    }

    #[test]
    fn constants() {
        let catalog = catalog();
        let config = Config::default();

        let empty = Formula::parse("false", catalog.clone(), &config).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.evaluate(), 2);

        let mut permissive = Config::default();
        permissive.forbid_empty_clauses.value = false;
        let always = Formula::parse("true", catalog.clone(), &permissive).unwrap();
        assert_eq!(always.clause_count(), 1);
        assert_eq!(always.evaluate(), 2);
        assert_eq!(always.evaluate_positive(), 2);

        // An empty clause is skipped when forbidden.
        let skipped = Formula::parse("true", catalog, &config).unwrap();
        assert!(skipped.is_empty());
    }

    #[test]
    fn errors() {
        let catalog = catalog();
        let config = Config::default();

        assert_eq!(
            Formula::parse("  ", catalog.clone(), &config),
            Err(err::ErrorKind::Parse(err::ParseError::Empty))
        );
        assert_eq!(
            Formula::parse("a", catalog.clone(), &config),
            Err(err::ErrorKind::Parse(err::ParseError::Literal("a".to_string())))
        );
        assert_eq!(
            Formula::parse("c = 1", catalog.clone(), &config),
            Err(err::ErrorKind::Parse(err::ParseError::Literal("c = 1".to_string())))
        );
        assert_eq!(
            Formula::parse("x2 = 1", catalog.clone(), &config),
            Err(err::ErrorKind::Parse(err::ParseError::Literal("x2 = 1".to_string())))
        );
        // Standard catalogs have no strict comparisons.
        assert_eq!(
            Formula::parse("a < 2", catalog, &config),
            Err(err::ErrorKind::Catalog(err::CatalogError::NoSuchLiteral("a < 2".to_string())))
        );
    }
}
