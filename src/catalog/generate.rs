//! The (feature, relation, constant) definitions of a catalog, for each [mode](CatalogMode).

use crate::{
    config::CatalogMode,
    data::{Feature, Value},
    structures::relation::Relation,
};

/// The relations to generate for `value` in the range of `feature`, in order.
///
/// In the standard mode `<= v` and `>= v` are generated only where the comparison differs from some `=`, `!=`, or tautology on the range [min, max].
/// That is:
/// - `<= min` is `= min`, `<= max - 1` is `!= max`, and `<= max` always holds.
/// - `>= max` is `= max`, `>= min + 1` is `!= min`, and `>= min` always holds.
fn relations(mode: CatalogMode, feature: &Feature, value: Value) -> Vec<Relation> {
    let (min, max, v) = (feature.min as i32, feature.max as i32, value as i32);

    match mode {
        CatalogMode::Standard => {
            let mut relations = vec![Relation::EQ, Relation::NE];
            if min < v && v < max - 1 {
                relations.push(Relation::LE);
            }
            if min + 1 < v && v < max {
                relations.push(Relation::GE);
            }
            relations
        }

        CatalogMode::Exhaustive => Relation::ALL.to_vec(),

        CatalogMode::Inequality => vec![Relation::EQ, Relation::NE],

        CatalogMode::Equality => vec![Relation::EQ],
    }
}

/// Each definition for the given features, ordered by feature, then value, then relation.
pub(super) fn definitions(
    mode: CatalogMode,
    features: &[Feature],
) -> Vec<(usize, Relation, Value)> {
    let mut definitions = Vec::default();
    for (index, feature) in features.iter().enumerate() {
        for value in feature.values() {
            for relation in relations(mode, feature, value) {
                definitions.push((index, relation, value));
            }
        }
    }
    definitions
}
