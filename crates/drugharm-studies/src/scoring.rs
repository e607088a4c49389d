use std::collections::BTreeSet;

use drugharm_core::models::criterion::CriterionKey;
use drugharm_core::models::drug::DrugScoreRecord;

use crate::schema::SchemaVariant;

/// A caller-supplied set of criteria to include in a sum.
///
/// Always passed as `Option<&EnabledCriteria>`: `None` means every key counts,
/// while `Some` of an empty set means nothing does.
pub type EnabledCriteria = BTreeSet<CriterionKey>;

/// Sum `record`'s scores over `keys`, restricted to `enabled` when given.
///
/// Keys missing from the record contribute 0.
pub fn sum_category(
    record: &DrugScoreRecord,
    keys: &[CriterionKey],
    enabled: Option<&EnabledCriteria>,
) -> f64 {
    keys.iter()
        .filter(|key| enabled.is_none_or(|set| set.contains(*key)))
        .map(|key| record.score(*key))
        .sum()
}

/// Harm to the user, summed over the variant's user-category keys.
pub fn user_harm(
    record: &DrugScoreRecord,
    enabled: Option<&EnabledCriteria>,
    variant: SchemaVariant,
) -> f64 {
    sum_category(record, variant.user_keys(), enabled)
}

/// Harm to others, summed over the variant's others-category keys.
pub fn others_harm(
    record: &DrugScoreRecord,
    enabled: Option<&EnabledCriteria>,
    variant: SchemaVariant,
) -> f64 {
    sum_category(record, variant.others_keys(), enabled)
}

/// `user_harm + others_harm`, equal to summing over `variant.all_keys()`.
pub fn total_harm(
    record: &DrugScoreRecord,
    enabled: Option<&EnabledCriteria>,
    variant: SchemaVariant,
) -> f64 {
    user_harm(record, enabled, variant) + others_harm(record, enabled, variant)
}
