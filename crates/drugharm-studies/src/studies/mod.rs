pub mod australia2019;
pub mod europe2015;
pub mod new_zealand2023;
pub mod uk2010;

use drugharm_core::models::criterion::{Criterion, CriterionKey, HarmCategory};
use drugharm_core::models::drug::{DrugClass, DrugScoreRecord};

use crate::schema::SchemaVariant;

/// One drug's row as transcribed from a publication: values follow
/// `SchemaVariant::all_keys()` order, user criteria first.
pub(crate) type ScoreRow = (&'static str, DrugClass, [f64; 16]);

fn criterion(
    key: CriterionKey,
    label: &str,
    short_label: &str,
    description: &str,
    weight: f64,
    color: &str,
    category: HarmCategory,
) -> Criterion {
    Criterion {
        key,
        label: label.to_string(),
        short_label: short_label.to_string(),
        description: description.to_string(),
        weight,
        color: color.to_string(),
        category,
    }
}

fn score_table(rows: &[ScoreRow], variant: SchemaVariant) -> Vec<DrugScoreRecord> {
    let keys = variant.all_keys();
    rows.iter()
        .map(|(drug, class, values)| DrugScoreRecord::from_row(drug, *class, keys, values))
        .collect()
}
