use serde::Serialize;
use ts_rs::TS;

use drugharm_core::models::criterion::CriterionKey;
use drugharm_core::models::drug::DrugClass;

use crate::scoring::{others_harm, user_harm};
use crate::selection::CriteriaSelection;
use crate::Study;

/// One stacked-bar segment.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Segment {
    pub key: CriterionKey,
    /// The criterion's score, or 0 when it is switched off.
    pub value: f64,
}

/// One drug's stacked bar for a single study.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct BreakdownRow {
    pub drug: String,
    pub class: DrugClass,
    /// Every criterion of the study, in schema order.
    pub segments: Vec<Segment>,
    pub user_harm: f64,
    pub others_harm: f64,
    pub total: f64,
}

/// Per-drug stacked breakdown under `selection`, highest total first.
///
/// Studies without a criteria breakdown produce no rows.
pub fn study_breakdown(study: &dyn Study, selection: &CriteriaSelection) -> Vec<BreakdownRow> {
    let variant = study.variant();
    let criteria = study.criteria();
    let enabled = selection.enabled();

    let mut rows: Vec<BreakdownRow> = study
        .scores()
        .iter()
        .map(|record| {
            let segments: Vec<Segment> = criteria
                .iter()
                .map(|c| Segment {
                    key: c.key,
                    value: if selection.is_enabled(c.key) {
                        record.score(c.key)
                    } else {
                        0.0
                    },
                })
                .collect();
            let user = user_harm(record, enabled, variant);
            let others = others_harm(record, enabled, variant);
            BreakdownRow {
                drug: record.drug.clone(),
                class: record.class,
                segments,
                user_harm: user,
                others_harm: others,
                total: user + others,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total.total_cmp(&a.total));
    rows
}

/// Upper bound for a chart axis: the largest value rounded up to the next ten, plus five.
pub fn chart_domain_max(values: impl IntoIterator<Item = f64>, fallback: f64) -> f64 {
    values
        .into_iter()
        .reduce(f64::max)
        .map(|max| (max / 10.0).ceil() * 10.0 + 5.0)
        .unwrap_or(fallback)
}
