use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use drugharm_core::models::drug::DrugScoreRecord;
use drugharm_core::models::study::StudyId;
use drugharm_studies::aggregate::{aggregate_comparison, AggregateComparison};
use drugharm_studies::breakdown::chart_domain_max;
use drugharm_studies::comparison::{
    comparable_drugs, compare_studies, ComparisonRow, HarmToggles, REFERENCE_STUDY,
};
use drugharm_studies::all_studies;

use crate::error::ApiError;

/// Axis bound for the comparison chart when there are no rows.
const COMPARISON_AXIS_FALLBACK: f64 = 80.0;

/// Both toggles default to on when omitted.
#[derive(Deserialize)]
pub struct ComparisonQuery {
    users: Option<bool>,
    others: Option<bool>,
}

impl ComparisonQuery {
    fn toggles(&self) -> HarmToggles {
        let defaults = HarmToggles::default();
        HarmToggles {
            users: self.users.unwrap_or(defaults.users),
            others: self.others.unwrap_or(defaults.others),
        }
    }
}

#[derive(Serialize)]
pub struct ComparisonResponse {
    toggles: HarmToggles,
    axis_max: f64,
    rows: Vec<ComparisonRow>,
}

pub async fn get_comparison(
    query: Result<Query<ComparisonQuery>, QueryRejection>,
) -> Result<Json<ComparisonResponse>, ApiError> {
    let Query(query) = query?;
    let toggles = query.toggles();
    let rows = compare_studies(toggles);

    let totals = rows
        .iter()
        .flat_map(|r| r.studies.iter().map(|h| h.total()));
    let axis_max = chart_domain_max(totals, COMPARISON_AXIS_FALLBACK);

    Ok(Json(ComparisonResponse {
        toggles,
        axis_max,
        rows,
    }))
}

pub async fn list_comparable_drugs() -> Json<Vec<String>> {
    let tables: Vec<(StudyId, &[DrugScoreRecord])> = all_studies()
        .iter()
        .map(|s| (s.id(), s.scores()))
        .collect();
    Json(comparable_drugs(&tables, REFERENCE_STUDY))
}

pub async fn get_aggregate_comparison() -> Json<Vec<AggregateComparison>> {
    Json(aggregate_comparison())
}
