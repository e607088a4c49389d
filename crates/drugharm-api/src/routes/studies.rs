use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use axum::Json;
use serde::{Deserialize, Serialize};

use drugharm_core::models::criterion::Criterion;
use drugharm_core::models::drug::{class_legend, ClassLegend};
use drugharm_core::models::study::{StudyId, StudyInfo};
use drugharm_studies::aggregate::{aggregate_ranking, RankedDrug};
use drugharm_studies::breakdown::{chart_domain_max, study_breakdown, BreakdownRow};
use drugharm_studies::schema::SchemaVariant;
use drugharm_studies::selection::CriteriaSelection;
use drugharm_studies::{all_studies, find_study, Study};

use crate::error::ApiError;

/// Axis bound for a study chart with no rows.
const STUDY_AXIS_FALLBACK: f64 = 50.0;

#[derive(Serialize)]
pub struct StudySummary {
    id: StudyId,
    slug: &'static str,
    name: String,
    color: String,
    has_criteria_breakdown: bool,
}

#[derive(Serialize)]
pub struct StudyDetail {
    id: StudyId,
    slug: &'static str,
    info: StudyInfo,
    variant: SchemaVariant,
    has_criteria_breakdown: bool,
    user_criteria: Vec<Criterion>,
    others_criteria: Vec<Criterion>,
}

#[derive(Deserialize)]
pub struct ScoresQuery {
    criteria: Option<String>,
}

#[derive(Serialize)]
pub struct ScoresResponse {
    study: StudyId,
    has_criteria_breakdown: bool,
    /// The selection re-encoded in canonical key order. Absent when everything is enabled.
    criteria: Option<String>,
    enabled_count: usize,
    criteria_count: usize,
    axis_max: f64,
    /// Drug classes appearing in `rows`.
    legend: Vec<ClassLegend>,
    rows: Vec<BreakdownRow>,
}

#[derive(Serialize)]
pub struct RankingResponse {
    study: StudyId,
    axis_max: f64,
    legend: Vec<ClassLegend>,
    ranking: Vec<RankedDrug>,
}

fn summarize(study: &dyn Study) -> StudySummary {
    let info = study.info();
    StudySummary {
        id: study.id(),
        slug: study.id().slug(),
        name: info.name.clone(),
        color: info.color.clone(),
        has_criteria_breakdown: study.has_criteria_breakdown(),
    }
}

pub async fn list_studies() -> Json<Vec<StudySummary>> {
    Json(all_studies().into_iter().map(summarize).collect())
}

pub async fn get_study_detail(Path(key): Path<String>) -> Result<Json<StudyDetail>, ApiError> {
    let study = find_study(&key)?;
    let schema = study.schema();

    Ok(Json(StudyDetail {
        id: study.id(),
        slug: study.id().slug(),
        info: study.info().clone(),
        variant: study.variant(),
        has_criteria_breakdown: study.has_criteria_breakdown(),
        user_criteria: schema.user.iter().map(|c| (*c).clone()).collect(),
        others_criteria: schema.others.iter().map(|c| (*c).clone()).collect(),
    }))
}

pub async fn get_study_scores(
    Path(key): Path<String>,
    query: Result<Query<ScoresQuery>, QueryRejection>,
) -> Result<Json<ScoresResponse>, ApiError> {
    let study = find_study(&key)?;
    let Query(query) = query?;

    let schema = study.schema();
    let selection = CriteriaSelection::from_query_for(query.criteria.as_deref(), &schema);
    let rows = study_breakdown(study, &selection);
    let axis_max = chart_domain_max(rows.iter().map(|r| r.total), STUDY_AXIS_FALLBACK);

    tracing::debug!(
        study = %study.id(),
        enabled = selection.enabled_count(&schema),
        rows = rows.len(),
        "computed study breakdown"
    );

    Ok(Json(ScoresResponse {
        study: study.id(),
        has_criteria_breakdown: study.has_criteria_breakdown(),
        criteria: selection.to_query(),
        enabled_count: selection.enabled_count(&schema),
        criteria_count: schema.all.len(),
        axis_max,
        legend: class_legend(rows.iter().map(|r| r.class)),
        rows,
    }))
}

pub async fn get_study_ranking(Path(key): Path<String>) -> Result<Json<RankingResponse>, ApiError> {
    let study = find_study(&key)?;
    let ranking = aggregate_ranking(study.id());
    let axis_max = chart_domain_max(ranking.iter().map(|r| r.score), STUDY_AXIS_FALLBACK);

    Ok(Json(RankingResponse {
        study: study.id(),
        axis_max,
        legend: class_legend(ranking.iter().map(|r| r.class)),
        ranking,
    }))
}
