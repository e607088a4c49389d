//! drugharm-studies
//!
//! MCDA drug-harm study definitions. Pure data, no I/O.
//! Defines the criteria schema, per-drug score table, and aggregate scores for
//! each supported study, plus the aggregation, comparison, and selection logic
//! the dashboard renders from them.

pub mod aggregate;
pub mod breakdown;
pub mod comparison;
pub mod error;
pub mod schema;
pub mod scoring;
pub mod selection;
pub mod studies;

use drugharm_core::models::criterion::Criterion;
use drugharm_core::models::drug::DrugScoreRecord;
use drugharm_core::models::study::{StudyId, StudyInfo};

use error::StudyError;
use schema::{CriteriaSchema, SchemaVariant};

/// Trait implemented by each published study.
pub trait Study: Send + Sync {
    fn id(&self) -> StudyId;

    /// Citation and display metadata.
    fn info(&self) -> &StudyInfo;

    /// Which key lists apply when aggregating this study's records.
    fn variant(&self) -> SchemaVariant;

    /// Criteria in declaration order. Empty for studies without a breakdown.
    fn criteria(&self) -> &[Criterion];

    /// Per-drug scores in curated source order. Empty for studies without a breakdown.
    fn scores(&self) -> &[DrugScoreRecord];

    /// Whether per-criterion scores exist at all. When false only the
    /// aggregate table has data for this study.
    fn has_criteria_breakdown(&self) -> bool {
        !self.criteria().is_empty()
    }

    /// Criteria partitioned by harm category, declaration order preserved.
    fn schema(&self) -> CriteriaSchema<'_> {
        CriteriaSchema::from_criteria(self.criteria())
    }
}

/// Return all registered studies in display order.
pub fn all_studies() -> Vec<&'static dyn Study> {
    StudyId::ALL.into_iter().map(get_study).collect()
}

/// Look up a study by ID.
pub fn get_study(id: StudyId) -> &'static dyn Study {
    match id {
        StudyId::Uk2010 => &studies::uk2010::Uk2010,
        StudyId::Australia2019 => &studies::australia2019::Australia2019,
        StudyId::NewZealand2023 => &studies::new_zealand2023::NewZealand2023,
        StudyId::Europe2015 => &studies::europe2015::Europe2015,
    }
}

/// Look up a study by id (`uk2010`) or slug (`uk-2010`).
pub fn find_study(key: &str) -> Result<&'static dyn Study, StudyError> {
    let id: StudyId = key
        .parse()
        .map_err(|_| StudyError::UnknownStudy(key.to_string()))?;
    Ok(get_study(id))
}

/// Criteria schema for a study id or slug. Unknown studies yield empty partitions.
pub fn get_schema(key: &str) -> CriteriaSchema<'static> {
    match find_study(key) {
        Ok(study) => study.schema(),
        Err(err) => {
            tracing::debug!("{err}; returning empty schema");
            CriteriaSchema::empty()
        }
    }
}

/// Score table for a study id or slug. Unknown studies yield an empty table.
pub fn get_scores(key: &str) -> &'static [DrugScoreRecord] {
    match find_study(key) {
        Ok(study) => study.scores(),
        Err(err) => {
            tracing::debug!("{err}; returning empty score table");
            &[]
        }
    }
}
