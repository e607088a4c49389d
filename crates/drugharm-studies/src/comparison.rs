use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use drugharm_core::models::drug::DrugScoreRecord;
use drugharm_core::models::study::StudyId;

use crate::scoring::{others_harm, user_harm};
use crate::{all_studies, Study};

/// The study whose drug list decides what appears in the cross-study comparison.
pub const REFERENCE_STUDY: StudyId = StudyId::Uk2010;

/// Harm categories shown in the comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HarmToggles {
    pub users: bool,
    pub others: bool,
}

impl Default for HarmToggles {
    fn default() -> Self {
        Self {
            users: true,
            others: true,
        }
    }
}

/// A drug's subtotals in one study. Zero when the study did not score the drug.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct StudyHarm {
    pub study: StudyId,
    pub users: f64,
    pub others: f64,
}

impl StudyHarm {
    pub fn total(&self) -> f64 {
        self.users + self.others
    }
}

/// One drug across every study, in [`StudyId::ALL`] order.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ComparisonRow {
    pub drug: String,
    pub studies: Vec<StudyHarm>,
    /// Mean of the non-zero study totals.
    pub average: Option<f64>,
}

impl ComparisonRow {
    pub fn harm(&self, study: StudyId) -> Option<&StudyHarm> {
        self.studies.iter().find(|h| h.study == study)
    }

    pub fn total(&self, study: StudyId) -> f64 {
        self.harm(study).map(StudyHarm::total).unwrap_or(0.0)
    }

    fn sort_key(&self) -> f64 {
        self.studies.iter().map(StudyHarm::total).sum::<f64>() / StudyId::ALL.len() as f64
    }
}

/// Drug names eligible for cross-study comparison, in insertion order.
///
/// Takes every drug of the smallest table that also appears in some other
/// table, then every drug of `reference`'s table. A drug the reference study
/// did not score is only included through the first rule.
pub fn comparable_drugs(tables: &[(StudyId, &[DrugScoreRecord])], reference: StudyId) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut drugs = Vec::new();
    let mut push = |name: &str| {
        if seen.insert(name.to_string()) {
            drugs.push(name.to_string());
        }
    };

    if let Some((smallest_id, smallest)) = tables.iter().min_by_key(|(_, records)| records.len()) {
        for record in smallest.iter() {
            let elsewhere = tables
                .iter()
                .filter(|(id, _)| id != smallest_id)
                .any(|(_, records)| records.iter().any(|r| r.drug == record.drug));
            if elsewhere {
                push(&record.drug);
            }
        }
    }

    if let Some((_, records)) = tables.iter().find(|(id, _)| *id == reference) {
        for record in records.iter() {
            push(&record.drug);
        }
    }

    drugs
}

/// Users/others subtotals for every comparable drug in every study, highest
/// four-study mean first.
pub fn compare_studies(toggles: HarmToggles) -> Vec<ComparisonRow> {
    let studies = all_studies();
    let tables: Vec<(StudyId, &[DrugScoreRecord])> =
        studies.iter().map(|s| (s.id(), s.scores())).collect();
    let drugs = comparable_drugs(&tables, REFERENCE_STUDY);
    tracing::debug!(drugs = drugs.len(), "building cross-study comparison");

    let lookups: Vec<(&dyn Study, HashMap<&str, &DrugScoreRecord>)> = studies
        .iter()
        .map(|s| {
            let by_drug = s.scores().iter().map(|r| (r.drug.as_str(), r)).collect();
            (*s, by_drug)
        })
        .collect();

    let mut rows: Vec<ComparisonRow> = drugs
        .into_iter()
        .map(|drug| {
            let harms: Vec<StudyHarm> = lookups
                .iter()
                .map(|(study, by_drug)| {
                    let record = by_drug.get(drug.as_str());
                    let variant = study.variant();
                    StudyHarm {
                        study: study.id(),
                        users: match record {
                            Some(r) if toggles.users => user_harm(r, None, variant),
                            _ => 0.0,
                        },
                        others: match record {
                            Some(r) if toggles.others => others_harm(r, None, variant),
                            _ => 0.0,
                        },
                    }
                })
                .collect();
            let average = average_nonzero(harms.iter().map(StudyHarm::total));
            ComparisonRow {
                drug,
                studies: harms,
                average,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.sort_key().total_cmp(&a.sort_key()));
    rows
}

fn average_nonzero(totals: impl Iterator<Item = f64>) -> Option<f64> {
    let present: Vec<f64> = totals.filter(|t| *t > 0.0).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}
