use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::drug::DrugClass;
use super::study::StudyId;

/// A drug's flat harm-to-users score in each study, normalized to a 0–100 scale.
///
/// This is the only data available for studies without a criteria breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregateScoreRow {
    pub drug: String,
    pub class: DrugClass,
    pub uk2010: f64,
    pub australia2019: f64,
    pub newzealand2023: f64,
    pub europe2015: f64,
}

impl AggregateScoreRow {
    pub fn score(&self, study: StudyId) -> f64 {
        match study {
            StudyId::Uk2010 => self.uk2010,
            StudyId::Australia2019 => self.australia2019,
            StudyId::NewZealand2023 => self.newzealand2023,
            StudyId::Europe2015 => self.europe2015,
        }
    }

    /// Scores in [`StudyId::ALL`] order.
    pub fn scores(&self) -> [f64; 4] {
        StudyId::ALL.map(|study| self.score(study))
    }

    /// Mean across all four studies.
    pub fn average(&self) -> f64 {
        self.scores().iter().sum::<f64>() / 4.0
    }

    /// Spread between the highest and lowest study score.
    pub fn range(&self) -> f64 {
        let scores = self.scores();
        let max = scores.iter().copied().fold(f64::MIN, f64::max);
        let min = scores.iter().copied().fold(f64::MAX, f64::min);
        max - min
    }
}
