use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::criterion::CriterionKey;
use crate::error::CoreError;

/// Pharmacological class of a drug. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DrugClass {
    Opioid,
    Stimulant,
    Depressant,
    Cannabinoid,
    Dissociative,
    Psychedelic,
    Other,
}

impl DrugClass {
    /// Legend order.
    pub const ALL: [DrugClass; 7] = [
        DrugClass::Opioid,
        DrugClass::Stimulant,
        DrugClass::Depressant,
        DrugClass::Cannabinoid,
        DrugClass::Dissociative,
        DrugClass::Psychedelic,
        DrugClass::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrugClass::Opioid => "opioid",
            DrugClass::Stimulant => "stimulant",
            DrugClass::Depressant => "depressant",
            DrugClass::Cannabinoid => "cannabinoid",
            DrugClass::Dissociative => "dissociative",
            DrugClass::Psychedelic => "psychedelic",
            DrugClass::Other => "other",
        }
    }

    /// Plural legend label.
    pub fn label(&self) -> &'static str {
        match self {
            DrugClass::Opioid => "Opioids",
            DrugClass::Stimulant => "Stimulants",
            DrugClass::Depressant => "Depressants",
            DrugClass::Cannabinoid => "Cannabinoids",
            DrugClass::Dissociative => "Dissociatives",
            DrugClass::Psychedelic => "Psychedelics",
            DrugClass::Other => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            DrugClass::Opioid => "#dc2626",
            DrugClass::Stimulant => "#f97316",
            DrugClass::Depressant => "#8b5cf6",
            DrugClass::Cannabinoid => "#22c55e",
            DrugClass::Dissociative => "#06b6d4",
            DrugClass::Psychedelic => "#ec4899",
            DrugClass::Other => "#6b7280",
        }
    }

    pub fn legend(&self) -> ClassLegend {
        ClassLegend {
            class: *self,
            label: self.label().to_string(),
            color: self.color().to_string(),
        }
    }
}

/// One chart-legend entry for a drug class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassLegend {
    pub class: DrugClass,
    pub label: String,
    pub color: String,
}

/// Legend entries for the classes in `present`, in [`DrugClass::ALL`] order, without repeats.
pub fn class_legend(present: impl IntoIterator<Item = DrugClass>) -> Vec<ClassLegend> {
    let present: Vec<DrugClass> = present.into_iter().collect();
    DrugClass::ALL
        .iter()
        .filter(|class| present.contains(*class))
        .map(DrugClass::legend)
        .collect()
}

impl FromStr for DrugClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "opioid" => Ok(DrugClass::Opioid),
            "stimulant" => Ok(DrugClass::Stimulant),
            "depressant" => Ok(DrugClass::Depressant),
            "cannabinoid" => Ok(DrugClass::Cannabinoid),
            "dissociative" => Ok(DrugClass::Dissociative),
            "psychedelic" => Ok(DrugClass::Psychedelic),
            "other" => Ok(DrugClass::Other),
            other => Err(CoreError::UnknownDrugClass(other.to_string())),
        }
    }
}

/// One drug's per-criterion scores within a single study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrugScoreRecord {
    pub drug: String,
    pub class: DrugClass,
    pub scores: BTreeMap<CriterionKey, f64>,
}

impl DrugScoreRecord {
    /// Build a record by pairing `keys` with `values` positionally.
    ///
    /// Extra keys or extra values are ignored, so callers pass a key list and a
    /// value row of the same length.
    pub fn from_row(drug: &str, class: DrugClass, keys: &[CriterionKey], values: &[f64]) -> Self {
        Self {
            drug: drug.to_string(),
            class,
            scores: keys.iter().copied().zip(values.iter().copied()).collect(),
        }
    }

    /// Score for `key`, or 0 when the record has no entry for it.
    pub fn score(&self, key: CriterionKey) -> f64 {
        self.scores.get(&key).copied().unwrap_or(0.0)
    }
}
