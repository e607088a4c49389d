use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Who bears the harm measured by a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HarmCategory {
    /// Harm to the person using the drug.
    User,
    /// Harm to other people and to society.
    Others,
}

/// Every MCDA criterion key used by any study.
///
/// The first sixteen form the standard Nutt et al. schema. The last three only
/// appear in the New Zealand 2023 schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CriterionKey {
    DrugSpecificMortality,
    DrugRelatedMortality,
    DrugSpecificDamage,
    DrugRelatedDamage,
    Dependence,
    DrugSpecificMentalImpairment,
    DrugRelatedMentalImpairment,
    LossOfTangibles,
    LossOfRelationships,
    Injury,
    Crime,
    EnvironmentalDamage,
    FamilyAdversities,
    InternationalDamage,
    EconomicCost,
    Community,
    /// Drug-specific and drug-related mental impairment scored as one criterion.
    MentalImpairment,
    /// Spiritual and non-physical harm to the user.
    NonPhysicalHarm,
    /// Harm to cultural identity and collective wellbeing.
    CulturalHarm,
}

impl CriterionKey {
    pub const ALL: [CriterionKey; 19] = [
        CriterionKey::DrugSpecificMortality,
        CriterionKey::DrugRelatedMortality,
        CriterionKey::DrugSpecificDamage,
        CriterionKey::DrugRelatedDamage,
        CriterionKey::Dependence,
        CriterionKey::DrugSpecificMentalImpairment,
        CriterionKey::DrugRelatedMentalImpairment,
        CriterionKey::LossOfTangibles,
        CriterionKey::LossOfRelationships,
        CriterionKey::Injury,
        CriterionKey::Crime,
        CriterionKey::EnvironmentalDamage,
        CriterionKey::FamilyAdversities,
        CriterionKey::InternationalDamage,
        CriterionKey::EconomicCost,
        CriterionKey::Community,
        CriterionKey::MentalImpairment,
        CriterionKey::NonPhysicalHarm,
        CriterionKey::CulturalHarm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKey::DrugSpecificMortality => "drugSpecificMortality",
            CriterionKey::DrugRelatedMortality => "drugRelatedMortality",
            CriterionKey::DrugSpecificDamage => "drugSpecificDamage",
            CriterionKey::DrugRelatedDamage => "drugRelatedDamage",
            CriterionKey::Dependence => "dependence",
            CriterionKey::DrugSpecificMentalImpairment => "drugSpecificMentalImpairment",
            CriterionKey::DrugRelatedMentalImpairment => "drugRelatedMentalImpairment",
            CriterionKey::LossOfTangibles => "lossOfTangibles",
            CriterionKey::LossOfRelationships => "lossOfRelationships",
            CriterionKey::Injury => "injury",
            CriterionKey::Crime => "crime",
            CriterionKey::EnvironmentalDamage => "environmentalDamage",
            CriterionKey::FamilyAdversities => "familyAdversities",
            CriterionKey::InternationalDamage => "internationalDamage",
            CriterionKey::EconomicCost => "economicCost",
            CriterionKey::Community => "community",
            CriterionKey::MentalImpairment => "mentalImpairment",
            CriterionKey::NonPhysicalHarm => "nonPhysicalHarm",
            CriterionKey::CulturalHarm => "culturalHarm",
        }
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CriterionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCriterion(s.to_string()))
    }
}

/// One MCDA dimension as defined by a study.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub key: CriterionKey,
    pub label: String,
    pub short_label: String,
    pub description: String,
    /// Swing weight from the study. Informational; aggregation does not use it.
    pub weight: f64,
    pub color: String,
    pub category: HarmCategory,
}
