use serde::Serialize;
use ts_rs::TS;

use drugharm_core::models::criterion::{Criterion, CriterionKey, HarmCategory};

/// The two criteria key sets in use across the studies.
///
/// Every aggregation is dispatched on this, so a record is never summed with
/// the other variant's key list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SchemaVariant {
    /// The Nutt et al. sixteen-criterion schema: UK 2010, Australia 2019, Europe 2015.
    Standard,
    /// New Zealand 2023: merged mental impairment, added non-physical and cultural harm.
    NewZealand,
}

const STANDARD_USER: &[CriterionKey] = &[
    CriterionKey::DrugSpecificMortality,
    CriterionKey::DrugRelatedMortality,
    CriterionKey::DrugSpecificDamage,
    CriterionKey::DrugRelatedDamage,
    CriterionKey::Dependence,
    CriterionKey::DrugSpecificMentalImpairment,
    CriterionKey::DrugRelatedMentalImpairment,
    CriterionKey::LossOfTangibles,
    CriterionKey::LossOfRelationships,
];

const STANDARD_OTHERS: &[CriterionKey] = &[
    CriterionKey::Injury,
    CriterionKey::Crime,
    CriterionKey::EnvironmentalDamage,
    CriterionKey::FamilyAdversities,
    CriterionKey::InternationalDamage,
    CriterionKey::EconomicCost,
    CriterionKey::Community,
];

const STANDARD_ALL: &[CriterionKey] = &[
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
];

const NEW_ZEALAND_USER: &[CriterionKey] = &[
    CriterionKey::DrugSpecificMortality,
    CriterionKey::DrugRelatedMortality,
    CriterionKey::DrugSpecificDamage,
    CriterionKey::DrugRelatedDamage,
    CriterionKey::Dependence,
    CriterionKey::MentalImpairment,
    CriterionKey::LossOfTangibles,
    CriterionKey::NonPhysicalHarm,
];

const NEW_ZEALAND_OTHERS: &[CriterionKey] = &[
    CriterionKey::Injury,
    CriterionKey::Crime,
    CriterionKey::EnvironmentalDamage,
    CriterionKey::FamilyAdversities,
    CriterionKey::InternationalDamage,
    CriterionKey::EconomicCost,
    CriterionKey::Community,
    CriterionKey::CulturalHarm,
];

const NEW_ZEALAND_ALL: &[CriterionKey] = &[
    CriterionKey::DrugSpecificMortality,
    CriterionKey::DrugRelatedMortality,
    CriterionKey::DrugSpecificDamage,
    CriterionKey::DrugRelatedDamage,
    CriterionKey::Dependence,
    CriterionKey::MentalImpairment,
    CriterionKey::LossOfTangibles,
    CriterionKey::NonPhysicalHarm,
    CriterionKey::Injury,
    CriterionKey::Crime,
    CriterionKey::EnvironmentalDamage,
    CriterionKey::FamilyAdversities,
    CriterionKey::InternationalDamage,
    CriterionKey::EconomicCost,
    CriterionKey::Community,
    CriterionKey::CulturalHarm,
];

impl SchemaVariant {
    /// Harm-to-users keys, in stacking order.
    pub fn user_keys(&self) -> &'static [CriterionKey] {
        match self {
            SchemaVariant::Standard => STANDARD_USER,
            SchemaVariant::NewZealand => NEW_ZEALAND_USER,
        }
    }

    /// Harm-to-others keys, in stacking order.
    pub fn others_keys(&self) -> &'static [CriterionKey] {
        match self {
            SchemaVariant::Standard => STANDARD_OTHERS,
            SchemaVariant::NewZealand => NEW_ZEALAND_OTHERS,
        }
    }

    /// User keys followed by others keys.
    pub fn all_keys(&self) -> &'static [CriterionKey] {
        match self {
            SchemaVariant::Standard => STANDARD_ALL,
            SchemaVariant::NewZealand => NEW_ZEALAND_ALL,
        }
    }
}

/// A study's criteria, partitioned by category.
///
/// Order follows declaration order and drives stacked-segment and legend order,
/// so it is never re-sorted.
#[derive(Debug, Clone, Serialize)]
pub struct CriteriaSchema<'a> {
    pub user: Vec<&'a Criterion>,
    pub others: Vec<&'a Criterion>,
    pub all: &'a [Criterion],
}

impl<'a> CriteriaSchema<'a> {
    pub fn empty() -> Self {
        Self {
            user: Vec::new(),
            others: Vec::new(),
            all: &[],
        }
    }

    pub fn from_criteria(criteria: &'a [Criterion]) -> Self {
        let (user, others): (Vec<&Criterion>, Vec<&Criterion>) = criteria
            .iter()
            .partition(|c| c.category == HarmCategory::User);
        Self {
            user,
            others,
            all: criteria,
        }
    }

    pub fn category(&self, category: HarmCategory) -> &[&'a Criterion] {
        match category {
            HarmCategory::User => &self.user,
            HarmCategory::Others => &self.others,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = CriterionKey> + '_ {
        self.all.iter().map(|c| c.key)
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
