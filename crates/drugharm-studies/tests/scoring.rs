use std::collections::BTreeSet;

use drugharm_core::models::criterion::CriterionKey;
use drugharm_core::models::drug::{DrugClass, DrugScoreRecord};
use drugharm_studies::all_studies;
use drugharm_studies::schema::SchemaVariant;
use drugharm_studies::scoring::{others_harm, sum_category, total_harm, user_harm, EnabledCriteria};

fn scenario_record() -> DrugScoreRecord {
    use CriterionKey::*;
    DrugScoreRecord::from_row(
        "Alcohol",
        DrugClass::Depressant,
        &[
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
        ],
        &[
            2.0, 5.0, 5.0, 2.0, 4.0, 2.0, 2.0, 2.0, 2.0, 7.0, 6.0, 2.0, 8.0, 1.0, 7.0, 6.0,
        ],
    )
}

#[test]
fn standard_scenario_subtotals() {
    let record = scenario_record();
    assert_eq!(user_harm(&record, None, SchemaVariant::Standard), 26.0);
    assert_eq!(others_harm(&record, None, SchemaVariant::Standard), 37.0);
    assert_eq!(total_harm(&record, None, SchemaVariant::Standard), 63.0);
}

#[test]
fn single_enabled_user_criterion() {
    let record = scenario_record();
    let enabled = EnabledCriteria::from([CriterionKey::Dependence]);
    assert_eq!(user_harm(&record, Some(&enabled), SchemaVariant::Standard), 4.0);
    assert_eq!(others_harm(&record, Some(&enabled), SchemaVariant::Standard), 0.0);
    assert_eq!(total_harm(&record, Some(&enabled), SchemaVariant::Standard), 4.0);
}

#[test]
fn empty_selection_sums_to_zero_but_absent_selection_sums_everything() {
    let record = scenario_record();
    let none = EnabledCriteria::new();
    let keys = SchemaVariant::Standard.all_keys();

    assert_eq!(sum_category(&record, keys, Some(&none)), 0.0);
    assert_eq!(total_harm(&record, Some(&none), SchemaVariant::Standard), 0.0);
    assert_eq!(sum_category(&record, keys, None), 63.0);
}

#[test]
fn missing_fields_count_as_zero() {
    let record = DrugScoreRecord::from_row(
        "Sparse",
        DrugClass::Other,
        &[CriterionKey::Dependence, CriterionKey::Crime],
        &[3.0, 2.0],
    );
    assert_eq!(user_harm(&record, None, SchemaVariant::Standard), 3.0);
    assert_eq!(others_harm(&record, None, SchemaVariant::Standard), 2.0);
    assert_eq!(user_harm(&record, None, SchemaVariant::NewZealand), 3.0);
}

#[test]
fn keys_outside_the_category_never_contribute() {
    let record = scenario_record();
    // Not part of the standard schema at all.
    let enabled = EnabledCriteria::from([CriterionKey::CulturalHarm, CriterionKey::MentalImpairment]);
    assert_eq!(total_harm(&record, Some(&enabled), SchemaVariant::Standard), 0.0);
}

#[test]
fn variant_picks_the_key_list() {
    use CriterionKey::*;
    let record = DrugScoreRecord::from_row(
        "Mixed",
        DrugClass::Other,
        &[DrugSpecificMentalImpairment, MentalImpairment, LossOfRelationships, NonPhysicalHarm],
        &[1.0, 10.0, 100.0, 1000.0],
    );
    assert_eq!(user_harm(&record, None, SchemaVariant::Standard), 101.0);
    assert_eq!(user_harm(&record, None, SchemaVariant::NewZealand), 1010.0);
}

#[test]
fn absent_filter_equals_full_filter_for_every_record() {
    for study in all_studies() {
        let variant = study.variant();
        for keys in [variant.user_keys(), variant.others_keys(), variant.all_keys()] {
            let full: EnabledCriteria = keys.iter().copied().collect();
            for record in study.scores() {
                assert_eq!(
                    sum_category(record, keys, None),
                    sum_category(record, keys, Some(&full)),
                    "{} / {}",
                    study.id(),
                    record.drug
                );
                assert_eq!(sum_category(record, keys, Some(&EnabledCriteria::new())), 0.0);
            }
        }
    }
}

#[test]
fn total_is_user_plus_others_for_every_record() {
    for study in all_studies() {
        let variant = study.variant();
        for record in study.scores() {
            let total = total_harm(record, None, variant);
            assert_eq!(total, user_harm(record, None, variant) + others_harm(record, None, variant));
            assert_eq!(total, sum_category(record, variant.all_keys(), None));
        }
    }
}

#[test]
fn total_matches_full_sum_under_partial_selection() {
    let enabled: EnabledCriteria = BTreeSet::from([
        CriterionKey::Dependence,
        CriterionKey::Injury,
        CriterionKey::EconomicCost,
        CriterionKey::MentalImpairment,
    ]);
    for study in all_studies() {
        let variant = study.variant();
        for record in study.scores() {
            assert_eq!(
                total_harm(record, Some(&enabled), variant),
                sum_category(record, variant.all_keys(), Some(&enabled))
            );
        }
    }
}

#[test]
fn aggregation_is_repeatable() {
    let record = scenario_record();
    let enabled = EnabledCriteria::from([CriterionKey::Crime, CriterionKey::Dependence]);
    let first = total_harm(&record, Some(&enabled), SchemaVariant::Standard);
    let second = total_harm(&record, Some(&enabled), SchemaVariant::Standard);
    assert_eq!(first, second);
    assert_eq!(first, 10.0);
}
