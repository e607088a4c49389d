use drugharm_core::models::criterion::CriterionKey;
use drugharm_core::models::drug::{DrugClass, DrugScoreRecord};
use drugharm_core::models::study::StudyId;
use drugharm_studies::comparison::{comparable_drugs, compare_studies, HarmToggles, REFERENCE_STUDY};
use drugharm_studies::{all_studies, get_scores};

fn record(drug: &str) -> DrugScoreRecord {
    DrugScoreRecord::from_row(drug, DrugClass::Other, &[CriterionKey::Dependence], &[1.0])
}

#[test]
fn comparable_drugs_unions_smallest_overlap_with_reference() {
    let uk = vec![record("Alcohol"), record("Heroin"), record("Butane")];
    let aus = vec![record("Alcohol"), record("Fentanyl"), record("Kava")];
    let nz = vec![record("Fentanyl"), record("Kava"), record("Heroin"), record("Cocaine")];
    let eu = vec![record("Kava"), record("Lonely")];

    let tables = [
        (StudyId::Uk2010, uk.as_slice()),
        (StudyId::Australia2019, aus.as_slice()),
        (StudyId::NewZealand2023, nz.as_slice()),
        (StudyId::Europe2015, eu.as_slice()),
    ];
    let drugs = comparable_drugs(&tables, StudyId::Uk2010);
    assert_eq!(drugs, ["Kava", "Alcohol", "Heroin", "Butane"]);
}

#[test]
fn drug_absent_from_reference_is_excluded_unless_in_smallest() {
    let uk = vec![record("Alcohol"), record("Heroin")];
    let aus = vec![record("Alcohol"), record("Fentanyl"), record("Cocaine")];
    let nz = vec![record("Fentanyl"), record("Cocaine"), record("Heroin")];
    let eu: Vec<DrugScoreRecord> = Vec::new();

    let tables = [
        (StudyId::Uk2010, uk.as_slice()),
        (StudyId::Australia2019, aus.as_slice()),
        (StudyId::NewZealand2023, nz.as_slice()),
        (StudyId::Europe2015, eu.as_slice()),
    ];
    let drugs = comparable_drugs(&tables, StudyId::Uk2010);
    assert_eq!(drugs, ["Alcohol", "Heroin"]);
}

#[test]
fn comparable_drugs_of_nothing_is_empty() {
    assert!(comparable_drugs(&[], StudyId::Uk2010).is_empty());
}

#[test]
fn real_tables_compare_the_uk_drug_list() {
    let tables: Vec<(StudyId, &[DrugScoreRecord])> =
        all_studies().iter().map(|s| (s.id(), s.scores())).collect();
    let drugs = comparable_drugs(&tables, REFERENCE_STUDY);
    let uk: Vec<&str> = get_scores("uk2010").iter().map(|r| r.drug.as_str()).collect();
    assert_eq!(drugs, uk);
    assert!(!drugs.iter().any(|d| d == "Fentanyl"));
}

#[test]
fn comparison_rows_zero_fill_missing_studies() {
    let rows = compare_studies(HarmToggles::default());
    assert_eq!(rows.len(), 20);

    let butane = rows.iter().find(|r| r.drug == "Butane").unwrap();
    assert_eq!(butane.total(StudyId::Uk2010), 11.0);
    assert_eq!(butane.total(StudyId::Australia2019), 0.0);
    assert_eq!(butane.total(StudyId::NewZealand2023), 0.0);
    assert_eq!(butane.total(StudyId::Europe2015), 0.0);
    assert_eq!(butane.average, Some(11.0));

    let order: Vec<StudyId> = butane.studies.iter().map(|h| h.study).collect();
    assert_eq!(order, StudyId::ALL.to_vec());
}

#[test]
fn comparison_uses_each_study_variant() {
    let rows = compare_studies(HarmToggles::default());
    let alcohol = rows.iter().find(|r| r.drug == "Alcohol").unwrap();
    let aus = alcohol.harm(StudyId::Australia2019).unwrap();
    assert_eq!((aus.users, aus.others), (26.0, 37.0));
    let nz = alcohol.harm(StudyId::NewZealand2023).unwrap();
    assert_eq!((nz.users, nz.others), (29.0, 44.0));
    assert_eq!(alcohol.average, Some((72.0 + 63.0 + 73.0) / 3.0));
}

#[test]
fn comparison_sorted_by_mean_total() {
    let rows = compare_studies(HarmToggles::default());
    assert_eq!(rows[0].drug, "Alcohol");
    let mean = |i: usize| StudyId::ALL.iter().map(|s| rows[i].total(*s)).sum::<f64>() / 4.0;
    assert!((1..rows.len()).all(|i| mean(i - 1) >= mean(i)));
}

#[test]
fn toggles_zero_out_categories() {
    let users_only = compare_studies(HarmToggles {
        users: true,
        others: false,
    });
    assert!(users_only.iter().all(|r| r.studies.iter().all(|h| h.others == 0.0)));

    let neither = compare_studies(HarmToggles {
        users: false,
        others: false,
    });
    assert!(neither.iter().all(|r| r.average.is_none()));
    // Stable sort keeps insertion order when everything ties.
    assert_eq!(neither[0].drug, "Alcohol");
    assert_eq!(neither[1].drug, "Heroin");
}
