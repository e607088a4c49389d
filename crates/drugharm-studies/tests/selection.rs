use drugharm_core::models::criterion::{CriterionKey, HarmCategory};
use drugharm_studies::get_schema;
use drugharm_studies::scoring::EnabledCriteria;
use drugharm_studies::selection::CriteriaSelection;

#[test]
fn absent_param_selects_everything() {
    let selection = CriteriaSelection::from_query(None);
    assert_eq!(selection, CriteriaSelection::All);
    assert!(selection.enabled().is_none());
    assert_eq!(selection.to_query(), None);
}

#[test]
fn empty_param_selects_nothing() {
    let selection = CriteriaSelection::from_query(Some(""));
    assert_eq!(selection, CriteriaSelection::Only(EnabledCriteria::new()));
    assert_eq!(selection.enabled(), Some(&EnabledCriteria::new()));
    assert_eq!(selection.to_query().as_deref(), Some(""));
}

#[test]
fn param_parses_comma_separated_keys() {
    let selection = CriteriaSelection::from_query(Some("dependence, crime,,injury"));
    let expected = EnabledCriteria::from([
        CriterionKey::Dependence,
        CriterionKey::Crime,
        CriterionKey::Injury,
    ]);
    assert_eq!(selection, CriteriaSelection::Only(expected));
}

#[test]
fn unknown_tokens_are_dropped() {
    let selection = CriteriaSelection::from_query(Some("dependence,notACriterion"));
    assert_eq!(
        selection,
        CriteriaSelection::Only(EnabledCriteria::from([CriterionKey::Dependence]))
    );
}

#[test]
fn query_encoding_uses_key_order() {
    let selection = CriteriaSelection::Only(EnabledCriteria::from([
        CriterionKey::Community,
        CriterionKey::DrugSpecificMortality,
    ]));
    assert_eq!(
        selection.to_query().as_deref(),
        Some("drugSpecificMortality,community")
    );
    let decoded = CriteriaSelection::from_query(selection.to_query().as_deref());
    assert_eq!(decoded, selection);
}

#[test]
fn toggling_off_and_back_on_returns_to_all() {
    let schema = get_schema("uk2010");
    let mut selection = CriteriaSelection::All;

    selection.toggle(CriterionKey::Dependence, &schema);
    assert!(!selection.is_enabled(CriterionKey::Dependence));
    assert_eq!(selection.enabled_count(&schema), 15);

    selection.toggle(CriterionKey::Dependence, &schema);
    assert_eq!(selection, CriteriaSelection::All);
}

#[test]
fn clear_all_is_not_select_all() {
    let schema = get_schema("uk2010");
    let mut selection = CriteriaSelection::All;
    selection.clear_all();
    assert_eq!(selection.enabled_count(&schema), 0);
    assert_ne!(selection, CriteriaSelection::All);

    selection.select_all();
    assert_eq!(selection.enabled_count(&schema), 16);
}

#[test]
fn category_operations_touch_only_their_category() {
    let schema = get_schema("newzealand2023");
    let mut selection = CriteriaSelection::All;

    selection.clear_category(HarmCategory::User, &schema);
    assert_eq!(selection.enabled_in_category(HarmCategory::User, &schema), 0);
    assert_eq!(selection.enabled_in_category(HarmCategory::Others, &schema), 8);

    selection.clear_category(HarmCategory::Others, &schema);
    assert_eq!(selection.enabled_count(&schema), 0);

    selection.select_category(HarmCategory::Others, &schema);
    assert_eq!(selection.enabled_in_category(HarmCategory::Others, &schema), 8);
    assert!(selection.is_enabled(CriterionKey::CulturalHarm));
    assert!(!selection.is_enabled(CriterionKey::NonPhysicalHarm));

    selection.select_category(HarmCategory::User, &schema);
    assert_eq!(selection, CriteriaSelection::All);
}

#[test]
fn toggling_from_empty_enables_one() {
    let schema = get_schema("uk2010");
    let mut selection = CriteriaSelection::from_query(Some(""));
    selection.toggle(CriterionKey::Crime, &schema);
    assert_eq!(
        selection,
        CriteriaSelection::Only(EnabledCriteria::from([CriterionKey::Crime]))
    );
}

#[test]
fn param_naming_every_key_decodes_to_all() {
    let schema = get_schema("uk2010");
    let every: Vec<&str> = schema.keys().map(|k| k.as_str()).collect();
    let param = every.join(",");

    let selection = CriteriaSelection::from_query_for(Some(&param), &schema);
    assert_eq!(selection, CriteriaSelection::All);
    assert_eq!(selection.to_query(), None);

    // Without a schema the list is kept as given.
    assert_ne!(CriteriaSelection::from_query(Some(&param)), CriteriaSelection::All);
}

#[test]
fn schema_aware_decode_keeps_partial_and_empty_lists() {
    let schema = get_schema("uk2010");
    assert_eq!(
        CriteriaSelection::from_query_for(Some(""), &schema),
        CriteriaSelection::Only(EnabledCriteria::new())
    );
    assert_eq!(
        CriteriaSelection::from_query_for(Some("crime"), &schema),
        CriteriaSelection::Only(EnabledCriteria::from([CriterionKey::Crime]))
    );
    assert_eq!(
        CriteriaSelection::from_query_for(None, &schema),
        CriteriaSelection::All
    );
}
