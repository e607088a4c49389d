use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use drugharm_api::router;

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn find_row<'a>(rows: &'a Value, drug: &str) -> &'a Value {
    rows.as_array()
        .unwrap()
        .iter()
        .find(|r| r["drug"] == drug)
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, json) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn lists_studies_in_display_order() {
    let (status, json) = get("/studies").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["uk2010", "australia2019", "newzealand2023", "europe2015"]);
    assert_eq!(json[3]["has_criteria_breakdown"], false);
}

#[tokio::test]
async fn study_detail_accepts_slug_and_partitions_criteria() {
    let (status, json) = get("/studies/new-zealand-2023").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "newzealand2023");
    assert_eq!(json["variant"], "new_zealand");
    assert_eq!(json["user_criteria"].as_array().unwrap().len(), 8);
    assert_eq!(json["others_criteria"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn unknown_study_is_not_found() {
    let (status, json) = get("/studies/mars-2099").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("mars-2099"));

    let (status, _) = get("/studies/mars-2099/scores").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scores_without_param_enable_everything() {
    let (status, json) = get("/studies/uk2010/scores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled_count"], 16);
    assert_eq!(json["criteria_count"], 16);
    assert!(json["criteria"].is_null());
    assert_eq!(json["rows"][0]["drug"], "Alcohol");
    assert_eq!(json["rows"][0]["total"], 72.0);
    assert_eq!(json["axis_max"], 85.0);
}

#[tokio::test]
async fn scores_with_empty_param_enable_nothing() {
    let (status, json) = get("/studies/uk2010/scores?criteria=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled_count"], 0);
    assert_eq!(json["criteria"], "");
    let rows = json["rows"].as_array().unwrap();
    assert!(rows.iter().all(|r| r["total"] == 0.0));
}

#[tokio::test]
async fn scores_filter_by_selected_criteria() {
    let (status, json) = get("/studies/australia2019/scores?criteria=dependence").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled_count"], 1);
    let alcohol = find_row(&json["rows"], "Alcohol");
    assert_eq!(alcohol["user_harm"], 4.0);
    assert_eq!(alcohol["others_harm"], 0.0);
    assert_eq!(alcohol["segments"].as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn aggregate_only_study_has_no_rows() {
    let (status, json) = get("/studies/europe2015/scores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["has_criteria_breakdown"], false);
    assert!(json["rows"].as_array().unwrap().is_empty());
    assert_eq!(json["axis_max"], 50.0);
}

#[tokio::test]
async fn ranking_uses_aggregate_column() {
    let (status, json) = get("/studies/europe-2015/ranking").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["study"], "europe2015");
    assert_eq!(json["ranking"][0]["drug"], "Crack Cocaine");
    assert_eq!(json["ranking"].as_array().unwrap().len(), 19);
    assert_eq!(json["legend"][0]["class"], "opioid");
    assert_eq!(json["legend"][0]["label"], "Opioids");
    assert_eq!(json["legend"][0]["color"], "#dc2626");
}

#[tokio::test]
async fn comparison_defaults_to_both_categories() {
    let (status, json) = get("/comparison").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["toggles"]["users"], true);
    assert_eq!(json["toggles"]["others"], true);
    assert_eq!(json["rows"][0]["drug"], "Alcohol");
    // Largest study total is New Zealand alcohol at 73.
    assert_eq!(json["axis_max"], 85.0);
}

#[tokio::test]
async fn comparison_toggles_off_shrink_axis_to_padding() {
    let (status, json) = get("/comparison?users=false&others=false").await;
    assert_eq!(status, StatusCode::OK);
    // Rows remain with all-zero totals, so the axis is ceil(0 / 10) * 10 + 5.
    assert_eq!(json["axis_max"], 5.0);
    let butane = find_row(&json["rows"], "Butane");
    assert!(butane["average"].is_null());
}

#[tokio::test]
async fn comparison_rejects_malformed_toggle() {
    let (status, json) = get("/comparison?users=maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn comparable_drugs_follow_reference_study() {
    let (status, json) = get("/comparison/drugs").await;
    assert_eq!(status, StatusCode::OK);
    let drugs = json.as_array().unwrap();
    assert_eq!(drugs.len(), 20);
    assert!(!drugs.iter().any(|d| d == "Fentanyl"));
}

#[tokio::test]
async fn aggregate_comparison_flattens_row() {
    let (status, json) = get("/comparison/aggregate").await;
    assert_eq!(status, StatusCode::OK);
    let heroin = find_row(&json, "Heroin");
    assert_eq!(heroin["average"], 35.25);
    assert_eq!(heroin["range"], 5.0);
    assert_eq!(heroin["divergent"], true);
    let lsd = find_row(&json, "LSD");
    assert_eq!(lsd["divergent"], false);
    assert!(heroin["uk2010"].is_number());
}

#[tokio::test]
async fn scores_param_naming_every_key_is_canonicalized() {
    let (_, detail) = get("/studies/uk2010").await;
    let keys: Vec<&str> = ["user_criteria", "others_criteria"]
        .iter()
        .flat_map(|side| detail[*side].as_array().unwrap())
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    let uri = format!("/studies/uk2010/scores?criteria={}", keys.join(","));

    let (status, json) = get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled_count"], 16);
    assert!(json["criteria"].is_null());
}

#[tokio::test]
async fn scores_legend_lists_classes_present() {
    let (_, json) = get("/studies/uk2010/scores").await;
    let legend: Vec<&str> = json["legend"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["class"].as_str().unwrap())
        .collect();
    let mut in_rows: Vec<&str> = json["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["class"].as_str().unwrap())
        .collect();
    in_rows.sort_unstable();
    in_rows.dedup();

    assert_eq!(legend[0], "opioid");
    assert_eq!(legend.len(), in_rows.len());
    assert!(in_rows.iter().all(|c| legend.contains(c)));
}
