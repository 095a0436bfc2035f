// tests/store_json.rs

use qs_scrape::reconcile::UnivRecord;
use qs_scrape::store::{RankCollection, UnivInfo};

fn sample() -> RankCollection {
    let records = vec![
        UnivRecord { name: "MIT".into(), country: "USA".into() },
        UnivRecord { name: "Stanford".into(), country: "USA".into() },
        UnivRecord { name: "Oxford".into(), country: "UK".into() },
    ];
    RankCollection {
        univ_info: UnivInfo::from_records(records),
        default: vec![0, 1, 2],
        subjects: vec![
            ("Physics".to_string(), vec![1, 0]),
            ("Engineering & Technology".to_string(), vec![0, 2]),
            ("Arts".to_string(), vec![2]),
        ],
    }
}

#[test]
fn univ_info_arrays_stay_aligned_by_index() {
    let doc = sample().to_value();
    assert_eq!(
        doc["univ_info"]["name"],
        serde_json::json!(["MIT", "Stanford", "Oxford"])
    );
    assert_eq!(
        doc["univ_info"]["country"],
        serde_json::json!(["USA", "USA", "UK"])
    );
}

#[test]
fn rank_holds_default_and_per_subject_views() {
    let doc = sample().to_value();
    assert_eq!(doc["rank"]["default"], serde_json::json!([0, 1, 2]));
    assert_eq!(doc["rank"]["subject"]["Physics"], serde_json::json!([1, 0]));
    assert_eq!(doc["rank"]["subject"]["Arts"], serde_json::json!([2]));
}

#[test]
fn subject_keys_keep_discovery_order() {
    let doc = sample().to_value();
    let keys: Vec<&String> = doc["rank"]["subject"]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(keys, ["Physics", "Engineering & Technology", "Arts"]);
}

#[test]
fn document_is_tab_indented_and_unescaped() {
    let text = sample().to_json_string().unwrap();
    assert!(text.starts_with("{\n\t\"univ_info\""));
    // serde_json writes non-ASCII verbatim, matching the dataset's layout
    assert!(text.contains("Engineering & Technology"));
}

#[test]
fn save_writes_a_parseable_file() {
    let mut path = std::env::temp_dir();
    path.push("qs_scrape_store_save.json");
    let _ = std::fs::remove_file(&path);

    sample().save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["rank"]["default"], serde_json::json!([0, 1, 2]));
    assert!(text.ends_with('\n'));
}
