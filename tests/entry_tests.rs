mod common;

use common::{day, sample_entry};
use serde_json::json;
use wjournal::models::entry::LIKERT_DEFAULT;
use wjournal::models::{Entry, Rating, Reflection, RowNumber};
use wjournal::utils::rating_bar;

#[test]
fn new_entry_sits_at_the_midpoint_with_no_text() {
    let e = Entry::new(day("2024-05-01"));
    for r in Rating::ALL {
        assert_eq!(e.rating(r), LIKERT_DEFAULT);
    }
    for f in Reflection::ALL {
        assert_eq!(e.text(f), "");
    }
    assert!(e.row_number.is_none());
}

#[test]
fn serialised_entry_uses_backend_field_names() {
    let mut e = sample_entry("2024-05-01");
    let v = serde_json::to_value(&e).unwrap();
    assert_eq!(v["date"], "2024-05-01");
    assert_eq!(v["emotional_state"], 6);
    assert_eq!(v["task_1"], "Finished the quarterly report");
    assert!(v.get("rowNumber").is_none());

    e.row_number = Some(RowNumber::new(12));
    let v = serde_json::to_value(&e).unwrap();
    assert_eq!(v["rowNumber"], 12);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let e: Entry = serde_json::from_value(json!({ "date": "2024-05-01" })).unwrap();
    assert_eq!(e, Entry::new(day("2024-05-01")));
}

#[test]
fn unparseable_date_is_an_error() {
    assert!(serde_json::from_value::<Entry>(json!({ "date": "May 1st" })).is_err());
}

#[test]
fn keys_map_back_to_ratings() {
    for r in Rating::ALL {
        assert_eq!(Rating::from_key(r.key()), Some(r));
    }
    assert_eq!(Rating::from_key("mood"), None);
}

#[test]
fn rating_bar_fills_up_to_the_value() {
    assert_eq!(rating_bar(4), "●●●●○○○ 4/7");
    assert_eq!(rating_bar(7), "●●●●●●● 7/7");
    assert!(rating_bar(0).contains("out of range"));
}
