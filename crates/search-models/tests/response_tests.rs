/// Response bodies: fixed fields decode through typed accessors, dynamic
/// fragments stay as `Value`, errors name the offending field.
use search_models::{from_json, from_slice, from_str, GetResponse, ModelError, SearchResponse, TotalHits, TotalRelation};
use search_value::{Kind, Value, ValueError};

const SEARCH_BODY: &str = r#"{
  "took": 5,
  "timed_out": false,
  "hits": {
    "total": {"value": 2, "relation": "eq"},
    "max_score": 1.3,
    "hits": [
      {
        "_index": "events",
        "_id": "1",
        "_score": 1.3,
        "_source": {"title": "standup", "attendees": ["ana", "ben"], "duration": 15, "remote": true}
      },
      {
        "_index": "events",
        "_id": "2",
        "_score": null,
        "_source": {"title": "retro", "room": null},
        "fields": {"day": ["friday"]},
        "sort": [1700000000000, "retro"]
      }
    ]
  },
  "aggregations": {"by_room": {"buckets": [{"key": "blue", "doc_count": 1}]}}
}"#;

// ============================================================================
// Search
// ============================================================================

#[test]
fn search_response_decodes_fixed_fields() {
    let response: SearchResponse = from_str(SEARCH_BODY).unwrap();
    assert_eq!(response.took, 5);
    assert!(!response.timed_out);
    assert_eq!(response.scroll_id, None);
    assert_eq!(
        response.hits.total,
        Some(TotalHits {
            value: 2,
            relation: TotalRelation::Eq
        })
    );
    assert_eq!(response.hits.max_score, Some(1.3));
    assert_eq!(response.hits.hits.len(), 2);
}

#[test]
fn search_hits_keep_dynamic_source() {
    let response: SearchResponse = from_str(SEARCH_BODY).unwrap();
    let first = &response.hits.hits[0];
    let source = first.source.as_ref().unwrap();
    assert_eq!(source.get("duration"), Some(&Value::Int(15)));
    assert_eq!(source.get("attendees").unwrap().as_array().unwrap().len(), 2);

    let second = &response.hits.hits[1];
    assert_eq!(second.score, None);
    assert_eq!(second.source.as_ref().unwrap().get("room"), Some(&Value::Null));
    assert_eq!(second.fields.get("day"), Some(&Value::from(vec!["friday"])));
    assert_eq!(second.sort, vec![Value::Int(1_700_000_000_000), Value::String("retro".into())]);
}

#[test]
fn search_aggregations_stay_dynamic() {
    let response: SearchResponse = from_str(SEARCH_BODY).unwrap();
    let buckets = response
        .aggregations
        .as_ref()
        .and_then(|aggs| aggs.get("by_room"))
        .and_then(|room| room.get("buckets"))
        .unwrap();
    assert_eq!(buckets.as_array().unwrap()[0].get("doc_count"), Some(&Value::Int(1)));
}

#[test]
fn search_accepts_bare_total_count() {
    let response: SearchResponse =
        from_str(r#"{"took":1,"timed_out":false,"hits":{"total":7,"max_score":null,"hits":[]}}"#).unwrap();
    assert_eq!(
        response.hits.total,
        Some(TotalHits {
            value: 7,
            relation: TotalRelation::Eq
        })
    );
    assert_eq!(response.hits.max_score, None);
}

#[test]
fn search_without_total_tracking() {
    let response: SearchResponse = from_str(r#"{"took":1,"timed_out":true,"hits":{"hits":[]}}"#).unwrap();
    assert_eq!(response.hits.total, None);
    assert!(response.timed_out);
}

#[test]
fn search_rejects_unknown_total_relation() {
    let err = from_str::<SearchResponse>(
        r#"{"took":1,"timed_out":false,"hits":{"total":{"value":1,"relation":"about"},"hits":[]}}"#,
    )
    .unwrap_err();
    match err {
        ModelError::UnknownVariant { path, found, .. } => {
            assert_eq!(path.to_string(), "$.hits.total.relation");
            assert_eq!(found, "about");
        }
        other => panic!("expected UnknownVariant, got {other:?}"),
    }
}

#[test]
fn search_error_names_the_broken_hit() {
    let err = from_str::<SearchResponse>(
        r#"{"took":1,"timed_out":false,"hits":{"hits":[{"_index":"a","_id":"1"},{"_index":"a","_id":2}]}}"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "wrong type at $.hits.hits[1]._id: expected string, found int");
}

#[test]
fn search_missing_hits_is_missing_field() {
    let err = from_str::<SearchResponse>(r#"{"took":1,"timed_out":false}"#).unwrap_err();
    assert!(matches!(err, ModelError::Value(ValueError::MissingField { .. })));
}

#[test]
fn search_response_reencodes_and_decodes_equal() {
    let response: SearchResponse = from_str(SEARCH_BODY).unwrap();
    let encoded = serde_json::to_value(&response).unwrap();
    let again: SearchResponse = from_json(&encoded).unwrap();
    assert_eq!(again, response);
}

// ============================================================================
// Get
// ============================================================================

#[test]
fn get_response_found() {
    let response: GetResponse = from_slice(
        br#"{"_index":"events","_id":"42","_version":3,"_seq_no":10,"_primary_term":1,"found":true,"_source":{"title":"standup","tags":[]}}"#,
    )
    .unwrap();
    assert!(response.found);
    assert_eq!(response.version, Some(3));
    assert_eq!(response.seq_no, Some(10));
    assert_eq!(
        response.source.unwrap().get("tags"),
        Some(&Value::Array(vec![]))
    );
}

#[test]
fn get_response_not_found_has_no_source() {
    let response: GetResponse = from_str(r#"{"_index":"events","_id":"404","found":false}"#).unwrap();
    assert!(!response.found);
    assert_eq!(response.source, None);
    assert!(response.fields.is_empty());
}

#[test]
fn get_response_explicit_null_source_is_present() {
    let response: GetResponse = from_str(r#"{"_index":"e","_id":"1","found":true,"_source":null}"#).unwrap();
    assert_eq!(response.source, Some(Value::Null));
}

#[test]
fn get_response_wrong_found_type() {
    let err = from_str::<GetResponse>(r#"{"_index":"e","_id":"1","found":"yes"}"#).unwrap_err();
    assert!(matches!(
        err,
        ModelError::Value(ValueError::WrongType {
            expected: Kind::Bool,
            actual: Kind::String,
            ..
        })
    ));
}

#[test]
fn get_response_from_invalid_json_is_parse_error() {
    let err = from_str::<GetResponse>("{").unwrap_err();
    assert!(matches!(err, ModelError::Value(ValueError::Json(_))));
}

#[test]
fn get_response_body_must_be_object() {
    let err = from_str::<GetResponse>("[]").unwrap_err();
    assert_eq!(err.to_string(), "wrong type at $: expected object, found array");
}
