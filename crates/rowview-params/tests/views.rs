//! End-to-end checks of the public view API.

use pretty_assertions::assert_eq;
use rowview_params::schema::{DATA_SCHEMA, PROPERTIES_SCHEMA};
use rowview_params::{
    Data, Document, LayoutMode, MessageKey, Messages, ParamsError, PathStep, Properties, validate,
};
use serde_json::{Value, json};

fn assert_send_sync<T: Send + Sync>() {}

/// Views hold plain data and borrowed fragments only.
#[test]
fn views_are_shareable_across_threads() {
    assert_send_sync::<Properties>();
    assert_send_sync::<Messages>();
    assert_send_sync::<Data>();
    assert_send_sync::<rowview_params::DataGroup<'static>>();
    assert_send_sync::<rowview_params::DataItem<'static>>();
}

/// Accessors hand back exactly what the document contains.
#[test]
fn accessors_mirror_input_fields() {
    let document = json!([
        { "name": "north", "data": [{ "name": "wind", "value": "12 kn" }] },
        { "name": "south", "data": [
            { "name": "wind", "value": "4 kn" },
            { "name": "swell", "value": "1.5 m" }
        ] }
    ]);
    let data = Data::new(document.clone()).expect("data");

    let rebuilt: Value = data
        .iter()
        .map(|group| {
            json!({
                "name": group.name(),
                "data": group
                    .iter()
                    .map(|item| json!({ "name": item.name(), "value": item.value() }))
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>()
        .into();
    assert_eq!(rebuilt, document);
}

#[test]
fn properties_scenario() {
    let props = Properties::new(json!({
        "rows": { "height": 10, "spacing": 2 },
        "font": { "size": 12 },
        "mode": "rows"
    }))
    .expect("properties");
    assert_eq!(props.row_height(), 10);
    assert_eq!(props.rows_spacing(), 2);
    assert_eq!(props.critical_value_size(), None);
    assert_eq!(props.font_size(), 12);
    assert_eq!(props.mode(), "rows");
    assert_eq!(props.layout_mode(), LayoutMode::Rows);
}

#[test]
fn invalid_documents_never_produce_a_view() {
    let err = Properties::new(json!({
        "rows": { "height": 0, "spacing": 2 },
        "font": { "size": 12 },
        "mode": "rows"
    }))
    .unwrap_err();
    assert!(matches!(err, ParamsError::Schema { .. }));
    assert_eq!(
        err.violation_path().map(|path| path.steps().to_vec()),
        Some(vec![
            PathStep::Key("rows".to_string()),
            PathStep::Key("height".to_string()),
        ])
    );
}

#[test]
fn data_scenario() {
    let data = Data::new(json!([{ "name": "g1", "data": [{ "name": "a", "value": "1" }] }]))
        .expect("data");
    assert_eq!(data.len(), 1);
    let group = data.get(0).expect("group");
    assert_eq!(group.name(), "g1");
    assert_eq!(group.len(), 1);
    let item = group.get(0).expect("item");
    assert_eq!((item.name(), item.value()), ("a", "1"));
}

#[test]
fn data_violation_at_index_two() {
    let err = Data::new(json!([
        { "name": "g1", "data": [{ "name": "a", "value": "1" }] },
        { "name": "g2", "data": [{ "name": "b", "value": "2" }] },
        { "name": "g3", "data": [] }
    ]))
    .unwrap_err();
    assert_eq!(err.to_string(), r#"[] is too short (path: [2]["data"])"#);
}

#[test]
fn messages_by_name_and_key() {
    let messages = Messages::load_from_str(r#"{ main_window_caption: "Tide table" }"#)
        .expect("messages");
    for key in MessageKey::ALL {
        assert_eq!(messages.lookup(key.as_str()), Some(&messages[*key]));
    }
    assert_eq!(messages.main_window_caption(), "Tide table");
}

#[test]
fn partial_traversal_does_not_disturb_later_ones() {
    let data = Data::new(json!([
        { "name": "a", "data": [{ "name": "x", "value": "1" }] },
        { "name": "b", "data": [{ "name": "y", "value": "2" }] },
        { "name": "c", "data": [{ "name": "z", "value": "3" }] }
    ]))
    .expect("data");

    let skipped = data.iter().nth(1).map(|group| group.name());
    assert_eq!(skipped, Some("b"));

    let names: Vec<&str> = data.iter().map(|group| group.name()).collect();
    let again: Vec<&str> = (&data).into_iter().map(|group| group.name()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(names, again);
}

#[test]
fn schemas_are_reusable_directly() {
    validate(&json!([{ "name": "g", "data": [{ "name": "n", "value": "v" }] }]), &DATA_SCHEMA)
        .expect("data");
    let err = validate(&json!({ "mode": "rows" }), &PROPERTIES_SCHEMA).unwrap_err();
    assert_eq!(err.to_string(), "'rows' is a required property (path: [])");
    assert_eq!(<Properties as Document>::KIND, "properties");
}

/// The trait's only public constructor validates first.
#[test]
fn views_only_come_from_validation() {
    let err = <Properties as Document>::from_value(json!({ "mode": "diagonal" })).unwrap_err();
    assert_eq!(err.to_string(), "'rows' is a required property (path: [])");

    let err = <Data as Document>::from_value(json!([])).unwrap_err();
    assert_eq!(err.violation_path().map(ToString::to_string), Some("[]".to_string()));

    let err = Messages::load_from_str("{ main_window_caption: null }").unwrap_err();
    assert_eq!(err.violation_message(), Some("None is not of type 'string'"));
}
