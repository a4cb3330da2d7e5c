use dom::build::{div, doc, elem, input, text, textarea};
use dom::{Id, MemoryDocument};
use selection_core::{
    AUTOFILL_GUARD_ATTRIBUTES, CollapsedPolicy, ElementKey, Miss, ResolverConfig,
    SelectionOffsets, resolve, resolve_value, try_resolve,
};
use serde_json::json;

const A: &str = r#"{"type":"textarea","id":"a"}"#;
const B: &str = r#"{"type":"textarea","id":"b"}"#;

// Ids: 1 = textarea a, 2 = its text, 3 = textarea b, 4 = its text,
// 5 = sibling div, 6 = its text.
fn two_fields() -> MemoryDocument {
    MemoryDocument::new(doc(vec![
        textarea(0, A, "the quick brown fox"),
        textarea(0, B, "jumps over"),
        div(0, vec![text(0, "unrelated page content")]),
    ]))
}

fn config() -> ResolverConfig {
    ResolverConfig::default()
}

fn assert_hardened(d: &MemoryDocument, id: Id) {
    for (name, value) in AUTOFILL_GUARD_ATTRIBUTES {
        assert_eq!(d.attr(id, name), Some(value), "{name}");
    }
}

#[test]
fn reports_selection_inside_matched_field() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(1), 2, 5));

    let result = resolve(&mut d, r#"{"id":"a"}"#, &config());
    assert_eq!(result, Some(SelectionOffsets::new(2, 5)));
}

#[test]
fn other_field_without_selection_reports_nothing() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(1), 2, 5));

    assert_eq!(resolve(&mut d, r#"{"id":"b"}"#, &config()), None);
    assert_eq!(
        try_resolve(&mut d, &key(r#"{"id":"b"}"#), &config()),
        Err(Miss::NotOwned)
    );
}

#[test]
fn offsets_come_from_the_control_not_the_range() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(3), 1, 4));
    // A later keyboard extension changes only the native offsets.
    assert!(d.set_control_offsets(Id(3), 1, 9));

    assert_eq!(
        resolve(&mut d, "b", &config()),
        Some(SelectionOffsets::new(1, 9))
    );
}

#[test]
fn raw_and_structured_identifiers_match_the_same_field() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(1), 0, 3));

    let expected = Some(SelectionOffsets::new(0, 3));
    assert_eq!(resolve(&mut d, "a", &config()), expected);
    assert_eq!(resolve(&mut d, A, &config()), expected);
    assert_eq!(resolve_value(&mut d, json!({ "id": "a" }), &config()), expected);
    assert_eq!(
        resolve_value(&mut d, json!({ "id": { "type": "textarea", "id": "a" } }), &config()),
        expected
    );
}

#[test]
fn unknown_identifiers_report_nothing() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(1), 2, 5));

    for identifier in ["zzz", r#"{"id":"zzz"}"#, "", "{", r#"{"type":"textarea"}"#, "[1,2]"] {
        assert_eq!(resolve(&mut d, identifier, &config()), None, "{identifier:?}");
    }
    assert_eq!(resolve_value(&mut d, json!(null), &config()), None);
    assert_eq!(resolve_value(&mut d, json!([A]), &config()), None);
}

#[test]
fn malformed_identifier_is_reported_as_such() {
    let mut d = two_fields();
    let miss = ElementKey::parse("{oops", "id")
        .map_err(Miss::from)
        .and_then(|k| try_resolve(&mut d, &k, &config()));
    assert!(matches!(miss, Err(Miss::MalformedIdentifier(_))));
}

#[test]
fn malformed_candidates_do_not_block_others() {
    let mut d = MemoryDocument::new(doc(vec![
        textarea(0, r#"{"id":"#, "broken"),
        textarea(0, r#"{"type":"textarea"}"#, "no id field"),
        elem(0, "textarea", Vec::new(), Vec::new()),
        textarea(0, r#"{"id":"c"}"#, "good field"),
    ]));
    // 1 broken, 2 its text, 3 missing field, 4 its text, 5 no attribute, 6 good.
    assert!(d.select_in_control(Id(6), 5, 10));

    assert_eq!(
        resolve(&mut d, r#"{"id":"c"}"#, &config()),
        Some(SelectionOffsets::new(5, 10))
    );
    assert_hardened(&d, Id(6));
    assert_eq!(d.attr(Id(1), "autocomplete"), None);
}

#[test]
fn first_matching_candidate_wins() {
    let mut d = MemoryDocument::new(doc(vec![
        textarea(0, r#"{"id":"dup","n":1}"#, "first"),
        textarea(0, r#"{"id":"dup","n":2}"#, "second"),
    ]));
    assert!(d.select_in_control(Id(3), 1, 2));

    // The first "dup" is matched; the selection lives in the second.
    assert_eq!(resolve(&mut d, "dup", &config()), None);
    assert_hardened(&d, Id(1));
    assert_eq!(d.attr(Id(3), "autocomplete"), None);
}

#[test]
fn selection_in_sibling_div_is_not_attributed() {
    let mut d = two_fields();
    assert!(d.set_control_offsets(Id(1), 2, 5));
    assert!(d.set_range_start(Id(6), 3));

    assert_eq!(
        try_resolve(&mut d, &key("a"), &config()),
        Err(Miss::NotOwned)
    );
    assert_eq!(resolve(&mut d, "a", &config()), None);
}

#[test]
fn selection_anchored_on_the_document_is_not_attributed() {
    let mut d = two_fields();
    assert!(d.set_control_offsets(Id(1), 2, 5));
    // Past the last child: the boundary is the document node itself.
    assert!(d.set_range_start(Id(0), 3));

    assert_eq!(resolve(&mut d, "a", &config()), None);
}

#[test]
fn text_inside_field_counts_as_owned() {
    let mut d = two_fields();
    assert!(d.set_control_offsets(Id(1), 4, 9));
    assert!(d.set_range_start(Id(2), 4));

    assert_eq!(
        resolve(&mut d, "a", &config()),
        Some(SelectionOffsets::new(4, 9))
    );
}

#[test]
fn range_starting_at_parent_and_control_index_is_owned() {
    // Ids: 1 = div, 2 = textarea, 3 = its text.
    let mut d = MemoryDocument::new(doc(vec![div(
        0,
        vec![textarea(0, r#"{"id":"a"}"#, "hello world")],
    )]));
    assert!(d.set_control_offsets(Id(2), 0, 5));
    assert!(d.set_range_start(Id(1), 0));

    assert_eq!(
        resolve(&mut d, "a", &config()),
        Some(SelectionOffsets::new(0, 5))
    );

    // The same container past its last child resolves to the div.
    assert!(d.set_range_start(Id(1), 1));
    assert_eq!(
        try_resolve(&mut d, &key("a"), &config()),
        Err(Miss::NotOwned)
    );
}

#[test]
fn control_selection_inside_nested_layout() {
    // Ids: 1 = outer div, 2 = text, 3 = inner div, 4 = textarea a, 5 = its text.
    let mut d = MemoryDocument::new(doc(vec![div(
        0,
        vec![
            text(0, "label"),
            div(0, vec![textarea(0, A, "nested field")]),
        ],
    )]));
    assert!(d.select_in_control(Id(4), 7, 12));

    assert_eq!(
        resolve(&mut d, A, &config()),
        Some(SelectionOffsets::new(7, 12))
    );
}

#[test]
fn no_selection_range_reports_nothing() {
    let mut d = two_fields();
    assert!(d.set_control_offsets(Id(1), 2, 5));

    assert_eq!(
        try_resolve(&mut d, &key("a"), &config()),
        Err(Miss::NoSelection)
    );

    assert!(d.select_in_control(Id(1), 2, 5));
    d.clear_selection();
    assert_eq!(resolve(&mut d, "a", &config()), None);
}

#[test]
fn matched_field_is_hardened_even_without_selection() {
    let mut d = two_fields();
    assert_eq!(resolve(&mut d, "b", &config()), None);

    assert_hardened(&d, Id(3));
    assert_eq!(d.attr(Id(1), "autocomplete"), None);
}

#[test]
fn hardening_is_idempotent() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(1), 2, 5));

    let first = resolve(&mut d, "a", &config());
    let after_first = d.root().clone();
    let second = resolve(&mut d, "a", &config());

    assert_eq!(first, second);
    assert_eq!(d.root(), &after_first);
    assert_hardened(&d, Id(1));
}

#[test]
fn hardening_overwrites_enabled_autocomplete() {
    let mut d = MemoryDocument::new(doc(vec![elem(
        0,
        "textarea",
        vec![("id", Some("a")), ("autocomplete", Some("on"))],
        Vec::new(),
    )]));
    assert_eq!(resolve(&mut d, "a", &config()), None);
    assert_hardened(&d, Id(1));
}

#[test]
fn collapsed_selection_is_suppressed_by_default() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(1), 7, 7));

    assert_eq!(
        try_resolve(&mut d, &key("a"), &config()),
        Err(Miss::Collapsed)
    );
}

#[test]
fn collapsed_selection_can_be_reported() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(1), 7, 7));

    let config = ResolverConfig {
        collapsed: CollapsedPolicy::Report,
        ..ResolverConfig::default()
    };
    assert_eq!(
        resolve(&mut d, "a", &config),
        Some(SelectionOffsets::new(7, 7))
    );
}

#[test]
fn reversed_native_offsets_are_normalized() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(1), 9, 3));

    assert_eq!(
        resolve(&mut d, "a", &config()),
        Some(SelectionOffsets::new(3, 9))
    );
}

#[test]
fn input_candidates_by_config() {
    let mut d = MemoryDocument::new(doc(vec![
        input(0, "checkbox", r#"{"id":"box"}"#),
        input(0, "text", r#"{"id":"name"}"#),
        textarea(0, r#"{"id":"name"}"#, "ignored"),
    ]));
    assert!(d.set_range_start(Id(0), 1));
    assert!(d.set_control_offsets(Id(2), 0, 0));

    let config = ResolverConfig {
        candidate_tag: "input".to_string(),
        collapsed: CollapsedPolicy::Report,
        ..ResolverConfig::default()
    };
    assert_eq!(
        resolve(&mut d, r#"{"id":"name"}"#, &config),
        Some(SelectionOffsets::new(0, 0))
    );

    // A checkbox matches but has no text selection API.
    assert!(d.set_range_start(Id(0), 0));
    assert_eq!(
        try_resolve(&mut d, &key("box"), &config),
        Err(Miss::NoNativeOffsets)
    );
}

#[test]
fn custom_identifying_attribute_and_token_field() {
    let mut d = MemoryDocument::new(doc(vec![
        elem(
            0,
            "textarea",
            vec![("data-key", Some(r#"{"aio_id":"x"}"#)), ("id", Some("ignored"))],
            vec![text(0, "custom layout")],
        ),
    ]));
    assert!(d.select_in_control(Id(1), 0, 6));

    let config = ResolverConfig::from_json(r#"{"idAttribute":"data-key","tokenField":"aio_id"}"#)
        .unwrap();
    assert_eq!(
        resolve(&mut d, r#"{"aio_id":"x"}"#, &config),
        Some(SelectionOffsets::new(0, 6))
    );
    assert_eq!(resolve(&mut d, "ignored", &config), None);
}

#[test]
fn result_serializes_for_the_host() {
    let mut d = two_fields();
    assert!(d.select_in_control(Id(1), 2, 5));

    let hit = resolve(&mut d, "a", &config());
    assert_eq!(serde_json::to_value(hit).unwrap(), json!({ "start": 2, "end": 5 }));

    let miss = resolve(&mut d, "b", &config());
    assert_eq!(serde_json::to_value(miss).unwrap(), serde_json::Value::Null);
}

fn key(raw: &str) -> ElementKey {
    ElementKey::parse(raw, "id").unwrap()
}
