use super::*;
use crate::constants::{GENDER_OPTIONS, PHYSICIANS};

#[test]
fn css_classes_are_distinct_per_kind() {
    let kinds = [
        FieldKind::Text { placeholder: "" },
        FieldKind::Phone { placeholder: "" },
        FieldKind::Date,
        FieldKind::Select { placeholder: "", options: PHYSICIANS },
        FieldKind::Radio { options: GENDER_OPTIONS },
        FieldKind::Textarea { placeholder: "" },
    ];
    let mut classes: Vec<&str> = kinds.iter().map(FieldKind::css_class).collect();
    classes.sort_unstable();
    classes.dedup();
    assert_eq!(classes.len(), kinds.len());
}

#[test]
fn input_types_cover_only_input_kinds() {
    assert_eq!(FieldKind::Text { placeholder: "x" }.input_type(), Some("text"));
    assert_eq!(FieldKind::Phone { placeholder: "x" }.input_type(), Some("tel"));
    assert_eq!(FieldKind::Date.input_type(), Some("date"));
    assert_eq!(FieldKind::Textarea { placeholder: "x" }.input_type(), None);
    assert_eq!(FieldKind::Radio { options: GENDER_OPTIONS }.input_type(), None);
}

#[test]
fn select_payload_carries_its_options() {
    let kind = FieldKind::Select { placeholder: "Select a physician", options: PHYSICIANS };
    let FieldKind::Select { options, .. } = kind else {
        panic!("expected select");
    };
    assert!(options.contains(&"Leila Cameron"));
}

#[test]
fn field_config_is_plain_copyable_data() {
    let config = FieldConfig {
        name: "name",
        label: "Full Name",
        kind: FieldKind::Text { placeholder: "John Doe" },
    };
    let copy = config;
    assert_eq!(copy, config);
}
