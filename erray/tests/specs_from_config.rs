use erray::{build, BuildErrorKind, Value};

#[test]
fn json_spec_list_builds_a_registry() {
    let specs: Value = serde_json::from_str(
        r#"[
            "InvalidX",
            {"name": "InvalidY", "message": "Invalid Y value for this function", "code": 500},
            {"name": "NotFound", "code": 404}
        ]"#,
    )
    .expect("valid json");

    let registry = build(specs).expect("valid specs");
    assert_eq!(registry.len(), 3);
    assert_eq!(registry["InvalidY"].code(), Some(500));
    assert_eq!(
        registry["InvalidY"].default_message(),
        Some("Invalid Y value for this function")
    );
}

#[test]
fn json_null_is_an_invalid_container() {
    let specs: Value = serde_json::from_str("null").expect("valid json");
    assert_eq!(
        build(specs).expect_err("build should fail").kind(),
        BuildErrorKind::InvalidSpecContainer
    );
}

#[test]
fn json_object_message_is_rejected() {
    let specs: Value =
        serde_json::from_str(r#"[{"name": "X", "message": {}}]"#).expect("valid json");
    assert_eq!(
        build(specs).expect_err("build should fail").kind(),
        BuildErrorKind::InvalidMessageType
    );
}

#[test]
fn toml_table_array_builds_a_registry() {
    let document: Value = toml::from_str(
        r#"
        [[errors]]
        name = "Teapot"
        message = "short and stout"
        code = 418

        [[errors]]
        name = "Gone"
        "#,
    )
    .expect("valid toml");

    let specs = document
        .as_record()
        .and_then(|fields| fields.get("errors"))
        .cloned()
        .expect("errors table");
    let registry = build(specs).expect("valid specs");
    assert_eq!(registry.names(), ["Gone", "Teapot"]);
    assert_eq!(registry["Teapot"].new_error().to_string(), "Teapot: short and stout");
}

#[test]
fn json_code_beyond_i64_is_rejected() {
    let specs: Value = serde_json::from_str(r#"[{"name": "X", "code": 18446744073709551615}]"#)
        .expect("valid json");
    let err = build(specs).expect_err("build should fail");
    assert_eq!(err.kind(), BuildErrorKind::InvalidCodeType);
    assert!(
        err.to_string().contains("an integer within the i64 range"),
        "{err}"
    );
}
