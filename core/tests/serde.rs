#![cfg(feature = "serde")]

use coltypes_core::{ColumnType, ResultColumn, ResultColumns, ValueType, array_of, catalog};

#[test]
fn column_types_serialize_tagged() {
    let value = serde_json::to_value(&catalog::SMALLINT).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"type": "int", "name": "SMALLINT", "width": 16, "implicit_width": true})
    );
    let back: ColumnType = serde_json::from_value(value).unwrap();
    assert_eq!(back, catalog::SMALLINT);
}

#[test]
fn arrays_are_validated_on_deserialize() {
    let array = array_of(catalog::TEXT, vec![4]).unwrap();
    let json = serde_json::to_string(&array).unwrap();
    let back: ColumnType = serde_json::from_str(&json).unwrap();
    assert_eq!(back, array);

    let nested = serde_json::json!({
        "type": "array",
        "element_type": serde_json::to_value(&array).unwrap(),
    });
    let err = serde_json::from_value::<ColumnType>(nested).unwrap_err();
    assert!(err.to_string().contains("arrays of TEXT[] not allowed"), "{err}");
}

#[test]
fn result_columns_are_a_plain_list() {
    let columns: ResultColumns = vec![ResultColumn::new("n", ValueType::Null).hidden()].into();
    let value = serde_json::to_value(&columns).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"name": "n", "typ": "null", "table_id": null, "hidden": true}])
    );
}
