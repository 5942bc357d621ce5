//! Typing query arguments supplied from Rust and storing them in columns

use coltypes::prelude::*;
use std::time::Duration;

fn column_for(value: &dyn SqlTyped) -> Result<String, Error> {
    value_type_to_column_type(&value.value_type()).map(|c| c.to_sql())
}

#[test]
fn host_values_map_to_canonical_columns() {
    assert_eq!(column_for(&true).unwrap(), "BOOL");
    assert_eq!(column_for(&7i64).unwrap(), "INT");
    assert_eq!(column_for(&1.5f64).unwrap(), "FLOAT");
    assert_eq!(column_for(&"abc").unwrap(), "STRING");
    assert_eq!(column_for(&vec![1u8, 2]).unwrap(), "BYTES");
    assert_eq!(column_for(&Duration::from_secs(3)).unwrap(), "INTERVAL");
    assert_eq!(column_for(&std::time::SystemTime::UNIX_EPOCH).unwrap(), "TIMESTAMP");
}

#[test]
fn null_arguments_have_no_column() {
    let err = column_for(&None::<i32>).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTableDefinition);
    assert_eq!(
        err.to_string(),
        "value type unknown cannot be used for table columns"
    );
}

#[test]
fn null_arguments_match_any_result_column() {
    let args: [&dyn SqlTyped; 3] = [&1i32, &None::<String>, &"x"];
    let produced: ResultColumns = args
        .iter()
        .enumerate()
        .map(|(i, arg)| ResultColumn::new(format!("${}", i + 1), arg.value_type()))
        .collect();
    let expected: ResultColumns = [ValueType::Int, ValueType::Bool, ValueType::String]
        .into_iter()
        .map(|typ| ResultColumn::new("col", typ))
        .collect();

    assert!(produced.types_equal(&expected));
    assert!(expected.types_equal(&produced));
    assert_eq!(produced.to_string(), "(\"$1\" int, \"$2\" unknown, \"$3\" string)");
}
