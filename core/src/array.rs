//! Array construction and element eligibility

use crate::col_type::{ArrayColType, ColumnType};
use crate::error::{Error, Result};
use crate::format::{FmtFlags, Format};

/// Returns `true` when values of `typ` may be stored as array elements.
///
/// Nested arrays, legacy vectors and JSON documents are excluded. The check
/// looks only at the variant, never at its parameters.
#[must_use]
pub const fn can_be_in_array(typ: &ColumnType) -> bool {
    !matches!(
        typ,
        ColumnType::Array(_) | ColumnType::Vector(_) | ColumnType::Json(_)
    )
}

/// Build `element[]`.
///
/// `bounds` are the declared dimension sizes (`INT[3]`); they are kept for
/// rendering round-trips and never enforced.
///
/// ```
/// use coltypes_core::{array_of, catalog, Format};
///
/// let ints = array_of(catalog::INT, Vec::new()).unwrap();
/// assert_eq!(ints.to_sql(), "INT[]");
/// assert!(array_of(ints, Vec::new()).is_err());
/// ```
pub fn array_of(element: ColumnType, bounds: Vec<i64>) -> Result<ColumnType> {
    build_array(element, bounds).map(ColumnType::Array)
}

pub(crate) fn build_array(element: ColumnType, bounds: Vec<i64>) -> Result<ArrayColType> {
    if !can_be_in_array(&element) {
        let element = element.to_sql();
        crate::coltypes_trace_cast!(element = %element, "array element type rejected");
        return Err(Error::FeatureNotSupported(element));
    }
    let mut name = String::new();
    element.format_without_collation(&mut name, FmtFlags::SIMPLE);
    name.push_str("[]");
    Ok(ArrayColType::new_unchecked(name, element, bounds))
}
