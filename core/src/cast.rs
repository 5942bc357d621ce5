//! Mapping between declared column types and runtime value types
//!
//! The two directions are not inverses. Every column type has a value type
//! ([`cast_target_to_value_type`] is total), but some value types, such as
//! anonymous tuples and the unknown `NULL` type, cannot name a column.

use coltypes_types::ValueType;

use crate::array::array_of;
use crate::catalog;
use crate::col_type::{CollatedStringColType, ColumnType};
use crate::error::{Error, Result};
use crate::format::Format;

/// A type that may appear on the right-hand side of a cast.
pub trait CastTargetType: Format {
    /// Runtime type of the values produced by casting to `self`
    fn to_value_type(&self) -> ValueType;
}

impl CastTargetType for ColumnType {
    fn to_value_type(&self) -> ValueType {
        match self {
            ColumnType::Bool(_) => ValueType::Bool,
            ColumnType::Int(_) => ValueType::Int,
            ColumnType::Float(_) => ValueType::Float,
            ColumnType::Decimal(_) => ValueType::Decimal,
            ColumnType::String(_) => ValueType::String,
            ColumnType::Name => ValueType::Name,
            ColumnType::Bytes(_) => ValueType::Bytes,
            ColumnType::Date => ValueType::Date,
            ColumnType::Timestamp => ValueType::Timestamp,
            ColumnType::TimestampTz => ValueType::TimestampTz,
            ColumnType::Interval => ValueType::Interval,
            ColumnType::Json(_) => ValueType::Json,
            ColumnType::Uuid => ValueType::Uuid,
            ColumnType::IpAddr(_) => ValueType::Inet,
            ColumnType::CollatedString(c) => ValueType::collated_string(c.locale.clone()),
            ColumnType::Array(a) => ValueType::array_of(a.element_type().to_value_type()),
            ColumnType::Vector(_) => ValueType::Int2Vector,
            ColumnType::Oid(o) => ValueType::Oid(o.kind),
        }
    }
}

/// Runtime value type produced by casting to `target`.
///
/// ```
/// use coltypes_core::{cast_target_to_value_type, catalog, ValueType};
///
/// assert_eq!(cast_target_to_value_type(&catalog::SMALLINT), ValueType::Int);
/// assert_eq!(cast_target_to_value_type(&catalog::REGTYPE).to_string(), "regtype");
/// ```
pub fn cast_target_to_value_type<T: CastTargetType + ?Sized>(target: &T) -> ValueType {
    target.to_value_type()
}

/// Canonical column type for storing values of type `typ`.
///
/// Fails with [`Error::UnsupportedColumnType`] when `typ` has no column
/// representation.
pub fn value_type_to_column_type(typ: &ValueType) -> Result<ColumnType> {
    match typ {
        ValueType::Bool => Ok(catalog::BOOL),
        ValueType::Int => Ok(catalog::INT),
        ValueType::Float => Ok(catalog::FLOAT),
        ValueType::Decimal => Ok(catalog::DECIMAL),
        ValueType::String => Ok(catalog::STRING),
        ValueType::Bytes => Ok(catalog::BYTES),
        ValueType::Date => Ok(catalog::DATE),
        ValueType::Timestamp => Ok(catalog::TIMESTAMP),
        ValueType::TimestampTz => Ok(catalog::TIMESTAMPTZ),
        ValueType::Interval => Ok(catalog::INTERVAL),
        ValueType::Json => Ok(catalog::JSON),
        ValueType::Uuid => Ok(catalog::UUID),
        ValueType::Inet => Ok(catalog::INET),
        ValueType::Name => Ok(catalog::NAME),
        ValueType::Oid(kind) => Ok(catalog::oid(*kind)),
        ValueType::CollatedString { locale } => {
            Ok(ColumnType::CollatedString(CollatedStringColType {
                name: "STRING".into(),
                length: 0,
                locale: locale.clone(),
            }))
        }
        ValueType::Array(elem) => array_of(value_type_to_column_type(elem)?, Vec::new()),
        ValueType::OidWrapper { inner, .. } => value_type_to_column_type(inner),
        ValueType::Null | ValueType::Int2Vector | ValueType::Tuple(_) => {
            crate::coltypes_trace_cast!(value_type = %typ, "no column type for value type");
            Err(Error::UnsupportedColumnType(typ.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use coltypes_types::OidKind;

    const PRIMITIVES: [ValueType; 14] = [
        ValueType::Bool,
        ValueType::Int,
        ValueType::Float,
        ValueType::Decimal,
        ValueType::String,
        ValueType::Bytes,
        ValueType::Date,
        ValueType::Timestamp,
        ValueType::TimestampTz,
        ValueType::Interval,
        ValueType::Json,
        ValueType::Uuid,
        ValueType::Inet,
        ValueType::Name,
    ];

    #[test]
    fn test_primitive_round_trip() {
        for typ in &PRIMITIVES {
            let col = value_type_to_column_type(typ).unwrap();
            assert_eq!(&cast_target_to_value_type(&col), typ, "{col}");
        }
    }

    #[test]
    fn test_oid_family() {
        for kind in OidKind::ALL {
            let typ = ValueType::Oid(kind);
            let col = value_type_to_column_type(&typ).unwrap();
            assert_eq!(col.to_sql(), kind.as_str());
            assert_eq!(cast_target_to_value_type(&col), typ);
        }
    }

    #[test]
    fn test_aliases_collapse() {
        assert_eq!(catalog::BIGSERIAL.to_value_type(), ValueType::Int);
        assert_eq!(catalog::DOUBLE_PRECISION.to_value_type(), ValueType::Float);
        assert_eq!(catalog::BYTEA.to_value_type(), ValueType::Bytes);
        assert_eq!(catalog::CIDR.to_value_type(), ValueType::Inet);
        assert_eq!(catalog::INT2VECTOR.to_value_type(), ValueType::Int2Vector);
    }

    #[test]
    fn test_collated_and_arrays() {
        let typ = ValueType::array_of(ValueType::collated_string("de"));
        let col = value_type_to_column_type(&typ).unwrap();
        assert_eq!(col.to_sql(), "STRING[] COLLATE de");
        assert_eq!(cast_target_to_value_type(&col), typ);
    }

    #[test]
    fn test_oid_wrapper_resolves_inner() {
        let typ = ValueType::OidWrapper {
            inner: Box::new(ValueType::String),
            oid: 1043,
        };
        assert_eq!(value_type_to_column_type(&typ).unwrap(), catalog::STRING);
    }

    #[test]
    fn test_unsupported() {
        for typ in [
            ValueType::Null,
            ValueType::Int2Vector,
            ValueType::Tuple(vec![ValueType::Int, ValueType::String]),
            ValueType::array_of(ValueType::Tuple(Vec::new())),
        ] {
            let err = value_type_to_column_type(&typ).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidTableDefinition, "{typ}");
        }
        let err = value_type_to_column_type(&ValueType::array_of(ValueType::Json)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::FeatureNotSupported);
    }
}
