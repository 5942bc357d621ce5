//! Runtime value type classification
//!
//! A [`ValueType`] describes the type of a datum during expression
//! evaluation. It is distinct from a declared column type: several column
//! types (`INT2`, `INT8`, `BIGINT`, ...) share one value type, and a few
//! value types (`unknown`, anonymous tuples) have no column representation.

#[allow(unused_imports)]
use crate::alloc_prelude::*;

use crate::OidKind;

/// The runtime type of a datum.
///
/// # Examples
///
/// ```
/// use coltypes_types::ValueType;
///
/// let ints = ValueType::array_of(ValueType::Int);
/// assert_eq!(ints.to_string(), "int[]");
/// assert!(ValueType::Null.equivalent(&ValueType::String));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueType {
    /// The type of an untyped `NULL` literal or placeholder
    Null,
    Bool,
    Int,
    Float,
    Decimal,
    String,
    Bytes,
    Date,
    Timestamp,
    TimestampTz,
    Interval,
    Json,
    Uuid,
    Inet,
    Name,
    /// `OID` and its `REG*` aliases
    Oid(OidKind),
    /// Legacy `INT2VECTOR` values
    Int2Vector,
    /// A string compared and ordered under a collation locale
    CollatedString { locale: String },
    /// An array of the element type
    Array(Box<ValueType>),
    /// An anonymous record
    Tuple(Vec<ValueType>),
    /// A type that behaves like `inner` but reports a distinct type OID
    OidWrapper { inner: Box<ValueType>, oid: u32 },
}

impl ValueType {
    /// Array of the given element type
    #[must_use]
    pub fn array_of(element: ValueType) -> Self {
        ValueType::Array(Box::new(element))
    }

    /// String type under the given collation locale
    #[must_use]
    pub fn collated_string(locale: impl Into<String>) -> Self {
        ValueType::CollatedString {
            locale: locale.into(),
        }
    }

    /// Returns `true` for the unknown `NULL` type
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, ValueType::Null)
    }

    /// Element type of an array, if this is one
    #[must_use]
    pub fn element_type(&self) -> Option<&ValueType> {
        match self {
            ValueType::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Strip any OID wrapper, returning the type that defines behavior
    #[must_use]
    pub fn unwrap_oid_wrapper(&self) -> &ValueType {
        match self {
            ValueType::OidWrapper { inner, .. } => inner.unwrap_oid_wrapper(),
            other => other,
        }
    }

    /// Shape-compatibility test used when comparing query result columns.
    ///
    /// `Null` on either side matches any type, including inside arrays and
    /// tuples. This relation is symmetric but not transitive.
    #[must_use]
    pub fn equivalent(&self, other: &ValueType) -> bool {
        match (self, other) {
            (ValueType::Null, _) | (_, ValueType::Null) => true,
            (ValueType::Array(a), ValueType::Array(b)) => a.equivalent(b),
            (ValueType::Tuple(a), ValueType::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equivalent(y))
            }
            _ => self == other,
        }
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueType::Null => f.write_str("unknown"),
            ValueType::Bool => f.write_str("bool"),
            ValueType::Int => f.write_str("int"),
            ValueType::Float => f.write_str("float"),
            ValueType::Decimal => f.write_str("decimal"),
            ValueType::String => f.write_str("string"),
            ValueType::Bytes => f.write_str("bytes"),
            ValueType::Date => f.write_str("date"),
            ValueType::Timestamp => f.write_str("timestamp"),
            ValueType::TimestampTz => f.write_str("timestamptz"),
            ValueType::Interval => f.write_str("interval"),
            ValueType::Json => f.write_str("jsonb"),
            ValueType::Uuid => f.write_str("uuid"),
            ValueType::Inet => f.write_str("inet"),
            ValueType::Name => f.write_str("name"),
            ValueType::Oid(kind) => f.write_str(kind.type_name()),
            ValueType::Int2Vector => f.write_str("int2vector"),
            ValueType::CollatedString { locale } => write!(f, "collatedstring{{{locale}}}"),
            ValueType::Array(elem) => write!(f, "{elem}[]"),
            ValueType::Tuple(fields) => {
                f.write_str("tuple")?;
                if !fields.is_empty() {
                    f.write_str("{")?;
                    for (i, field) in fields.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{field}")?;
                    }
                    f.write_str("}")?;
                }
                Ok(())
            }
            ValueType::OidWrapper { inner, .. } => write!(f, "{inner}"),
        }
    }
}
