//! Column type definitions
//!
//! [`ColumnType`] is the closed set of types that can appear in a column
//! definition or as the target of a cast. Values are immutable once built;
//! canonical instances live in [`crate::catalog`].

use std::borrow::Cow;
use std::fmt::Write as _;

use coltypes_types::OidKind;

use crate::format::{FmtFlags, Format, encode_ident};

/// A declared SQL column or cast-target type.
///
/// # Examples
///
/// ```
/// use coltypes_core::{catalog, Format};
///
/// assert_eq!(catalog::SMALLINT.to_sql(), "SMALLINT");
/// assert_eq!(catalog::new_int_bit_type(5).unwrap().to_sql(), "BIT(5)");
/// assert_eq!(catalog::TIMESTAMPTZ.to_string(), "TIMESTAMP WITH TIME ZONE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ColumnType {
    /// `BOOL` / `BOOLEAN`
    Bool(BoolColType),
    /// `INT`, `INTEGER`, `SMALLINT`, `BIGINT`, `BIT`, serial aliases
    Int(IntColType),
    /// `REAL`, `FLOAT`, `DOUBLE PRECISION`
    Float(FloatColType),
    /// `DECIMAL`, `DEC`, `NUMERIC`
    Decimal(DecimalColType),
    /// `DATE`
    Date,
    /// `TIMESTAMP`
    Timestamp,
    /// `TIMESTAMP WITH TIME ZONE`
    TimestampTz,
    /// `INTERVAL`
    Interval,
    /// `JSON` / `JSONB`
    Json(JsonColType),
    /// `UUID`
    Uuid,
    /// `INET` / `CIDR`
    IpAddr(IpAddrColType),
    /// `STRING`, `TEXT`, `CHAR`, `VARCHAR`
    String(StringColType),
    /// `NAME`
    Name,
    /// `BYTES`, `BYTEA`, `BLOB`
    Bytes(BytesColType),
    /// A string type with a `COLLATE` clause
    CollatedString(CollatedStringColType),
    /// `T[]`
    Array(ArrayColType),
    /// Legacy fixed-element vectors such as `INT2VECTOR`
    Vector(VectorColType),
    /// `OID` and the `REG*` aliases
    Oid(OidColType),
}

/// `BOOL` or `BOOLEAN`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoolColType {
    pub name: Cow<'static, str>,
}

/// An integer type.
///
/// `width` is in bits. When `implicit_width` is set the width is implied by
/// the keyword (`SMALLINT`, `INT2`) and is never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntColType {
    pub name: Cow<'static, str>,
    pub width: i32,
    pub implicit_width: bool,
}

impl IntColType {
    /// Returns `true` when the column should default to a unique,
    /// incrementing value.
    ///
    /// The serial keywords are resolved to plain integers before any column
    /// is stored, so only the spelling identifies them.
    #[must_use]
    pub fn is_serial(&self) -> bool {
        matches!(&*self.name, "SERIAL" | "SMALLSERIAL" | "BIGSERIAL")
    }
}

/// A binary floating-point type. `prec` is in bits, `width` in bits of storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatColType {
    pub name: Cow<'static, str>,
    pub prec: i32,
    pub width: i32,
    /// `true` if `prec` was written out rather than defaulted
    pub prec_specified: bool,
}

/// A fixed-point type. `prec == 0` means unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalColType {
    pub name: Cow<'static, str>,
    pub prec: i32,
    pub scale: i32,
}

/// `JSON` or `JSONB`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JsonColType {
    pub name: Cow<'static, str>,
}

/// `INET` or `CIDR`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IpAddrColType {
    pub name: Cow<'static, str>,
}

/// A string type. `length == 0` means unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringColType {
    pub name: Cow<'static, str>,
    pub length: i32,
}

/// `BYTES`, `BYTEA` or `BLOB`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BytesColType {
    pub name: Cow<'static, str>,
}

/// A string type bound to a collation locale, e.g. `TEXT COLLATE en`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollatedStringColType {
    pub name: Cow<'static, str>,
    pub length: i32,
    pub locale: String,
}

impl CollatedStringColType {
    /// Render the type without its `COLLATE` clause
    fn format_base(&self, buf: &mut String) {
        format_string_base(buf, &self.name, self.length);
    }
}

/// An array type.
///
/// Only [`crate::array_of`] builds one, so the element is always
/// array-eligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawArrayColType"))]
pub struct ArrayColType {
    name: String,
    element_type: Box<ColumnType>,
    bounds: Vec<i64>,
}

impl ArrayColType {
    pub(crate) fn new_unchecked(name: String, element_type: ColumnType, bounds: Vec<i64>) -> Self {
        Self {
            name,
            element_type: Box::new(element_type),
            bounds,
        }
    }

    /// Synthesized type name, e.g. `INT[]`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn element_type(&self) -> &ColumnType {
        &self.element_type
    }

    /// Declared dimension bounds. Accepted for compatibility and never enforced.
    #[must_use]
    pub fn bounds(&self) -> &[i64] {
        &self.bounds
    }

    /// Consume the array, returning its element type
    #[must_use]
    pub fn into_element_type(self) -> ColumnType {
        *self.element_type
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawArrayColType {
    element_type: ColumnType,
    #[serde(default)]
    bounds: Vec<i64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawArrayColType> for ArrayColType {
    type Error = crate::Error;

    fn try_from(raw: RawArrayColType) -> Result<Self, Self::Error> {
        crate::array::build_array(raw.element_type, raw.bounds)
    }
}

/// `INT2VECTOR` and friends: PostgreSQL's older, limited arrays. Never
/// persisted and never valid as an array element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorColType {
    pub name: Cow<'static, str>,
    pub element_type: Box<ColumnType>,
}

/// `OID` or one of its `REG*` aliases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OidColType {
    pub kind: OidKind,
}

impl OidColType {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

fn format_string_base(buf: &mut String, name: &str, length: i32) {
    buf.push_str(name);
    if length > 0 {
        let _ = write!(buf, "({length})");
    }
}

fn format_collate(buf: &mut String, locale: &str, flags: FmtFlags) {
    buf.push_str(" COLLATE ");
    encode_ident(buf, locale, flags);
}

impl ColumnType {
    /// Collation locale bound to this type or to its array elements
    #[must_use]
    pub fn collation_locale(&self) -> Option<&str> {
        match self {
            ColumnType::CollatedString(c) => Some(&c.locale),
            ColumnType::Array(a) => match a.element_type() {
                ColumnType::CollatedString(c) => Some(&c.locale),
                _ => None,
            },
            _ => None,
        }
    }

    /// Render everything except a trailing `COLLATE` clause
    pub fn format_without_collation(&self, buf: &mut String, flags: FmtFlags) {
        match self {
            ColumnType::CollatedString(c) => c.format_base(buf),
            ColumnType::Array(a) => buf.push_str(&a.name),
            other => other.format(buf, flags),
        }
    }

    /// Returns `true` for `SERIAL`, `SMALLSERIAL` and `BIGSERIAL`
    #[must_use]
    pub fn is_serial(&self) -> bool {
        matches!(self, ColumnType::Int(int) if int.is_serial())
    }
}

impl Format for ColumnType {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        match self {
            ColumnType::Bool(b) => buf.push_str(&b.name),
            ColumnType::Int(int) => {
                buf.push_str(&int.name);
                if int.width > 0 && !int.implicit_width {
                    let _ = write!(buf, "({})", int.width);
                }
            }
            ColumnType::Float(float) => {
                buf.push_str(&float.name);
                if float.prec_specified && float.prec > 0 {
                    let _ = write!(buf, "({})", float.prec);
                }
            }
            ColumnType::Decimal(dec) => {
                buf.push_str(&dec.name);
                if dec.prec > 0 {
                    let _ = write!(buf, "({}", dec.prec);
                    if dec.scale > 0 {
                        let _ = write!(buf, ",{}", dec.scale);
                    }
                    buf.push(')');
                }
            }
            ColumnType::Date => buf.push_str("DATE"),
            ColumnType::Timestamp => buf.push_str("TIMESTAMP"),
            ColumnType::TimestampTz => buf.push_str("TIMESTAMP WITH TIME ZONE"),
            ColumnType::Interval => buf.push_str("INTERVAL"),
            ColumnType::Json(json) => buf.push_str(&json.name),
            ColumnType::Uuid => buf.push_str("UUID"),
            ColumnType::IpAddr(ip) => buf.push_str(&ip.name),
            ColumnType::String(s) => format_string_base(buf, &s.name, s.length),
            ColumnType::Name => buf.push_str("NAME"),
            ColumnType::Bytes(b) => buf.push_str(&b.name),
            ColumnType::CollatedString(c) => {
                c.format_base(buf);
                format_collate(buf, &c.locale, flags);
            }
            ColumnType::Array(a) => {
                buf.push_str(&a.name);
                // Collation binds to the elements, so it follows the brackets.
                if let ColumnType::CollatedString(c) = a.element_type() {
                    format_collate(buf, &c.locale, flags);
                }
            }
            ColumnType::Vector(v) => buf.push_str(&v.name),
            ColumnType::Oid(oid) => buf.push_str(oid.name()),
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn int(name: &'static str, width: i32, implicit_width: bool) -> ColumnType {
        ColumnType::Int(IntColType {
            name: Cow::Borrowed(name),
            width,
            implicit_width,
        })
    }

    #[test]
    fn test_int_width_rendering() {
        assert_eq!(int("BIT", 5, false).to_sql(), "BIT(5)");
        assert_eq!(int("SMALLINT", 16, true).to_sql(), "SMALLINT");
        assert_eq!(int("INT", 0, false).to_sql(), "INT");
        assert_eq!(catalog::INT4.to_sql(), "INT4");
        assert_eq!(catalog::BIT.to_sql(), "BIT");
    }

    #[test]
    fn test_float_rendering() {
        assert_eq!(catalog::FLOAT.to_sql(), "FLOAT");
        assert_eq!(catalog::DOUBLE_PRECISION.to_sql(), "DOUBLE PRECISION");
        let float = ColumnType::Float(FloatColType {
            name: Cow::Borrowed("FLOAT"),
            prec: 17,
            width: 64,
            prec_specified: true,
        });
        assert_eq!(float.to_sql(), "FLOAT(17)");
        let defaulted = ColumnType::Float(FloatColType {
            name: Cow::Borrowed("FLOAT"),
            prec: 17,
            width: 64,
            prec_specified: false,
        });
        assert_eq!(defaulted.to_sql(), "FLOAT");
    }

    #[test]
    fn test_decimal_rendering() {
        let dec = |prec, scale| {
            ColumnType::Decimal(DecimalColType {
                name: Cow::Borrowed("DECIMAL"),
                prec,
                scale,
            })
        };
        assert_eq!(dec(0, 0).to_sql(), "DECIMAL");
        assert_eq!(dec(10, 0).to_sql(), "DECIMAL(10)");
        assert_eq!(dec(10, 2).to_sql(), "DECIMAL(10,2)");
        assert_eq!(dec(0, 2).to_sql(), "DECIMAL");
    }

    #[test]
    fn test_fixed_keywords() {
        assert_eq!(ColumnType::Date.to_sql(), "DATE");
        assert_eq!(ColumnType::Timestamp.to_sql(), "TIMESTAMP");
        assert_eq!(ColumnType::TimestampTz.to_sql(), "TIMESTAMP WITH TIME ZONE");
        assert_eq!(ColumnType::Interval.to_sql(), "INTERVAL");
        assert_eq!(ColumnType::Uuid.to_sql(), "UUID");
        assert_eq!(ColumnType::Name.to_sql(), "NAME");
        assert_eq!(catalog::oid(OidKind::RegProcedure).to_sql(), "REGPROCEDURE");
        assert_eq!(catalog::INT2VECTOR.to_sql(), "INT2VECTOR");
    }

    #[test]
    fn test_collated_string_rendering() {
        let collated = ColumnType::CollatedString(CollatedStringColType {
            name: Cow::Borrowed("VARCHAR"),
            length: 10,
            locale: "de_DE".into(),
        });
        assert_eq!(collated.to_sql(), "VARCHAR(10) COLLATE \"de_DE\"");
        assert_eq!(
            collated.to_sql_with(FmtFlags::BARE_IDENTIFIERS),
            "VARCHAR(10) COLLATE de_DE"
        );
        let mut base = String::new();
        collated.format_without_collation(&mut base, FmtFlags::SIMPLE);
        assert_eq!(base, "VARCHAR(10)");
        assert_eq!(collated.collation_locale(), Some("de_DE"));
    }

    #[test]
    fn test_is_serial() {
        assert!(catalog::SERIAL.is_serial());
        assert!(catalog::SMALLSERIAL.is_serial());
        assert!(catalog::BIGSERIAL.is_serial());
        assert!(!catalog::BIGINT.is_serial());
        assert!(!int("serial", 0, false).is_serial());
        assert!(!ColumnType::Date.is_serial());
    }
}
