//! Canonical column types and validated constructors
//!
//! Parameterless types and types at their default width are `const` items,
//! so handing one out never allocates. Constructors validate explicit
//! parameters and fall back to the shared constant when the request matches
//! the default.

use std::borrow::Cow;
use std::sync::LazyLock;

use coltypes_types::OidKind;

use crate::col_type::{
    BoolColType, BytesColType, CollatedStringColType, ColumnType, DecimalColType, FloatColType,
    IntColType, IpAddrColType, JsonColType, OidColType, StringColType, VectorColType,
};
use crate::error::{Error, Result};

const fn bool_type(name: &'static str) -> ColumnType {
    ColumnType::Bool(BoolColType {
        name: Cow::Borrowed(name),
    })
}

const fn int_type(name: &'static str, width: i32, implicit_width: bool) -> ColumnType {
    ColumnType::Int(IntColType {
        name: Cow::Borrowed(name),
        width,
        implicit_width,
    })
}

const fn float_type(name: &'static str, width: i32) -> ColumnType {
    ColumnType::Float(FloatColType {
        name: Cow::Borrowed(name),
        prec: 0,
        width,
        prec_specified: false,
    })
}

const fn decimal_type(name: &'static str) -> ColumnType {
    ColumnType::Decimal(DecimalColType {
        name: Cow::Borrowed(name),
        prec: 0,
        scale: 0,
    })
}

const fn string_type(name: &'static str) -> ColumnType {
    ColumnType::String(StringColType {
        name: Cow::Borrowed(name),
        length: 0,
    })
}

const fn bytes_type(name: &'static str) -> ColumnType {
    ColumnType::Bytes(BytesColType {
        name: Cow::Borrowed(name),
    })
}

const fn json_type(name: &'static str) -> ColumnType {
    ColumnType::Json(JsonColType {
        name: Cow::Borrowed(name),
    })
}

const fn ip_type(name: &'static str) -> ColumnType {
    ColumnType::IpAddr(IpAddrColType {
        name: Cow::Borrowed(name),
    })
}

pub const BOOL: ColumnType = bool_type("BOOL");
pub const BOOLEAN: ColumnType = bool_type("BOOLEAN");

pub const BIT: ColumnType = int_type("BIT", 1, true);
pub const INT: ColumnType = int_type("INT", 0, false);
pub const INT2: ColumnType = int_type("INT2", 16, true);
pub const INT4: ColumnType = int_type("INT4", 32, true);
pub const INT8: ColumnType = int_type("INT8", 0, false);
pub const INT64: ColumnType = int_type("INT64", 0, false);
pub const INTEGER: ColumnType = int_type("INTEGER", 0, false);
pub const SMALLINT: ColumnType = int_type("SMALLINT", 16, true);
pub const BIGINT: ColumnType = int_type("BIGINT", 0, false);
pub const SERIAL: ColumnType = int_type("SERIAL", 0, false);
pub const SMALLSERIAL: ColumnType = int_type("SMALLSERIAL", 0, false);
pub const BIGSERIAL: ColumnType = int_type("BIGSERIAL", 0, false);

pub const REAL: ColumnType = float_type("REAL", 32);
pub const FLOAT: ColumnType = float_type("FLOAT", 64);
pub const FLOAT4: ColumnType = float_type("FLOAT4", 32);
pub const FLOAT8: ColumnType = float_type("FLOAT8", 64);
pub const DOUBLE_PRECISION: ColumnType = float_type("DOUBLE PRECISION", 64);

pub const DEC: ColumnType = decimal_type("DEC");
pub const DECIMAL: ColumnType = decimal_type("DECIMAL");
pub const NUMERIC: ColumnType = decimal_type("NUMERIC");

pub const DATE: ColumnType = ColumnType::Date;
pub const TIMESTAMP: ColumnType = ColumnType::Timestamp;
pub const TIMESTAMPTZ: ColumnType = ColumnType::TimestampTz;
pub const INTERVAL: ColumnType = ColumnType::Interval;
pub const UUID: ColumnType = ColumnType::Uuid;
pub const NAME: ColumnType = ColumnType::Name;

pub const INET: ColumnType = ip_type("INET");
pub const CIDR: ColumnType = ip_type("CIDR");

pub const CHAR: ColumnType = string_type("CHAR");
pub const VARCHAR: ColumnType = string_type("VARCHAR");
pub const STRING: ColumnType = string_type("STRING");
pub const TEXT: ColumnType = string_type("TEXT");

pub const BLOB: ColumnType = bytes_type("BLOB");
pub const BYTES: ColumnType = bytes_type("BYTES");
pub const BYTEA: ColumnType = bytes_type("BYTEA");

pub const JSON: ColumnType = json_type("JSON");
pub const JSONB: ColumnType = json_type("JSONB");

pub const OID: ColumnType = oid(OidKind::Oid);
pub const REGCLASS: ColumnType = oid(OidKind::RegClass);
pub const REGNAMESPACE: ColumnType = oid(OidKind::RegNamespace);
pub const REGPROC: ColumnType = oid(OidKind::RegProc);
pub const REGPROCEDURE: ColumnType = oid(OidKind::RegProcedure);
pub const REGTYPE: ColumnType = oid(OidKind::RegType);

/// `INT2VECTOR`, a vector of `INT` elements
pub static INT2VECTOR: LazyLock<ColumnType> = LazyLock::new(|| {
    ColumnType::Vector(VectorColType {
        name: Cow::Borrowed("INT2VECTOR"),
        element_type: Box::new(INT),
    })
});

/// Column type for a member of the OID family
#[must_use]
pub const fn oid(kind: OidKind) -> ColumnType {
    ColumnType::Oid(OidColType { kind })
}

/// `BIT(width)`
pub fn new_int_bit_type(width: i32) -> Result<ColumnType> {
    if width < 1 {
        return Err(Error::invalid_parameter(
            "length for type bit must be at least 1",
        ));
    }
    Ok(ColumnType::Int(IntColType {
        name: Cow::Borrowed("BIT"),
        width,
        implicit_width: false,
    }))
}

/// `FLOAT` or `FLOAT(prec)`.
///
/// An unspecified zero precision yields the shared [`FLOAT`] constant.
pub fn new_float(prec: i32, prec_specified: bool) -> Result<ColumnType> {
    if prec == 0 && !prec_specified {
        return Ok(FLOAT);
    }
    if prec < 1 {
        return Err(Error::invalid_parameter(
            "precision for type float must be at least 1 bit",
        ));
    }
    if prec > 53 {
        return Err(Error::invalid_parameter(
            "precision for type float must be less than 54 bits",
        ));
    }
    Ok(ColumnType::Float(FloatColType {
        name: Cow::Borrowed("FLOAT"),
        prec,
        width: 64,
        prec_specified,
    }))
}

/// `DECIMAL(precision[, scale])` under the given keyword.
pub fn new_decimal(
    name: impl Into<Cow<'static, str>>,
    precision: i32,
    scale: i32,
) -> Result<ColumnType> {
    let name = name.into();
    if precision < 1 {
        return Err(Error::invalid_parameter(format!(
            "precision for type {} must be at least 1",
            name.to_lowercase()
        )));
    }
    if scale < 0 || scale > precision {
        return Err(Error::invalid_parameter(format!(
            "scale ({scale}) must be between 0 and precision ({precision})"
        )));
    }
    Ok(ColumnType::Decimal(DecimalColType {
        name,
        prec: precision,
        scale,
    }))
}

/// A length-bounded string type, e.g. `VARCHAR(10)`.
pub fn new_string(name: impl Into<Cow<'static, str>>, length: i32) -> Result<ColumnType> {
    let name = name.into();
    if length < 1 {
        return Err(Error::invalid_parameter(format!(
            "length for type {} must be at least 1",
            name.to_lowercase()
        )));
    }
    Ok(ColumnType::String(StringColType { name, length }))
}

/// Attach a collation to a string type.
///
/// An already-collated string has its locale replaced. Any other type fails
/// with [`Error::CollationNotSupported`].
pub fn collated(typ: ColumnType, locale: impl Into<String>) -> Result<ColumnType> {
    match typ {
        ColumnType::String(s) => Ok(ColumnType::CollatedString(CollatedStringColType {
            name: s.name,
            length: s.length,
            locale: locale.into(),
        })),
        ColumnType::CollatedString(c) => Ok(ColumnType::CollatedString(CollatedStringColType {
            locale: locale.into(),
            ..c
        })),
        other => Err(Error::CollationNotSupported(other.to_string())),
    }
}

/// Parameter shape accepted by a keyword
enum Params {
    None,
    Bit,
    Float,
    Decimal,
    Length,
}

/// Resolve a type keyword and its numeric parameters.
///
/// Keywords are case-insensitive and runs of whitespace inside multi-word
/// names are collapsed, so `double   precision` finds [`DOUBLE_PRECISION`].
///
/// ```
/// use coltypes_core::{catalog, Format};
///
/// assert_eq!(catalog::lookup("varchar", &[10]).unwrap().to_sql(), "VARCHAR(10)");
/// assert_eq!(catalog::lookup("character varying", &[]).unwrap(), catalog::VARCHAR);
/// assert!(catalog::lookup("date", &[3]).is_err());
/// ```
pub fn lookup(name: &str, params: &[i64]) -> Result<ColumnType> {
    let normalized = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase();

    let (typ, accepts) = match normalized.as_str() {
        "BOOL" => (BOOL, Params::None),
        "BOOLEAN" => (BOOLEAN, Params::None),
        "BIT" => (BIT, Params::Bit),
        "INT" => (INT, Params::None),
        "INT2" => (INT2, Params::None),
        "INT4" => (INT4, Params::None),
        "INT8" => (INT8, Params::None),
        "INT64" => (INT64, Params::None),
        "INTEGER" => (INTEGER, Params::None),
        "SMALLINT" => (SMALLINT, Params::None),
        "BIGINT" => (BIGINT, Params::None),
        "SERIAL" => (SERIAL, Params::None),
        "SMALLSERIAL" => (SMALLSERIAL, Params::None),
        "BIGSERIAL" => (BIGSERIAL, Params::None),
        "REAL" => (REAL, Params::None),
        "FLOAT" => (FLOAT, Params::Float),
        "FLOAT4" => (FLOAT4, Params::None),
        "FLOAT8" => (FLOAT8, Params::None),
        "DOUBLE PRECISION" => (DOUBLE_PRECISION, Params::None),
        "DEC" => (DEC, Params::Decimal),
        "DECIMAL" => (DECIMAL, Params::Decimal),
        "NUMERIC" => (NUMERIC, Params::Decimal),
        "DATE" => (DATE, Params::None),
        "TIMESTAMP" | "TIMESTAMP WITHOUT TIME ZONE" => (TIMESTAMP, Params::None),
        "TIMESTAMPTZ" | "TIMESTAMP WITH TIME ZONE" => (TIMESTAMPTZ, Params::None),
        "INTERVAL" => (INTERVAL, Params::None),
        "UUID" => (UUID, Params::None),
        "INET" => (INET, Params::None),
        "CIDR" => (CIDR, Params::None),
        "CHAR" | "CHARACTER" => (CHAR, Params::Length),
        "VARCHAR" | "CHARACTER VARYING" => (VARCHAR, Params::Length),
        "STRING" => (STRING, Params::Length),
        "TEXT" => (TEXT, Params::None),
        "NAME" => (NAME, Params::None),
        "BLOB" => (BLOB, Params::None),
        "BYTES" => (BYTES, Params::None),
        "BYTEA" => (BYTEA, Params::None),
        "JSON" => (JSON, Params::None),
        "JSONB" => (JSONB, Params::None),
        "INT2VECTOR" => ((*INT2VECTOR).clone(), Params::None),
        other => match OidKind::parse(other) {
            Some(kind) => (oid(kind), Params::None),
            None => return Err(Error::UndefinedType(name.trim().to_string())),
        },
    };

    if params.is_empty() {
        return Ok(typ);
    }
    let keyword = typ.to_string();
    let params = params
        .iter()
        .map(|&p| {
            i32::try_from(p).map_err(|_| {
                Error::invalid_parameter(format!("parameter {p} out of range for type {keyword}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match (accepts, params.as_slice()) {
        (Params::None, _) => Err(Error::invalid_parameter(format!(
            "type {keyword} does not accept parameters"
        ))),
        (Params::Bit, [width]) => new_int_bit_type(*width),
        (Params::Float, [prec]) => new_float(*prec, true),
        (Params::Decimal, [prec]) => new_decimal(decimal_name(typ), *prec, 0),
        (Params::Decimal, [prec, scale]) => new_decimal(decimal_name(typ), *prec, *scale),
        (Params::Length, [length]) => new_string(string_name(typ), *length),
        (Params::Decimal, _) => Err(Error::invalid_parameter(format!(
            "type {keyword} accepts at most 2 parameters"
        ))),
        _ => Err(Error::invalid_parameter(format!(
            "type {keyword} accepts at most 1 parameter"
        ))),
    }
}

fn decimal_name(typ: ColumnType) -> Cow<'static, str> {
    match typ {
        ColumnType::Decimal(d) => d.name,
        _ => Cow::Borrowed("DECIMAL"),
    }
}

fn string_name(typ: ColumnType) -> Cow<'static, str> {
    match typ {
        ColumnType::String(s) => s.name,
        _ => Cow::Borrowed("STRING"),
    }
}
