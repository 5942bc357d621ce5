//! # coltypes
//!
//! SQL column types for a PostgreSQL-compatible front end: the canonical
//! catalog of declarable types, cast-target resolution against runtime value
//! types, decimal precision/scale enforcement and canonical SQL rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use coltypes::prelude::*;
//!
//! # fn main() -> coltypes::Result<()> {
//! let typ = catalog::lookup("numeric", &[6, 2])?;
//! assert_eq!(typ.to_sql(), "NUMERIC(6,2)");
//! assert_eq!(cast_target_to_value_type(&typ), ValueType::Decimal);
//!
//! let mut value: Numeric = "1234.567".parse().expect("numeric literal");
//! limit_decimal_width(&mut value, 6, 2)?;
//! assert_eq!(value.to_string(), "1234.57");
//!
//! let names = array_of(catalog::collated(catalog::TEXT, "en")?, Vec::new())?;
//! assert_eq!(names.to_string(), "TEXT[] COLLATE en");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature        | Effect                                               |
//! |----------------|------------------------------------------------------|
//! | `std`          | Standard library support (enabled by default)        |
//! | `serde`        | `Serialize`/`Deserialize` for types and columns      |
//! | `tracing`      | Debug events from resolvers and the decimal limiter  |
//! | `rust-decimal` | Classify `rust_decimal::Decimal` host values         |

pub use coltypes_core::error::{Error, ErrorCode, Result};
pub use coltypes_core::{
    ArrayColType, BoolColType, BytesColType, CastTargetType, CollatedStringColType, ColumnType,
    DecimalColType, FloatColType, FmtFlags, Format, IntColType, IpAddrColType, JsonColType,
    Numeric, OidColType, ParseNumericError, PrettyCfg, PrettyCfgError, ResultColumn,
    ResultColumns, StringColType, TableId, VectorColType, array_of, can_be_in_array,
    cast_target_to_value_type, encode_ident, limit_decimal_width, pretty, types_equal,
    value_type_to_column_type,
};
pub use coltypes_core::{catalog, decimal};
pub use coltypes_types::{OidKind, OidParseError, SqlTyped, ValueType};

/// Runtime value types and host-value classification
pub mod types {
    pub use coltypes_types::*;
}

/// Prelude module for commonly used items
pub mod prelude {
    pub use coltypes_core::prelude::*;
    pub use coltypes_types::prelude::*;
}
