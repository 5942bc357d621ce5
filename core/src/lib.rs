//! SQL column types for the coltypes front end
//!
//! This crate holds the declared-type half of the type system:
//!
//! - [`ColumnType`] - every declarable column / cast-target type
//! - [`catalog`] - canonical type constants and validated constructors
//! - [`cast`] - mapping between column types and runtime [`ValueType`]s
//! - [`limit_decimal_width`] - precision/scale enforcement for decimal casts
//! - [`array_of`] - array construction with element-eligibility checks
//! - [`ResultColumns`] - result-shape compatibility checks
//! - [`Format`] / [`pretty`] - canonical SQL rendering
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization
//! - `tracing` - Emit `tracing` debug events from resolvers and limiters

pub mod array;
pub mod cast;
pub mod catalog;
pub mod col_type;
pub mod decimal;
pub mod error;
pub mod format;
pub mod pretty;
pub mod result_columns;
mod trace;

pub use coltypes_types::{OidKind, SqlTyped, ValueType};

pub use array::{array_of, can_be_in_array};
pub use cast::{CastTargetType, cast_target_to_value_type, value_type_to_column_type};
pub use col_type::{
    ArrayColType, BoolColType, BytesColType, CollatedStringColType, ColumnType, DecimalColType,
    FloatColType, IntColType, IpAddrColType, JsonColType, OidColType, StringColType, VectorColType,
};
pub use decimal::{Numeric, ParseNumericError, limit_decimal_width};
pub use error::{Error, ErrorCode, Result};
pub use format::{FmtFlags, Format, encode_ident};
pub use pretty::{PrettyCfg, PrettyCfgError, pretty};
pub use result_columns::{ResultColumn, ResultColumns, TableId, types_equal};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::catalog;
    pub use crate::{
        CastTargetType, ColumnType, Error, ErrorCode, FmtFlags, Format, Numeric, PrettyCfg, ResultColumn,
        ResultColumns, ValueType, array_of, cast_target_to_value_type, limit_decimal_width,
        value_type_to_column_type,
    };
}
