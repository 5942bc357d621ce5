use core::fmt;

use coltypes_types::ValueType;
use thiserror::Error;

/// PostgreSQL SQLSTATE classes surfaced by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `22023`
    InvalidParameterValue,
    /// `22003`
    NumericValueOutOfRange,
    /// `0A000`
    FeatureNotSupported,
    /// `42P16`
    InvalidTableDefinition,
    /// `42704`
    UndefinedObject,
    /// `42804`
    DatatypeMismatch,
}

impl ErrorCode {
    /// Five-character SQLSTATE
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameterValue => "22023",
            ErrorCode::NumericValueOutOfRange => "22003",
            ErrorCode::FeatureNotSupported => "0A000",
            ErrorCode::InvalidTableDefinition => "42P16",
            ErrorCode::UndefinedObject => "42704",
            ErrorCode::DatatypeMismatch => "42804",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exclusive upper bound on the absolute value a decimal column accepts,
/// stored as the number of integer digits allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalBound(pub i32);

impl fmt::Display for DecimalBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("1"),
            digits => write!(f, "10^{digits}"),
        }
    }
}

/// Errors raised while building, resolving or limiting column types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A type parameter is outside its legal domain
    #[error("{0}")]
    InvalidParameterValue(String),

    /// A decimal does not fit the requested precision and scale after rounding
    #[error(
        "value with precision {precision}, scale {scale} must round to an absolute value less than {bound}"
    )]
    NumericValueOutOfRange {
        precision: i32,
        scale: i32,
        bound: DecimalBound,
    },

    /// The requested scale is beyond what the decimal engine can represent
    #[error("scale out of range")]
    ScaleOutOfRange,

    /// Arrays were requested over an ineligible element type
    #[error("arrays of {0} not allowed")]
    FeatureNotSupported(String),

    /// A value type has no column type representation
    #[error("value type {0} cannot be used for table columns")]
    UnsupportedColumnType(ValueType),

    /// No type with this name exists
    #[error("type \"{0}\" does not exist")]
    UndefinedType(String),

    /// COLLATE applied to a non-string type
    #[error("collations are not supported by type {0}")]
    CollationNotSupported(String),
}

impl Error {
    /// SQLSTATE class of this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidParameterValue(_) => ErrorCode::InvalidParameterValue,
            Error::NumericValueOutOfRange { .. } | Error::ScaleOutOfRange => {
                ErrorCode::NumericValueOutOfRange
            }
            Error::FeatureNotSupported(_) => ErrorCode::FeatureNotSupported,
            Error::UnsupportedColumnType(_) => ErrorCode::InvalidTableDefinition,
            Error::UndefinedType(_) => ErrorCode::UndefinedObject,
            Error::CollationNotSupported(_) => ErrorCode::DatatypeMismatch,
        }
    }

    pub(crate) fn invalid_parameter(msg: impl Into<String>) -> Self {
        Error::InvalidParameterValue(msg.into())
    }
}

/// Result type for column-type operations
pub type Result<T> = std::result::Result<T, Error>;
