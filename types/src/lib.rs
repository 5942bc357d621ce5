//! Runtime value types for the coltypes SQL column-type subsystem
//!
//! This crate provides the engine's datum classification, including:
//!
//! - [`ValueType`] - The runtime type of a stored or computed datum
//! - [`OidKind`] - The OID family (`OID` and the `REG*` catalog aliases)
//! - [`SqlTyped`] - Classification of Rust host values (query arguments)
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `serde` - Enable serde serialization/deserialization
//! - `rust-decimal` - Classify `rust_decimal::Decimal` host values

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod alloc_prelude {
    #[cfg(feature = "std")]
    pub use std::{
        boxed::Box,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub use alloc::{
        boxed::Box,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };
}

mod oid;
mod typed;
mod value_type;

pub use oid::{OidKind, OidParseError};
pub use typed::SqlTyped;
pub use value_type::ValueType;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{OidKind, SqlTyped, ValueType};
}
