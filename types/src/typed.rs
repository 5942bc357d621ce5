//! Classification of Rust host values as SQL value types
//!
//! Used to type positional query arguments supplied from Rust code, so that
//! placeholders are resolved without an explicit cast.

#[allow(unused_imports)]
use crate::alloc_prelude::*;

use crate::ValueType;

/// A Rust value with a fixed SQL value type.
///
/// # Examples
///
/// ```
/// use coltypes_types::{SqlTyped, ValueType};
///
/// assert_eq!(42u16.value_type(), ValueType::Int);
/// assert_eq!("abc".value_type(), ValueType::String);
/// assert_eq!(None::<i32>.value_type(), ValueType::Null);
/// ```
pub trait SqlTyped {
    /// The value type a placeholder bound to `self` resolves to
    fn value_type(&self) -> ValueType;
}

macro_rules! impl_sql_typed {
    ($value_type:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl SqlTyped for $ty {
                #[inline]
                fn value_type(&self) -> ValueType {
                    $value_type
                }
            }
        )+
    };
}

impl_sql_typed!(ValueType::Bool => bool);
impl_sql_typed!(ValueType::Int => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_sql_typed!(ValueType::Float => f32, f64);
impl_sql_typed!(ValueType::String => str, String, char);
impl_sql_typed!(ValueType::Bytes => [u8], Vec<u8>);
impl_sql_typed!(ValueType::Interval => core::time::Duration);

#[cfg(feature = "std")]
impl_sql_typed!(ValueType::Timestamp => std::time::SystemTime);

#[cfg(feature = "rust-decimal")]
impl_sql_typed!(ValueType::Decimal => rust_decimal::Decimal);

impl<const N: usize> SqlTyped for [u8; N] {
    #[inline]
    fn value_type(&self) -> ValueType {
        ValueType::Bytes
    }
}

impl<T: SqlTyped + ?Sized> SqlTyped for &T {
    #[inline]
    fn value_type(&self) -> ValueType {
        (**self).value_type()
    }
}

impl<T: SqlTyped> SqlTyped for Option<T> {
    fn value_type(&self) -> ValueType {
        match self {
            Some(value) => value.value_type(),
            None => ValueType::Null,
        }
    }
}

impl<T: SqlTyped + ?Sized> SqlTyped for Box<T> {
    #[inline]
    fn value_type(&self) -> ValueType {
        (**self).value_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct NodeId(i32);

    impl SqlTyped for NodeId {
        fn value_type(&self) -> ValueType {
            self.0.value_type()
        }
    }

    #[test]
    fn test_primitive_integers() {
        assert_eq!(1i8.value_type(), ValueType::Int);
        assert_eq!(1i16.value_type(), ValueType::Int);
        assert_eq!(1i32.value_type(), ValueType::Int);
        assert_eq!(1i64.value_type(), ValueType::Int);
        assert_eq!(1u8.value_type(), ValueType::Int);
        assert_eq!(1u16.value_type(), ValueType::Int);
        assert_eq!(1u32.value_type(), ValueType::Int);
        assert_eq!(1u64.value_type(), ValueType::Int);
        assert_eq!(1usize.value_type(), ValueType::Int);
    }

    #[test]
    fn test_primitive_scalars() {
        assert_eq!(true.value_type(), ValueType::Bool);
        assert_eq!(1.0f32.value_type(), ValueType::Float);
        assert_eq!(1.0f64.value_type(), ValueType::Float);
        assert_eq!(String::from("test").value_type(), ValueType::String);
        assert_eq!('x'.value_type(), ValueType::String);
        assert_eq!(b"abc".value_type(), ValueType::Bytes);
        assert_eq!(vec![1u8, 2].value_type(), ValueType::Bytes);
        assert_eq!(
            core::time::Duration::from_nanos(1).value_type(),
            ValueType::Interval
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_system_time() {
        assert_eq!(
            std::time::SystemTime::now().value_type(),
            ValueType::Timestamp
        );
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(NodeId(1).value_type(), ValueType::Int);
        assert_eq!(Some(NodeId(1)).value_type(), ValueType::Int);
        assert_eq!(None::<NodeId>.value_type(), ValueType::Null);
        assert_eq!(Box::new(2.5f64).value_type(), ValueType::Float);
        let bytes: &[u8] = b"key";
        assert_eq!(bytes.value_type(), ValueType::Bytes);
    }
}
