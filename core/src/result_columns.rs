//! Query result shapes and their compatibility check

use core::fmt;
use core::ops::Deref;

use coltypes_types::ValueType;

use crate::format::{FmtFlags, encode_ident};

/// Identifier of the table a result column was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableId(pub u32);

/// One projected output column of a query or function.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultColumn {
    pub name: String,
    pub typ: ValueType,
    /// Source table, when the column comes straight from one
    pub table_id: Option<TableId>,
    /// Hidden columns are produced but not shown to the client
    pub hidden: bool,
}

impl ResultColumn {
    #[must_use]
    pub fn new(name: impl Into<String>, typ: ValueType) -> Self {
        Self {
            name: name.into(),
            typ,
            table_id: None,
            hidden: false,
        }
    }

    #[must_use]
    pub fn with_table(mut self, table_id: TableId) -> Self {
        self.table_id = Some(table_id);
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Compare two result shapes position by position.
///
/// Names, tables and hidden flags are ignored. An unknown (`NULL`) type on
/// either side matches anything, so the relation is symmetric but not
/// transitive.
///
/// ```
/// use coltypes_core::{types_equal, ResultColumn, ValueType};
///
/// let ints = [ResultColumn::new("a", ValueType::Int)];
/// let nulls = [ResultColumn::new("b", ValueType::Null)];
/// assert!(types_equal(&ints, &nulls));
/// assert!(types_equal(&nulls, &ints));
/// ```
#[must_use]
pub fn types_equal(a: &[ResultColumn], b: &[ResultColumn]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.typ.equivalent(&y.typ))
}

/// An ordered list of result columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResultColumns(Vec<ResultColumn>);

impl ResultColumns {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, column: ResultColumn) {
        self.0.push(column);
    }

    /// See [`types_equal`]
    #[must_use]
    pub fn types_equal(&self, other: &[ResultColumn]) -> bool {
        types_equal(self, other)
    }

    /// Columns visible to the client
    pub fn visible(&self) -> impl Iterator<Item = &ResultColumn> {
        self.0.iter().filter(|c| !c.hidden)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<ResultColumn> {
        self.0
    }
}

impl Deref for ResultColumns {
    type Target = [ResultColumn];

    fn deref(&self) -> &[ResultColumn] {
        &self.0
    }
}

impl From<Vec<ResultColumn>> for ResultColumns {
    fn from(columns: Vec<ResultColumn>) -> Self {
        Self(columns)
    }
}

impl FromIterator<ResultColumn> for ResultColumns {
    fn from_iter<I: IntoIterator<Item = ResultColumn>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResultColumns {
    type Item = &'a ResultColumn;
    type IntoIter = core::slice::Iter<'a, ResultColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ResultColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, column) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let mut name = String::new();
            encode_ident(&mut name, &column.name, FmtFlags::SIMPLE);
            write!(f, "{name} {}", column.typ)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(types: &[ValueType]) -> ResultColumns {
        types
            .iter()
            .enumerate()
            .map(|(i, typ)| ResultColumn::new(format!("c{i}"), typ.clone()))
            .collect()
    }

    #[test]
    fn test_types_equal_table() {
        use ValueType::{Int, Null, String};

        let cases: &[(&[ValueType], &[ValueType], bool)] = &[
            (&[Int], &[Int], true),
            (&[Int], &[String], false),
            (&[Null], &[Int], true),
            (&[Int], &[Null], true),
            (&[Null], &[Null], true),
            (&[Int, Int], &[Int], false),
            (&[], &[Null], false),
            (&[], &[], true),
        ];
        for (a, b, expected) in cases {
            assert_eq!(
                types_equal(&cols(a), &cols(b)),
                *expected,
                "{} vs {}",
                cols(a),
                cols(b)
            );
        }
    }

    #[test]
    fn test_ignores_names_and_flags() {
        let a: ResultColumns = vec![
            ResultColumn::new("x", ValueType::Int).with_table(TableId(51)),
            ResultColumn::new("y", ValueType::String).hidden(),
        ]
        .into();
        let b = cols(&[ValueType::Int, ValueType::String]);
        assert!(a.types_equal(&b));
        assert_eq!(a.visible().count(), 1);
    }

    #[test]
    fn test_wildcard_not_transitive() {
        let int = cols(&[ValueType::Int]);
        let null = cols(&[ValueType::Null]);
        let string = cols(&[ValueType::String]);
        assert!(int.types_equal(&null));
        assert!(null.types_equal(&string));
        assert!(!int.types_equal(&string));
    }

    #[test]
    fn test_display() {
        let columns: ResultColumns = vec![
            ResultColumn::new("a", ValueType::Int),
            ResultColumn::new("Total", ValueType::array_of(ValueType::Decimal)),
        ]
        .into();
        assert_eq!(columns.to_string(), "(a int, \"Total\" decimal[])");
        assert_eq!(ResultColumns::new().to_string(), "()");
    }
}
