//! Canonical SQL rendering of column types.
//!
//! Rendering is a pure function of a type's fields. Flags only change how
//! identifiers (collation locales) are escaped, never the structure of the
//! output.

use core::ops::{BitOr, BitOrAssign};

/// Identifier-escaping options for [`Format`].
///
/// # Examples
///
/// ```
/// use coltypes_core::{FmtFlags, encode_ident};
///
/// let mut buf = String::new();
/// encode_ident(&mut buf, "de_DE", FmtFlags::SIMPLE);
/// assert_eq!(buf, "\"de_DE\"");
///
/// buf.clear();
/// encode_ident(&mut buf, "de_DE", FmtFlags::BARE_IDENTIFIERS);
/// assert_eq!(buf, "de_DE");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FmtFlags(u8);

impl FmtFlags {
    /// Quote identifiers only when they would not read back unchanged
    pub const SIMPLE: Self = Self(0);
    /// Never quote identifiers. Takes precedence over `QUOTE_IDENTIFIERS`.
    pub const BARE_IDENTIFIERS: Self = Self(1);
    /// Always quote identifiers
    pub const QUOTE_IDENTIFIERS: Self = Self(1 << 1);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for FmtFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for FmtFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

/// A node that renders itself as a SQL text fragment.
pub trait Format {
    /// Append the canonical SQL text to `buf`
    fn format(&self, buf: &mut String, flags: FmtFlags);

    /// Render with the given flags
    fn to_sql_with(&self, flags: FmtFlags) -> String {
        let mut buf = String::new();
        self.format(&mut buf, flags);
        buf
    }

    /// Render with [`FmtFlags::SIMPLE`]
    fn to_sql(&self) -> String {
        self.to_sql_with(FmtFlags::SIMPLE)
    }
}

/// Returns `true` when `ident` reads back unchanged without quotes.
///
/// Keywords are allowed: collation locales appear where only an identifier
/// can follow.
#[must_use]
pub fn is_bare_ident(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$')
}

/// Write `ident` to `buf`, double-quoting it when `flags` require.
pub fn encode_ident(buf: &mut String, ident: &str, flags: FmtFlags) {
    if flags.contains(FmtFlags::BARE_IDENTIFIERS)
        || (!flags.contains(FmtFlags::QUOTE_IDENTIFIERS) && is_bare_ident(ident))
    {
        buf.push_str(ident);
        return;
    }
    buf.push('"');
    for c in ident.chars() {
        if c == '"' {
            buf.push('"');
        }
        buf.push(c);
    }
    buf.push('"');
}
