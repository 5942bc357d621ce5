//! PostgreSQL object identifier types
//!
//! The raw `OID` type can hold any integer. The `REG*` aliases carry the same
//! integer but name the system catalog that contains the referenced object.
//!
//! See: <https://www.postgresql.org/docs/current/datatype-oid.html>

/// One of the fixed OID family members.
///
/// # Examples
///
/// ```
/// use coltypes_types::OidKind;
///
/// assert_eq!(OidKind::RegClass.as_str(), "REGCLASS");
/// assert_eq!(OidKind::parse("regtype"), Some(OidKind::RegType));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OidKind {
    /// Raw object identifier
    Oid,
    /// Relation name (`pg_class`)
    RegClass,
    /// Namespace name (`pg_namespace`)
    RegNamespace,
    /// Function name (`pg_proc`)
    RegProc,
    /// Function with argument types (`pg_proc`)
    RegProcedure,
    /// Data type name (`pg_type`)
    RegType,
}

impl OidKind {
    /// Every member of the family, in declaration order.
    pub const ALL: [OidKind; 6] = [
        OidKind::Oid,
        OidKind::RegClass,
        OidKind::RegNamespace,
        OidKind::RegProc,
        OidKind::RegProcedure,
        OidKind::RegType,
    ];

    /// Canonical SQL keyword for this type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OidKind::Oid => "OID",
            OidKind::RegClass => "REGCLASS",
            OidKind::RegNamespace => "REGNAMESPACE",
            OidKind::RegProc => "REGPROC",
            OidKind::RegProcedure => "REGPROCEDURE",
            OidKind::RegType => "REGTYPE",
        }
    }

    /// Lowercase runtime type name, as shown in value-type diagnostics
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            OidKind::Oid => "oid",
            OidKind::RegClass => "regclass",
            OidKind::RegNamespace => "regnamespace",
            OidKind::RegProc => "regproc",
            OidKind::RegProcedure => "regprocedure",
            OidKind::RegType => "regtype",
        }
    }

    /// Parse a keyword (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| s.eq_ignore_ascii_case(kind.as_str()))
    }
}

impl core::fmt::Display for OidKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for OidKind {
    type Err = OidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OidKind::parse(s).ok_or(OidParseError)
    }
}

/// Error returned when parsing an unknown OID type keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OidParseError;

impl core::fmt::Display for OidParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown oid type")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OidParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oid_parse() {
        assert_eq!(OidKind::parse("oid"), Some(OidKind::Oid));
        assert_eq!(OidKind::parse("RegClass"), Some(OidKind::RegClass));
        assert_eq!(OidKind::parse("REGNAMESPACE"), Some(OidKind::RegNamespace));
        assert_eq!(OidKind::parse("regproc"), Some(OidKind::RegProc));
        assert_eq!(OidKind::parse("regprocedure"), Some(OidKind::RegProcedure));
        assert_eq!(OidKind::parse("regtype"), Some(OidKind::RegType));
        assert_eq!(OidKind::parse("regrole"), None);
        assert_eq!(OidKind::parse(""), None);
    }

    #[test]
    fn test_oid_names() {
        for kind in OidKind::ALL {
            assert_eq!(kind.as_str().to_ascii_lowercase(), kind.type_name());
            assert_eq!(kind.as_str().parse::<OidKind>(), Ok(kind));
        }
    }
}
