//! Layout configuration and line-width-aware rendering of type fragments
//!
//! Type fragments are atomic except for a trailing `COLLATE` clause, which
//! moves onto an indented continuation line when the flat form is too wide.

use thiserror::Error;

use crate::col_type::ColumnType;
use crate::format::{FmtFlags, Format, encode_ident};

/// Pretty-printer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PrettyCfg {
    /// Indent with tabs instead of spaces
    pub use_tabs: bool,
    /// Target maximum line width
    pub line_width: i32,
    /// Width of one indentation level, and of a tab when measuring lines
    pub tab_width: i32,
    /// Simplify expressions while formatting statements
    pub simplify: bool,
    /// Align clause keywords and deindent their bodies
    pub align: bool,
    /// Format JSON literals
    pub json_fmt: bool,
}

impl Default for PrettyCfg {
    fn default() -> Self {
        Self {
            use_tabs: false,
            line_width: 60,
            tab_width: 4,
            simplify: true,
            align: true,
            json_fmt: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrettyCfgError {
    #[error("line length must be > 0: {0}")]
    LineWidth(i32),
    #[error("tab width must be > 0: {0}")]
    TabWidth(i32),
}

impl PrettyCfg {
    /// Reject non-positive widths
    pub fn validate(&self) -> Result<(), PrettyCfgError> {
        if self.line_width <= 0 {
            return Err(PrettyCfgError::LineWidth(self.line_width));
        }
        if self.tab_width <= 0 {
            return Err(PrettyCfgError::TabWidth(self.tab_width));
        }
        Ok(())
    }

    /// One level of indentation
    #[must_use]
    pub fn indent(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width.max(0).unsigned_abs() as usize)
        }
    }
}

/// Render `typ` within `cfg.line_width` where possible.
///
/// ```
/// use coltypes_core::{catalog, pretty, PrettyCfg};
///
/// let typ = catalog::collated(catalog::TEXT, "en_us").unwrap();
/// assert_eq!(pretty(&typ, &PrettyCfg::default()), "TEXT COLLATE en_us");
///
/// let narrow = PrettyCfg { line_width: 8, ..PrettyCfg::default() };
/// assert_eq!(pretty(&typ, &narrow), "TEXT\n    COLLATE en_us");
/// ```
#[must_use]
pub fn pretty(typ: &ColumnType, cfg: &PrettyCfg) -> String {
    let flat = typ.to_sql();
    let Some(locale) = typ.collation_locale() else {
        return flat;
    };
    if flat.chars().count() <= usize::try_from(cfg.line_width).unwrap_or(0) {
        return flat;
    }
    let mut out = String::new();
    typ.format_without_collation(&mut out, FmtFlags::SIMPLE);
    out.push('\n');
    out.push_str(&cfg.indent());
    out.push_str("COLLATE ");
    encode_ident(&mut out, locale, FmtFlags::SIMPLE);
    out
}
