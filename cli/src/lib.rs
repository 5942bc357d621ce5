//! sqlfmt - canonical formatter for SQL type expressions
//!
//! Reads `;`-separated cast-target types (`numeric(10, 2)`,
//! `character varying(3)[] collate "en-US"`) and prints each in canonical
//! form, wrapped to the configured line width.
//!
//! # Configuration
//!
//! An optional `sqlfmt.toml` in the working directory (or `--config PATH`):
//!
//! ```toml
//! useTabs = false
//! lineWidth = 60
//! tabWidth = 4
//! simplify = true
//! align = true
//! jsonFmt = true
//! ```

pub mod config;
pub mod error;
pub mod input;

use coltypes_core::{ColumnType, PrettyCfg, array_of, catalog, pretty};

pub use config::{Config, ConfigError, Overrides};
pub use error::CliError;
pub use input::{ParseError, TypeExpr, parse_type_expr};

/// Resolve a parsed expression through the catalog
pub fn resolve(expr: &TypeExpr) -> coltypes_core::Result<ColumnType> {
    let mut typ = catalog::lookup(&expr.name, &expr.params)?;
    if let Some(locale) = &expr.collate {
        typ = catalog::collated(typ, locale.as_str())?;
    }
    if !expr.dims.is_empty() {
        let bounds = expr.dims.iter().map(|d| d.unwrap_or(-1)).collect();
        typ = array_of(typ, bounds)?;
    }
    Ok(typ)
}

/// Format every statement in `input`.
///
/// Each statement is printed on its own line. When there is more than one,
/// each is terminated by `;`.
pub fn format_input(input: &str, cfg: &PrettyCfg) -> Result<String, CliError> {
    let statements = input::split_statements(input);
    tracing::debug!(count = statements.len(), "parsed statements");

    let mut out = String::new();
    for statement in &statements {
        let expr = parse_type_expr(statement)?;
        let typ = resolve(&expr).map_err(|source| CliError::Type {
            statement: (*statement).to_string(),
            source,
        })?;
        out.push_str(&pretty(&typ, cfg));
        if statements.len() > 1 {
            out.push(';');
        }
        out.push('\n');
    }
    Ok(out)
}
