//! Type expression parser using nom
//!
//! Grammar, whitespace-insensitive and case-insensitive for keywords:
//!
//! ```text
//! expr   := name [ '(' int { ',' int } ')' ] { '[' [ int ] ']' } [ COLLATE ident ]
//! name   := word { word }
//! ident  := bare | '"' { char | '""' } '"'
//! ```

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, tag_no_case, take_while, take_while1},
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{all_consuming, map, map_res, opt, recognize, verify},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded, terminated},
};
use thiserror::Error;

/// A parsed, unresolved type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    /// Type keyword, words joined by single spaces
    pub name: String,
    pub params: Vec<i64>,
    /// One entry per `[]`, `None` when no bound was written
    pub dims: Vec<Option<i64>>,
    pub collate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at or near \"{near}\" in: {statement}")]
pub struct ParseError {
    pub statement: String,
    pub near: String,
}

fn word(input: &str) -> IResult<&str, &str> {
    verify(
        recognize(pair(
            take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        )),
        |w: &str| !w.eq_ignore_ascii_case("collate"),
    )
    .parse(input)
}

fn type_name(input: &str) -> IResult<&str, String> {
    map(separated_list1(multispace1, word), |words| words.join(" ")).parse(input)
}

fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse::<i64>).parse(input)
}

fn params(input: &str) -> IResult<&str, Vec<i64>> {
    delimited(
        (multispace0, char('('), multispace0),
        separated_list1((multispace0, char(','), multispace0), integer),
        (multispace0, char(')')),
    )
    .parse(input)
}

fn dims(input: &str) -> IResult<&str, Vec<Option<i64>>> {
    many0(delimited(
        (multispace0, char('['), multispace0),
        opt(integer),
        (multispace0, char(']')),
    ))
    .parse(input)
}

fn quoted_ident(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        map(
            many0(alt((map(tag("\"\""), |_| "\""), is_not("\"")))),
            |parts: Vec<&str>| parts.concat(),
        ),
        char('"'),
    )
    .parse(input)
}

/// Unquoted identifiers fold to lower case
fn bare_ident(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
        )),
        str::to_ascii_lowercase,
    )
    .parse(input)
}

fn collate(input: &str) -> IResult<&str, String> {
    preceded(
        (multispace1, tag_no_case("collate"), multispace1),
        alt((quoted_ident, bare_ident)),
    )
    .parse(input)
}

fn type_expr(input: &str) -> IResult<&str, TypeExpr> {
    map(
        terminated(
            (
                preceded(multispace0, type_name),
                opt(params),
                dims,
                opt(collate),
            ),
            multispace0,
        ),
        |(name, params, dims, collate)| TypeExpr {
            name,
            params: params.unwrap_or_default(),
            dims,
            collate,
        },
    )
    .parse(input)
}

/// Parse one statement
pub fn parse_type_expr(statement: &str) -> Result<TypeExpr, ParseError> {
    match all_consuming(type_expr).parse(statement) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(ParseError {
            statement: statement.trim().to_string(),
            near: near(e.input),
        }),
        Err(nom::Err::Incomplete(_)) => Err(ParseError {
            statement: statement.trim().to_string(),
            near: "EOF".to_string(),
        }),
    }
}

fn near(rest: &str) -> String {
    rest.split_whitespace()
        .next()
        .map_or_else(|| "EOF".to_string(), str::to_string)
}

fn quoted_run(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('"'),
        many0(alt((tag("\"\""), is_not("\"")))),
        char('"'),
    ))
    .parse(input)
}

/// Text up to the next `;` outside a quoted identifier
fn statement(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((quoted_run, is_not("\";"))))).parse(input)
}

/// Split input on `;` outside quoted identifiers, dropping empty statements.
///
/// An unterminated quote swallows the rest of the input, which then fails
/// to parse as a type.
pub fn split_statements(input: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut rest = input;
    loop {
        let (after, stmt) = statement(rest).unwrap_or(("", rest));
        let (stmt, next) = match after.strip_prefix(';') {
            Some(next) => (stmt, Some(next)),
            None if after.is_empty() => (stmt, None),
            None => (rest, None),
        };
        let stmt = stmt.trim();
        if !stmt.is_empty() {
            statements.push(stmt);
        }
        match next {
            Some(next) => rest = next,
            None => return statements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names() {
        let expr = parse_type_expr("int").unwrap();
        assert_eq!(expr.name, "int");
        assert!(expr.params.is_empty());
        assert!(expr.dims.is_empty());
        assert_eq!(expr.collate, None);
    }

    #[test]
    fn test_multi_word_names() {
        let expr = parse_type_expr("  timestamp  with time\tzone ").unwrap();
        assert_eq!(expr.name, "timestamp with time zone");
        let expr = parse_type_expr("character varying(12)").unwrap();
        assert_eq!(expr.name, "character varying");
        assert_eq!(expr.params, [12]);
    }

    #[test]
    fn test_params_and_dims() {
        let expr = parse_type_expr("decimal( 10 , 2 )").unwrap();
        assert_eq!(expr.params, [10, 2]);
        let expr = parse_type_expr("int[3][]").unwrap();
        assert_eq!(expr.dims, [Some(3), None]);
        let expr = parse_type_expr("bit(-1)").unwrap();
        assert_eq!(expr.params, [-1]);
    }

    #[test]
    fn test_collate() {
        let expr = parse_type_expr("text[] COLLATE De_DE").unwrap();
        assert_eq!(expr.collate.as_deref(), Some("de_de"));
        let expr = parse_type_expr("varchar(3) collate \"en-US\"").unwrap();
        assert_eq!(expr.collate.as_deref(), Some("en-US"));
        let expr = parse_type_expr("string collate \"a\"\"b\"").unwrap();
        assert_eq!(expr.collate.as_deref(), Some("a\"b"));
    }

    #[test]
    fn test_errors() {
        let err = parse_type_expr("int(").unwrap_err();
        assert_eq!(err.statement, "int(");
        let err = parse_type_expr("varchar 10").unwrap_err();
        assert_eq!(err.near, "10");
        assert_eq!(
            err.to_string(),
            "syntax error at or near \"10\" in: varchar 10"
        );
        assert!(parse_type_expr("text collate").is_err());
    }

    #[test]
    fn test_split_statements() {
        assert_eq!(split_statements(" int ; ;text;\n"), ["int", "text"]);
        assert!(split_statements("").is_empty());
    }

    #[test]
    fn test_split_ignores_quoted_semicolons() {
        assert_eq!(
            split_statements("text collate \"a;b\"; int"),
            ["text collate \"a;b\"", "int"]
        );
        assert_eq!(
            split_statements("string collate \"x\"\";\"\"y\";"),
            ["string collate \"x\"\";\"\"y\""]
        );
        assert_eq!(
            split_statements("int; text collate \"open;"),
            ["int", "text collate \"open;"]
        );
    }
}
