// src/query.rs

//! Statement construction for the catalog endpoints.
//!
//! There are two deliberately different ways a statement gets built here:
//!
//! - [`build_list_query`] splices the caller's search term straight into the
//!   statement text. Nothing is escaped. This is the vulnerable listing path
//!   and must stay that way.
//! - [`build_lookup_query`] returns a constant statement and carries the id as
//!   a bound parameter. User input never reaches its text.

use crate::error::{CatalogError, CatalogResult};
use std::fmt;

/// Unfiltered listing, used when no search term is given.
pub const LIST_ALL_STATEMENT: &str = "SELECT id, name FROM products ORDER BY id ASC";

/// Parameterized lookup by id. `$1` is bound to the `id` parameter.
pub const LOOKUP_STATEMENT: &str = "SELECT id, name, category, price, description FROM products WHERE id = $1";

/// Connectivity probe used by the health endpoint.
pub const PROBE_STATEMENT: &str = "SELECT 1";

/// Name of the single parameter bound by [`build_lookup_query`].
pub const LOOKUP_ID_PARAM: &str = "id";

// The CASE yields MATCH_LITERAL for rows whose name matches and
// MISMATCH_LITERAL otherwise. Casting MISMATCH_LITERAL to INTEGER fails
// with SQLSTATE 22P02.
const MATCH_LITERAL: &str = "1";
const MISMATCH_LITERAL: &str = "XYZ";

/// A value bound to a named placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
  BigInt(i64),
}

impl fmt::Display for BindValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BindValue::BigInt(v) => write!(f, "{}", v),
    }
  }
}

/// One named parameter. Parameters bind positionally in the order they
/// appear in [`QuerySpec::Bound::params`], so the first one fills `$1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParam {
  pub name: &'static str,
  pub value: BindValue,
}

/// A statement ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySpec {
  /// Statement text with nothing bound. Whatever the text contains is what
  /// the database parses.
  Plain(String),
  /// Constant statement text plus the values bound to its placeholders.
  Bound {
    statement: &'static str,
    params: Vec<BoundParam>,
  },
}

impl QuerySpec {
  /// The literal statement text sent to the database.
  pub fn statement(&self) -> &str {
    match self {
      QuerySpec::Plain(statement) => statement,
      QuerySpec::Bound { statement, .. } => statement,
    }
  }

  pub fn params(&self) -> &[BoundParam] {
    match self {
      QuerySpec::Plain(_) => &[],
      QuerySpec::Bound { params, .. } => params,
    }
  }

  pub fn is_parameterized(&self) -> bool {
    matches!(self, QuerySpec::Bound { .. })
  }

  /// Looks up a bound value by parameter name.
  pub fn param(&self, name: &str) -> Option<&BindValue> {
    self.params().iter().find(|p| p.name == name).map(|p| &p.value)
  }
}

impl fmt::Display for QuerySpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.statement())
  }
}

/// Builds the listing statement.
///
/// Without a search term (or with an empty one) every product is listed in
/// ascending id order. With a term, the statement comes from
/// [`interpolate_search_unescaped`].
pub fn build_list_query(search: Option<&str>) -> QuerySpec {
  match search.filter(|term| !term.is_empty()) {
    Some(term) => QuerySpec::Plain(interpolate_search_unescaped(term)),
    None => QuerySpec::Plain(LIST_ALL_STATEMENT.to_string()),
  }
}

/// VULNERABLE: embeds `term` verbatim inside a `LIKE` pattern.
///
/// For each row, the inner CASE produces `'1'` when `name` contains the term
/// and `'XYZ'` otherwise. The outer `CAST(... AS INTEGER)` succeeds only for
/// `'1'`, so any row that fails the match aborts the statement with SQLSTATE
/// `22P02`. An attacker who closes the quote can steer that CASE with their
/// own condition and read the answer off the error.
///
/// Do not escape or parameterize this. The listing endpoint exists to
/// demonstrate the injection.
fn interpolate_search_unescaped(term: &str) -> String {
  format!(
    "SELECT id, name FROM products WHERE id = CAST((SELECT CASE WHEN name LIKE '%{}%' THEN '{}' ELSE '{}' END) AS INTEGER)",
    term, MATCH_LITERAL, MISMATCH_LITERAL
  )
}

/// Builds the parameterized lookup statement. The text never varies; only
/// the bound `id` does.
pub fn build_lookup_query(id: i64) -> QuerySpec {
  QuerySpec::Bound {
    statement: LOOKUP_STATEMENT,
    params: vec![BoundParam {
      name: LOOKUP_ID_PARAM,
      value: BindValue::BigInt(id),
    }],
  }
}

pub fn build_probe_query() -> QuerySpec {
  QuerySpec::Plain(PROBE_STATEMENT.to_string())
}

/// Parses a raw path segment into a product id.
///
/// Only a plain base-10 integer is accepted. Anything else (quotes, comment
/// markers, trailing garbage, overflow) is a client error and no statement
/// is built.
pub fn parse_product_id(raw: &str) -> CatalogResult<i64> {
  raw.parse::<i64>().map_err(|_| CatalogError::ClientInput { raw: raw.to_string() })
}
