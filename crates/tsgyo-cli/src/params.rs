//! Typing of positional statement parameters given on the command line.

use rusqlite::types::Value;

/// `null` → NULL, integer literal → INTEGER, decimal literal → REAL,
/// anything else → TEXT.
///
/// A literal is only typed as a number when the number prints back as the
/// exact same text. SQLite stores a number bound into a TEXT column in its
/// canonical form, so `007`, `+5` or `1e3` must stay text to survive.
pub fn parse(raw: &str) -> Value {
  if raw.eq_ignore_ascii_case("null") {
    return Value::Null;
  }
  if let Ok(i) = raw.parse::<i64>()
    && i.to_string() == raw
  {
    return Value::Integer(i);
  }
  if raw.contains('.')
    && let Ok(f) = raw.parse::<f64>()
    && f.is_finite()
    && f.to_string() == raw
  {
    return Value::Real(f);
  }
  Value::Text(raw.to_owned())
}

pub fn parse_all(raw: &[String]) -> Vec<Value> {
  raw.iter().map(|s| parse(s)).collect()
}
