use std::fmt;

/// The two runtime kinds. Any operation left undefined for a variant pair
/// fails explicitly instead of coercing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
  Integer(i32),
  Text(String),
}

impl Value {
  pub fn type_name(&self) -> &'static str {
    match self {
      Value::Integer(_) => "integer",
      Value::Text(_) => "text",
    }
  }
}

impl Default for Value {
  fn default() -> Value {
    Value::Text(String::new())
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Integer(n) => write!(f, "{}", n),
      Value::Text(s) => write!(f, "{}", s),
    }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn type_names() {
    assert_eq!(Value::Integer(7).type_name(), "integer");
    assert_eq!(Value::Text("hi".to_owned()).type_name(), "text");
  }

  #[test]
  fn display_is_bare() {
    assert_eq!(Value::Integer(-3).to_string(), "-3");
    assert_eq!(Value::Text("abc".to_owned()).to_string(), "abc");
  }
}
