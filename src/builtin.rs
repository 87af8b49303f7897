use std::collections::HashMap;

use chrono::Local;

use crate::error::Error;
use crate::token::{Position, Token, TokenKind};
use crate::value::Value;

pub type BuiltinFn = Box<dyn Fn(&[Token]) -> Result<Token, Error>>;

pub struct Builtin {
  /// `None` means variadic.
  pub arity: Option<usize>,
  pub func: BuiltinFn,
}

/// Name -> builtin mapping, built before scanning and read-only while a
/// session runs. Passed into the evaluator explicitly so tests and
/// embedders can carry their own table.
#[derive(Default)]
pub struct Registry {
  builtins: HashMap<String, Builtin>,
}

impl Registry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_builtins() -> Self {
    let mut registry = Registry::new();
    registry.register("print", None, builtin_print);
    registry.register("typeof", Some(1), builtin_typeof);
    registry.register("time", Some(0), builtin_time);
    registry
  }

  pub fn register(
    &mut self,
    name: impl Into<String>,
    arity: Option<usize>,
    func: impl Fn(&[Token]) -> Result<Token, Error> + 'static,
  ) {
    self.builtins.insert(
      name.into(),
      Builtin {
        arity,
        func: Box::new(func),
      },
    );
  }

  pub fn contains(&self, name: &str) -> bool {
    self.builtins.contains_key(name)
  }

  pub fn call(&self, name: &str, args: &[Token], position: &Position) -> Result<Token, Error> {
    let builtin = match self.builtins.get(name) {
      Some(builtin) => builtin,
      None => return Ok(Token::none()),
    };

    if let Some(expected) = builtin.arity {
      if args.len() != expected {
        return Err(Error::WrongArgumentCount {
          name: name.to_owned(),
          expected,
          got: args.len(),
          position: position.clone(),
        });
      }
    }

    (builtin.func)(args)
  }
}

fn builtin_print(args: &[Token]) -> Result<Token, Error> {
  let line = args.iter().map(|arg| arg.value.to_string()).collect::<String>();
  println!("{}", line);

  Ok(Token::none())
}

fn builtin_typeof(args: &[Token]) -> Result<Token, Error> {
  let arg = &args[0];

  Ok(Token::new(
    TokenKind::String,
    Value::Text(arg.value.type_name().to_owned()),
    arg.position.clone(),
  ))
}

fn builtin_time(_: &[Token]) -> Result<Token, Error> {
  let seconds = Local::now().timestamp().clamp(i32::MIN as i64, i32::MAX as i64);

  Ok(Token::new(
    TokenKind::Number,
    Value::Integer(seconds as i32),
    Position::default(),
  ))
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn arg(value: Value) -> Token {
    let kind = match value {
      Value::Integer(_) => TokenKind::Number,
      Value::Text(_) => TokenKind::String,
    };
    Token::new(kind, value, Position::default())
  }

  #[test]
  fn typeof_names_the_runtime_variant() {
    let registry = Registry::with_builtins();
    let position = Position::default();

    let result = registry
      .call("typeof", &[arg(Value::Integer(5))], &position)
      .unwrap();
    assert_eq!(result.value, Value::Text("integer".to_owned()));

    let result = registry
      .call("typeof", &[arg(Value::Text("hi".to_owned()))], &position)
      .unwrap();
    assert_eq!(result.value, Value::Text("text".to_owned()));
  }

  #[test]
  fn arity_is_enforced() {
    let registry = Registry::with_builtins();
    let err = registry
      .call("typeof", &[], &Position::new("<stdin>", 0, 0))
      .unwrap_err();
    assert_eq!(
      err,
      Error::WrongArgumentCount {
        name: "typeof".to_owned(),
        expected: 1,
        got: 0,
        position: Position::new("<stdin>", 0, 0),
      }
    );
  }

  #[test]
  fn time_returns_an_integer() {
    let registry = Registry::with_builtins();
    let result = registry.call("time", &[], &Position::default()).unwrap();
    assert!(matches!(result.value, Value::Integer(_)));
  }

  #[test]
  fn callers_can_register_their_own() {
    let mut registry = Registry::new();
    assert!(!registry.contains("double"));

    registry.register("double", Some(1), |args| {
      let doubled = match args[0].value {
        Value::Integer(n) => n.wrapping_mul(2),
        _ => 0,
      };
      Ok(arg(Value::Integer(doubled)))
    });

    assert!(registry.contains("double"));
    let result = registry
      .call("double", &[arg(Value::Integer(21))], &Position::default())
      .unwrap();
    assert_eq!(result.value, Value::Integer(42));
  }
}
