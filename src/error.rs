use thiserror::Error;

use crate::token::{BinaryOp, Position};

/// Every failure the core can surface, tagged with the offending position.
/// Nothing here is recovered or retried internally; the embedding program
/// decides whether to abort or move on to the next input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  // lex errors
  #[error("{position}: unterminated string literal")]
  UnterminatedString { position: Position },

  #[error("{position}: unexpected character '{character}'")]
  UnexpectedCharacter { character: char, position: Position },

  // syntax errors
  #[error("{position}: expected '(' after builtin name '{name}'")]
  ExpectedOpenParen { name: String, position: Position },

  #[error("{position}: missing ')' in call to '{name}'")]
  UnclosedCall { name: String, position: Position },

  #[error("{position}: expected an operand after '{op}'")]
  MissingOperand { op: BinaryOp, position: Position },

  // type errors
  #[error("{position}: incompatible operand types: {left} {op} {right}")]
  TypeMismatch {
    left: &'static str,
    op: BinaryOp,
    right: &'static str,
    position: Position,
  },

  #[error("{position}: '{name}' takes {expected} arguments, got {got}")]
  WrongArgumentCount {
    name: String,
    expected: usize,
    got: usize,
    position: Position,
  },

  // arithmetic errors
  #[error("{position}: division by zero")]
  DivisionByZero { position: Position },

  #[error("{position}: operator '{op}' is not implemented for {kind} operands")]
  NotImplemented {
    op: BinaryOp,
    kind: &'static str,
    position: Position,
  },
}

impl Error {
  pub fn position(&self) -> &Position {
    match self {
      Error::UnterminatedString { position }
      | Error::UnexpectedCharacter { position, .. }
      | Error::ExpectedOpenParen { position, .. }
      | Error::UnclosedCall { position, .. }
      | Error::MissingOperand { position, .. }
      | Error::TypeMismatch { position, .. }
      | Error::WrongArgumentCount { position, .. }
      | Error::DivisionByZero { position }
      | Error::NotImplemented { position, .. } => position,
    }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn messages_carry_one_based_positions() {
    let err = Error::DivisionByZero {
      position: Position::new("hello.py", 2, 0),
    };
    assert_eq!(err.to_string(), "hello.py:3:1: division by zero");
  }

  #[test]
  fn type_mismatch_names_both_variants() {
    let err = Error::TypeMismatch {
      left: "integer",
      op: BinaryOp::Add,
      right: "text",
      position: Position::new("<stdin>", 0, 0),
    };
    assert_eq!(
      err.to_string(),
      "<stdin>:1:1: incompatible operand types: integer + text"
    );
  }
}
