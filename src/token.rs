use std::fmt;

use crate::value::Value;

/// Cursor position inside a source buffer. Row and column are zero-based
/// internally and rendered one-based.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Position {
  pub filename: String,
  pub row: u32,
  pub column: u32,
}

impl Position {
  pub fn new(filename: impl Into<String>, row: u32, column: u32) -> Position {
    Position {
      filename: filename.into(),
      row,
      column,
    }
  }
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}:{}", self.filename, self.row + 1, self.column + 1)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenKind {
  #[default]
  None,
  Name,
  String,
  Number,
  OpenParen,
  CloseParen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
  Assign,
}

impl BinaryOp {
  pub fn from_char(c: char) -> Option<BinaryOp> {
    match c {
      '+' => Some(BinaryOp::Add),
      '-' => Some(BinaryOp::Sub),
      '*' => Some(BinaryOp::Mul),
      '/' => Some(BinaryOp::Div),
      '=' => Some(BinaryOp::Assign),
      _ => None,
    }
  }
}

impl fmt::Display for BinaryOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let c = match self {
      BinaryOp::Add => '+',
      BinaryOp::Sub => '-',
      BinaryOp::Mul => '*',
      BinaryOp::Div => '/',
      BinaryOp::Assign => '=',
    };
    write!(f, "{}", c)
  }
}

/// A scanned token. The default token has kind `None` and marks end of
/// input; folding never mutates a token in place, it builds a new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Token {
  pub kind: TokenKind,
  pub value: Value,
  pub position: Position,
}

impl Token {
  pub fn new(kind: TokenKind, value: Value, position: Position) -> Token {
    Token {
      kind,
      value,
      position,
    }
  }

  pub fn none() -> Token {
    Token::default()
  }

  pub fn is_none(&self) -> bool {
    self.kind == TokenKind::None
  }
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_none() {
      return Ok(());
    }

    write!(f, "{} {}", self.position, self.value)
  }
}
