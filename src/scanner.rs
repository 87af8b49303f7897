use crate::error::Error;
use crate::token::{BinaryOp, Position, Token, TokenKind};
use crate::value::Value;

/// Character-cursor scanner over a borrowed source buffer. Emits flat
/// tokens only; folding and call dispatch live in the evaluator.
pub struct Scanner<'a> {
  filename: &'a str,
  source: &'a str,
  cursor: usize,
  line_start: usize,
  row: u32,
}

impl<'a> Scanner<'a> {
  pub fn new(filename: &'a str, source: &'a str) -> Self {
    Self {
      filename,
      source,
      cursor: 0,
      line_start: 0,
      row: 0,
    }
  }

  pub fn position(&self) -> Position {
    let column = self.source[self.line_start..self.cursor].chars().count();
    Position::new(self.filename, self.row, column as u32)
  }

  fn peek(&self) -> Option<char> {
    self.source[self.cursor..].chars().next()
  }

  fn advance(&mut self) {
    if let Some(c) = self.peek() {
      self.cursor += c.len_utf8();
      if c == '\n' {
        self.line_start = self.cursor;
        self.row += 1;
      }
    }
  }

  fn trim_left(&mut self) {
    while self.peek().map_or(false, |c| c.is_whitespace()) {
      self.advance();
    }
  }

  fn drop_line(&mut self) {
    while let Some(c) = self.peek() {
      self.advance();
      if c == '\n' {
        break;
      }
    }
  }

  /// Skips whitespace and comment lines. A line whose first
  /// non-whitespace character is `#` is discarded in full.
  fn skip_trivia(&mut self) {
    loop {
      self.trim_left();
      if self.peek() == Some('#') {
        self.drop_line();
      } else {
        break;
      }
    }
  }

  pub fn next_token(&mut self) -> Result<Token, Error> {
    self.skip_trivia();

    let position = self.position();

    let first = match self.peek() {
      Some(c) => c,
      None => return Ok(Token::none()),
    };

    match first {
      '(' => {
        self.advance();
        Ok(Token::new(TokenKind::OpenParen, Value::Text("(".to_owned()), position))
      }
      ')' => {
        self.advance();
        Ok(Token::new(TokenKind::CloseParen, Value::Text(")".to_owned()), position))
      }
      '"' => self.string_literal(position),
      c if c.is_ascii_digit() => Ok(self.number_literal(position)),
      c if c.is_ascii_alphanumeric() => Ok(self.name(position)),
      c => Err(Error::UnexpectedCharacter {
        character: c,
        position,
      }),
    }
  }

  /// Peeks past whitespace for a binary operator character. Consumes
  /// through the operator only when one is found; otherwise the cursor
  /// stays put.
  pub fn take_operator(&mut self) -> Option<BinaryOp> {
    let next = self.source[self.cursor..].chars().find(|c| !c.is_whitespace())?;
    let op = BinaryOp::from_char(next)?;

    while self.peek().map_or(false, |c| c.is_whitespace()) {
      self.advance();
    }
    self.advance();

    Some(op)
  }

  fn string_literal(&mut self, position: Position) -> Result<Token, Error> {
    self.advance();

    let mut text = String::new();

    loop {
      let c = match self.peek() {
        Some(c) => c,
        None => return Err(Error::UnterminatedString { position }),
      };
      self.advance();

      match c {
        '"' => break,
        '\\' => {
          let escaped = match self.peek() {
            Some(c) => c,
            None => return Err(Error::UnterminatedString { position }),
          };
          self.advance();

          match escaped {
            'n' => text.push('\n'),
            't' => text.push('\t'),
            'r' => text.push('\r'),
            '"' => text.push('"'),
            '\\' => text.push('\\'),
            _ => {
              text.push('\\');
              text.push(escaped);
            }
          }
        }
        _ => text.push(c),
      }
    }

    Ok(Token::new(TokenKind::String, Value::Text(text), position))
  }

  /// A maximal run of ASCII digits. Values past `i32::MAX` saturate
  /// rather than wrap or fail.
  fn number_literal(&mut self, position: Position) -> Token {
    let mut value: i32 = 0;

    while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
      value = value.saturating_mul(10).saturating_add(digit as i32);
      self.advance();
    }

    Token::new(TokenKind::Number, Value::Integer(value), position)
  }

  fn name(&mut self, position: Position) -> Token {
    let mut text = String::new();

    while let Some(c) = self.peek() {
      if c.is_ascii_alphanumeric() {
        text.push(c);
        self.advance();
      } else {
        break;
      }
    }

    Token::new(TokenKind::Name, Value::Text(text), position)
  }
}
