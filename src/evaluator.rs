use log::debug;

use crate::builtin::Registry;
use crate::error::Error;
use crate::scanner::Scanner;
use crate::token::{BinaryOp, Position, Token, TokenKind};
use crate::value::Value;

/// Drives a scanner over one session: folds literal tokens with trailing
/// binary operators and dispatches builtin calls. Folding is strictly
/// left-to-right with no precedence.
pub struct Evaluator<'a> {
  scanner: Scanner<'a>,
  registry: &'a Registry,
}

impl<'a> Evaluator<'a> {
  pub fn new(scanner: Scanner<'a>, registry: &'a Registry) -> Self {
    Self { scanner, registry }
  }

  /// Produces the next evaluated token, or the sentinel once the input
  /// is exhausted. Void builtin calls are consumed with no token of
  /// their own; scanning simply continues past them.
  pub fn next_token(&mut self) -> Result<Token, Error> {
    loop {
      let flat = self.scanner.next_token()?;
      if flat.is_none() {
        return Ok(flat);
      }

      let token = self.produce(flat)?;
      if !token.is_none() {
        return Ok(token);
      }
    }
  }

  fn produce(&mut self, token: Token) -> Result<Token, Error> {
    // Only literals start a fold; builtin call results are substituted
    // as-is and bare names pass through.
    let token = match token.kind {
      TokenKind::Number | TokenKind::String => self.fold(token)?,
      TokenKind::Name => self.resolve(token)?,
      _ => token,
    };

    if !token.is_none() {
      debug!("produced {}", token);
    }

    Ok(token)
  }

  /// Turns a `Name` token matching a registered builtin into the call's
  /// result. Bare names pass through untouched and are never folded.
  fn resolve(&mut self, token: Token) -> Result<Token, Error> {
    if token.kind != TokenKind::Name {
      return Ok(token);
    }

    let name = match &token.value {
      Value::Text(name) if self.registry.contains(name) => name.clone(),
      _ => return Ok(token),
    };

    self.call_builtin(name, token.position)
  }

  fn call_builtin(&mut self, name: String, position: Position) -> Result<Token, Error> {
    let open = self.scanner.next_token()?;
    if open.kind != TokenKind::OpenParen {
      let position = if open.is_none() {
        self.scanner.position()
      } else {
        open.position
      };
      return Err(Error::ExpectedOpenParen { name, position });
    }

    let mut args = Vec::new();

    loop {
      let token = self.scanner.next_token()?;
      match token.kind {
        TokenKind::CloseParen => break,
        TokenKind::None => return Err(Error::UnclosedCall { name, position }),
        _ => {
          // Arguments run through the full pipeline, so nested calls
          // and folds are evaluated before dispatch. Void results
          // contribute no argument.
          let token = self.produce(token)?;
          if !token.is_none() {
            args.push(token);
          }
        }
      }
    }

    debug!("dispatching {}() with {} arguments", name, args.len());

    self.registry.call(&name, &args, &position)
  }

  /// Left-to-right pairwise folding: `2 + 3 * 4` is `(2 + 3) * 4`.
  /// The result keeps the starting token's position.
  fn fold(&mut self, token: Token) -> Result<Token, Error> {
    let mut result = token;

    while let Some(op) = self.scanner.take_operator() {
      let operand = self.operand(op)?;
      result = apply(result, op, operand)?;
    }

    Ok(result)
  }

  /// One right-hand operand: a flat token with builtin calls resolved,
  /// but no sub-folding of its own.
  fn operand(&mut self, op: BinaryOp) -> Result<Token, Error> {
    let token = self.scanner.next_token()?;
    let token = self.resolve(token)?;

    if token.is_none() {
      return Err(Error::MissingOperand {
        op,
        position: self.scanner.position(),
      });
    }

    Ok(token)
  }
}

/// Integer arithmetic wraps on overflow; literal parsing already
/// saturates, so wrapping only shows up in computed results.
fn apply(left: Token, op: BinaryOp, right: Token) -> Result<Token, Error> {
  let position = left.position;

  let value = match (left.value, right.value) {
    (Value::Integer(a), Value::Integer(b)) => match op {
      BinaryOp::Add => Value::Integer(a.wrapping_add(b)),
      BinaryOp::Sub => Value::Integer(a.wrapping_sub(b)),
      BinaryOp::Mul => Value::Integer(a.wrapping_mul(b)),
      BinaryOp::Div => {
        if b == 0 {
          return Err(Error::DivisionByZero { position });
        }
        Value::Integer(a.wrapping_div(b))
      }
      BinaryOp::Assign => {
        return Err(Error::NotImplemented {
          op,
          kind: "integer",
          position,
        })
      }
    },
    (Value::Text(a), Value::Text(b)) => match op {
      BinaryOp::Add => Value::Text(a + &b),
      BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Assign => {
        return Err(Error::NotImplemented {
          op,
          kind: "text",
          position,
        })
      }
    },
    (left, right) => {
      return Err(Error::TypeMismatch {
        left: left.type_name(),
        op,
        right: right.type_name(),
        position,
      })
    }
  };

  let kind = match value {
    Value::Integer(_) => TokenKind::Number,
    Value::Text(_) => TokenKind::String,
  };

  Ok(Token::new(kind, value, position))
}
