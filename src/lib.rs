pub mod builtin;
pub mod error;
pub mod evaluator;
pub mod scanner;
pub mod token;
pub mod value;

pub use builtin::Registry;
pub use error::Error;
pub use evaluator::Evaluator;
pub use scanner::Scanner;
pub use token::{BinaryOp, Position, Token, TokenKind};
pub use value::Value;
