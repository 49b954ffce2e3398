//! `varith` evaluates integer expressions with variables.
//!
//! ```
//! use varith::Interpreter;
//!
//! let mut interpreter = Interpreter::new();
//! assert_eq!(interpreter.evaluate("x = (2 + 3) * 4"), Ok(20));
//! assert_eq!(interpreter.evaluate("x ^ 2 - 1"), Ok(399));
//! ```
#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]

mod error;
mod interpreter;
mod parser;
mod shared;

pub use error::{Error, ErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder, Associativity, DEFAULT_MAX_DEPTH, evaluate};
pub use parser::{ParserError, Token, TokenKind, tokenize};
pub use shared::SharedInterpreter;
