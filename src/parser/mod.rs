#[cfg(test)]
pub(crate) mod str_test_strategies;

mod error;
mod lexer;
mod operator;
mod parse;

pub use error::ParserError;
pub use lexer::{Token, TokenKind, tokenize};
pub(crate) use operator::BinaryOperator;
pub(crate) use parse::{Parser, Evaluation};
