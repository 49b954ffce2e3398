use crate::parser::ParserError;


/// Errors returned by [`crate::Interpreter::evaluate`].
///
/// Every error aborts the evaluation it came from; no partial result is
/// produced and the variable table is left untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input is not a well-formed expression.
    #[error("Syntax error - {0}")]
    Syntax(#[from] ParserError),

    /// A variable was read before any assignment to it.
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    /// A divisor evaluated to zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// An intermediate result does not fit into an `i64`.
    #[error("Integer overflow")]
    Overflow,
}

/// The category of an [`Error`], for callers that do not need its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// [`Error::Syntax`]
    Syntax,
    /// [`Error::UndefinedVariable`]
    UndefinedVariable,
    /// [`Error::DivisionByZero`]
    DivisionByZero,
    /// [`Error::Overflow`]
    Overflow,
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Examples
    /// ```
    /// use varith::{Interpreter, ErrorKind};
    ///
    /// let mut interpreter = Interpreter::new();
    /// let err = interpreter.evaluate("2 + (3 * 4").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::UndefinedVariable(_) => ErrorKind::UndefinedVariable,
            Error::DivisionByZero => ErrorKind::DivisionByZero,
            Error::Overflow => ErrorKind::Overflow,
        }
    }
}
