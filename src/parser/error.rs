/// Syntax errors found while tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    /// Another error, together with the character offset where it was found.
    #[error("At position {0} - {1}")]
    AtPosition(usize, Box<ParserError>),

    /// A character that starts no token.
    #[error("Invalid character: {0}")]
    Character(char),

    /// A number literal that does not fit into an `i64`.
    #[error("Invalid number: {0}")]
    Number(#[from] std::num::ParseIntError),

    /// A token that is not allowed where it appears; empty text is the end of input.
    #[error("Unexpected token: {}", describe_token(.0))]
    UnexpectedToken(String),

    /// An opening parenthesis without its closing one.
    #[error("Mismatched parentheses")]
    MismatchedParenthesis,

    /// Parentheses nested deeper than the configured limit.
    #[error("Nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

impl ParserError {
    /// The wrapped error, without its position.
    pub fn err(&self) -> &Self {
        match self {
            ParserError::AtPosition(_, err) => err.as_ref(),
            other => other
        }
    }

    /// The position of the error, if it has one.
    pub fn pos(&self) -> Option<&usize> {
        match self {
            ParserError::AtPosition(position, _) => Some(position),
            _ => None
        }
    }

    /// Attaches `position` unless the error already carries one.
    pub fn at_pos(self, position: usize) -> Self {
        match self {
            ParserError::AtPosition(_, _) => self,
            other => ParserError::AtPosition(position, Box::new(other))
        }
    }
}

fn describe_token(text: &str) -> String {
    if text.is_empty() {
        "end of input".into()
    } else {
        format!("'{text}'")
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
