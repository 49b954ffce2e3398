use crate::parser::error::*;


/// The kind of a lexical [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A run of decimal digits.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Exponent,
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
    /// `=`
    Assign,
    /// A letter followed by letters or digits.
    Identifier,
    /// End of input, always the last token of a sequence.
    End,
}


/// A classified lexical unit produced by [`tokenize`].
///
/// `text` holds the literal substring of the input the token was read from
/// and is empty for [`TokenKind::End`]. `position` is the character offset of
/// the token's first character.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The input text it was read from.
    pub text: String,
    /// Character offset of its first character.
    pub position: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind, text: text.into(), position }
    }

    pub(crate) fn end(position: usize) -> Self {
        Self::new(TokenKind::End, "", position)
    }
}


#[derive(Debug)]
pub(crate) struct Lexer {
    input: Vec<char>,
    pub position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        if self.position >= self.input.len() {
            return Ok(Token::end(self.position));
        }

        let ch = self.input[self.position];

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '^' => TokenKind::Exponent,
            '=' => TokenKind::Assign,
            '(' => TokenKind::LeftParenthesis,
            ')' => TokenKind::RightParenthesis,
            '0'..='9' => return Ok(self.read_number()),
            c if c.is_alphabetic() => return Ok(self.read_identifier()),
            _ => return Err(ParserError::Character(ch).at_pos(self.position))
        };

        let token = Token::new(kind, ch, self.position);
        self.position += 1;
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while self.position < self.input.len() && self.input[self.position].is_whitespace() {
            self.position += 1;
        }
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        while self.position < self.input.len() && self.input[self.position].is_ascii_digit() {
            self.position += 1;
        }

        let text: String = self.input[start..self.position].iter().collect();
        Token::new(TokenKind::Number, text, start)
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while self.position < self.input.len()
            && (self.input[self.position].is_alphabetic() || self.input[self.position].is_ascii_digit())
        {
            self.position += 1;
        }

        let text: String = self.input[start..self.position].iter().collect();
        Token::new(TokenKind::Identifier, text, start)
    }
}


/// Converts `input` into a token sequence terminated by exactly one
/// [`TokenKind::End`] token.
///
/// # Errors
/// Returns [`ParserError::Character`] wrapped with the offending character's
/// position if `input` contains a character that starts no token.
///
/// # Examples
/// ```
/// use varith::{tokenize, TokenKind};
///
/// let tokens = tokenize("x = 2 ^ 10").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
///
/// assert_eq!(kinds, vec![
///     TokenKind::Identifier,
///     TokenKind::Assign,
///     TokenKind::Number,
///     TokenKind::Exponent,
///     TokenKind::Number,
///     TokenKind::End,
/// ]);
/// assert_eq!(tokens[4].text, "10");
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let end = token.kind == TokenKind::End;
        tokens.push(token);

        if end {
            return Ok(tokens);
        }
    }
}
