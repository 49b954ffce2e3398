use std::collections::HashMap;
use crate::error::Error;
use crate::interpreter::Associativity;
use crate::parser::error::ParserError;
use crate::parser::{BinaryOperator, Token, TokenKind};


/// Recursive-descent evaluator over a token sequence.
///
/// Each grammar level is one method and values are computed while parsing,
/// no syntax tree is built. Variables are read from `variables`; an
/// assignment is returned to the caller as a pending write so the table is
/// only touched once the whole input has been accepted.
#[derive(Debug)]
pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    variables: &'a HashMap<String, i64>,
    associativity: Associativity,
    max_depth: usize,
    depth: usize,
}

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Evaluation {
    pub value: i64,
    pub assignment: Option<String>,
}

impl<'a> Parser<'a> {
    /// `tokens` must end with a [`TokenKind::End`] token, as produced by [`crate::tokenize`].
    pub fn new(
        tokens: &'a [Token],
        variables: &'a HashMap<String, i64>,
        associativity: Associativity,
        max_depth: usize,
    ) -> Self {
        debug_assert!(matches!(tokens.last(), Some(Token { kind: TokenKind::End, .. })));
        Self { tokens, cursor: 0, variables, associativity, max_depth, depth: 0 }
    }

    /// Evaluates the whole token sequence.
    ///
    /// # Errors
    /// Any [`Error`]; syntax errors are wrapped with the position of the token
    /// at which they were detected.
    pub fn evaluate(&mut self) -> Result<Evaluation, Error> {
        let evaluation = self.parse_assignment()?;

        let trailing = self.current();
        if trailing.kind != TokenKind::End {
            return Err(self.syntax_error(ParserError::UnexpectedToken(trailing.text.clone())));
        }

        Ok(evaluation)
    }

    fn current(&self) -> &'a Token {
        let tokens = self.tokens;
        &tokens[self.cursor.min(tokens.len() - 1)]
    }

    fn peek(&self) -> &'a Token {
        let tokens = self.tokens;
        &tokens[(self.cursor + 1).min(tokens.len() - 1)]
    }

    fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if token.kind != TokenKind::End {
            self.cursor += 1;
        }
        token
    }

    fn syntax_error(&self, err: ParserError) -> Error {
        err.at_pos(self.current().position).into()
    }

    fn parse_assignment(&mut self) -> Result<Evaluation, Error> {
        let token = self.current();

        if token.kind == TokenKind::Identifier && self.peek().kind == TokenKind::Assign {
            self.advance();
            self.advance();

            let value = self.parse_expression()?;
            return Ok(Evaluation { value, assignment: Some(token.text.clone()) });
        }

        let value = self.parse_expression()?;
        Ok(Evaluation { value, assignment: None })
    }

    fn parse_expression(&mut self) -> Result<i64, Error> {
        let mut result = self.parse_term()?;

        while let Some(op @ (BinaryOperator::Add | BinaryOperator::Subtract)) = self.current_operator() {
            self.advance();
            let right = self.parse_term()?;
            result = op.op(result, right)?;
        }

        Ok(result)
    }

    fn parse_term(&mut self) -> Result<i64, Error> {
        let mut result = self.parse_exponent()?;

        while let Some(op @ (BinaryOperator::Multiply | BinaryOperator::Divide)) = self.current_operator() {
            self.advance();
            let right = self.parse_exponent()?;
            result = op.op(result, right)?;
        }

        Ok(result)
    }

    fn parse_exponent(&mut self) -> Result<i64, Error> {
        let mut result = self.parse_factor()?;

        match self.associativity {
            Associativity::Left => {
                while self.current().kind == TokenKind::Exponent {
                    self.advance();
                    let exponent = self.parse_factor()?;
                    result = BinaryOperator::Power.op(result, exponent)?;
                }
            },

            Associativity::Right => {
                if self.current().kind == TokenKind::Exponent {
                    self.advance();
                    self.enter()?;
                    let exponent = self.parse_exponent()?;
                    self.depth -= 1;
                    result = BinaryOperator::Power.op(result, exponent)?;
                }
            }
        }

        Ok(result)
    }

    fn parse_factor(&mut self) -> Result<i64, Error> {
        let token = self.current();

        match token.kind {
            TokenKind::Number => {
                let value = token.text.parse::<i64>()
                    .map_err(|err| self.syntax_error(err.into()))?;
                self.advance();
                Ok(value)
            },

            TokenKind::Identifier => {
                let value = self.variables.get(&token.text)
                    .copied()
                    .ok_or_else(|| Error::UndefinedVariable(token.text.clone()))?;
                self.advance();
                Ok(value)
            },

            TokenKind::LeftParenthesis => {
                self.enter()?;
                self.advance();
                let value = self.parse_expression()?;

                if self.current().kind != TokenKind::RightParenthesis {
                    return Err(self.syntax_error(ParserError::MismatchedParenthesis));
                }

                self.advance();
                self.depth -= 1;
                Ok(value)
            },

            _ => Err(self.syntax_error(ParserError::UnexpectedToken(token.text.clone())))
        }
    }

    fn current_operator(&self) -> Option<BinaryOperator> {
        BinaryOperator::of_token(self.current().kind)
    }

    fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(self.syntax_error(ParserError::NestingTooDeep(self.max_depth)));
        }

        self.depth += 1;
        Ok(())
    }
}
