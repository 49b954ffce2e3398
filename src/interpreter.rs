use std::collections::HashMap;
use crate::Error;
use crate::parser::{tokenize, Evaluation, Parser};


/// Grouping of chained `^` operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Associativity {
    /// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    #[default]
    Left,
    /// `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.
    Right,
}

/// Default limit for parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;


/// Evaluates integer expressions and keeps the variables they assign.
///
/// The variable table lives as long as the interpreter and is shared by all
/// calls to [`Interpreter::evaluate`] on it. Evaluation takes `&mut self`;
/// use [`crate::SharedInterpreter`] to evaluate on one table from several threads.
///
/// # Examples
/// ```
/// use varith::Interpreter;
///
/// let mut interpreter = Interpreter::new();
/// assert_eq!(interpreter.evaluate("x = 5"), Ok(5));
/// assert_eq!(interpreter.evaluate("x + 2"), Ok(7));
/// assert_eq!(interpreter.variable("x"), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter {
    variables: HashMap<String, i64>,
    associativity: Associativity,
    max_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Interpreter {
    /// Creates an interpreter with no variables, left to right exponentiation
    /// and a nesting limit of [`DEFAULT_MAX_DEPTH`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`InterpreterBuilder`].
    ///
    /// # Examples
    /// ```
    /// use varith::{Interpreter, Associativity};
    ///
    /// let mut interpreter = Interpreter::builder()
    ///     .exponent(Associativity::Right)
    ///     .max_depth(16)
    ///     .build();
    ///
    /// assert_eq!(interpreter.evaluate("2 ^ 3 ^ 2"), Ok(512));
    /// ```
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Tokenizes and evaluates `input`.
    ///
    /// An input of the form `name = expression` stores the value of
    /// `expression` under `name` and returns it. The store happens only when
    /// the whole input evaluated successfully.
    ///
    /// # Errors
    /// - [`Error::Syntax`] on an invalid character, an unexpected or trailing
    ///   token, a missing `)`, a number literal out of range, or nesting
    ///   deeper than the configured limit.
    /// - [`Error::UndefinedVariable`] when a variable is read before it was assigned.
    /// - [`Error::DivisionByZero`] when a divisor evaluates to zero.
    /// - [`Error::Overflow`] when an intermediate result does not fit into an `i64`.
    ///
    /// # Examples
    /// ```
    /// use varith::{Interpreter, Error};
    ///
    /// let mut interpreter = Interpreter::new();
    /// assert_eq!(interpreter.evaluate("2 + 3 * 4"), Ok(14));
    /// assert_eq!(interpreter.evaluate("10 / 0"), Err(Error::DivisionByZero));
    /// assert_eq!(interpreter.evaluate("y + 1"), Err(Error::UndefinedVariable("y".into())));
    /// ```
    pub fn evaluate(&mut self, input: &str) -> Result<i64, Error> {
        tracing::debug!(input, "evaluating");

        let result = self.run(input);
        if let Err(err) = &result {
            tracing::debug!(input, %err, "evaluation failed");
        }

        result
    }

    fn run(&mut self, input: &str) -> Result<i64, Error> {
        let tokens = tokenize(input)?;
        tracing::trace!(count = tokens.len(), "tokenized");

        let Evaluation { value, assignment } =
            Parser::new(&tokens, &self.variables, self.associativity, self.max_depth).evaluate()?;

        if let Some(name) = assignment {
            tracing::debug!(name = %name, value, "assigned");
            self.variables.insert(name, value);
        }

        Ok(value)
    }

    /// Returns a copy of the variable table.
    ///
    /// # Examples
    /// ```
    /// use varith::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.evaluate("x = 5").unwrap();
    ///
    /// let mut snapshot = interpreter.variables();
    /// snapshot.insert("x".into(), 0);
    ///
    /// assert_eq!(interpreter.variables()["x"], 5);
    /// ```
    pub fn variables(&self) -> HashMap<String, i64> {
        self.variables.clone()
    }

    /// Returns the value last assigned to `name`.
    pub fn variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// How chained `^` operators group.
    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    /// Maximum parenthesis nesting accepted by [`Interpreter::evaluate`].
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}


/// A builder for creating [`Interpreter`] instances with a fluent API.
///
/// Start with [`Interpreter::builder()`], chain [`InterpreterBuilder::exponent()`]
/// and [`InterpreterBuilder::max_depth()`] as needed and finish with
/// [`InterpreterBuilder::build()`].
#[derive(Debug, Clone)]
pub struct InterpreterBuilder {
    associativity: Associativity,
    max_depth: usize,
}

impl InterpreterBuilder {
    fn new() -> Self {
        Self {
            associativity: Associativity::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets how chained `^` operators group.
    pub fn exponent(mut self, associativity: Associativity) -> Self {
        self.associativity = associativity;
        self
    }

    /// Sets how deeply parentheses (and right associative `^` chains) may nest.
    ///
    /// # Arguments
    /// * `max_depth`: maximum nesting, `0` rejects every parenthesis.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Creates the [`Interpreter`] with an empty variable table.
    pub fn build(self) -> Interpreter {
        Interpreter {
            variables: HashMap::new(),
            associativity: self.associativity,
            max_depth: self.max_depth,
        }
    }
}


/// Evaluates `input` on a fresh [`Interpreter`].
///
/// # Errors
/// See [`Interpreter::evaluate`].
///
/// # Examples
/// ```
/// assert_eq!(varith::evaluate("(2 + 3) * 4"), Ok(20));
/// assert_eq!(varith::evaluate("2 ^ 3 ^ 2"), Ok(64));
/// ```
pub fn evaluate(input: &str) -> Result<i64, Error> {
    Interpreter::new().evaluate(input)
}
