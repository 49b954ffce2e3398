use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::Mutex;
use crate::{Error, Interpreter};


/// A cloneable, thread safe handle to one [`Interpreter`].
///
/// Every call locks the interpreter for its whole duration, so evaluations
/// from different threads are serialized and each one sees and updates the
/// variable table atomically.
///
/// # Examples
/// ```
/// use varith::SharedInterpreter;
///
/// let shared = SharedInterpreter::default();
/// shared.evaluate("n = 0").unwrap();
///
/// std::thread::scope(|scope| {
///     for _ in 0..4 {
///         let shared = shared.clone();
///         scope.spawn(move || shared.evaluate("n = n + 1").unwrap());
///     }
/// });
///
/// assert_eq!(shared.variables()["n"], 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedInterpreter {
    inner: Arc<Mutex<Interpreter>>,
}

impl SharedInterpreter {
    /// Wraps `interpreter`, keeping its variables and configuration.
    pub fn new(interpreter: Interpreter) -> Self {
        Self { inner: Arc::new(Mutex::new(interpreter)) }
    }

    /// Locks the interpreter and evaluates `input` on it.
    ///
    /// # Errors
    /// See [`Interpreter::evaluate`].
    pub fn evaluate(&self, input: &str) -> Result<i64, Error> {
        self.inner.lock().evaluate(input)
    }

    /// Returns a copy of the variable table.
    pub fn variables(&self) -> HashMap<String, i64> {
        self.inner.lock().variables()
    }

    /// Returns the value last assigned to `name`.
    pub fn variable(&self, name: &str) -> Option<i64> {
        self.inner.lock().variable(name)
    }
}

impl From<Interpreter> for SharedInterpreter {
    fn from(value: Interpreter) -> Self {
        Self::new(value)
    }
}
