use std::collections::BTreeMap;
use varith::Interpreter;

fn main() {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut interpreter = Interpreter::new();

    match interpreter.evaluate("x = (2 + 3) * (4 - 2) / 2 ^ 2") {
        Ok(value) => println!("Result: {value}"),
        Err(err) => tracing::error!(%err, "evaluation failed"),
    }

    match interpreter.evaluate("y = x + 2") {
        Ok(value) => println!("Result (y): {value}"),
        Err(err) => tracing::error!(%err, "evaluation failed"),
    }

    let variables: BTreeMap<_, _> = interpreter.variables().into_iter().collect();
    println!("Variables: {variables:?}");
}
