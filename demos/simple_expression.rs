use log::debug;
use scicalc_rs::functions::{factorial, sqrt};
use scicalc_rs::{EvalResult, Evaluator, EvaluatorOptions};

fn report(expression: &str, result: &EvalResult) {
    match result.as_number() {
        Some(value) => println!("{expression} = {value:.6}"),
        None => println!("{expression}: {} ({:?})", result.message, result.error),
    }
}

fn main() {
    pretty_env_logger::init();

    let evaluator = Evaluator::new();

    for expression in [
        "2 + 3 * 4",
        "(2 + 3) * 4",
        "sqrt(16) + sin(0)",
        "-log10(0.001) * factorial(4)",
        "1 / 0",
        "log(-1)",
        "foo(1)",
        "2 3",
    ] {
        let result = evaluator.evaluate(expression);
        debug!("{expression:?} -> {result:?}");
        report(expression, &result);
    }

    // Trailing input is ignored unless asked otherwise.
    let strict = Evaluator::with_options(EvaluatorOptions::default().strict_trailing(true));
    report("2 3 (strict)", &strict.evaluate("2 3"));

    // Primitives are callable directly as well.
    report("sqrt(-4)", &sqrt(-4.0));
    report("factorial(5)", &factorial(5.0));

    // Extending the function table.
    let mut evaluator = Evaluator::new();
    evaluator.register_function("square", |x| Ok(x * x));
    report("square(1.5) + 1", &evaluator.evaluate("square(1.5) + 1"));
}
