use scicalc_rs::Evaluator;

fn main() {
    pretty_env_logger::init();

    let expressions = vec![
        "2 + 3 * 4",
        "sqrt(2) * sqrt(2)",
        "factorial(10) / factorial(8)",
        "cos(0) / (1 - 1)",
        "asin(1.5)",
    ];

    let evaluator = Evaluator::new();
    let results = evaluator.evaluate_batch(&expressions);
    for (i, (expression, result)) in expressions.iter().zip(&results).enumerate() {
        match result.clone().into_result() {
            Ok(value) => println!("Result {}: {} = {}", i, expression, value),
            Err((kind, message)) => println!("Result {}: {} -> {:?}: {}", i, expression, kind, message),
        }
    }
}
