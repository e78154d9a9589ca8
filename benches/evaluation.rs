use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;
use scicalc_rs::Evaluator;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let evaluator = Evaluator::new();

    let expr = "2 + 3";
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("scicalc_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("scicalc_fresh_evaluator_arithmetic", |b| {
        b.iter(|| scicalc_rs::evaluate(black_box(expr)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0) + black_box(3.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let evaluator = Evaluator::new();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("scicalc_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| (black_box(10.0) + 20.0) * 3.0 / (4.0 - 1.0) + 5.0)
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark function calls
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Call Evaluation");
    let evaluator = Evaluator::new();

    let expr = "sqrt(16) + sin(0.5) * cos(0.5)";

    group.bench_function("scicalc_function_call", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("native_rust_function_call", |b| {
        b.iter(|| black_box(16.0_f64).sqrt() + black_box(0.5_f64).sin() * 0.5_f64.cos())
    });

    group.bench_function("meval_function_call", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark deeply nested expressions
fn benchmark_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("Nested Expression Evaluation");
    let evaluator = Evaluator::new();

    let expr = format!("{}1{}", "(".repeat(100), " + 1)".repeat(100));

    group.bench_function("scicalc_nested", |b| {
        b.iter(|| evaluator.evaluate(black_box(&expr)))
    });

    group.bench_function("meval_nested", |b| {
        b.iter(|| meval::eval_str(black_box(&expr)).unwrap())
    });
}

/// Benchmark parallel batch evaluation
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");
    let evaluator = Evaluator::new();

    let expressions: Vec<String> = (0..1000)
        .map(|i| format!("sqrt({}) * ({} + 1) / 3", i, i))
        .collect();

    group.bench_function("scicalc_batch_parallel", |b| {
        b.iter(|| evaluator.evaluate_batch(black_box(expressions.as_slice())))
    });

    group.bench_function("scicalc_batch_sequential", |b| {
        b.iter(|| {
            expressions
                .iter()
                .map(|expr| evaluator.evaluate(black_box(expr)))
                .collect::<Vec<_>>()
        })
    });
}

/// Grouping benchmarks
criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_function_calls,
    benchmark_nesting,
    benchmark_batch,
);
criterion_main!(benches);
